//! Venturi geometry: inlet bore, throat bore and section lengths.

use crate::error::{GeometryError, SolveResult};
use vf_core::units::{Angle, Area, Length, circle_area, deg, m};

/// Included cone angle used when only the throat length is given.
pub const DEFAULT_CONE_ANGLE_DEG: f64 = 15.0;

/// How the axial extent of the meter is described.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SectionLengths {
    /// Single overall length split evenly into entrance, throat and diffuser.
    Total(Length),
    /// Throat length plus an included cone angle; both cone lengths follow
    /// from the radial step (D1 − D2)/2.
    Derived { throat: Length, cone_angle: Angle },
}

/// Axial lengths of the three sections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segments {
    pub entrance: Length,
    pub throat: Length,
    pub diffuser: Length,
}

impl Segments {
    pub fn total(&self) -> Length {
        self.entrance + self.throat + self.diffuser
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowGeometry {
    /// Inlet (pipe) diameter D1
    pub inlet_diameter: Length,
    /// Throat diameter D2
    pub throat_diameter: Length,
    pub lengths: SectionLengths,
}

impl FlowGeometry {
    /// Meter described by an overall length.
    pub fn with_total_length(inlet: Length, throat: Length, total: Length) -> Self {
        Self {
            inlet_diameter: inlet,
            throat_diameter: throat,
            lengths: SectionLengths::Total(total),
        }
    }

    /// Meter described by its throat length, with 15° cones.
    pub fn with_throat_length(inlet: Length, throat: Length, throat_length: Length) -> Self {
        Self::with_cone_angle(inlet, throat, throat_length, deg(DEFAULT_CONE_ANGLE_DEG))
    }

    pub fn with_cone_angle(
        inlet: Length,
        throat: Length,
        throat_length: Length,
        cone_angle: Angle,
    ) -> Self {
        Self {
            inlet_diameter: inlet,
            throat_diameter: throat,
            lengths: SectionLengths::Derived {
                throat: throat_length,
                cone_angle,
            },
        }
    }

    /// Check dimensions are finite and positive and that the throat is narrower
    /// than the inlet.
    pub fn validate(&self) -> SolveResult<()> {
        positive(self.inlet_diameter.value, "inlet diameter")?;
        positive(self.throat_diameter.value, "throat diameter")?;
        match self.lengths {
            SectionLengths::Total(total) => {
                positive(total.value, "total length")?;
            }
            SectionLengths::Derived { throat, cone_angle } => {
                positive(throat.value, "throat length")?;
                let degrees = cone_angle.get::<uom::si::angle::degree>();
                if !degrees.is_finite() || degrees <= 0.0 || degrees >= 180.0 {
                    return Err(GeometryError::InvalidConeAngle { degrees }.into());
                }
            }
        }
        if self.throat_diameter >= self.inlet_diameter {
            return Err(GeometryError::ThroatNotNarrower {
                inlet: self.inlet_diameter.value,
                throat: self.throat_diameter.value,
            }
            .into());
        }
        Ok(())
    }

    /// β = D2/D1.
    pub fn beta(&self) -> f64 {
        self.throat_diameter.value / self.inlet_diameter.value
    }

    /// AR = A1/A2 = (D1/D2)².
    pub fn area_ratio(&self) -> f64 {
        let r = self.inlet_diameter.value / self.throat_diameter.value;
        r * r
    }

    pub fn inlet_area(&self) -> Area {
        circle_area(self.inlet_diameter)
    }

    pub fn throat_area(&self) -> Area {
        circle_area(self.throat_diameter)
    }

    pub fn segments(&self) -> Segments {
        match self.lengths {
            SectionLengths::Total(total) => {
                let third = total / 3.0;
                Segments {
                    entrance: third,
                    throat: third,
                    diffuser: third,
                }
            }
            SectionLengths::Derived { throat, cone_angle } => {
                let radial_step = (self.inlet_diameter.value - self.throat_diameter.value) / 2.0;
                let half_angle = cone_angle.get::<uom::si::angle::radian>() / 2.0;
                let cone = m(radial_step / half_angle.tan());
                Segments {
                    entrance: cone,
                    throat,
                    diffuser: cone,
                }
            }
        }
    }

    pub fn total_length(&self) -> Length {
        self.segments().total()
    }

    /// Bore diameter at axial position `x` (cones are linear in diameter).
    pub fn diameter_at(&self, x: Length) -> Length {
        let s = self.segments();
        let (d1, d2) = (self.inlet_diameter, self.throat_diameter);
        let x_throat = s.entrance;
        let x_diffuser = s.entrance + s.throat;
        if x <= m(0.0) {
            d1
        } else if x < x_throat {
            d1 + (d2 - d1) * (x / s.entrance).value
        } else if x <= x_diffuser {
            d2
        } else if x < s.total() {
            d2 + (d1 - d2) * ((x - x_diffuser) / s.diffuser).value
        } else {
            d1
        }
    }
}

fn positive(value: f64, what: &'static str) -> Result<f64, GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::NonPositive { what, value })
    }
}
