//! Axial distribution of pressure, velocity and head along the meter.
//!
//! Total head is interpolated linearly between the four stations of a
//! [`VenturiResult`]; local velocity follows from continuity and the static
//! pressure from the head balance, so the ideal case reproduces Bernoulli
//! exactly inside the cones.

use crate::error::{SolveError, SolveResult};
use crate::result::{Station, VenturiResult};
use vf_core::units::{circle_area, m};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    /// Axial position from the inlet [m]
    pub x: f64,
    pub diameter: f64,
    pub velocity: f64,
    /// Static pressure [Pa]
    pub pressure: f64,
    /// Hydraulic grade line P/(ρg) [m]
    pub piezometric_head: f64,
    /// Energy grade line P/(ρg) + v²/2g [m]
    pub total_head: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxialProfile {
    pub points: Vec<ProfilePoint>,
}

impl AxialProfile {
    /// Sample `n` evenly spaced points from inlet to exit, both ends included.
    pub fn sample(result: &VenturiResult, n: usize) -> SolveResult<Self> {
        if n < 2 {
            return Err(SolveError::InvalidInput {
                what: "profile needs at least two points",
            });
        }

        let rho_g = result.rho * result.gravity;
        let stations = result.stations();
        let heads = stations.map(|s| {
            s.pressure / rho_g + s.velocity * s.velocity / (2.0 * result.gravity)
        });
        let length = stations[3].position;

        let points = (0..n)
            .map(|i| {
                let x = length * i as f64 / (n - 1) as f64;
                let diameter = result.geometry.diameter_at(m(x)).value;
                let velocity = result.flow_rate / circle_area(m(diameter)).value;
                let total_head = interpolate(&stations, &heads, x);
                let velocity_head = velocity * velocity / (2.0 * result.gravity);
                let piezometric_head = total_head - velocity_head;
                ProfilePoint {
                    x,
                    diameter,
                    velocity,
                    pressure: piezometric_head * rho_g,
                    piezometric_head,
                    total_head,
                }
            })
            .collect();

        Ok(Self { points })
    }

    /// Point of lowest static pressure.
    pub fn min_pressure(&self) -> Option<&ProfilePoint> {
        self.points
            .iter()
            .min_by(|a, b| a.pressure.total_cmp(&b.pressure))
    }
}

fn interpolate(stations: &[Station; 4], values: &[f64; 4], x: f64) -> f64 {
    for i in 0..3 {
        let (x0, x1) = (stations[i].position, stations[i + 1].position);
        if x <= x1 {
            let span = x1 - x0;
            if span <= 0.0 {
                return values[i + 1];
            }
            let t = ((x - x0) / span).clamp(0.0, 1.0);
            return values[i] + t * (values[i + 1] - values[i]);
        }
    }
    values[3]
}
