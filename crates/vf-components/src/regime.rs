//! Flow regime classification from the Reynolds number.

use std::fmt;

/// Upper bound (exclusive) of laminar flow.
pub const LAMINAR_LIMIT_RE: f64 = 2300.0;

/// Lower bound (inclusive) of fully turbulent flow.
pub const TURBULENT_LIMIT_RE: f64 = 4000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowRegime {
    /// Re < 2300
    Laminar,
    /// 2300 ≤ Re < 4000
    Transitional,
    /// Re ≥ 4000
    Turbulent,
}

impl FlowRegime {
    pub fn classify(re: f64) -> Self {
        if re < LAMINAR_LIMIT_RE {
            FlowRegime::Laminar
        } else if re < TURBULENT_LIMIT_RE {
            FlowRegime::Transitional
        } else {
            FlowRegime::Turbulent
        }
    }

    /// Differential-pressure meters are only calibrated for turbulent flow.
    pub fn is_suitable_for_metering(self) -> bool {
        matches!(self, FlowRegime::Turbulent)
    }

    pub fn label(self) -> &'static str {
        match self {
            FlowRegime::Laminar => "laminar",
            FlowRegime::Transitional => "transitional",
            FlowRegime::Turbulent => "turbulent",
        }
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(FlowRegime::classify(2299.0), FlowRegime::Laminar);
        assert_eq!(FlowRegime::classify(2300.0), FlowRegime::Transitional);
        assert_eq!(FlowRegime::classify(3999.9), FlowRegime::Transitional);
        assert_eq!(FlowRegime::classify(4000.0), FlowRegime::Turbulent);
    }

    #[test]
    fn only_turbulent_is_suitable() {
        assert!(FlowRegime::Turbulent.is_suitable_for_metering());
        assert!(!FlowRegime::Transitional.is_suitable_for_metering());
        assert!(!FlowRegime::Laminar.is_suitable_for_metering());
    }
}
