//! Threshold tiers used to pick display colors.
//!
//! Percent metrics use the configured warning/critical thresholds (both
//! inclusive). Temperatures use a fixed scale of their own.

/// Temperature above which a reading is critical (exclusive)
pub const TEMP_CRITICAL_CELSIUS: i32 = 85;
/// Temperature from which a reading is a warning (inclusive)
pub const TEMP_WARNING_CELSIUS: i32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Normal,
    Warning,
    Critical,
}

/// Warning/critical percentage thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub warning: f64,
    pub critical: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warning: 80.0,
            critical: 90.0,
        }
    }
}

impl Thresholds {
    pub fn tier(&self, percent: f64) -> Tier {
        tier_for(percent, self.warning, self.critical)
    }
}

/// Classify a percentage; equality counts as the higher tier
pub fn tier_for(percent: f64, warning: f64, critical: f64) -> Tier {
    if percent >= critical {
        Tier::Critical
    } else if percent >= warning {
        Tier::Warning
    } else {
        Tier::Normal
    }
}

/// Classify a temperature: 70..=85 is a warning, above 85 is critical
pub fn temperature_tier(celsius: i32) -> Tier {
    if celsius > TEMP_CRITICAL_CELSIUS {
        Tier::Critical
    } else if celsius >= TEMP_WARNING_CELSIUS {
        Tier::Warning
    } else {
        Tier::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_boundaries_inclusive() {
        assert_eq!(tier_for(80.0, 80.0, 90.0), Tier::Warning);
        assert_eq!(tier_for(79.99, 80.0, 90.0), Tier::Normal);
        assert_eq!(tier_for(90.0, 80.0, 90.0), Tier::Critical);
        assert_eq!(tier_for(0.0, 80.0, 90.0), Tier::Normal);
        assert_eq!(tier_for(100.0, 80.0, 90.0), Tier::Critical);
    }

    #[test]
    fn test_out_of_range_percent() {
        assert_eq!(tier_for(-5.0, 80.0, 90.0), Tier::Normal);
        assert_eq!(tier_for(150.0, 80.0, 90.0), Tier::Critical);
    }

    #[test]
    fn test_temperature_asymmetric_boundaries() {
        assert_eq!(temperature_tier(69), Tier::Normal);
        assert_eq!(temperature_tier(70), Tier::Warning);
        assert_eq!(temperature_tier(85), Tier::Warning);
        assert_eq!(temperature_tier(86), Tier::Critical);
    }

    #[test]
    fn test_thresholds_default() {
        let thresholds = Thresholds::default();
        assert_eq!(thresholds.tier(85.0), Tier::Warning);
        assert_eq!(thresholds.tier(95.0), Tier::Critical);
    }

    #[test]
    fn test_tier_ordering() {
        assert!(Tier::Critical > Tier::Warning);
        assert!(Tier::Warning > Tier::Normal);
    }
}
