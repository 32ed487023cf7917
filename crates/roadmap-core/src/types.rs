//! Core type definitions for roadmap estimation

use serde::{Deserialize, Serialize};

use crate::{Result, RoadmapError};

/// Default team capacity in hours per week
pub const DEFAULT_CAPACITY_HOURS_PER_WEEK: f64 = 30.0;

/// Hours per story point used when a story has no task breakdown
pub const FALLBACK_HOURS_PER_POINT: u32 = 8;

/// T-shirt sizing for effort estimation
///
/// The weight follows a Fibonacci-like scale and doubles as the story point
/// value. Each size also maps to a fixed hour estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Size {
    /// 2-4 hours
    Xs,
    /// Half a day to a day
    S,
    /// 1-2 days
    M,
    /// 3-5 days
    L,
    /// 1-2 weeks
    Xl,
    /// More than 2 weeks, should be broken down
    Xxl,
}

impl Size {
    pub const ALL: [Size; 6] = [Self::Xs, Self::S, Self::M, Self::L, Self::Xl, Self::Xxl];

    /// Ordinal weight (1, 2, 3, 5, 8, 13)
    pub const fn value(self) -> u32 {
        match self {
            Self::Xs => 1,
            Self::S => 2,
            Self::M => 3,
            Self::L => 5,
            Self::Xl => 8,
            Self::Xxl => 13,
        }
    }

    /// Story points for this size
    pub const fn points(self) -> u32 {
        self.value()
    }

    /// Fixed hour estimate for a task of this size
    pub const fn hours(self) -> u32 {
        match self {
            Self::Xs => 3,
            Self::S => 6,
            Self::M => 12,
            Self::L => 32,
            Self::Xl => 64,
            Self::Xxl => 104,
        }
    }

    /// Symbolic name used in rendered output
    pub const fn name(self) -> &'static str {
        match self {
            Self::Xs => "XS",
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::Xl => "XL",
            Self::Xxl => "XXL",
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Size {
    type Err = RoadmapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "XS" => Ok(Self::Xs),
            "S" => Ok(Self::S),
            "M" => Ok(Self::M),
            "L" => Ok(Self::L),
            "XL" => Ok(Self::Xl),
            "XXL" => Ok(Self::Xxl),
            _ => Err(RoadmapError::InvalidSize(s.to_string())),
        }
    }
}

/// Story priority levels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    /// Blocks everything
    Critical,
    /// Core functionality
    High,
    /// Important but not blocking
    #[default]
    Medium,
    /// Nice to have
    Low,
}

impl Priority {
    /// Ordinal rank, 1 (critical) through 4 (low)
    pub const fn value(self) -> u32 {
        match self {
            Self::Critical => 1,
            Self::High => 2,
            Self::Medium => 3,
            Self::Low => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Priority {
    type Err = RoadmapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "critical" | "1" => Ok(Self::Critical),
            "high" | "2" => Ok(Self::High),
            "medium" | "3" => Ok(Self::Medium),
            "low" | "4" => Ok(Self::Low),
            _ => Err(RoadmapError::InvalidPriority(s.to_string())),
        }
    }
}

/// Risk probability and impact levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub const fn value(self) -> u32 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = RoadmapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "high" | "3" => Ok(Self::High),
            "medium" | "2" => Ok(Self::Medium),
            "low" | "1" => Ok(Self::Low),
            _ => Err(RoadmapError::InvalidRiskLevel(s.to_string())),
        }
    }
}

/// Team capacity in hours per week
///
/// Always positive and finite, so converting hours to weeks never divides by
/// zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Capacity(f64);

impl Capacity {
    pub const DEFAULT: Self = Self(DEFAULT_CAPACITY_HOURS_PER_WEEK);

    pub fn new(hours_per_week: f64) -> Result<Self> {
        if hours_per_week.is_finite() && hours_per_week > 0.0 {
            Ok(Self(hours_per_week))
        } else {
            Err(RoadmapError::DegenerateConfiguration(format!(
                "team capacity must be a positive number of hours per week, got {}",
                hours_per_week
            )))
        }
    }

    pub fn hours_per_week(self) -> f64 {
        self.0
    }

    /// Convert an hour total into weeks at this capacity
    pub fn weeks_for(self, hours: u32) -> f64 {
        f64::from(hours) / self.0
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_hours_table() {
        let expected = [3, 6, 12, 32, 64, 104];
        for (size, hours) in Size::ALL.iter().zip(expected) {
            assert_eq!(size.hours(), hours, "hours for {}", size);
        }
    }

    #[test]
    fn test_size_points_are_fibonacci_like() {
        let points: Vec<u32> = Size::ALL.iter().map(|s| s.points()).collect();
        assert_eq!(points, vec![1, 2, 3, 5, 8, 13]);
    }

    #[test]
    fn test_size_serializes_by_name() {
        assert_eq!(serde_json::to_string(&Size::Xxl).unwrap(), "\"XXL\"");
        let size: Size = serde_json::from_str("\"XS\"").unwrap();
        assert_eq!(size, Size::Xs);
    }

    #[test]
    fn test_size_from_str() {
        assert_eq!("xl".parse::<Size>().unwrap(), Size::Xl);
        assert!(matches!(
            "huge".parse::<Size>(),
            Err(RoadmapError::InvalidSize(_))
        ));
    }

    #[test]
    fn test_priority_ordinals() {
        assert_eq!(Priority::Critical.value(), 1);
        assert_eq!(Priority::Low.value(), 4);
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"HIGH\"");
        assert_eq!("critical".parse::<Priority>().unwrap(), Priority::Critical);
    }

    #[test]
    fn test_risk_level_values() {
        assert_eq!(RiskLevel::High.value(), 3);
        assert_eq!(RiskLevel::Medium.value(), 2);
        assert_eq!(RiskLevel::Low.value(), 1);
        assert_eq!("Medium".parse::<RiskLevel>().unwrap(), RiskLevel::Medium);
    }

    #[test]
    fn test_capacity_rejects_zero() {
        assert!(matches!(
            Capacity::new(0.0),
            Err(RoadmapError::DegenerateConfiguration(_))
        ));
        assert!(Capacity::new(-5.0).is_err());
        assert!(Capacity::new(f64::NAN).is_err());
    }

    #[test]
    fn test_capacity_weeks() {
        let capacity = Capacity::new(40.0).unwrap();
        assert_eq!(capacity.weeks_for(80), 2.0);
        assert_eq!(Capacity::default().weeks_for(60), 2.0);
    }
}
