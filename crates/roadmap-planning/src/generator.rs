//! Roadmap assembly and velocity-based duration estimates

use chrono::{Local, NaiveDate};
use roadmap_core::{EstimationConfig, Result, RoadmapError, DEFAULT_CAPACITY_HOURS_PER_WEEK};
use tracing::{debug, info};

use crate::model::{Phase, Roadmap};

/// Story points one person completes per week
pub const DEFAULT_VELOCITY_PER_PERSON: f64 = 8.0;

/// Schedule buffer added on top of the raw velocity estimate
pub const DEFAULT_BUFFER_PERCENTAGE: f64 = 0.25;

/// Factory for creating roadmaps
///
/// `team_hours_per_week` and `buffer_percentage` belong to the top-down
/// estimate only. Epic and phase week estimates take their own [`Capacity`]
/// and are never reconciled with [`RoadmapGenerator::estimate_duration`].
///
/// [`Capacity`]: roadmap_core::Capacity
#[derive(Debug, Clone)]
pub struct RoadmapGenerator {
    pub team_hours_per_week: f64,
    pub buffer_percentage: f64,
}

impl Default for RoadmapGenerator {
    fn default() -> Self {
        Self {
            team_hours_per_week: DEFAULT_CAPACITY_HOURS_PER_WEEK,
            buffer_percentage: DEFAULT_BUFFER_PERCENTAGE,
        }
    }
}

impl RoadmapGenerator {
    pub fn new(team_hours_per_week: f64, buffer_percentage: f64) -> Self {
        Self {
            team_hours_per_week,
            buffer_percentage,
        }
    }

    pub fn from_config(config: &EstimationConfig) -> Self {
        Self::new(config.team_hours_per_week, config.buffer_percentage)
    }

    /// Create a roadmap stamped with today's date
    ///
    /// Team, assumptions and open questions start empty; add them with the
    /// `with_*` builders on [`Roadmap`].
    pub fn create_roadmap(
        &self,
        project_name: impl Into<String>,
        owner: impl Into<String>,
        summary: impl Into<String>,
        phases: Vec<Phase>,
    ) -> Roadmap {
        self.create_roadmap_on(Local::now().date_naive(), project_name, owner, summary, phases)
    }

    /// Create a roadmap with an explicit creation date
    pub fn create_roadmap_on(
        &self,
        created: NaiveDate,
        project_name: impl Into<String>,
        owner: impl Into<String>,
        summary: impl Into<String>,
        phases: Vec<Phase>,
    ) -> Roadmap {
        let roadmap = Roadmap {
            project_name: project_name.into(),
            created_date: created.format("%Y-%m-%d").to_string(),
            owner: owner.into(),
            summary: summary.into(),
            phases,
            team: Vec::new(),
            assumptions: Vec::new(),
            open_questions: Vec::new(),
        };

        info!(
            "Created roadmap {} with {} phase(s)",
            roadmap.project_name,
            roadmap.phases.len()
        );
        roadmap
    }

    /// Estimate duration in weeks at the default velocity
    pub fn estimate_duration(&self, total_points: u32, team_size: u32) -> Result<f64> {
        self.estimate_duration_with_velocity(total_points, team_size, DEFAULT_VELOCITY_PER_PERSON)
    }

    /// Estimate duration in weeks: `points / (team_size * velocity)`, plus buffer
    pub fn estimate_duration_with_velocity(
        &self,
        total_points: u32,
        team_size: u32,
        velocity_per_person: f64,
    ) -> Result<f64> {
        let team_velocity = f64::from(team_size) * velocity_per_person;
        if !team_velocity.is_finite() || team_velocity <= 0.0 {
            return Err(RoadmapError::DegenerateConfiguration(format!(
                "team velocity must be positive (team size {} x {} points per person)",
                team_size, velocity_per_person
            )));
        }

        let weeks = f64::from(total_points) / team_velocity;
        let buffered = weeks * (1.0 + self.buffer_percentage);
        debug!(
            "Estimated {} points at velocity {}: {:.2} weeks ({:.2} buffered)",
            total_points, team_velocity, weeks, buffered
        );
        Ok(buffered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Epic, Story};
    use roadmap_core::{Capacity, Size};

    #[test]
    fn test_create_roadmap_defaults() {
        let generator = RoadmapGenerator::default();
        let roadmap = generator.create_roadmap("Notify", "Platform", "summary", Vec::new());

        assert_eq!(roadmap.project_name, "Notify");
        assert!(roadmap.team.is_empty());
        assert!(roadmap.assumptions.is_empty());
        assert!(roadmap.open_questions.is_empty());
        assert!(NaiveDate::parse_from_str(&roadmap.created_date, "%Y-%m-%d").is_ok());
        assert_eq!(roadmap.created_date.len(), 10);
    }

    #[test]
    fn test_create_roadmap_on_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let roadmap = RoadmapGenerator::default().create_roadmap_on(date, "p", "o", "s", Vec::new());
        assert_eq!(roadmap.created_date, "2025-01-05");
    }

    #[test]
    fn test_estimate_duration() {
        let generator = RoadmapGenerator::default();
        let weeks = generator.estimate_duration(16, 2).unwrap();
        assert!((weeks - 1.25).abs() < 1e-9);

        let no_buffer = RoadmapGenerator::new(30.0, 0.0);
        let weeks = no_buffer.estimate_duration_with_velocity(40, 2, 10.0).unwrap();
        assert!((weeks - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_estimate_duration_degenerate() {
        let generator = RoadmapGenerator::default();
        assert!(matches!(
            generator.estimate_duration(16, 0),
            Err(RoadmapError::DegenerateConfiguration(_))
        ));
        assert!(generator.estimate_duration_with_velocity(16, 3, 0.0).is_err());
    }

    #[test]
    fn test_estimates_are_independent() {
        // Generator capacity does not feed phase estimates
        let generator = RoadmapGenerator::new(10.0, 0.25);
        let phase = Phase::new("MVP", "").with_epics(vec![
            Epic::new("e", "").with_stories(vec![Story::new("s", "", Size::L)]),
        ]);
        let roadmap = generator.create_roadmap("p", "o", "s", vec![phase]);
        assert!((roadmap.total_weeks(Capacity::default()) - 40.0 / 30.0).abs() < 1e-9);
    }
}
