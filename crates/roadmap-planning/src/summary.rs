//! Roadmap summaries for reporting

use roadmap_core::Capacity;

use crate::model::Roadmap;

/// Counts and totals for a roadmap
#[derive(Debug, Clone)]
pub struct RoadmapSummary {
    pub project_name: String,
    pub total_phases: usize,
    pub total_epics: usize,
    pub total_stories: usize,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub total_points: u32,
    pub total_weeks: f64,
    pub phases: Vec<PhaseInfo>,
}

/// Phase information for summary
#[derive(Debug, Clone)]
pub struct PhaseInfo {
    pub number: usize,
    pub name: String,
    pub points: u32,
    pub hours: u32,
    pub weeks: f64,
    pub criteria_met: usize,
    pub criteria_total: usize,
}

impl RoadmapSummary {
    pub fn new(roadmap: &Roadmap, capacity: Capacity) -> Self {
        let stories = || {
            roadmap
                .phases
                .iter()
                .flat_map(|p| &p.epics)
                .flat_map(|e| &e.stories)
        };
        let tasks = || stories().flat_map(|s| &s.tasks);

        Self {
            project_name: roadmap.project_name.clone(),
            total_phases: roadmap.phases.len(),
            total_epics: roadmap.phases.iter().map(|p| p.epics.len()).sum(),
            total_stories: stories().count(),
            total_tasks: tasks().count(),
            completed_tasks: tasks().filter(|t| t.completed).count(),
            total_points: roadmap.total_points(),
            total_weeks: roadmap.total_weeks(capacity),
            phases: roadmap
                .phases
                .iter()
                .enumerate()
                .map(|(i, p)| PhaseInfo {
                    number: i + 1,
                    name: p.name.clone(),
                    points: p.total_points(),
                    hours: p.total_hours(),
                    weeks: p.estimated_weeks(capacity),
                    criteria_met: p.exit_criteria.iter().filter(|c| c.met).count(),
                    criteria_total: p.exit_criteria.len(),
                })
                .collect(),
        }
    }
}

impl std::fmt::Display for RoadmapSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Project: {}", self.project_name)?;
        writeln!(f, "  Phases: {}", self.total_phases)?;
        writeln!(f, "  Epics: {}", self.total_epics)?;
        writeln!(f, "  Stories: {}", self.total_stories)?;
        writeln!(f, "  Tasks: {} ({} completed)", self.total_tasks, self.completed_tasks)?;
        writeln!(f, "  Story points: {}", self.total_points)?;
        writeln!(f, "  Duration: ~{:.1} weeks", self.total_weeks)?;
        writeln!(f)?;
        writeln!(f, "Phase Breakdown:")?;
        for phase in &self.phases {
            writeln!(
                f,
                "  Phase {}: {} - {} pts, {} h, ~{:.1} wk, exit {}/{}",
                phase.number,
                phase.name,
                phase.points,
                phase.hours,
                phase.weeks,
                phase.criteria_met,
                phase.criteria_total
            )?;
        }
        Ok(())
    }
}
