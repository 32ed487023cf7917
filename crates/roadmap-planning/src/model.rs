//! Roadmap data structures
//!
//! Entities nest strictly: a [`Roadmap`] owns phases, a [`Phase`] owns epics,
//! an [`Epic`] owns stories and a [`Story`] owns tasks. Derived values (hours,
//! points, weeks, risk scores) are recomputed from children on every call.

use roadmap_core::{Capacity, Priority, RiskLevel, Size, FALLBACK_HOURS_PER_POINT};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Technical work item (2-8 hours)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub size: Size,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(title: impl Into<String>, size: Size) -> Self {
        Self {
            title: title.into(),
            size,
            owner: None,
            completed: false,
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Mark the task as done
    pub fn complete(&mut self) {
        self.completed = true;
    }

    /// Estimated hours based on size
    pub fn hours(&self) -> u32 {
        self.size.hours()
    }
}

/// User-facing unit of work (1-5 days)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    pub description: String,
    pub size: Size,
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Free-text identifiers, displayed as-is
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub priority: Priority,
}

impl Story {
    pub fn new(title: impl Into<String>, description: impl Into<String>, size: Size) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            size,
            tasks: Vec::new(),
            dependencies: Vec::new(),
            owner: None,
            priority: Priority::default(),
        }
    }

    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn with_dependencies(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn points(&self) -> u32 {
        self.size.points()
    }

    /// Sum of task hours, or `size * 8` when there is no task breakdown
    pub fn total_hours(&self) -> u32 {
        if self.tasks.is_empty() {
            self.size.value() * FALLBACK_HOURS_PER_POINT
        } else {
            self.tasks.iter().map(Task::hours).sum()
        }
    }
}

/// High-level capability (2-6 weeks)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Epic {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub stories: Vec<Story>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub owner: Option<String>,
}

impl Epic {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            stories: Vec::new(),
            dependencies: Vec::new(),
            owner: None,
        }
    }

    pub fn with_stories(mut self, stories: Vec<Story>) -> Self {
        self.stories = stories;
        self
    }

    pub fn with_dependencies(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn total_points(&self) -> u32 {
        self.stories.iter().map(Story::points).sum()
    }

    pub fn total_hours(&self) -> u32 {
        self.stories.iter().map(Story::total_hours).sum()
    }

    pub fn estimated_weeks(&self, capacity: Capacity) -> f64 {
        capacity.weeks_for(self.total_hours())
    }
}

/// Project risk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    pub title: String,
    pub description: String,
    pub probability: RiskLevel,
    pub impact: RiskLevel,
    pub mitigation: String,
    #[serde(default)]
    pub owner: Option<String>,
}

impl Risk {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        probability: RiskLevel,
        impact: RiskLevel,
        mitigation: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            probability,
            impact,
            mitigation: mitigation.into(),
            owner: None,
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Probability × impact, 1 through 9
    pub fn score(&self) -> u32 {
        self.probability.value() * self.impact.value()
    }
}

/// Phase exit gate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitCriteria {
    pub criterion: String,
    #[serde(default)]
    pub met: bool,
}

impl ExitCriteria {
    pub fn new(criterion: impl Into<String>) -> Self {
        Self {
            criterion: criterion.into(),
            met: false,
        }
    }

    pub fn mark_met(&mut self) {
        self.met = true;
    }
}

/// Delivery stage (MVP, Scale, Advanced)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub epics: Vec<Epic>,
    #[serde(default)]
    pub exit_criteria: Vec<ExitCriteria>,
    #[serde(default)]
    pub risks: Vec<Risk>,
    /// Pinned duration that overrides the hours-based estimate
    #[serde(default)]
    pub duration_weeks: Option<u32>,
}

impl Phase {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            goals: Vec::new(),
            epics: Vec::new(),
            exit_criteria: Vec::new(),
            risks: Vec::new(),
            duration_weeks: None,
        }
    }

    pub fn with_goals(mut self, goals: Vec<String>) -> Self {
        self.goals = goals;
        self
    }

    pub fn with_epics(mut self, epics: Vec<Epic>) -> Self {
        self.epics = epics;
        self
    }

    pub fn with_exit_criteria(mut self, exit_criteria: Vec<ExitCriteria>) -> Self {
        self.exit_criteria = exit_criteria;
        self
    }

    pub fn with_risks(mut self, risks: Vec<Risk>) -> Self {
        self.risks = risks;
        self
    }

    pub fn with_duration_weeks(mut self, weeks: u32) -> Self {
        self.duration_weeks = Some(weeks);
        self
    }

    pub fn total_points(&self) -> u32 {
        self.epics.iter().map(Epic::total_points).sum()
    }

    pub fn total_hours(&self) -> u32 {
        self.epics.iter().map(Epic::total_hours).sum()
    }

    /// Pinned duration if set (and non-zero), otherwise hours over capacity
    pub fn estimated_weeks(&self, capacity: Capacity) -> f64 {
        match self.duration_weeks {
            Some(weeks) if weeks > 0 => f64::from(weeks),
            _ => capacity.weeks_for(self.total_hours()),
        }
    }

    /// Risks ordered by descending score; equal scores keep input order
    pub fn risks_by_score(&self) -> Vec<&Risk> {
        let mut risks: Vec<&Risk> = self.risks.iter().collect();
        risks.sort_by_key(|r| Reverse(r.score()));
        risks
    }
}

/// Staffing for one role across the first three phases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAllocation {
    pub role: String,
    pub phase1_fte: f64,
    pub phase2_fte: f64,
    pub phase3_fte: f64,
}

impl TeamAllocation {
    pub fn new(role: impl Into<String>, phase1_fte: f64, phase2_fte: f64, phase3_fte: f64) -> Self {
        Self {
            role: role.into(),
            phase1_fte,
            phase2_fte,
            phase3_fte,
        }
    }
}

/// Complete implementation roadmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    pub project_name: String,
    /// `YYYY-MM-DD`
    pub created_date: String,
    pub owner: String,
    pub summary: String,
    pub phases: Vec<Phase>,
    #[serde(default)]
    pub team: Vec<TeamAllocation>,
    #[serde(default)]
    pub assumptions: Vec<String>,
    #[serde(default)]
    pub open_questions: Vec<String>,
}

impl Roadmap {
    pub fn with_team(mut self, team: Vec<TeamAllocation>) -> Self {
        self.team = team;
        self
    }

    pub fn with_assumptions(mut self, assumptions: Vec<String>) -> Self {
        self.assumptions = assumptions;
        self
    }

    pub fn with_open_questions(mut self, open_questions: Vec<String>) -> Self {
        self.open_questions = open_questions;
        self
    }

    pub fn total_weeks(&self, capacity: Capacity) -> f64 {
        self.phases.iter().map(|p| p.estimated_weeks(capacity)).sum()
    }

    pub fn total_points(&self) -> u32 {
        self.phases.iter().map(Phase::total_points).sum()
    }
}
