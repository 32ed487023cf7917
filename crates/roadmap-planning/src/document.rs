//! JSON document form of a roadmap
//!
//! Each view borrows from the model and carries derived fields alongside the
//! raw ones. Enum values serialize by name.

use roadmap_core::{Capacity, Priority, Result, RiskLevel, Size};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use crate::model::{Epic, ExitCriteria, Phase, Risk, Roadmap, Story, Task, TeamAllocation};

#[derive(Debug, Serialize)]
pub struct TaskDocument<'a> {
    pub title: &'a str,
    pub size: Size,
    pub hours: u32,
    pub owner: Option<&'a str>,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct StoryDocument<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub size: Size,
    pub points: u32,
    pub total_hours: u32,
    pub tasks: Vec<TaskDocument<'a>>,
    pub dependencies: &'a [String],
    pub owner: Option<&'a str>,
    pub priority: Priority,
}

#[derive(Debug, Serialize)]
pub struct EpicDocument<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub stories: Vec<StoryDocument<'a>>,
    pub dependencies: &'a [String],
    pub owner: Option<&'a str>,
    pub total_points: u32,
    pub total_hours: u32,
}

#[derive(Debug, Serialize)]
pub struct RiskDocument<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub probability: RiskLevel,
    pub impact: RiskLevel,
    pub score: u32,
    pub mitigation: &'a str,
    pub owner: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct ExitCriteriaDocument<'a> {
    pub criterion: &'a str,
    pub met: bool,
}

#[derive(Debug, Serialize)]
pub struct PhaseDocument<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub goals: &'a [String],
    pub epics: Vec<EpicDocument<'a>>,
    pub exit_criteria: Vec<ExitCriteriaDocument<'a>>,
    pub risks: Vec<RiskDocument<'a>>,
    pub total_points: u32,
    pub total_hours: u32,
    pub estimated_weeks: f64,
}

#[derive(Debug, Serialize)]
pub struct TeamAllocationDocument<'a> {
    pub role: &'a str,
    pub phase1_fte: f64,
    pub phase2_fte: f64,
    pub phase3_fte: f64,
}

/// Root document for a rendered roadmap
#[derive(Debug, Serialize)]
pub struct RoadmapDocument<'a> {
    pub project_name: &'a str,
    pub created_date: &'a str,
    pub owner: &'a str,
    pub summary: &'a str,
    pub phases: Vec<PhaseDocument<'a>>,
    pub team: Vec<TeamAllocationDocument<'a>>,
    pub assumptions: &'a [String],
    pub open_questions: &'a [String],
    pub total_weeks: f64,
    pub total_points: u32,
}

impl<'a> From<&'a Task> for TaskDocument<'a> {
    fn from(task: &'a Task) -> Self {
        Self {
            title: &task.title,
            size: task.size,
            hours: task.hours(),
            owner: task.owner.as_deref(),
            completed: task.completed,
        }
    }
}

impl<'a> From<&'a Story> for StoryDocument<'a> {
    fn from(story: &'a Story) -> Self {
        Self {
            title: &story.title,
            description: &story.description,
            size: story.size,
            points: story.points(),
            total_hours: story.total_hours(),
            tasks: story.tasks.iter().map(TaskDocument::from).collect(),
            dependencies: &story.dependencies,
            owner: story.owner.as_deref(),
            priority: story.priority,
        }
    }
}

impl<'a> From<&'a Epic> for EpicDocument<'a> {
    fn from(epic: &'a Epic) -> Self {
        Self {
            title: &epic.title,
            description: &epic.description,
            stories: epic.stories.iter().map(StoryDocument::from).collect(),
            dependencies: &epic.dependencies,
            owner: epic.owner.as_deref(),
            total_points: epic.total_points(),
            total_hours: epic.total_hours(),
        }
    }
}

impl<'a> From<&'a Risk> for RiskDocument<'a> {
    fn from(risk: &'a Risk) -> Self {
        Self {
            title: &risk.title,
            description: &risk.description,
            probability: risk.probability,
            impact: risk.impact,
            score: risk.score(),
            mitigation: &risk.mitigation,
            owner: risk.owner.as_deref(),
        }
    }
}

impl<'a> From<&'a ExitCriteria> for ExitCriteriaDocument<'a> {
    fn from(criteria: &'a ExitCriteria) -> Self {
        Self {
            criterion: &criteria.criterion,
            met: criteria.met,
        }
    }
}

impl<'a> From<&'a TeamAllocation> for TeamAllocationDocument<'a> {
    fn from(alloc: &'a TeamAllocation) -> Self {
        Self {
            role: &alloc.role,
            phase1_fte: alloc.phase1_fte,
            phase2_fte: alloc.phase2_fte,
            phase3_fte: alloc.phase3_fte,
        }
    }
}

impl<'a> PhaseDocument<'a> {
    pub fn new(phase: &'a Phase, capacity: Capacity) -> Self {
        Self {
            name: &phase.name,
            description: &phase.description,
            goals: &phase.goals,
            epics: phase.epics.iter().map(EpicDocument::from).collect(),
            exit_criteria: phase.exit_criteria.iter().map(ExitCriteriaDocument::from).collect(),
            risks: phase.risks.iter().map(RiskDocument::from).collect(),
            total_points: phase.total_points(),
            total_hours: phase.total_hours(),
            estimated_weeks: phase.estimated_weeks(capacity),
        }
    }
}

impl<'a> RoadmapDocument<'a> {
    pub fn new(roadmap: &'a Roadmap, capacity: Capacity) -> Self {
        Self {
            project_name: &roadmap.project_name,
            created_date: &roadmap.created_date,
            owner: &roadmap.owner,
            summary: &roadmap.summary,
            phases: roadmap
                .phases
                .iter()
                .map(|p| PhaseDocument::new(p, capacity))
                .collect(),
            team: roadmap.team.iter().map(TeamAllocationDocument::from).collect(),
            assumptions: &roadmap.assumptions,
            open_questions: &roadmap.open_questions,
            total_weeks: roadmap.total_weeks(capacity),
            total_points: roadmap.total_points(),
        }
    }
}

impl Roadmap {
    /// Borrowed document view including every derived field
    pub fn to_document(&self, capacity: Capacity) -> RoadmapDocument<'_> {
        RoadmapDocument::new(self, capacity)
    }

    /// Document as a generic JSON value
    pub fn to_value(&self, capacity: Capacity) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.to_document(capacity))?)
    }

    /// Export as pretty-printed JSON with `indent` spaces per level
    pub fn to_json(&self, capacity: Capacity, indent: usize) -> Result<String> {
        debug!(
            "Rendering JSON for {} ({} phases, indent {})",
            self.project_name,
            self.phases.len(),
            indent
        );

        let indent = " ".repeat(indent);
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        self.to_document(capacity).serialize(&mut ser)?;

        // serde_json only ever writes valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
