//! Markdown rendering for roadmaps
//!
//! Output is assembled line by line. Caller text goes in verbatim, so a `|` or
//! newline inside a title will break the surrounding table.

use roadmap_core::Capacity;
use tracing::debug;

use crate::model::{Epic, Phase, Roadmap};

impl Roadmap {
    /// Export as a Markdown document
    pub fn to_markdown(&self, capacity: Capacity) -> String {
        render(self, capacity)
    }
}

/// Render a complete roadmap document
pub fn render(roadmap: &Roadmap, capacity: Capacity) -> String {
    debug!(
        "Rendering markdown for {} ({} phases)",
        roadmap.project_name,
        roadmap.phases.len()
    );

    let mut md = format!("# Implementation Roadmap: {}\n\n", roadmap.project_name);
    md.push_str(&format!("**Created**: {}\n", roadmap.created_date));
    md.push_str(&format!("**Owner**: {}\n", roadmap.owner));
    md.push_str(&format!(
        "**Total Duration**: ~{:.1} weeks\n",
        roadmap.total_weeks(capacity)
    ));
    md.push_str(&format!(
        "**Total Story Points**: {}\n\n",
        roadmap.total_points()
    ));

    md.push_str("## Executive Summary\n\n");
    md.push_str(&roadmap.summary);
    md.push_str("\n\n---\n\n");

    for (i, phase) in roadmap.phases.iter().enumerate() {
        render_phase(&mut md, i + 1, phase, capacity);
        md.push_str("---\n\n");
    }

    if !roadmap.team.is_empty() {
        md.push_str("## Resource Requirements\n\n");
        md.push_str("| Role | Phase 1 | Phase 2 | Phase 3 |\n");
        md.push_str("|------|---------|---------|---------|\n");
        for alloc in &roadmap.team {
            md.push_str(&format!(
                "| {} | {} FTE | {} FTE | {} FTE |\n",
                alloc.role, alloc.phase1_fte, alloc.phase2_fte, alloc.phase3_fte
            ));
        }
        md.push_str("\n---\n\n");
    }

    if !roadmap.assumptions.is_empty() {
        md.push_str("## Assumptions\n\n");
        push_bullets(&mut md, &roadmap.assumptions);
        md.push_str("\n---\n\n");
    }

    if !roadmap.open_questions.is_empty() {
        md.push_str("## Open Questions\n\n");
        push_bullets(&mut md, &roadmap.open_questions);
        md.push('\n');
    }

    md
}

fn render_phase(md: &mut String, number: usize, phase: &Phase, capacity: Capacity) {
    md.push_str(&format!("## Phase {}: {}\n\n", number, phase.name));
    md.push_str(&phase.description);
    md.push_str("\n\n");
    md.push_str(&format!(
        "**Estimated Duration**: ~{:.1} weeks\n",
        phase.estimated_weeks(capacity)
    ));
    md.push_str(&format!("**Story Points**: {}\n\n", phase.total_points()));

    if !phase.goals.is_empty() {
        md.push_str("### Goals\n\n");
        push_bullets(md, &phase.goals);
        md.push('\n');
    }

    if !phase.epics.is_empty() {
        md.push_str("### Epics\n\n");
        for (j, epic) in phase.epics.iter().enumerate() {
            render_epic(md, number, j + 1, epic);
        }
    }

    if !phase.exit_criteria.is_empty() {
        md.push_str("### Exit Criteria\n\n");
        for criteria in &phase.exit_criteria {
            let status = if criteria.met { "x" } else { " " };
            md.push_str(&format!("- [{}] {}\n", status, criteria.criterion));
        }
        md.push('\n');
    }

    if !phase.risks.is_empty() {
        md.push_str("### Risks\n\n");
        md.push_str("| Risk | Probability | Impact | Score | Mitigation |\n");
        md.push_str("|------|-------------|--------|-------|------------|\n");
        for risk in phase.risks_by_score() {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                risk.title,
                risk.probability,
                risk.impact,
                risk.score(),
                risk.mitigation
            ));
        }
        md.push('\n');
    }
}

fn render_epic(md: &mut String, phase_number: usize, number: usize, epic: &Epic) {
    md.push_str(&format!(
        "#### Epic {}.{}: {}\n\n",
        phase_number, number, epic.title
    ));
    md.push_str(&epic.description);
    md.push_str("\n\n");
    md.push_str(&format!(
        "**Points**: {} | **Hours**: ~{}\n\n",
        epic.total_points(),
        epic.total_hours()
    ));

    if epic.stories.is_empty() {
        return;
    }

    md.push_str("| Story | Size | Points | Dependencies |\n");
    md.push_str("|-------|------|--------|--------------|\n");
    for story in &epic.stories {
        let deps = if story.dependencies.is_empty() {
            "None".to_string()
        } else {
            story.dependencies.join(", ")
        };
        md.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            story.title,
            story.size,
            story.points(),
            deps
        ));
    }
    md.push('\n');
}

fn push_bullets(md: &mut String, items: &[String]) {
    for item in items {
        md.push_str(&format!("- {}\n", item));
    }
}
