//! End-to-end rendering of assembled roadmaps

use chrono::NaiveDate;
use roadmap_core::{Capacity, RiskLevel, Size};
use roadmap_planning::{
    notification_system_roadmap, Epic, ExitCriteria, Phase, Risk, Roadmap, RoadmapGenerator,
    Story, Task, TeamAllocation,
};

fn two_phase_roadmap() -> Roadmap {
    let mvp = Phase::new("MVP", "First release")
        .with_goals(vec!["Ship it".to_string()])
        .with_epics(vec![
            Epic::new("Accounts", "Sign up and login").with_stories(vec![
                Story::new("Sign up", "", Size::M).with_tasks(vec![
                    Task::new("Form", Size::S),
                    Task::new("Email verification", Size::M),
                ]),
                Story::new("Login", "", Size::S),
            ]),
            Epic::new("Billing", "Payments").with_stories(vec![Story::new("Stripe", "", Size::Xl)
                .with_dependencies(vec!["Sign up".to_string()])]),
        ])
        .with_exit_criteria(vec![ExitCriteria::new("Beta users onboarded")]);

    let scale = Phase::new("Scale", "Harden for growth")
        .with_epics(vec![Epic::new("Perf", "Caching")
            .with_stories(vec![Story::new("Cache layer", "", Size::L)])])
        .with_duration_weeks(3);

    RoadmapGenerator::default()
        .create_roadmap_on(
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            "Shop",
            "Web Team",
            "Launch the shop",
            vec![mvp, scale],
        )
        .with_team(vec![TeamAllocation::new("Backend", 2.0, 2.0, 1.0)])
}

#[test]
fn test_total_points_is_nested_sum() {
    let roadmap = two_phase_roadmap();
    let expected: u32 = roadmap
        .phases
        .iter()
        .flat_map(|p| &p.epics)
        .flat_map(|e| &e.stories)
        .map(|s| s.size.value())
        .sum();
    assert_eq!(roadmap.total_points(), expected);
    assert_eq!(expected, 3 + 2 + 8 + 5);
}

#[test]
fn test_total_weeks_mixes_pinned_and_computed() {
    let roadmap = two_phase_roadmap();
    // MVP: (6 + 12) + 16 + 64 = 98 hours; Scale pinned at 3 weeks
    assert_eq!(roadmap.phases[0].total_hours(), 98);
    let weeks = roadmap.total_weeks(Capacity::default());
    assert!((weeks - (98.0 / 30.0 + 3.0)).abs() < 1e-9);

    let faster = Capacity::new(49.0).unwrap();
    assert!((roadmap.total_weeks(faster) - 5.0).abs() < 1e-9);
}

#[test]
fn test_json_document_shape() {
    let roadmap = two_phase_roadmap();
    let json = roadmap.to_json(Capacity::default(), 2).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["created_date"], "2025-03-01");
    assert_eq!(value["total_points"], 18);

    let phase_keys = [
        "name",
        "description",
        "goals",
        "epics",
        "exit_criteria",
        "risks",
        "total_points",
        "total_hours",
        "estimated_weeks",
    ];
    for phase in value["phases"].as_array().unwrap() {
        let obj = phase.as_object().unwrap();
        assert_eq!(obj.len(), phase_keys.len());
        for key in phase_keys {
            assert!(obj.contains_key(key), "phase missing {}", key);
        }
    }

    assert_eq!(value["phases"][1]["estimated_weeks"], 3.0);
    let story = &value["phases"][0]["epics"][1]["stories"][0];
    assert_eq!(story["size"], "XL");
    assert_eq!(story["priority"], "MEDIUM");
    assert_eq!(story["dependencies"][0], "Sign up");
}

#[test]
fn test_markdown_document_order() {
    let md = two_phase_roadmap().to_markdown(Capacity::default());

    let order = [
        "# Implementation Roadmap: Shop",
        "## Executive Summary",
        "## Phase 1: MVP",
        "#### Epic 1.1: Accounts",
        "#### Epic 1.2: Billing",
        "### Exit Criteria",
        "## Phase 2: Scale",
        "#### Epic 2.1: Perf",
        "## Resource Requirements",
    ];
    let positions: Vec<usize> = order.iter().map(|h| md.find(h).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    assert!(md.contains("| Stripe | XL | 8 | Sign up |"));
    assert!(md.contains("**Estimated Duration**: ~3.0 weeks"));
    assert!(!md.contains("## Assumptions"));
    assert!(!md.contains("## Open Questions"));
}

#[test]
fn test_phase_without_criteria_has_no_heading() {
    let roadmap = two_phase_roadmap();
    let md = roadmap.to_markdown(Capacity::default());
    let scale = md.find("## Phase 2: Scale").unwrap();
    assert!(!md[scale..].contains("### Exit Criteria"));
}

#[test]
fn test_risk_table_ordering() {
    let mut roadmap = two_phase_roadmap();
    roadmap.phases[0].risks = vec![
        Risk::new("Vendor outage", "", RiskLevel::High, RiskLevel::High, "Fallback"),
        Risk::new("Typos", "", RiskLevel::Low, RiskLevel::Low, "Review"),
        Risk::new("Scope creep", "", RiskLevel::Medium, RiskLevel::Medium, "Triage"),
    ];
    let md = roadmap.to_markdown(Capacity::default());
    let scores: Vec<&str> = md
        .lines()
        .filter(|l| l.starts_with("| ") && l.ends_with(" |"))
        .filter_map(|l| {
            let cells: Vec<&str> = l.split(" | ").collect();
            (cells.len() == 5).then(|| cells[3])
        })
        .filter(|c| c.parse::<u32>().is_ok())
        .collect();
    assert_eq!(scores, vec!["9", "4", "1"]);
}

#[test]
fn test_sample_roadmap_renders() {
    let roadmap = notification_system_roadmap();
    let md = roadmap.to_markdown(Capacity::default());
    assert!(md.contains("**Total Duration**: ~4.3 weeks"));
    assert!(md.contains("| FCM rate limits | MEDIUM | HIGH | 6 | Implement batching and retry logic |"));
    assert!(md.contains("| Backend | 2 FTE | 3 FTE | 2 FTE |"));
}
