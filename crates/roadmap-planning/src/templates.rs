//! Template roadmaps

use roadmap_core::{RiskLevel, Size};

use crate::generator::RoadmapGenerator;
use crate::model::*;

/// Example roadmap for a notification system
pub fn notification_system_roadmap() -> Roadmap {
    let mvp = Phase::new("MVP", "Core notification functionality")
        .with_goals(vec![
            "Deliver real-time push notifications".to_string(),
            "Integrate with existing order system".to_string(),
            "Achieve < 5 second delivery latency".to_string(),
        ])
        .with_epics(vec![Epic::new(
            "Push Notification Infrastructure",
            "Set up push notification delivery system",
        )
        .with_stories(vec![
            Story::new(
                "Implement FCM integration",
                "Integrate Firebase Cloud Messaging",
                Size::L,
            ),
            Story::new(
                "Create notification service",
                "Build core notification microservice",
                Size::Xl,
            ),
            Story::new(
                "Add delivery tracking",
                "Track notification delivery status",
                Size::M,
            ),
        ])])
        .with_exit_criteria(vec![
            ExitCriteria::new("Push notifications delivered to iOS and Android"),
            ExitCriteria::new("Delivery latency < 5 seconds at p95"),
            ExitCriteria::new("Integration tests passing"),
        ])
        .with_risks(vec![Risk::new(
            "FCM rate limits",
            "Firebase may throttle at high volume",
            RiskLevel::Medium,
            RiskLevel::High,
            "Implement batching and retry logic",
        )]);

    RoadmapGenerator::default()
        .create_roadmap(
            "Notification System",
            "Platform Team",
            "Implement real-time notification system to reduce support tickets by 60%",
            vec![mvp],
        )
        .with_team(vec![
            TeamAllocation::new("Backend", 2.0, 3.0, 2.0),
            TeamAllocation::new("Mobile", 1.0, 2.0, 1.0),
            TeamAllocation::new("DevOps", 0.5, 1.0, 0.5),
        ])
        .with_assumptions(vec![
            "FCM/APNs credentials available".to_string(),
            "Order service can emit events".to_string(),
        ])
        .with_open_questions(vec![
            "What's the notification preference UI scope?".to_string(),
            "Do we need SMS fallback in Phase 1?".to_string(),
        ])
}

/// Create a minimal roadmap with a single empty MVP phase
pub fn minimal_roadmap(project_name: impl Into<String>) -> Roadmap {
    RoadmapGenerator::default().create_roadmap(
        project_name,
        "TBD",
        "Fill in the executive summary here.",
        vec![Phase::new("MVP", "Describe the first delivery stage.")],
    )
}
