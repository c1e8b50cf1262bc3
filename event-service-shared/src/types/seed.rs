//! Fixed sample events written by bulk initialisation.

use chrono::{DateTime, TimeZone, Utc};

use crate::types::elk_event::{ElkEvent, EventType};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("seed timestamps are valid UTC instants")
}

fn topics(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The five seed events, with ids "1" through "5".
pub fn seed_events() -> Vec<ElkEvent> {
    vec![
        ElkEvent::new(
            "Building Scalable Micro-services with Spring Boot",
            EventType::Workshop,
            at(2024, 7, 5, 13, 0),
            "Tech-Hub – Room A, Berlin",
            "Hands-on Spring Boot workshop",
            topics(&["DDD", "API Gateway", "Observability", "CI/CD"]),
        )
        .with_id("1"),
        ElkEvent::new(
            "Distributed Systems 101",
            EventType::TechTalk,
            at(2024, 6, 12, 17, 30),
            "Auditorium 2, Dublin",
            "Intro to consistency models, CAP, etc.",
            topics(&["CAP theorem", "Gossip", "Consensus"]),
        )
        .with_id("2"),
        ElkEvent::new(
            "Ansible Automation Workshop",
            EventType::Workshop,
            at(2024, 5, 30, 9, 0),
            "Lab 1, London",
            "Hands-on with Ansible playbooks",
            topics(&["YAML", "Idempotence", "Role reuse"]),
        )
        .with_id("3"),
        ElkEvent::new(
            "Observability for Kubernetes",
            EventType::TechTalk,
            at(2024, 5, 18, 15, 0),
            "Hall C, Paris",
            "Logging, metrics, traces",
            topics(&["Prometheus", "OpenTelemetry", "Jaeger"]),
        )
        .with_id("4"),
        ElkEvent::new(
            "Data Engineering Bootcamp",
            EventType::Workshop,
            at(2024, 8, 20, 8, 30),
            "Campus West, Zurich",
            "From raw data to pipelines",
            topics(&["Airflow", "Spark", "DeltaLake"]),
        )
        .with_id("5"),
    ]
}
