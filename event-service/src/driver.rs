//! The looping high-level example.
//!
//! Each iteration seeds a batch of demo events, runs the canned queries, and
//! deletes the Ansible workshop again. Iteration failures are logged and the
//! loop carries on.

use std::future::Future;
use std::time::Duration;

use event_service_repository::{EventIndexError, EventService};
use event_service_shared::{seed_events, ElkEvent, EventQuery};
use tracing::{debug, error, info, warn, Instrument};

use crate::server::context::RequestContext;

/// Title removed at the end of every iteration.
pub const DELETED_TITLE: &str = "Ansible Automation Workshop";

/// Number of hits logged per sample query.
const LOGGED_HITS: usize = 3;

/// The demo batch: seed titles, types and timestamps with placeholder details
/// and no identifiers.
pub fn demo_events() -> Vec<ElkEvent> {
    seed_events()
        .into_iter()
        .map(|seed| ElkEvent {
            id: None,
            place: "TBA".to_string(),
            description: "Sample event for demo".to_string(),
            sub_topics: vec!["technology".to_string(), "learning".to_string()],
            ..seed
        })
        .collect()
}

/// The four sample queries, each with a description for the logs.
pub fn sample_queries() -> Vec<(&'static str, EventQuery)> {
    vec![
        ("all events", EventQuery::All),
        ("workshops", EventQuery::workshops()),
        (
            "exact title 'Distributed Systems 101'",
            EventQuery::ExactTitle("Distributed Systems 101".to_string()),
        ),
        (
            "title 'Data Engineering Bootcamp' after 2024-06-01",
            EventQuery::title_after("Data Engineering Bootcamp", "2024-06-01"),
        ),
    ]
}

/// Run every sample query, returning each description with its hit count.
pub async fn run_sample_queries(
    service: &EventService,
) -> Result<Vec<(&'static str, usize)>, EventIndexError> {
    let mut counts = Vec::new();

    for (description, query) in sample_queries() {
        let events = service.search(&query).await?;
        info!(query = description, hits = events.len(), "Sample query");

        for event in events.iter().take(LOGGED_HITS) {
            debug!(
                query = description,
                id = event.id.as_deref().unwrap_or_default(),
                title = %event.title,
                datetime = %event.datetime,
                "Hit"
            );
        }

        counts.push((description, events.len()));
    }

    Ok(counts)
}

/// One pass of the example: seed, query, delete.
pub async fn run_iteration(service: &EventService, iteration: u64) -> Result<(), EventIndexError> {
    let summary = service.bulk_store(demo_events()).await?;
    if summary.failed > 0 {
        warn!(
            iteration,
            failed = summary.failed,
            total = summary.total,
            "Some demo events were not indexed"
        );
    } else {
        info!(iteration, indexed = summary.succeeded, "Demo events indexed");
    }

    run_sample_queries(service).await?;

    let deleted = service.delete_by_title(DELETED_TITLE).await?;
    info!(
        iteration,
        title = DELETED_TITLE,
        deleted = deleted.succeeded,
        "Deleted events by title"
    );

    Ok(())
}

/// Loop until `shutdown` resolves, sleeping `delay` between iterations.
///
/// # Returns
///
/// The number of iterations that were started.
pub async fn run<F>(service: &EventService, delay: Duration, shutdown: F) -> u64
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let mut iteration: u64 = 0;

    loop {
        iteration += 1;
        let span = RequestContext::new().iteration_span();

        if let Err(e) = run_iteration(service, iteration).instrument(span).await {
            error!(iteration, error = %e, "Iteration failed");
        }

        tokio::select! {
            _ = &mut shutdown => {
                info!(iterations = iteration, "Shutdown signal received, stopping");
                return iteration;
            }
            _ = tokio::time::sleep(delay) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use event_service_shared::EventType;

    #[test]
    fn test_demo_events_have_placeholder_details() {
        let events = demo_events();

        assert_eq!(events.len(), 5);
        for event in &events {
            assert!(event.id.is_none());
            assert_eq!(event.place, "TBA");
            assert_eq!(event.description, "Sample event for demo");
            assert_eq!(event.sub_topics, vec!["technology", "learning"]);
        }
        assert_eq!(events[2].title, DELETED_TITLE);
        assert_eq!(events[2].event_type, EventType::Workshop);
    }

    #[test]
    fn test_sample_queries_use_uppercase_workshop() {
        let queries = sample_queries();

        assert_eq!(queries.len(), 4);
        assert_eq!(queries[1].1, EventQuery::ByType(EventType::Workshop));
    }
}
