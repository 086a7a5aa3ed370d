//! Builders for the port bundle shared by HTTP handlers and console sessions.

use std::sync::Arc;

use interview_console::domain::ports::{InterviewRepository, QuestionRepository};
use interview_console::domain::{InterviewService, QuestionBankService};
use interview_console::inbound::http::state::HttpState;
use interview_console::outbound::memory::InMemoryRecordStore;
use mockable::DefaultClock;
use tracing::info;

use super::ServerConfig;

/// Wire both record services over one repository.
fn services_over<R>(repo: Arc<R>) -> HttpState
where
    R: InterviewRepository + QuestionRepository + 'static,
{
    HttpState::from_services(
        Arc::new(InterviewService::new(repo.clone())),
        Arc::new(QuestionBankService::new(repo)),
    )
}

/// Build HTTP state, using the hosted record store when one is configured and
/// an in-memory store otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.record_store {
        Some(client) => {
            info!(store = ?client, "using hosted record store");
            services_over(client.clone())
        }
        None => {
            info!("no record store configured; keeping records in memory");
            services_over(Arc::new(InMemoryRecordStore::new(Arc::new(DefaultClock))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use interview_console::domain::ports::{InterviewsCommand, InterviewsQuery};
    use interview_console::domain::{ErrorCode, InterviewDraft, SkillDomain};
    use interview_console::outbound::record_store::RecordStoreClient;
    use zeroize::Zeroizing;

    fn config() -> ServerConfig {
        ServerConfig::new("127.0.0.1:0".parse().expect("valid addr"))
    }

    fn ada() -> InterviewDraft {
        InterviewDraft {
            candidate_name: "Ada Lovelace".into(),
            candidate_email: "ada@example.com".into(),
            domain: SkillDomain::Backend,
            tech_stack: "Go, Postgres".into(),
            scheduled_at: "2025-03-01T10:00".into(),
        }
    }

    #[tokio::test]
    async fn absent_store_keeps_records_in_memory() {
        let state = build_http_state(&config());

        state
            .interviews
            .schedule_interview(ada())
            .await
            .expect("scheduled");
        let listed = state
            .interviews_query
            .list_interviews()
            .await
            .expect("listed");

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].candidate_name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn configured_store_is_used_for_every_port() {
        // Port 9 (discard) is not expected to accept connections.
        let client = RecordStoreClient::new(
            "http://127.0.0.1:9",
            Zeroizing::new("anon".to_owned()),
            Duration::from_secs(2),
        )
        .expect("client builds");
        let state = build_http_state(&config().with_record_store(client));

        let error = state
            .interviews_query
            .list_interviews()
            .await
            .expect_err("unreachable store");

        assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
    }
}
