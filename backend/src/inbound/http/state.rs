//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    FixtureInterviewsCommand, FixtureInterviewsQuery, FixtureQuestionBankCommand,
    FixtureQuestionBankQuery, InterviewsCommand, InterviewsQuery, QuestionBankCommand,
    QuestionBankQuery,
};

/// Dependency bundle for HTTP handlers and console sessions.
#[derive(Clone)]
pub struct HttpState {
    pub interviews: Arc<dyn InterviewsCommand>,
    pub interviews_query: Arc<dyn InterviewsQuery>,
    pub questions: Arc<dyn QuestionBankCommand>,
    pub questions_query: Arc<dyn QuestionBankQuery>,
}

impl HttpState {
    /// Build state from one service per record kind.
    ///
    /// Each service implements both the query and the command port of its
    /// kind, so it is shared between the two slots.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use interview_console::domain::{InterviewService, QuestionBankService};
    /// use interview_console::inbound::http::state::HttpState;
    /// use interview_console::outbound::memory::InMemoryRecordStore;
    ///
    /// let store = Arc::new(InMemoryRecordStore::new(Arc::new(mockable::DefaultClock)));
    /// let state = HttpState::from_services(
    ///     Arc::new(InterviewService::new(store.clone())),
    ///     Arc::new(QuestionBankService::new(store)),
    /// );
    /// let _query = state.interviews_query.clone();
    /// ```
    pub fn from_services<I, Q>(interviews: Arc<I>, questions: Arc<Q>) -> Self
    where
        I: InterviewsCommand + InterviewsQuery + 'static,
        Q: QuestionBankCommand + QuestionBankQuery + 'static,
    {
        Self {
            interviews: interviews.clone(),
            interviews_query: interviews,
            questions: questions.clone(),
            questions_query: questions,
        }
    }

    /// State backed by the fixture ports: empty lists, echoing creates.
    pub fn fixture() -> Self {
        Self {
            interviews: Arc::new(FixtureInterviewsCommand),
            interviews_query: Arc::new(FixtureInterviewsQuery),
            questions: Arc::new(FixtureQuestionBankCommand),
            questions_query: Arc::new(FixtureQuestionBankQuery),
        }
    }
}
