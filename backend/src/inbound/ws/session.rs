//! Per-connection console session.
//!
//! Keeps WebSocket framing and heartbeats at the edge while the console view
//! state lives in [`ConsoleState`]. Store round trips run on spawned tasks so
//! the socket keeps serving heartbeats; their outcomes come back through a
//! channel and are folded into the state in arrival order. The public
//! contract pings every 5s and considers a connection idle after 10s without
//! client traffic. Tests shorten both intervals.

use std::time::{Duration, Instant};

use actix_ws::{CloseCode, CloseReason, Closed, Message, MessageStream, ProtocolError, Session};
use tokio::sync::mpsc;
use tokio::time;
use tracing::{debug, info, warn};

use crate::domain::console::{
    ConsoleState, FetchResolution, FetchTicket, SliceKind, SlicePhase, SliceStateError,
    SubmitResolution,
};
use crate::domain::{Error, Interview, Question, QuestionFilter, TraceId};
use crate::inbound::http::questions::{QuestionListParams, parse_list_params};
use crate::inbound::http::state::HttpState;
use crate::inbound::ws::messages::{ClientMessage, ServerMessage};

/// Time between heartbeats to the client (5s in production, shorter in tests).
#[cfg(not(test))]
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(5);
#[cfg(test)]
const HEARTBEAT_INTERVAL: Duration = Duration::from_millis(50);

/// Max idle time before disconnecting the client (10s in production, shorter in tests).
#[cfg(not(test))]
const CLIENT_TIMEOUT: Duration = Duration::from_secs(10);
#[cfg(test)]
const CLIENT_TIMEOUT: Duration = Duration::from_millis(100);

pub(super) async fn handle_ws_session(
    ports: HttpState,
    trace_id: TraceId,
    session: Session,
    stream: MessageStream,
) {
    ConsoleSession::new(ports, trace_id)
        .run(session, stream)
        .await;
}

enum SessionError {
    ClientClosed(Option<CloseReason>),
    StreamClosed,
    HeartbeatTimeout,
    Protocol(ProtocolError),
    InvalidPayload,
    Network(Closed),
}

enum CloseAction {
    None,
    Close(Option<CloseReason>),
}

/// Result of a store call started by the session.
#[derive(Debug)]
enum StoreOutcome {
    InterviewsFetched {
        ticket: FetchTicket,
        result: Result<Vec<Interview>, Error>,
    },
    QuestionsFetched {
        ticket: FetchTicket,
        result: Result<Vec<Question>, Error>,
    },
    InterviewSubmitted(Result<Interview, Error>),
    QuestionSubmitted(Result<Question, Error>),
}

struct ConsoleSession {
    ports: HttpState,
    state: ConsoleState,
    trace_id: TraceId,
    outcomes_tx: mpsc::UnboundedSender<StoreOutcome>,
    outcomes_rx: mpsc::UnboundedReceiver<StoreOutcome>,
}

impl ConsoleSession {
    fn new(ports: HttpState, trace_id: TraceId) -> Self {
        let (outcomes_tx, outcomes_rx) = mpsc::unbounded_channel();
        Self {
            ports,
            state: ConsoleState::default(),
            trace_id,
            outcomes_tx,
            outcomes_rx,
        }
    }

    async fn run(mut self, mut session: Session, mut stream: MessageStream) {
        let mut last_heartbeat = Instant::now();
        let mut heartbeat = time::interval(HEARTBEAT_INTERVAL);
        info!(trace_id = %self.trace_id, "console session opened");

        loop {
            let result = tokio::select! {
                _ = heartbeat.tick() => {
                    Self::handle_heartbeat_tick(&mut session, &last_heartbeat).await
                }
                message = stream.recv() => {
                    self.handle_stream_message(&mut session, &mut last_heartbeat, message)
                        .await
                }
                Some(outcome) = self.outcomes_rx.recv() => {
                    self.handle_outcome(&mut session, outcome)
                        .await
                        .map_err(SessionError::Network)
                }
            };

            if let Err(error) = result {
                self.log_shutdown_reason(&error);
                let close_action = Self::close_action_for(&error);
                Self::close_session_if_needed(session, close_action).await;
                return;
            }
        }
    }

    async fn handle_heartbeat_tick(
        session: &mut Session,
        last_heartbeat: &Instant,
    ) -> Result<(), SessionError> {
        if Instant::now().duration_since(*last_heartbeat) > CLIENT_TIMEOUT {
            return Err(SessionError::HeartbeatTimeout);
        }

        session.ping(b"").await.map_err(SessionError::Network)
    }

    async fn handle_stream_message(
        &mut self,
        session: &mut Session,
        last_heartbeat: &mut Instant,
        message: Option<Result<Message, ProtocolError>>,
    ) -> Result<(), SessionError> {
        let Some(message) = message else {
            return Err(SessionError::StreamClosed);
        };

        match message {
            Ok(message) => self.handle_message(session, last_heartbeat, message).await,
            Err(error) => Err(SessionError::Protocol(error)),
        }
    }

    async fn handle_message(
        &mut self,
        session: &mut Session,
        last_heartbeat: &mut Instant,
        message: Message,
    ) -> Result<(), SessionError> {
        match message {
            Message::Ping(payload) => {
                *last_heartbeat = Instant::now();
                session
                    .pong(&payload)
                    .await
                    .map_err(SessionError::Network)?;
                Ok(())
            }
            Message::Text(text) => {
                *last_heartbeat = Instant::now();
                self.handle_text_message(session, text.as_ref()).await
            }
            Message::Pong(_) | Message::Binary(_) | Message::Continuation(_) | Message::Nop => {
                *last_heartbeat = Instant::now();
                Ok(())
            }
            Message::Close(reason) => Err(SessionError::ClientClosed(reason)),
        }
    }

    async fn handle_text_message(
        &mut self,
        session: &mut Session,
        text: &str,
    ) -> Result<(), SessionError> {
        let request = match serde_json::from_str::<ClientMessage>(text) {
            Ok(request) => request,
            Err(error) => {
                warn!(error = %error, "Rejected malformed WebSocket payload");
                return Err(SessionError::InvalidPayload);
            }
        };

        let reply = match self.apply(request) {
            Ok(slice) => self.view(slice),
            Err(error) => ServerMessage::rejected(&error),
        };
        Self::send_json(session, &reply)
            .await
            .map_err(SessionError::Network)
    }

    /// Apply one client message and return the slice whose view changed.
    fn apply(&mut self, request: ClientMessage) -> Result<SliceKind, Error> {
        match request {
            ClientMessage::Mount { slice } => {
                self.ensure_not_submitting(slice)?;
                self.start_fetch(slice);
                Ok(slice)
            }
            ClientMessage::OpenComposer { slice } => {
                match slice {
                    SliceKind::Interviews => self.state.interviews.open_composer(),
                    SliceKind::Questions => self.state.questions.open_composer(),
                }
                Ok(slice)
            }
            ClientMessage::CancelComposer { slice } => {
                match slice {
                    SliceKind::Interviews => self.state.interviews.cancel_composer(),
                    SliceKind::Questions => self.state.questions.cancel_composer(),
                }
                Ok(slice)
            }
            ClientMessage::EditInterviewDraft(patch) => {
                let draft = self
                    .state
                    .interviews
                    .draft_mut()
                    .ok_or_else(|| composer_closed(SliceKind::Interviews))?;
                patch.apply(draft);
                Ok(SliceKind::Interviews)
            }
            ClientMessage::EditQuestionDraft(patch) => {
                let draft = self
                    .state
                    .questions
                    .draft_mut()
                    .ok_or_else(|| composer_closed(SliceKind::Questions))?;
                patch.apply(draft);
                Ok(SliceKind::Questions)
            }
            ClientMessage::Submit { slice } => {
                self.start_submit(slice)?;
                Ok(slice)
            }
            ClientMessage::SetQuestionFilter {
                domain,
                difficulty,
                search,
            } => {
                let filter = parse_list_params(&QuestionListParams {
                    domain,
                    difficulty,
                    search,
                })?;
                self.ensure_not_submitting(SliceKind::Questions)?;
                let ticket = self.state.set_question_filter(filter.clone());
                self.spawn_question_fetch(ticket, filter);
                Ok(SliceKind::Questions)
            }
        }
    }

    /// A refetch racing an insert would list the new row twice.
    fn ensure_not_submitting(&self, slice: SliceKind) -> Result<(), Error> {
        let phase = match slice {
            SliceKind::Interviews => self.state.interviews.phase(),
            SliceKind::Questions => self.state.questions.phase(),
        };
        if phase == SlicePhase::Submitting {
            return Err(Error::conflict(format!(
                "{} submission is in flight",
                slice.as_str()
            )));
        }
        Ok(())
    }

    fn start_fetch(&mut self, slice: SliceKind) {
        match slice {
            SliceKind::Interviews => {
                let ticket = self.state.interviews.begin_fetch();
                let query = self.ports.interviews_query.clone();
                self.spawn_store_call(async move {
                    StoreOutcome::InterviewsFetched {
                        ticket,
                        result: query.list_interviews().await,
                    }
                });
            }
            SliceKind::Questions => {
                let ticket = self.state.questions.begin_fetch();
                let filter = self.state.question_filter().clone();
                self.spawn_question_fetch(ticket, filter);
            }
        }
    }

    fn spawn_question_fetch(&self, ticket: FetchTicket, filter: QuestionFilter) {
        let query = self.ports.questions_query.clone();
        self.spawn_store_call(async move {
            StoreOutcome::QuestionsFetched {
                ticket,
                result: query.list_questions(&filter).await,
            }
        });
    }

    fn start_submit(&mut self, slice: SliceKind) -> Result<(), Error> {
        match slice {
            SliceKind::Interviews => {
                let draft = self
                    .state
                    .interviews
                    .begin_submit()
                    .map_err(|error| slice_state_error(slice, &error))?;
                let command = self.ports.interviews.clone();
                self.spawn_store_call(async move {
                    StoreOutcome::InterviewSubmitted(command.schedule_interview(draft).await)
                });
            }
            SliceKind::Questions => {
                let draft = self
                    .state
                    .questions
                    .begin_submit()
                    .map_err(|error| slice_state_error(slice, &error))?;
                let command = self.ports.questions.clone();
                self.spawn_store_call(async move {
                    StoreOutcome::QuestionSubmitted(command.add_question(draft).await)
                });
            }
        }
        Ok(())
    }

    fn spawn_store_call<F>(&self, call: F)
    where
        F: Future<Output = StoreOutcome> + 'static,
    {
        let outcomes_tx = self.outcomes_tx.clone();
        actix_web::rt::spawn(TraceId::scope(self.trace_id, async move {
            // The receiver only goes away once the session has ended.
            let _ = outcomes_tx.send(call.await);
        }));
    }

    async fn handle_outcome(
        &mut self,
        session: &mut Session,
        outcome: StoreOutcome,
    ) -> Result<(), Closed> {
        let changed = match outcome {
            StoreOutcome::InterviewsFetched { ticket, result } => {
                let resolution = self.state.interviews.finish_fetch(ticket, result);
                (resolution != FetchResolution::Stale).then_some(SliceKind::Interviews)
            }
            StoreOutcome::QuestionsFetched { ticket, result } => {
                let resolution = self.state.questions.finish_fetch(ticket, result);
                (resolution != FetchResolution::Stale).then_some(SliceKind::Questions)
            }
            StoreOutcome::InterviewSubmitted(result) => {
                let resolution = self.state.interviews.finish_submit(result);
                log_submit_resolution(SliceKind::Interviews, resolution)
            }
            StoreOutcome::QuestionSubmitted(result) => {
                let resolution = self.state.questions.finish_submit(result);
                log_submit_resolution(SliceKind::Questions, resolution)
            }
        };

        match changed {
            Some(slice) => Self::send_json(session, &self.view(slice)).await,
            None => Ok(()),
        }
    }

    fn view(&self, slice: SliceKind) -> ServerMessage {
        match slice {
            SliceKind::Interviews => ServerMessage::interviews(&self.state.interviews),
            SliceKind::Questions => {
                ServerMessage::questions(&self.state.questions, self.state.question_filter())
            }
        }
    }

    async fn send_json<T: serde::Serialize>(
        session: &mut Session,
        payload: &T,
    ) -> Result<(), Closed> {
        match serde_json::to_string(payload) {
            Ok(body) => session.text(body).await,
            Err(error) => {
                // In debug builds fail fast so schema drift is fixed; in release we log and keep the connection alive.
                if cfg!(debug_assertions) {
                    panic!("console views must serialize: {error}");
                } else {
                    warn!(error = %error, "Failed to serialize WebSocket payload");
                }
                Ok(())
            }
        }
    }

    fn log_shutdown_reason(&self, error: &SessionError) {
        let trace_id = self.trace_id;
        match error {
            SessionError::HeartbeatTimeout => {
                warn!(%trace_id, "WebSocket heartbeat timeout; closing connection");
            }
            SessionError::Protocol(error) => {
                warn!(%trace_id, error = %error, "WebSocket protocol error");
            }
            SessionError::Network(error) => {
                warn!(%trace_id, error = %error, "WebSocket send failed; closing connection");
            }
            SessionError::InvalidPayload
            | SessionError::ClientClosed(_)
            | SessionError::StreamClosed => {
                info!(%trace_id, "console session closed");
            }
        }
    }

    fn close_action_for(error: &SessionError) -> CloseAction {
        match error {
            SessionError::HeartbeatTimeout => CloseAction::Close(Some(CloseReason {
                code: CloseCode::Normal,
                description: Some("heartbeat timeout".to_owned()),
            })),
            SessionError::Protocol(_) => CloseAction::Close(Some(CloseReason {
                code: CloseCode::Protocol,
                description: Some("protocol error".to_owned()),
            })),
            SessionError::InvalidPayload => CloseAction::Close(Some(CloseReason {
                code: CloseCode::Policy,
                description: Some("invalid payload".to_owned()),
            })),
            SessionError::ClientClosed(reason) => CloseAction::Close(reason.clone()),
            SessionError::StreamClosed | SessionError::Network(_) => CloseAction::None,
        }
    }

    async fn close_session_if_needed(session: Session, close_action: CloseAction) {
        if let CloseAction::Close(reason) = close_action {
            if let Err(error) = session.close(reason).await {
                warn!(error = %error, "Failed to close WebSocket session");
            }
        }
    }
}

fn composer_closed(slice: SliceKind) -> Error {
    Error::conflict(format!("{} composer is not open", slice.as_str()))
}

fn slice_state_error(slice: SliceKind, error: &SliceStateError) -> Error {
    Error::conflict(format!("{} {error}", slice.as_str()))
}

fn log_submit_resolution(
    slice: SliceKind,
    resolution: Result<SubmitResolution, SliceStateError>,
) -> Option<SliceKind> {
    match resolution {
        Ok(resolution) => {
            debug!(slice = slice.as_str(), ?resolution, "submission resolved");
            Some(slice)
        }
        Err(error) => {
            warn!(slice = slice.as_str(), error = %error, "dropping unexpected submission outcome");
            None
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
