//! Behavioural coverage for the console slices.

use chrono::{TimeZone, Utc};
use rstest::{fixture, rstest};

use super::*;
use crate::domain::{
    Difficulty, Error, InterviewStatus, RecordId, SkillDomain,
};

fn interview(id: &str, draft: &InterviewDraft) -> Interview {
    let new_interview = draft.validate().expect("complete draft");
    Interview {
        id: RecordId::new(id).expect("valid id"),
        candidate_name: new_interview.candidate_name,
        candidate_email: new_interview.candidate_email,
        domain: new_interview.domain,
        tech_stack: new_interview.tech_stack,
        scheduled_at: new_interview.scheduled_at,
        status: InterviewStatus::Pending,
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    }
}

fn question(id: &str, content: &str, difficulty: Difficulty) -> Question {
    Question {
        id: RecordId::new(id).expect("valid id"),
        content: content.to_owned(),
        domain: SkillDomain::Backend,
        tech_stack: "Rust".to_owned(),
        difficulty,
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    }
}

#[fixture]
fn ada_patch() -> InterviewDraftPatch {
    InterviewDraftPatch {
        candidate_name: Some("Ada Lovelace".to_owned()),
        candidate_email: Some("ada@example.com".to_owned()),
        domain: Some(SkillDomain::Backend),
        tech_stack: Some("Go, Postgres".to_owned()),
        scheduled_at: Some("2025-03-01T10:00".to_owned()),
    }
}

#[fixture]
fn state() -> ConsoleState {
    ConsoleState::default()
}

#[rstest]
fn new_slices_start_idle_and_empty(state: ConsoleState) {
    assert_eq!(state.interviews.phase(), SlicePhase::Idle);
    assert!(state.interviews.records().is_empty());
    assert_eq!(state.questions.draft().difficulty, Difficulty::Medium);
    assert_eq!(state.questions.draft().domain, SkillDomain::Frontend);
    assert!(state.question_filter().is_empty());
}

#[rstest]
fn successful_interview_submit_appends_and_resets(
    mut state: ConsoleState,
    ada_patch: InterviewDraftPatch,
) {
    let existing = InterviewDraft {
        candidate_name: "Grace Hopper".to_owned(),
        candidate_email: "grace@example.com".to_owned(),
        tech_stack: "COBOL".to_owned(),
        scheduled_at: "2025-02-01T09:00".to_owned(),
        ..InterviewDraft::default()
    };
    let ticket = state.interviews.begin_fetch();
    state
        .interviews
        .finish_fetch(ticket, Ok(vec![interview("1", &existing)]));

    state.interviews.open_composer();
    ada_patch.apply(state.interviews.draft_mut().expect("composing"));
    let draft = state.interviews.begin_submit().expect("composer open");
    assert_eq!(state.interviews.phase(), SlicePhase::Submitting);

    let resolution = state
        .interviews
        .finish_submit(Ok(interview("2", &draft)))
        .expect("submission in flight");

    assert_eq!(resolution, SubmitResolution::Created);
    let records = state.interviews.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].candidate_name, "Ada Lovelace");
    assert_eq!(records[1].status, InterviewStatus::Pending);
    assert_eq!(state.interviews.phase(), SlicePhase::Idle);
    assert_eq!(state.interviews.draft(), &InterviewDraft::default());
}

#[rstest]
fn successful_question_submit_prepends(mut state: ConsoleState) {
    let ticket = state.questions.begin_fetch();
    state.questions.finish_fetch(
        ticket,
        Ok(vec![question("1", "Older question", Difficulty::Easy)]),
    );

    state.questions.open_composer();
    state.questions.begin_submit().expect("composer open");
    state
        .questions
        .finish_submit(Ok(question("2", "Newer question", Difficulty::Hard)))
        .expect("submission in flight");

    let contents: Vec<_> = state
        .questions
        .records()
        .iter()
        .map(|q| q.content.as_str())
        .collect();
    assert_eq!(contents, vec!["Newer question", "Older question"]);
}

#[rstest]
fn failed_submit_keeps_list_composer_and_draft(
    mut state: ConsoleState,
    ada_patch: InterviewDraftPatch,
) {
    state.interviews.open_composer();
    ada_patch.apply(state.interviews.draft_mut().expect("composing"));
    let before = state.interviews.draft().clone();
    state.interviews.begin_submit().expect("composer open");

    let resolution = state
        .interviews
        .finish_submit(Err(Error::service_unavailable("store offline")))
        .expect("submission in flight");

    assert_eq!(resolution, SubmitResolution::Failed);
    assert!(state.interviews.records().is_empty());
    assert_eq!(state.interviews.phase(), SlicePhase::Composing);
    assert_eq!(state.interviews.draft(), &before);
    assert_eq!(
        state.interviews.last_error().map(Error::message),
        Some("store offline")
    );
}

#[rstest]
fn cancel_closes_composer_but_keeps_draft(mut state: ConsoleState) {
    state.questions.open_composer();
    QuestionDraftPatch {
        content: Some("Half-typed".to_owned()),
        ..QuestionDraftPatch::default()
    }
    .apply(state.questions.draft_mut().expect("composing"));

    state.questions.cancel_composer();

    assert_eq!(state.questions.phase(), SlicePhase::Idle);
    assert!(state.questions.draft_mut().is_none());
    assert_eq!(state.questions.draft().content, "Half-typed");
}

#[rstest]
fn submit_requires_open_composer(mut state: ConsoleState) {
    let error = state.questions.begin_submit().expect_err("composer closed");
    assert_eq!(
        error,
        SliceStateError::NotComposing {
            phase: SlicePhase::Idle
        }
    );
    assert!(matches!(
        state.questions.finish_submit(Err(Error::internal("late"))),
        Err(SliceStateError::NotSubmitting { .. })
    ));
}

#[rstest]
fn composer_cannot_reopen_or_cancel_while_submitting(mut state: ConsoleState) {
    state.questions.open_composer();
    state.questions.begin_submit().expect("composer open");

    state.questions.cancel_composer();
    state.questions.open_composer();

    assert_eq!(state.questions.phase(), SlicePhase::Submitting);
    assert!(state.questions.draft_mut().is_none());
}

#[rstest]
fn failed_fetch_leaves_previous_rows(mut state: ConsoleState) {
    let first = state.questions.begin_fetch();
    state.questions.finish_fetch(
        first,
        Ok(vec![question("1", "Kept", Difficulty::Easy)]),
    );

    let second = state.questions.begin_fetch();
    let resolution = state
        .questions
        .finish_fetch(second, Err(Error::service_unavailable("timeout")));

    assert_eq!(resolution, FetchResolution::Failed);
    assert_eq!(state.questions.records().len(), 1);
    assert!(!state.questions.is_fetching());
    assert!(state.questions.last_error().is_some());
}

#[rstest]
fn out_of_order_fetch_outcomes_are_discarded(mut state: ConsoleState) {
    let easy_only = state.set_question_filter(
        QuestionFilter::default().with_difficulty(Some(Difficulty::Easy)),
    );
    let hard_only = state.set_question_filter(
        QuestionFilter::default().with_difficulty(Some(Difficulty::Hard)),
    );
    assert!(hard_only > easy_only);

    let applied = state.questions.finish_fetch(
        hard_only,
        Ok(vec![question("2", "Hard one", Difficulty::Hard)]),
    );
    let stale = state.questions.finish_fetch(
        easy_only,
        Ok(vec![question("1", "Easy one", Difficulty::Easy)]),
    );

    assert_eq!(applied, FetchResolution::Applied);
    assert_eq!(stale, FetchResolution::Stale);
    assert_eq!(state.questions.records()[0].content, "Hard one");
    assert_eq!(
        state.question_filter().difficulty(),
        Some(Difficulty::Hard)
    );
}

#[rstest]
fn fetching_flag_tracks_newest_ticket(mut state: ConsoleState) {
    let older = state.interviews.begin_fetch();
    let newer = state.interviews.begin_fetch();

    state.interviews.finish_fetch(older, Ok(Vec::new()));
    assert!(state.interviews.is_fetching());

    state.interviews.finish_fetch(newer, Ok(Vec::new()));
    assert!(!state.interviews.is_fetching());
}

#[rstest]
fn patch_only_touches_present_fields() {
    let mut draft = QuestionDraft {
        content: "Original".to_owned(),
        ..QuestionDraft::default()
    };
    QuestionDraftPatch {
        difficulty: Some(Difficulty::Hard),
        ..QuestionDraftPatch::default()
    }
    .apply(&mut draft);

    assert_eq!(draft.content, "Original");
    assert_eq!(draft.difficulty, Difficulty::Hard);
}
