//! Query-string construction for PostgREST selects.
//!
//! Pure functions only; the client attaches the pairs to the request and
//! reqwest takes care of percent-encoding.

use crate::domain::QuestionFilter;

pub(super) const INTERVIEWS_TABLE: &str = "interviews";
pub(super) const QUESTIONS_TABLE: &str = "questions";

pub(super) type QueryPairs = Vec<(&'static str, String)>;

/// Every interview, earliest schedule first.
pub(super) fn interview_list_query() -> QueryPairs {
    vec![
        ("select", "*".to_owned()),
        ("order", "scheduled_at.asc".to_owned()),
    ]
}

/// Questions matching `filter`, newest first.
pub(super) fn question_list_query(filter: &QuestionFilter) -> QueryPairs {
    let mut pairs = vec![
        ("select", "*".to_owned()),
        ("order", "created_at.desc".to_owned()),
    ];
    if let Some(domain) = filter.domain() {
        pairs.push(("domain", format!("eq.{domain}")));
    }
    if let Some(difficulty) = filter.difficulty() {
        pairs.push(("difficulty", format!("eq.{difficulty}")));
    }
    if let Some(search) = filter.search() {
        pairs.push(("content", format!("ilike.%{}%", escape_like(search))));
    }
    pairs
}

/// Escape `LIKE` metacharacters so user text matches literally.
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
