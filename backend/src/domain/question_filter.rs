//! Question bank filter set.
//!
//! Each predicate is optional; an absent predicate matches every question.
//! Present predicates combine with logical AND.

use serde::{Deserialize, Serialize};

use super::{Difficulty, Question, SkillDomain};

/// Server-side filter predicates for listing questions.
///
/// # Examples
/// ```
/// use interview_console::domain::{Difficulty, QuestionFilter, SkillDomain};
///
/// let filter = QuestionFilter::default()
///     .with_domain(Some(SkillDomain::Backend))
///     .with_difficulty(Some(Difficulty::Hard))
///     .with_search("  ");
/// assert_eq!(filter.search(), None);
/// assert!(!filter.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionFilter {
    domain: Option<SkillDomain>,
    difficulty: Option<Difficulty>,
    search: Option<String>,
}

impl QuestionFilter {
    /// Restrict to one domain, or lift the restriction with `None`.
    #[must_use]
    pub fn with_domain(mut self, domain: Option<SkillDomain>) -> Self {
        self.domain = domain;
        self
    }

    /// Restrict to one difficulty, or lift the restriction with `None`.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Option<Difficulty>) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the free-text search. Blank text clears it.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = if search.trim().is_empty() {
            None
        } else {
            Some(search)
        };
        self
    }

    pub fn domain(&self) -> Option<SkillDomain> {
        self.domain
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// True when no predicate is set.
    pub fn is_empty(&self) -> bool {
        self.domain.is_none() && self.difficulty.is_none() && self.search.is_none()
    }

    /// Evaluate the predicates against one question.
    ///
    /// Search is a case-insensitive substring match on `content`; `%` and
    /// `_` are literal characters, not wildcards.
    pub fn matches(&self, question: &Question) -> bool {
        let domain_ok = self.domain.is_none_or(|domain| question.domain == domain);
        let difficulty_ok = self
            .difficulty
            .is_none_or(|difficulty| question.difficulty == difficulty);
        let search_ok = self.search.as_deref().is_none_or(|needle| {
            question
                .content
                .to_lowercase()
                .contains(&needle.to_lowercase())
        });
        domain_ok && difficulty_ok && search_ok
    }
}
