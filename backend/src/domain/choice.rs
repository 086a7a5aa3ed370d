//! Closed sets of lowercase wire names shared by the record kinds.
//!
//! The console's select inputs and the record store both speak the lowercase
//! names (`frontend`, `hard`, `pending`, ...). Each enum exposes `as_str`,
//! `Display` and `FromStr` over exactly those names.

use serde::{Deserialize, Serialize};

/// Error returned when a wire name is not part of a closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {input}")]
pub struct ParseChoiceError {
    /// Which set was being parsed, e.g. `"domain"`.
    pub kind: &'static str,
    /// The unrecognised input value.
    pub input: String,
}

impl ParseChoiceError {
    fn new(kind: &'static str, input: &str) -> Self {
        Self {
            kind,
            input: input.to_owned(),
        }
    }
}

/// Professional area an interview or question belongs to.
///
/// # Examples
///
/// ```
/// # use interview_console::domain::SkillDomain;
/// assert_eq!(SkillDomain::default(), SkillDomain::Frontend);
/// assert_eq!("hr".parse::<SkillDomain>(), Ok(SkillDomain::Hr));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SkillDomain {
    /// Frontend engineering. Default selection in the draft forms.
    #[default]
    Frontend,
    /// Backend engineering.
    Backend,
    /// Finance.
    Finance,
    /// Human resources.
    Hr,
}

impl SkillDomain {
    /// Returns the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Finance => "finance",
            Self::Hr => "hr",
        }
    }
}

impl std::fmt::Display for SkillDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SkillDomain {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frontend" => Ok(Self::Frontend),
            "backend" => Ok(Self::Backend),
            "finance" => Ok(Self::Finance),
            "hr" => Ok(Self::Hr),
            _ => Err(ParseChoiceError::new("domain", s)),
        }
    }
}

/// Question difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Warm-up level.
    Easy,
    /// Default selection in the question draft form.
    #[default]
    Medium,
    /// Senior level.
    Hard,
}

impl Difficulty {
    /// Returns the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ParseChoiceError::new("difficulty", s)),
        }
    }
}

/// Interview status.
///
/// The store assigns `pending` on insert; nothing in the console changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    /// Scheduled and not yet held.
    #[default]
    Pending,
    /// Held.
    Completed,
    /// Called off.
    Cancelled,
}

impl InterviewStatus {
    /// Returns the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for InterviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InterviewStatus {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseChoiceError::new("status", s)),
        }
    }
}
