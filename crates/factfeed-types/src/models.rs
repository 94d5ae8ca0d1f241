use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::category::CategoryTable;

/// Identifier assigned by the remote store on insert.
pub type FactId = i64;

/// Maximum fact text length, counted in Unicode scalar values.
pub const MAX_TEXT_LEN: usize = 1000;

/// A fact row as the remote store returns it. The vote counters keep their
/// camelCase wire names; everything else maps one-to-one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub id: FactId,
    pub created_at: DateTime<Utc>,
    pub text: String,
    pub source: String,
    pub category: String,
    #[serde(rename = "votesInteresting")]
    pub votes_interesting: u32,
    #[serde(rename = "votesMindblowing")]
    pub votes_mindblowing: u32,
    #[serde(rename = "votesFalse")]
    pub votes_false: u32,
}

impl Fact {
    /// A fact is disputed when the false-votes outnumber the combined
    /// positive votes. Derived on demand, never stored.
    pub fn is_disputed(&self) -> bool {
        (u64::from(self.votes_interesting) + u64::from(self.votes_mindblowing))
            < u64::from(self.votes_false)
    }

    pub fn votes(&self, kind: VoteKind) -> u32 {
        match kind {
            VoteKind::Interesting => self.votes_interesting,
            VoteKind::Mindblowing => self.votes_mindblowing,
            VoteKind::False => self.votes_false,
        }
    }
}

/// One of the three vote counters on a fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteKind {
    Interesting,
    Mindblowing,
    False,
}

impl VoteKind {
    pub const ALL: [VoteKind; 3] = [VoteKind::Interesting, VoteKind::Mindblowing, VoteKind::False];

    /// Column name on the remote `facts` table.
    pub fn column(self) -> &'static str {
        match self {
            VoteKind::Interesting => "votesInteresting",
            VoteKind::Mindblowing => "votesMindblowing",
            VoteKind::False => "votesFalse",
        }
    }
}

impl std::fmt::Display for VoteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            VoteKind::Interesting => "interesting",
            VoteKind::Mindblowing => "mindblowing",
            VoteKind::False => "false",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for VoteKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "interesting" => Ok(VoteKind::Interesting),
            "mindblowing" => Ok(VoteKind::Mindblowing),
            "false" => Ok(VoteKind::False),
            other => Err(format!(
                "unknown vote kind `{other}` (expected interesting, mindblowing, or false)"
            )),
        }
    }
}

/// Submission draft. Serializes to exactly the insert body the store
/// expects; the counters default to zero server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFact {
    pub text: String,
    pub source: String,
    pub category: String,
}

/// Why a submission draft was rejected before any remote call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidFact {
    #[error("fact text is empty")]
    EmptyText,
    #[error("fact text exceeds {MAX_TEXT_LEN} characters")]
    TextTooLong,
    #[error("source `{0}` is not an absolute http(s) URL")]
    BadSource(String),
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
}

impl NewFact {
    /// Checks the submission preconditions: non-empty text within the
    /// length cap, an absolute http(s) source URL, and a category from the
    /// injected table. None of this is re-validated after insertion.
    pub fn validate(&self, categories: &CategoryTable) -> Result<(), InvalidFact> {
        if self.text.is_empty() {
            return Err(InvalidFact::EmptyText);
        }
        if self.text.chars().count() > MAX_TEXT_LEN {
            return Err(InvalidFact::TextTooLong);
        }
        match Url::parse(&self.source) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => return Err(InvalidFact::BadSource(self.source.clone())),
        }
        if !categories.contains(&self.category) {
            return Err(InvalidFact::UnknownCategory(self.category.clone()));
        }
        Ok(())
    }
}
