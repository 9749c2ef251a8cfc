use serde::{Deserialize, Serialize};

/// Rule deciding whether two URLs refer to the same bookmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlMatchMode {
    /// Byte-for-byte equality.
    Exact,
    /// Equality after lower-casing both sides.
    #[default]
    CaseInsensitive,
    /// Either lower-cased URL contains the other. Matches `a.com` against
    /// `aa.com`, so only choose it when fuzzy lookups are wanted.
    Substring,
}

impl UrlMatchMode {
    /// Returns whether `candidate` matches the already-stored `stored` URL.
    ///
    /// The candidate is trimmed first. Empty strings never match.
    pub fn matches(&self, stored: &str, candidate: &str) -> bool {
        let candidate = candidate.trim();
        if candidate.is_empty() || stored.is_empty() {
            return false;
        }
        match self {
            UrlMatchMode::Exact => stored == candidate,
            UrlMatchMode::CaseInsensitive => stored.to_lowercase() == candidate.to_lowercase(),
            UrlMatchMode::Substring => {
                let stored = stored.to_lowercase();
                let candidate = candidate.to_lowercase();
                stored.contains(&candidate) || candidate.contains(&stored)
            }
        }
    }
}

impl std::str::FromStr for UrlMatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "exact" => Ok(UrlMatchMode::Exact),
            "case_insensitive" | "insensitive" => Ok(UrlMatchMode::CaseInsensitive),
            "substring" => Ok(UrlMatchMode::Substring),
            other => Err(format!("unknown match mode: {}", other)),
        }
    }
}

/// Whether `add` refuses URLs already present in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Every add appends a new record.
    Allow,
    /// Skip the append when an existing URL matches under `match_mode`.
    Reject { match_mode: UrlMatchMode },
}

impl Default for DuplicatePolicy {
    fn default() -> Self {
        DuplicatePolicy::Reject {
            match_mode: UrlMatchMode::CaseInsensitive,
        }
    }
}

impl DuplicatePolicy {
    /// Returns the match mode to check with, or `None` when duplicates are allowed.
    pub fn match_mode(&self) -> Option<UrlMatchMode> {
        match self {
            DuplicatePolicy::Allow => None,
            DuplicatePolicy::Reject { match_mode } => Some(*match_mode),
        }
    }
}
