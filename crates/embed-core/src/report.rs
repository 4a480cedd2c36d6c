//! Run report and the status line shown to the user.

use serde::Serialize;

/// Outcome counters of one embedding pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmbedReport {
    /// File-backed asset entries (precompositions excluded).
    pub total: usize,

    /// Entries embedded during this pass.
    pub embedded: usize,

    /// Entries that already held a data URI and were left as is.
    pub already_embedded: usize,

    /// Ids of entries with no resolvable file.
    pub unresolved: Vec<String>,

    /// Image layers whose anchor was recentered.
    pub centered_layers: usize,
}

impl EmbedReport {
    /// Entries that end the pass inline.
    pub fn satisfied(&self) -> usize {
        self.embedded + self.already_embedded
    }

    /// Whether every file-backed entry is now inline.
    pub fn all_embedded(&self) -> bool {
        self.satisfied() == self.total
    }

    pub fn status(&self) -> StatusLine {
        if self.all_embedded() {
            StatusLine::success(self.satisfied(), self.total)
        } else {
            StatusLine::error(self.satisfied(), self.total)
        }
    }
}

/// Display tone of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Accent,
    Alert,
}

/// Single-line result summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    pub tone: StatusTone,
    pub text: String,
}

impl StatusLine {
    pub fn success(embedded: usize, total: usize) -> Self {
        Self {
            tone: StatusTone::Accent,
            text: format!("Success: {embedded} of {total} assets embedded"),
        }
    }

    pub fn error(embedded: usize, total: usize) -> Self {
        Self {
            tone: StatusTone::Alert,
            text: format!("Error: {embedded} of {total} assets embedded"),
        }
    }

    pub fn failure(message: impl std::fmt::Display) -> Self {
        Self {
            tone: StatusTone::Alert,
            text: format!("Error: {message}"),
        }
    }
}

impl std::fmt::Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
