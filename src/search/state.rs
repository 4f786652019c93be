//! Search navigation state machine
//!
//! A session is either idle (no query, or no matches) or holding a match
//! list with a cursor in `[0, n)`. Every transition is total: the cursor
//! can never point outside the match list.

use crate::core::model::{MatchSpan, SearchReport};
use crate::search::engine::search;

#[derive(Debug, Clone, PartialEq, Eq)]
enum NavState {
    Idle,
    HasMatches {
        matches: Vec<MatchSpan>,
        cursor: usize,
    },
}

/// Stateful search over one haystack: owns the query, the case flag, the
/// match list and the cyclic cursor
#[derive(Debug, Clone)]
pub struct SearchSession {
    query: String,
    case_sensitive: bool,
    state: NavState,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            case_sensitive: false,
            state: NavState::Idle,
        }
    }

    /// Replace the query and recompute matches. The cursor resets to the
    /// first match, or the session goes idle when nothing matches.
    pub fn run_query(&mut self, haystack: &str, query: &str) {
        self.query = query.to_string();
        self.refresh(haystack);
    }

    /// Flip case sensitivity and recompute against the current query
    pub fn set_case_sensitive(&mut self, haystack: &str, case_sensitive: bool) {
        self.case_sensitive = case_sensitive;
        self.refresh(haystack);
    }

    fn refresh(&mut self, haystack: &str) {
        let matches = search(haystack, &self.query, self.case_sensitive);
        self.state = if matches.is_empty() {
            NavState::Idle
        } else {
            NavState::HasMatches { matches, cursor: 0 }
        };
    }

    /// Advance to the next match, wrapping around. No-op when idle.
    pub fn next(&mut self) {
        if let NavState::HasMatches { matches, cursor } = &mut self.state {
            *cursor = (*cursor + 1) % matches.len();
        }
    }

    /// Step back to the previous match, wrapping around. No-op when idle.
    pub fn previous(&mut self) {
        if let NavState::HasMatches { matches, cursor } = &mut self.state {
            *cursor = (*cursor + matches.len() - 1) % matches.len();
        }
    }

    /// Drop the query and all matches, returning to idle
    pub fn clear(&mut self) {
        self.query.clear();
        self.state = NavState::Idle;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, NavState::Idle)
    }

    pub fn matches(&self) -> &[MatchSpan] {
        match &self.state {
            NavState::Idle => &[],
            NavState::HasMatches { matches, .. } => matches,
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        match &self.state {
            NavState::Idle => None,
            NavState::HasMatches { cursor, .. } => Some(*cursor),
        }
    }

    /// Snapshot of the session for rendering
    pub fn report(&self) -> SearchReport {
        SearchReport::new(
            self.query.clone(),
            self.case_sensitive,
            self.matches().to_vec(),
            self.cursor(),
        )
    }
}
