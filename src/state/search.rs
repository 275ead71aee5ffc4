// src/state/search.rs

/// Per-mark visual treatment driven by the search overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// No search active.
    Normal,
    /// Name contains the applied term: outlined, full opacity.
    Match,
    /// Name misses the applied term: dimmed.
    Dimmed,
}

/// Free-text name search. Unlike the dropdown filters this never
/// narrows the working set; it only re-emphasizes marks that are
/// already on screen. Enter applies, Escape clears.
#[derive(Debug, Default)]
pub struct SearchState {
    applied: Option<String>,
}

impl SearchState {
    /// Apply a term as a case-insensitive substring match. An empty
    /// term still counts as applied and matches every mark.
    pub fn apply(&mut self, term: &str) {
        self.applied = Some(term.to_lowercase());
    }

    pub fn clear(&mut self) {
        self.applied = None;
    }

    pub fn is_active(&self) -> bool {
        self.applied.is_some()
    }

    pub fn emphasis(&self, name: &str) -> Emphasis {
        match &self.applied {
            None => Emphasis::Normal,
            Some(term) => {
                if name.to_lowercase().contains(term.as_str()) {
                    Emphasis::Match
                } else {
                    Emphasis::Dimmed
                }
            }
        }
    }
}
