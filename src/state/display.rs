//! Loading / empty / error / content branch selection.
//!
//! DESIGN
//! ======
//! Precedence is fixed: loading, then empty, then error, then content. An
//! empty error string counts as no error. The selector only reports which
//! branch to show; it never fails.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

/// Empty-branch text when the caller supplies none.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

/// One of the four mutually exclusive render outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayBranch {
    Loading,
    Empty,
    Error,
    Content,
}

/// Caller-supplied flags read on every render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayInputs {
    pub is_loading: bool,
    pub is_empty: bool,
    pub error: Option<String>,
}

impl DisplayInputs {
    pub fn branch(&self) -> DisplayBranch {
        select_branch(self.is_loading, self.is_empty, self.error.as_deref())
    }
}

/// Pick the active branch; first match wins.
pub fn select_branch(is_loading: bool, is_empty: bool, error: Option<&str>) -> DisplayBranch {
    if is_loading {
        DisplayBranch::Loading
    } else if is_empty {
        DisplayBranch::Empty
    } else if error.is_some_and(|e| !e.is_empty()) {
        DisplayBranch::Error
    } else {
        DisplayBranch::Content
    }
}

/// Text for the default empty branch.
pub fn empty_text(message: Option<&str>) -> &str {
    match message {
        Some(m) if !m.is_empty() => m,
        _ => DEFAULT_EMPTY_MESSAGE,
    }
}
