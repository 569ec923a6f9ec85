//! Expand/collapse state for the section card.
//!
//! DESIGN
//! ======
//! A non-collapsible card ignores toggles and always shows its content, even
//! when constructed with `default_expanded = false`.

#[cfg(test)]
#[path = "expand_test.rs"]
mod expand_test;

/// Local state owned by one section card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpandState {
    expanded: bool,
    collapsible: bool,
}

impl ExpandState {
    pub fn new(collapsible: bool, default_expanded: bool) -> Self {
        Self { expanded: default_expanded, collapsible }
    }

    pub fn is_collapsible(self) -> bool {
        self.collapsible
    }

    pub fn is_expanded(self) -> bool {
        self.expanded
    }

    /// Flip the expanded flag. Returns whether anything changed.
    pub fn toggle(&mut self) -> bool {
        if !self.collapsible {
            return false;
        }
        self.expanded = !self.expanded;
        true
    }

    /// Whether the content region is mounted.
    pub fn content_visible(self) -> bool {
        !self.collapsible || self.expanded
    }

    /// Classes for the `▼` affordance; rotated while expanded.
    pub fn indicator_class(self) -> &'static str {
        if self.expanded {
            "transform text-muted-foreground transition-transform rotate-180"
        } else {
            "transform text-muted-foreground transition-transform"
        }
    }
}

impl Default for ExpandState {
    fn default() -> Self {
        Self::new(false, true)
    }
}
