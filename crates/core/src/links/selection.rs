//! Expanded-category selection state for the public profile page
//!
//! At most one category's link list is expanded at a time. This is pure
//! UI state: whenever the underlying link set changes, the selection must
//! be re-derived against the fresh grouped output so it never references
//! a category without active links.

use super::grouping::CategoryGroup;

/// Single-expansion toggle over the profile page's category sections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySelection {
    expanded: Option<String>,
}

impl CategorySelection {
    /// Selection with nothing expanded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently expanded category, if any.
    #[must_use]
    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    /// Expand `category`, or collapse it if it is already the expanded one.
    pub fn toggle(&mut self, category: &str) {
        if self.expanded.as_deref() == Some(category) {
            self.expanded = None;
        } else {
            self.expanded = Some(category.to_string());
        }
    }

    /// Collapse whatever is expanded.
    pub fn clear(&mut self) {
        self.expanded = None;
    }

    /// Re-derive against freshly grouped sections: a selection naming a
    /// category that no longer has a section is cleared.
    pub fn revalidate(&mut self, sections: &[CategoryGroup]) {
        if let Some(expanded) = &self.expanded {
            if !sections.iter().any(|g| g.category == *expanded) {
                self.expanded = None;
            }
        }
    }
}
