//! Category grouping for the public views
//!
//! Two grouping policies coexist deliberately. The profile page renders a
//! fixed taxonomy and silently drops labels outside it; the about page
//! shows everything, splitting `Featured` out as a hero section. They are
//! separate functions over the same grouped input, not one function with
//! a mode flag, so the drop/no-drop difference stays visible.

use heypage_domain::constants::{FEATURED_CATEGORY, PROFILE_CATEGORY_ORDER};
use heypage_domain::Link;
use serde::{Deserialize, Serialize};

/// One category's ordered links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: String,
    pub links: Vec<Link>,
}

/// Sections of the about page: a `Featured` hero plus every remaining
/// category in first-seen order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutSections {
    pub featured: Vec<Link>,
    pub sections: Vec<CategoryGroup>,
}

/// Group a position-ordered link sequence by category.
///
/// Groups appear in first-seen order; within each group the input's
/// relative order is preserved. Any category string the store hands back
/// gets a group, known or not.
#[must_use]
pub fn group_links(links: &[Link]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for link in links {
        match groups.iter_mut().find(|g| g.category == link.category) {
            Some(group) => group.links.push(link.clone()),
            None => groups.push(CategoryGroup {
                category: link.category.clone(),
                links: vec![link.clone()],
            }),
        }
    }

    groups
}

/// Sections for the public profile page (stability-prioritized policy).
///
/// Categories render in the fixed priority order; categories absent from
/// the link set are omitted, and labels outside the fixed list do not
/// render on this view at all (they still appear on the about page).
#[must_use]
pub fn profile_sections(links: &[Link]) -> Vec<CategoryGroup> {
    let groups = group_links(links);

    PROFILE_CATEGORY_ORDER
        .iter()
        .filter_map(|category| groups.iter().find(|g| g.category == *category).cloned())
        .collect()
}

/// Sections for the about page (completeness-prioritized policy).
///
/// `Featured` links become the hero section; every other category —
/// including labels unknown to the fixed taxonomy — follows in
/// first-seen order. Nothing is dropped.
#[must_use]
pub fn about_sections(links: &[Link]) -> AboutSections {
    let mut featured = Vec::new();
    let mut sections = Vec::new();

    for group in group_links(links) {
        if group.category == FEATURED_CATEGORY {
            featured = group.links;
        } else {
            sections.push(group);
        }
    }

    AboutSections { featured, sections }
}
