//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

/// Categories accepted by the link management form, in form order.
pub const LINK_CATEGORIES: [&str; 7] = [
    "Featured",
    "Big Projects",
    "Hobby",
    "Development Stage",
    "Professional",
    "Social Media",
    "Other",
];

/// Fixed section order for the public profile page. Categories read back
/// from the store that are missing from this list do not render there.
pub const PROFILE_CATEGORY_ORDER: [&str; 7] = [
    "Featured",
    "Big Projects",
    "Professional",
    "Development Stage",
    "Hobby",
    "Social Media",
    "Other",
];

/// Category rendered as the hero section on the about page.
pub const FEATURED_CATEGORY: &str = "Featured";

/// Category preselected by the management form.
pub const DEFAULT_CATEGORY: &str = "Featured";

/// Path segment appended to a profile page address for the about variant.
pub const ABOUT_PATH_SEGMENT: &str = "about";
