//! Public page assembly
//!
//! Read-only views computed from the resolved profile and its active
//! links. A handle nobody owns resolves to `NotFound`, which the shell
//! renders as its standard not-found page rather than an error.

use std::time::Instant;

use heypage_core::{about_sections, profile_sections, CategoryGroup};
use heypage_domain::utils::host::display_host;
use heypage_domain::{about_url, profile_url, Link, Profile, Result};
use serde::{Deserialize, Serialize};

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// One link as rendered on the public pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkCard {
    pub id: String,
    pub title: String,
    pub url: String,
    /// Hostname shown as the secondary line; absent when the stored URL
    /// no longer yields one
    pub host: Option<String>,
    pub notes: String,
    pub category: String,
}

impl From<Link> for LinkCard {
    fn from(link: Link) -> Self {
        let host = display_host(&link.url);
        Self {
            id: link.id,
            title: link.title,
            url: link.url,
            host,
            notes: link.notes,
            category: link.category,
        }
    }
}

/// One category section with its ordered link cards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionView {
    pub category: String,
    pub link_count: usize,
    pub links: Vec<LinkCard>,
}

impl From<CategoryGroup> for SectionView {
    fn from(group: CategoryGroup) -> Self {
        Self {
            category: group.category,
            link_count: group.links.len(),
            links: group.links.into_iter().map(LinkCard::from).collect(),
        }
    }
}

/// The public profile page: collapsible category sections in fixed order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilePage {
    pub profile: Profile,
    pub page_url: String,
    pub about_url: String,
    pub sections: Vec<SectionView>,
}

/// The about page: Featured hero plus every remaining category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutPage {
    pub profile: Profile,
    pub page_url: String,
    /// Count of publicly visible links, shown in the about card
    pub link_count: usize,
    pub featured: Vec<LinkCard>,
    pub sections: Vec<SectionView>,
}

/// Assemble the public profile page for a handle.
///
/// # Errors
/// `NotFound` for an unknown handle, `Integrity` when the handle is
/// ambiguous, or any store error.
pub async fn public_profile_page(ctx: &AppContext, username: &str) -> Result<ProfilePage> {
    let command_name = "public::public_profile_page";
    let start = Instant::now();

    let result = assemble_profile_page(ctx, username).await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Assemble the about page for a handle.
///
/// # Errors
/// Same failure modes as [`public_profile_page`].
pub async fn public_about_page(ctx: &AppContext, username: &str) -> Result<AboutPage> {
    let command_name = "public::public_about_page";
    let start = Instant::now();

    let result = assemble_about_page(ctx, username).await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

async fn assemble_profile_page(ctx: &AppContext, username: &str) -> Result<ProfilePage> {
    let profile = ctx.resolver.resolve(username).await?;
    let links = ctx.resolver.public_links(&profile).await?;

    let sections =
        profile_sections(&links).into_iter().map(SectionView::from).collect();

    let site = &ctx.config.site.base_url;
    Ok(ProfilePage {
        page_url: profile_url(site, &profile.username),
        about_url: about_url(site, &profile.username),
        profile,
        sections,
    })
}

async fn assemble_about_page(ctx: &AppContext, username: &str) -> Result<AboutPage> {
    let profile = ctx.resolver.resolve(username).await?;
    let links = ctx.resolver.public_links(&profile).await?;

    let grouped = about_sections(&links);
    let featured = grouped.featured.into_iter().map(LinkCard::from).collect();
    let sections = grouped.sections.into_iter().map(SectionView::from).collect();

    let site = &ctx.config.site.base_url;
    Ok(AboutPage {
        page_url: about_url(site, &profile.username),
        link_count: links.len(),
        profile,
        featured,
        sections,
    })
}
