//! Link management commands
//!
//! The dashboard form issues one mutation at a time and blocks on the
//! result; every command here is a thin logged wrapper over the link
//! lifecycle service. A failed store call surfaces once; nothing retries.

use std::time::Instant;

use heypage_domain::{Link, LinkDraft, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// The dashboard's partitioned link lists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardLinks {
    pub active: Vec<Link>,
    pub archived: Vec<Link>,
}

/// Load the session owner's links from the store, replacing the local set.
///
/// Called once when the dashboard opens; position assignment depends on
/// the local set being current.
pub async fn load_links(ctx: &AppContext) -> Result<Vec<Link>> {
    let command_name = "links::load_links";
    let start = Instant::now();

    let result = ctx.link_service.load().await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// The dashboard's active/archived partition of the local set.
pub fn dashboard_links(ctx: &AppContext) -> DashboardLinks {
    DashboardLinks {
        active: ctx.link_service.active_links(),
        archived: ctx.link_service.archived_links(),
    }
}

/// Create a new link from the management form.
pub async fn create_link(ctx: &AppContext, draft: LinkDraft) -> Result<Link> {
    let command_name = "links::create_link";
    let start = Instant::now();

    info!(command = command_name, "Executing create_link");
    let result = ctx.link_service.create(draft).await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Edit an existing link in place.
pub async fn update_link(ctx: &AppContext, id: &str, draft: LinkDraft) -> Result<Link> {
    let command_name = "links::update_link";
    let start = Instant::now();

    info!(command = command_name, link_id = %id, "Executing update_link");
    let result = ctx.link_service.update(id, draft).await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Archive a link, hiding it from the public pages.
pub async fn archive_link(ctx: &AppContext, id: &str) -> Result<()> {
    let command_name = "links::archive_link";
    let start = Instant::now();

    info!(command = command_name, link_id = %id, "Executing archive_link");
    let result = ctx.link_service.archive(id).await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Restore an archived link to the public pages.
pub async fn unarchive_link(ctx: &AppContext, id: &str) -> Result<()> {
    let command_name = "links::unarchive_link";
    let start = Instant::now();

    info!(command = command_name, link_id = %id, "Executing unarchive_link");
    let result = ctx.link_service.unarchive(id).await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Permanently delete a link.
pub async fn delete_link(ctx: &AppContext, id: &str) -> Result<()> {
    let command_name = "links::delete_link";
    let start = Instant::now();

    info!(command = command_name, link_id = %id, "Executing delete_link");
    let result = ctx.link_service.delete(id).await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}
