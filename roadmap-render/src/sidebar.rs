//! Sidebar grouping and active-entry detection.
//!
//! The descriptor's sidebar is a keyed mapping whose first non-reserved
//! group is the finished one and whose later groups are still being
//! written. Grouping turns that positional convention into an explicit
//! [`GroupStatus`] on each group so nothing downstream depends on
//! iteration order.

use roadmap_core::descriptor::{PageRef, Sidebar, is_reserved_group};
use serde::Serialize;

/// Suffix under which a page's summary sub-page lives. A sidebar entry
/// pointing at `<current>/summary` is highlighted along with the current
/// page itself.
pub const SUMMARY_SUFFIX: &str = "/summary";

/// Publication status of a sidebar group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupStatus {
    /// The complete group shown first.
    Primary,
    /// A group still being written; rendered with an "In Progress" badge.
    InProgress,
}

impl GroupStatus {
    /// Returns `true` for [`GroupStatus::InProgress`].
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }
}

/// A navigable group of sidebar entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    /// Group heading.
    pub title: String,
    /// Whether the group is primary or in progress.
    pub status: GroupStatus,
    /// Entries in descriptor order.
    pub entries: Vec<SidebarEntry>,
}

/// A single sidebar link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarEntry {
    /// Link text.
    pub title: String,
    /// Link target.
    pub url: String,
    /// Whether the entry is highlighted as the page being viewed.
    pub active: bool,
}

/// Build the rendered sidebar for `current`.
///
/// Reserved groups (keys starting with `_`) are skipped. The first
/// remaining group is [`GroupStatus::Primary`]; every later one is
/// [`GroupStatus::InProgress`]. With no current page no entry is active.
#[must_use]
pub fn build_sidebar(sidebar: &Sidebar, current: Option<&PageRef>) -> Vec<SidebarGroup> {
    let current_url = current.map(|page| page.url.as_str());
    let groups: Vec<SidebarGroup> = sidebar
        .iter()
        .filter(|(title, _)| !is_reserved_group(title))
        .enumerate()
        .map(|(index, (title, pages))| SidebarGroup {
            title: title.clone(),
            status: if index == 0 {
                GroupStatus::Primary
            } else {
                GroupStatus::InProgress
            },
            entries: pages
                .iter()
                .map(|page| SidebarEntry {
                    title: page.title.clone(),
                    url: page.url.clone(),
                    active: current_url
                        .is_some_and(|current_url| is_active_entry(&page.url, current_url)),
                })
                .collect(),
        })
        .collect();

    tracing::debug!(
        groups = groups.len(),
        current = current_url.unwrap_or_default(),
        "built sidebar"
    );

    groups
}

/// Returns `true` if a sidebar entry at `entry_url` should be highlighted
/// while `current_url` is being viewed.
#[must_use]
pub fn is_active_entry(entry_url: &str, current_url: &str) -> bool {
    entry_url == current_url
        || entry_url
            .strip_prefix(current_url)
            .is_some_and(|rest| rest == SUMMARY_SUFFIX)
}
