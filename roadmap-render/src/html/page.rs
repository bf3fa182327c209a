//! Page layout.
//!
//! The layout is fixed: header with attribution and share bar, a mobile
//! navigation header holding a toggleable copy of the sidebar, then the
//! desktop sidebar beside the content panel. Class names are stable so
//! site stylesheets can target them.

use roadmap_core::descriptor::Author;

use crate::html::escape::{escape_attr, escape_text};
use crate::menu::MenuState;
use crate::share::ShareLink;
use crate::sidebar::SidebarGroup;

/// Everything a page render needs, already computed.
#[derive(Debug, Clone)]
pub struct PageParts<'a> {
    /// Roadmap title.
    pub title: &'a str,
    /// Roadmap author.
    pub author: &'a Author,
    /// Number of contributors.
    pub contributors_count: u32,
    /// Link to the contributor list.
    pub contributors_url: Option<&'a str>,
    /// Header share links.
    pub share_links: &'a [ShareLink],
    /// Grouped sidebar.
    pub groups: &'a [SidebarGroup],
    /// Mobile sidebar visibility.
    pub menu: MenuState,
    /// Title of the page being viewed.
    pub page_title: &'a str,
    /// Rendered markdown for the page being viewed.
    pub content_html: &'a str,
}

/// Render the page fragment.
#[must_use]
pub fn render_page(parts: &PageParts<'_>) -> String {
    let mut sections = Vec::new();

    sections.push(r#"<div class="summary-container">"#.to_string());

    // Header
    sections.push(
        r#"<header class="page-header border-top border-bottom text-center text-md-left">"#
            .to_string(),
    );
    sections.push(
        r#"<div class="container d-flex align-items-center flex-column flex-md-row">"#.to_string(),
    );
    sections.push(r#"<div class="roadmap-meta">"#.to_string());
    sections.push(format!("<h3>{}</h3>", escape_text(parts.title)));
    sections.push(attribution(parts));
    sections.push("</div>".to_string());
    sections.push(r#"<div class="share-roadmap mt-2 mt-md-0">"#.to_string());
    for link in parts.share_links {
        sections.push(format!(
            r#"<a class="share-icon" href="{}" target="_blank" aria-label="{}"><i class="{}"></i></a>"#,
            escape_attr(&link.href),
            link.service.label(),
            link.service.icon_class()
        ));
    }
    sections.push("</div>".to_string());
    sections.push("</div>".to_string());
    sections.push("</header>".to_string());

    // Mobile navigation
    sections.push(r#"<nav class="mobile-nav-header border-bottom d-block d-md-none">"#.to_string());
    sections.push(r#"<div class="container">"#.to_string());
    sections.push(format!(
        r#"<button class="sidebar-button" type="button" aria-expanded="{}"><i class="icon-bars"></i>{}</button>"#,
        parts.menu.is_open(),
        escape_text(parts.page_title)
    ));
    sections.push("</div>".to_string());
    sections.push(if parts.menu.is_open() {
        r#"<div class="mobile-sidebar-wrap visible">"#.to_string()
    } else {
        r#"<div class="mobile-sidebar-wrap">"#.to_string()
    });
    sections.push(r#"<div class="container">"#.to_string());
    sections.push(r#"<div class="mobile-sidebar">"#.to_string());
    push_groups(&mut sections, parts.groups);
    sections.push("</div>".to_string());
    sections.push("</div>".to_string());
    sections.push("</div>".to_string());
    sections.push("</nav>".to_string());

    // Sidebar and content
    sections.push(r#"<main class="summary container">"#.to_string());
    sections.push(r#"<aside class="desktop-sidebar-wrap d-none d-md-block">"#.to_string());
    sections.push(r#"<div class="sidebar">"#.to_string());
    push_groups(&mut sections, parts.groups);
    sections.push("</div>".to_string());
    sections.push("</aside>".to_string());
    sections.push(r#"<article class="page-detail">"#.to_string());
    sections.push(format!(
        r#"<h1 class="page-title">{}</h1>"#,
        escape_text(parts.page_title)
    ));
    sections.push(r#"<div class="md-renderer">"#.to_string());
    sections.push(parts.content_html.trim_end().to_string());
    sections.push("</div>".to_string());
    sections.push("</article>".to_string());
    sections.push("</main>".to_string());

    sections.push("</div>".to_string());

    sections.join("\n")
}

/// Wrap a page fragment in a minimal HTML document.
#[must_use]
pub fn render_document(fragment: &str, title: &str) -> String {
    let mut sections = Vec::new();
    sections.push("<!DOCTYPE html>".to_string());
    sections.push(r#"<html lang="en">"#.to_string());
    sections.push("<head>".to_string());
    sections.push(r#"<meta charset="utf-8">"#.to_string());
    sections.push(
        r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#.to_string(),
    );
    sections.push(format!("<title>{}</title>", escape_text(title)));
    sections.push("</head>".to_string());
    sections.push("<body>".to_string());
    sections.push(fragment.to_string());
    sections.push("</body>".to_string());
    sections.push("</html>".to_string());
    sections.join("\n")
}

/// "Roadmap contributed by <author>" plus the contributor count when more
/// than one person worked on it.
fn attribution(parts: &PageParts<'_>) -> String {
    let mut line = format!(
        r#"<p>Roadmap contributed by <a href="{}" target="_blank">{}</a>"#,
        escape_attr(&parts.author.url),
        escape_text(&parts.author.name)
    );
    if parts.contributors_count > 1 {
        line.push_str(&format!(
            r#" and <a href="{}">{} others</a>"#,
            escape_attr(parts.contributors_url.unwrap_or_default()),
            parts.contributors_count
        ));
    }
    line.push_str("</p>");
    line
}

fn push_groups(sections: &mut Vec<String>, groups: &[SidebarGroup]) {
    for group in groups {
        if group.status.is_in_progress() {
            sections.push(r#"<div class="links-group in-progress">"#.to_string());
            sections.push(format!(
                r#"<h3>{}<span class="badge badge-warning progress-badge">In Progress</span></h3>"#,
                escape_text(&group.title)
            ));
        } else {
            sections.push(r#"<div class="links-group">"#.to_string());
            sections.push(format!("<h3>{}</h3>", escape_text(&group.title)));
        }
        sections.push("<ul>".to_string());
        for entry in &group.entries {
            let class = if entry.active { r#" class="active""# } else { "" };
            sections.push(format!(
                r#"<li{class}><a href="{}"><span class="bullet"></span>{}</a></li>"#,
                escape_attr(&entry.url),
                escape_text(&entry.title)
            ));
        }
        sections.push("</ul>".to_string());
        sections.push("</div>".to_string());
    }
}
