//! The roadmap view.
//!
//! Binds one descriptor to its collaborators (content resolver, markdown
//! renderer, site configuration) and owns the mobile menu state for the
//! lifetime of the view.

use roadmap_core::descriptor::{PageRef, RoadmapDescriptor};
use roadmap_core::site::SiteConfig;

use crate::content::{Content, ContentResolver, normalize_content_path};
use crate::error::RenderError;
use crate::html::{PageParts, render_page};
use crate::markdown::MarkdownRenderer;
use crate::menu::MenuState;
use crate::share::{ShareLink, ShareTarget, share_links};
use crate::sidebar::{SidebarGroup, build_sidebar};

/// A single roadmap page view.
pub struct RoadmapView<'a> {
    descriptor: &'a RoadmapDescriptor,
    resolver: &'a dyn ContentResolver,
    renderer: &'a dyn MarkdownRenderer,
    site: &'a SiteConfig,
    menu: MenuState,
}

impl<'a> RoadmapView<'a> {
    /// Creates a view with the menu closed.
    #[must_use]
    pub fn new(
        descriptor: &'a RoadmapDescriptor,
        resolver: &'a dyn ContentResolver,
        renderer: &'a dyn MarkdownRenderer,
        site: &'a SiteConfig,
    ) -> Self {
        Self {
            descriptor,
            resolver,
            renderer,
            site,
            menu: MenuState::default(),
        }
    }

    /// The descriptor being rendered.
    #[must_use]
    pub const fn descriptor(&self) -> &'a RoadmapDescriptor {
        self.descriptor
    }

    /// Current mobile menu state.
    #[must_use]
    pub const fn menu(&self) -> MenuState {
        self.menu
    }

    /// Flip the mobile menu and return the new state.
    pub const fn toggle_menu(&mut self) -> MenuState {
        self.menu.toggle();
        self.menu
    }

    /// The page being viewed.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::MalformedDescriptor` if the descriptor has no
    /// current page.
    pub fn current_page(&self) -> Result<&'a PageRef, RenderError> {
        self.descriptor
            .page
            .as_ref()
            .ok_or(RenderError::MalformedDescriptor { field: "page" })
    }

    /// Normalized content path of the page being viewed.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::MalformedDescriptor` if the current page or its
    /// path is missing.
    pub fn content_path(&self) -> Result<&'a str, RenderError> {
        self.current_page()?
            .path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(normalize_content_path)
            .ok_or(RenderError::MalformedDescriptor { field: "page.path" })
    }

    /// Grouped sidebar with the current page highlighted.
    ///
    /// Without a current page nothing is highlighted.
    #[must_use]
    pub fn sidebar(&self) -> Vec<SidebarGroup> {
        build_sidebar(&self.descriptor.sidebar, self.descriptor.page.as_ref())
    }

    /// Header share links for this roadmap.
    #[must_use]
    pub fn share_links(&self) -> Vec<ShareLink> {
        share_links(
            self.site,
            ShareTarget {
                text: &self.descriptor.title,
                url: &self.descriptor.url,
            },
        )
    }

    /// Resolve the current page's content.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::MalformedDescriptor` if the page or path is
    /// missing, or whatever the resolver reports for an unknown path.
    pub fn resolve_content(&self) -> Result<Content, RenderError> {
        let path = self.content_path()?;
        tracing::debug!(path, "resolving content");
        self.resolver.resolve(path)
    }

    /// Render the full page fragment.
    ///
    /// Content is resolved before any HTML is assembled, so a failure
    /// produces no output.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::MalformedDescriptor` for a missing page or path
    /// and `RenderError::ContentNotFound` when the content does not exist.
    pub fn render(&self) -> Result<String, RenderError> {
        let page = self.current_page()?;
        let content = self.resolve_content()?;
        let content_html = self.renderer.render(&content);

        let groups = self.sidebar();
        let links = self.share_links();

        let html = render_page(&PageParts {
            title: &self.descriptor.title,
            author: &self.descriptor.author,
            contributors_count: self.descriptor.contributors_count,
            contributors_url: self.descriptor.contributors_url.as_deref(),
            share_links: &links,
            groups: &groups,
            menu: self.menu,
            page_title: &page.title,
            content_html: &content_html,
        });

        tracing::info!(
            roadmap = %self.descriptor.title,
            page = %page.url,
            bytes = html.len(),
            "rendered roadmap page"
        );

        Ok(html)
    }
}

impl std::fmt::Debug for RoadmapView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoadmapView")
            .field("title", &self.descriptor.title)
            .field("page", &self.descriptor.page)
            .field("menu", &self.menu)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentRegistry;
    use crate::markdown::CmarkRenderer;
    use roadmap_core::descriptor::{Author, Sidebar};
    use std::cell::RefCell;

    /// Records every path it is asked for and resolves all of them.
    #[derive(Default)]
    struct RecordingResolver {
        requests: RefCell<Vec<String>>,
    }

    impl ContentResolver for RecordingResolver {
        fn resolve(&self, path: &str) -> Result<Content, RenderError> {
            self.requests.borrow_mut().push(path.to_string());
            Ok(Content::new(path, "# Recorded"))
        }
    }

    fn descriptor() -> RoadmapDescriptor {
        let mut sidebar = Sidebar::new();
        sidebar.insert("_meta".to_string(), vec![PageRef::new("/meta", "Meta")]);
        sidebar.insert(
            "Frontend".to_string(),
            vec![PageRef::new("/frontend", "Frontend")],
        );
        sidebar.insert(
            "Backend".to_string(),
            vec![PageRef::new("/backend", "Backend")],
        );
        RoadmapDescriptor {
            title: "Frontend Roadmap".to_string(),
            url: "https://roadmap.sh/frontend".to_string(),
            contributors_url: Some("/contributors".to_string()),
            contributors_count: 2,
            author: Author {
                name: "Kamran".to_string(),
                url: "https://example.com/kamran".to_string(),
            },
            sidebar,
            page: Some(PageRef::new("/frontend", "Frontend").with_path("/frontend/intro")),
        }
    }

    fn registry() -> ContentRegistry {
        let mut registry = ContentRegistry::new();
        registry.register_static("frontend/intro", "# Intro\n\nWelcome.");
        registry
    }

    #[test]
    fn test_render_full_page() {
        let descriptor = descriptor();
        let registry = registry();
        let renderer = CmarkRenderer::new();
        let site = SiteConfig::default();
        let view = RoadmapView::new(&descriptor, &registry, &renderer, &site);

        let html = view.render().unwrap();
        assert!(html.contains("<h1>Intro</h1>"));
        assert!(html.contains("<p>Welcome.</p>"));
        assert!(html.contains(r#"<h1 class="page-title">Frontend</h1>"#));
        assert!(html.contains("2 others"));
        assert!(html.contains(site.repo_url()));
        assert!(!html.contains("/meta"));
    }

    #[test]
    fn test_resolver_receives_normalized_path() {
        let descriptor = descriptor();
        let resolver = RecordingResolver::default();
        let renderer = CmarkRenderer::new();
        let site = SiteConfig::default();
        let view = RoadmapView::new(&descriptor, &resolver, &renderer, &site);

        view.render().unwrap();
        assert_eq!(*resolver.requests.borrow(), vec!["frontend/intro"]);
    }

    #[test]
    fn test_missing_path_is_malformed_and_resolver_untouched() {
        let mut descriptor = descriptor();
        descriptor.page = Some(PageRef::new("/frontend", "Frontend"));
        let resolver = RecordingResolver::default();
        let renderer = CmarkRenderer::new();
        let site = SiteConfig::default();
        let view = RoadmapView::new(&descriptor, &resolver, &renderer, &site);

        let err = view.render().unwrap_err();
        assert!(matches!(
            err,
            RenderError::MalformedDescriptor { field: "page.path" }
        ));
        assert!(resolver.requests.borrow().is_empty());
    }

    #[test]
    fn test_missing_page_is_malformed() {
        let mut descriptor = descriptor();
        descriptor.page = None;
        let registry = registry();
        let renderer = CmarkRenderer::new();
        let site = SiteConfig::default();
        let view = RoadmapView::new(&descriptor, &registry, &renderer, &site);

        assert!(matches!(
            view.render(),
            Err(RenderError::MalformedDescriptor { field: "page" })
        ));
        // Sidebar still computes with nothing highlighted.
        assert!(view.sidebar().iter().flat_map(|g| &g.entries).all(|e| !e.active));
    }

    #[test]
    fn test_content_not_found() {
        let mut descriptor = descriptor();
        descriptor.page = Some(PageRef::new("/x", "X").with_path("/nowhere"));
        let registry = registry();
        let renderer = CmarkRenderer::new();
        let site = SiteConfig::default();
        let view = RoadmapView::new(&descriptor, &registry, &renderer, &site);

        match view.render() {
            Err(RenderError::ContentNotFound { path }) => assert_eq!(path, "nowhere"),
            other => panic!("expected ContentNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_bare_descriptor_degrades_gracefully() {
        let descriptor = RoadmapDescriptor {
            title: "Bare".to_string(),
            page: Some(PageRef::new("/bare", "Bare").with_path("/frontend/intro")),
            ..RoadmapDescriptor::default()
        };
        let registry = registry();
        let renderer = CmarkRenderer::new();
        let site = SiteConfig::default();
        let view = RoadmapView::new(&descriptor, &registry, &renderer, &site);

        let html = view.render().unwrap();
        assert!(html.contains("<h3>Bare</h3>"));
        assert!(!html.contains("links-group"));
    }

    #[test]
    fn test_sidebar_without_current_page_has_no_active_entry() {
        let mut sidebar = Sidebar::new();
        sidebar.insert(
            "Frontend".to_string(),
            vec![PageRef::new("/summary", "Summary"), PageRef::new("", "Blank")],
        );
        let descriptor = RoadmapDescriptor {
            sidebar,
            ..RoadmapDescriptor::default()
        };
        let registry = registry();
        let renderer = CmarkRenderer::new();
        let site = SiteConfig::default();
        let view = RoadmapView::new(&descriptor, &registry, &renderer, &site);

        let groups = view.sidebar();
        assert_eq!(groups.len(), 1);
        assert!(groups[0].entries.iter().all(|e| !e.active));
    }

    #[test]
    fn test_toggle_menu_reflected_in_output() {
        let descriptor = descriptor();
        let registry = registry();
        let renderer = CmarkRenderer::new();
        let site = SiteConfig::default();
        let mut view = RoadmapView::new(&descriptor, &registry, &renderer, &site);

        assert_eq!(view.menu(), MenuState::Closed);
        assert!(!view.render().unwrap().contains("mobile-sidebar-wrap visible"));

        assert_eq!(view.toggle_menu(), MenuState::Open);
        assert!(view.render().unwrap().contains("mobile-sidebar-wrap visible"));

        assert_eq!(view.toggle_menu(), MenuState::Closed);
    }

    #[test]
    fn test_share_links_use_descriptor() {
        let descriptor = descriptor();
        let registry = registry();
        let renderer = CmarkRenderer::new();
        let site = SiteConfig::default();
        let view = RoadmapView::new(&descriptor, &registry, &renderer, &site);

        let links = view.share_links();
        assert_eq!(links.len(), 4);
        assert!(links[2].href.contains("text=Frontend%20Roadmap"));
    }
}
