// Page navigation - pure logic, no Tauri imports allowed.
// The navigator owns the registry and the active-page state and drives the UI
// only through the `ShellSurface` capability, so it can be unit tested.

use std::collections::VecDeque;
use thiserror::Error;

use crate::modules::fragment::token_from_hash;
use crate::modules::registry::{MenuItem, PageEntry, PageRegistry, Registration, RenderFn};
use crate::modules::sidebar::{SidebarVisibility, NARROW_VIEWPORT_MAX};

const MAX_DIAGNOSTICS: usize = 25;

/// Page shown at startup when the fragment names nothing registered.
pub const DEFAULT_PAGE: &str = "home";

/// Navigation target that is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Page not found: {id}")]
pub struct UnknownPageError {
    pub id: String,
}

/// What the navigator needs from the UI: menu list, content region,
/// active-link styling, the location fragment and the sidebar.
pub trait ShellSurface {
    fn render_menu(&mut self, items: &[MenuItem]);
    fn set_active_styling(&mut self, id: &str);
    fn set_content(&mut self, payload: &str);
    fn set_fragment(&mut self, token: &str);
    fn set_sidebar_open(&mut self, open: bool);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatorConfig {
    pub default_page: String,
    pub narrow_breakpoint: u32,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            default_page: DEFAULT_PAGE.to_string(),
            narrow_breakpoint: NARROW_VIEWPORT_MAX,
        }
    }
}

pub struct Navigator<S: ShellSurface> {
    registry: PageRegistry,
    active: Option<String>,
    fragment: Option<String>,
    content: Option<String>,
    default_page: String,
    sidebar: SidebarVisibility,
    viewport_width: Option<u32>,
    initialized: bool,
    diagnostics: VecDeque<UnknownPageError>,
    surface: S,
}

impl<S: ShellSurface> Navigator<S> {
    pub fn new(surface: S, config: NavigatorConfig) -> Self {
        Self {
            registry: PageRegistry::new(),
            active: None,
            fragment: None,
            content: None,
            default_page: config.default_page,
            sidebar: SidebarVisibility::new(config.narrow_breakpoint),
            viewport_width: None,
            initialized: false,
            diagnostics: VecDeque::new(),
            surface,
        }
    }

    /// Adds a page (or overwrites the page with the same id) and refreshes the
    /// menu. Pages without a renderer get the placeholder content.
    /// Returns false if the id is empty.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        label: impl Into<String>,
        icon: Option<String>,
        render: Option<RenderFn>,
    ) -> bool {
        let id = id.into();
        let label = label.into();
        if id.is_empty() {
            log::warn!("Rejected page '{}': id must not be empty", label);
            return false;
        }

        match self.registry.insert(PageEntry::new(id.clone(), label.clone(), icon, render)) {
            Registration::Inserted => log::info!("Added page: {} ({})", label, id),
            // Same menu slot, new label and content
            Registration::Replaced => log::info!("Replaced page: {} ({})", label, id),
        }

        self.surface.render_menu(&self.registry.menu_items());
        if let Some(active) = &self.active {
            self.surface.set_active_styling(active);
        }
        true
    }

    /// Activates `id`: styling, render, content swap, fragment, in that order.
    ///
    /// An unknown id is reported to the log and the diagnostics ring and
    /// leaves every piece of state untouched. Returns whether navigation
    /// happened.
    pub fn navigate(&mut self, id: &str) -> bool {
        match self.try_navigate(id) {
            Ok(()) => true,
            Err(err) => {
                log::error!("{}", err);
                self.record(err);
                false
            }
        }
    }

    fn try_navigate(&mut self, id: &str) -> Result<(), UnknownPageError> {
        let entry = self.registry.get(id).ok_or_else(|| UnknownPageError {
            id: id.to_string(),
        })?;

        self.surface.set_active_styling(id);
        self.active = Some(id.to_string());

        let content = entry.render();
        self.surface.set_content(&content);
        self.content = Some(content);

        self.surface.set_fragment(id);
        self.fragment = Some(id.to_string());

        if let Some(width) = self.viewport_width {
            if self.sidebar.on_page_activated(width) {
                self.surface.set_sidebar_open(false);
            }
        }

        log::info!("Navigated to '{}'", id);
        Ok(())
    }

    /// Startup resolution: the fragment's page if registered, otherwise the
    /// default page. Only the first call has any effect.
    pub fn resolve_initial(&mut self, raw_fragment: &str) -> bool {
        if self.initialized {
            log::warn!("Initial page already resolved, ignoring fragment '{}'", raw_fragment);
            return false;
        }
        self.initialized = true;

        let target = token_from_hash(raw_fragment)
            .filter(|token| self.registry.contains(token))
            .unwrap_or_else(|| self.default_page.clone());
        self.navigate(&target)
    }

    /// Back/forward or a manual fragment edit. Unknown tokens keep the
    /// current page.
    pub fn on_external_navigation(&mut self, raw_fragment: &str) -> bool {
        match token_from_hash(raw_fragment) {
            Some(token) if self.registry.contains(&token) => self.navigate(&token),
            _ => false,
        }
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        let open = self.sidebar.toggle();
        self.surface.set_sidebar_open(open);
        open
    }

    pub fn close_sidebar(&mut self) {
        if self.sidebar.close() {
            self.surface.set_sidebar_open(false);
        }
    }

    pub fn on_viewport_resize(&mut self, width: u32) {
        self.viewport_width = Some(width);
        if self.sidebar.on_resize(width) {
            self.surface.set_sidebar_open(false);
        }
    }

    /// Pushes the complete current state to the surface again.
    pub fn sync_surface(&mut self) {
        self.surface.render_menu(&self.registry.menu_items());
        if let Some(active) = &self.active {
            self.surface.set_active_styling(active);
        }
        if let Some(content) = &self.content {
            self.surface.set_content(content);
        }
        if let Some(fragment) = &self.fragment {
            self.surface.set_fragment(fragment);
        }
        self.surface.set_sidebar_open(self.sidebar.is_open());
    }

    fn record(&mut self, err: UnknownPageError) {
        self.diagnostics.push_back(err);
        if self.diagnostics.len() > MAX_DIAGNOSTICS {
            self.diagnostics.pop_front();
        }
    }

    pub fn active_page(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar.is_open()
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    pub fn menu_items(&self) -> Vec<MenuItem> {
        self.registry.menu_items()
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &UnknownPageError> {
        self.diagnostics.iter()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{navigator, RecordingSurface, SurfaceCall};
    use super::*;
    use crate::modules::registry::static_renderer;
    use rstest::rstest;

    fn with_pages() -> Navigator<RecordingSurface> {
        let mut nav = navigator();
        for (id, label) in [("home", "Home"), ("projects", "Projects"), ("about", "About")] {
            nav.register(id, label, None, Some(static_renderer(format!("<h1>{}</h1>", label))));
        }
        nav
    }

    #[test]
    fn test_register_renders_menu() {
        let nav = with_pages();
        let ids: Vec<&str> = nav.surface().menu.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["home", "projects", "about"]);
        assert_eq!(nav.active_page(), None);
    }

    #[test]
    fn test_register_rejects_empty_id() {
        let mut nav = navigator();
        assert!(!nav.register("", "Nameless", None, None));
        assert!(nav.registry().is_empty());
        assert!(nav.surface().calls.is_empty());
    }

    #[test]
    fn test_duplicate_registration_overwrites_and_deduplicates_menu() {
        let mut nav = with_pages();
        nav.register("home", "Start", Some("fas fa-star".to_string()), Some(static_renderer("<p>v2</p>")));

        assert_eq!(nav.registry().len(), 3);
        let menu = &nav.surface().menu;
        assert_eq!(menu.len(), 3);
        assert_eq!(menu[0].label, "Start");
        assert_eq!(menu[0].icon, "fas fa-star");

        assert!(nav.navigate("home"));
        assert_eq!(nav.surface().content.as_deref(), Some("<p>v2</p>"));
    }

    #[test]
    fn test_navigate_updates_everything_in_order() {
        let mut nav = with_pages();
        let before = nav.surface().calls.len();

        assert!(nav.navigate("projects"));

        assert_eq!(
            nav.surface().calls[before..],
            [
                SurfaceCall::Active("projects".to_string()),
                SurfaceCall::Content("<h1>Projects</h1>".to_string()),
                SurfaceCall::Fragment("projects".to_string()),
            ]
        );
        assert_eq!(nav.active_page(), Some("projects"));
        assert_eq!(nav.fragment(), Some("projects"));
        assert_eq!(nav.content(), Some("<h1>Projects</h1>"));
    }

    #[test]
    fn test_navigate_unknown_changes_nothing() {
        let mut nav = with_pages();
        nav.navigate("about");
        let calls_before = nav.surface().calls.len();

        assert!(!nav.navigate("nowhere"));

        assert_eq!(nav.active_page(), Some("about"));
        assert_eq!(nav.fragment(), Some("about"));
        assert_eq!(nav.surface().content.as_deref(), Some("<h1>About</h1>"));
        assert_eq!(nav.surface().calls.len(), calls_before);
        let diagnostics: Vec<_> = nav.diagnostics().cloned().collect();
        assert_eq!(
            diagnostics,
            vec![UnknownPageError {
                id: "nowhere".to_string()
            }]
        );
    }

    #[test]
    fn test_navigate_twice_is_idempotent() {
        let mut once = with_pages();
        once.navigate("about");

        let mut twice = with_pages();
        twice.navigate("about");
        twice.navigate("about");

        assert_eq!(once.active_page(), twice.active_page());
        assert_eq!(once.fragment(), twice.fragment());
        assert_eq!(once.surface().content, twice.surface().content);
        assert_eq!(once.surface().active, twice.surface().active);
        assert_eq!(twice.diagnostics().count(), 0);
    }

    #[test]
    fn test_content_reflects_render_at_call_time() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let mut nav = navigator();
        let visits = Arc::new(AtomicUsize::new(0));
        let counter = visits.clone();
        nav.register(
            "counter",
            "Counter",
            None,
            Some(Arc::new(move || format!("visit {}", counter.fetch_add(1, Ordering::SeqCst)))),
        );

        nav.navigate("counter");
        assert_eq!(nav.content(), Some("visit 0"));
        nav.navigate("counter");
        assert_eq!(nav.content(), Some("visit 1"));
    }

    #[rstest]
    #[case("#projects", "projects")]
    #[case("projects", "projects")]
    #[case("", "home")]
    #[case("#", "home")]
    #[case("#missing", "home")]
    fn test_resolve_initial(#[case] fragment: &str, #[case] expected: &str) {
        let mut nav = with_pages();
        assert!(nav.resolve_initial(fragment));
        assert_eq!(nav.active_page(), Some(expected));
        assert_eq!(nav.fragment(), Some(expected));
        assert_eq!(nav.diagnostics().count(), 0);
    }

    #[test]
    fn test_resolve_initial_runs_once() {
        let mut nav = with_pages();
        assert!(nav.resolve_initial("#about"));
        assert!(nav.is_initialized());
        assert!(!nav.resolve_initial("#projects"));
        assert_eq!(nav.active_page(), Some("about"));
    }

    #[test]
    fn test_resolve_initial_uses_configured_default() {
        let config = NavigatorConfig {
            default_page: "about".to_string(),
            ..NavigatorConfig::default()
        };
        let mut nav = Navigator::new(RecordingSurface::default(), config);
        nav.register("about", "About", None, None);
        nav.resolve_initial("#gone");
        assert_eq!(nav.active_page(), Some("about"));
    }

    #[test]
    fn test_resolve_initial_without_default_page_reports_diagnostic() {
        let mut nav = navigator();
        nav.register("about", "About", None, None);
        assert!(!nav.resolve_initial(""));
        assert_eq!(nav.active_page(), None);
        assert_eq!(nav.diagnostics().count(), 1);
    }

    #[test]
    fn test_external_navigation() {
        let mut nav = with_pages();
        nav.resolve_initial("");

        assert!(nav.on_external_navigation("#about"));
        assert_eq!(nav.active_page(), Some("about"));

        // Unknown and empty tokens keep the current page without a diagnostic
        assert!(!nav.on_external_navigation("#missing"));
        assert!(!nav.on_external_navigation(""));
        assert_eq!(nav.active_page(), Some("about"));
        assert_eq!(nav.fragment(), Some("about"));
        assert_eq!(nav.diagnostics().count(), 0);
    }

    #[test]
    fn test_external_navigation_decodes_fragment() {
        let mut nav = with_pages();
        nav.register("my page", "My Page", None, None);
        assert!(nav.on_external_navigation("#my%20page"));
        assert_eq!(nav.active_page(), Some("my page"));
    }

    #[test]
    fn test_placeholder_for_page_without_renderer() {
        let mut nav = with_pages();
        nav.register("blog", "Blog", None, None);
        assert!(nav.navigate("blog"));
        let content = nav.surface().content.clone().unwrap();
        assert!(content.contains("Blog"));
        assert!(content.contains("blog"));
    }

    #[test]
    fn test_late_registration_keeps_active_styling() {
        let mut nav = with_pages();
        nav.navigate("about");
        nav.register("blog", "Blog", None, None);

        let tail = &nav.surface().calls[nav.surface().calls.len() - 2..];
        assert_eq!(
            tail,
            [
                SurfaceCall::Menu(vec![
                    "home".to_string(),
                    "projects".to_string(),
                    "about".to_string(),
                    "blog".to_string()
                ]),
                SurfaceCall::Active("about".to_string()),
            ]
        );
    }

    #[test]
    fn test_narrow_navigation_closes_sidebar() {
        let mut nav = with_pages();
        nav.on_viewport_resize(600);
        assert!(nav.toggle_sidebar());

        nav.navigate("projects");

        assert!(!nav.sidebar_open());
        assert!(!nav.surface().sidebar_open);
    }

    #[test]
    fn test_wide_navigation_leaves_sidebar_open() {
        let mut nav = with_pages();
        nav.toggle_sidebar();
        nav.navigate("projects");
        assert!(nav.sidebar_open());

        nav.on_viewport_resize(1280);
        nav.navigate("about");
        assert!(!nav.sidebar_open());
    }

    #[test]
    fn test_resize_above_breakpoint_closes_sidebar() {
        let mut nav = with_pages();
        nav.on_viewport_resize(500);
        nav.toggle_sidebar();

        nav.on_viewport_resize(700);
        assert!(nav.sidebar_open());

        nav.on_viewport_resize(1024);
        assert!(!nav.sidebar_open());
        assert_eq!(nav.surface().calls.last(), Some(&SurfaceCall::Sidebar(false)));
    }

    #[test]
    fn test_close_sidebar_only_emits_on_change() {
        let mut nav = with_pages();
        let before = nav.surface().calls.len();
        nav.close_sidebar();
        assert_eq!(nav.surface().calls.len(), before);

        nav.toggle_sidebar();
        nav.close_sidebar();
        assert_eq!(
            nav.surface().calls[before..],
            [SurfaceCall::Sidebar(true), SurfaceCall::Sidebar(false)]
        );
    }

    #[test]
    fn test_diagnostics_are_bounded() {
        let mut nav = with_pages();
        for i in 0..40 {
            nav.navigate(&format!("missing-{}", i));
        }
        assert_eq!(nav.diagnostics().count(), MAX_DIAGNOSTICS);
        assert_eq!(nav.diagnostics().next().unwrap().id, "missing-15");
    }

    #[test]
    fn test_sync_surface_replays_state() {
        let mut nav = with_pages();
        nav.resolve_initial("#about");
        nav.on_viewport_resize(1280);
        nav.toggle_sidebar();
        let before = nav.surface().calls.len();

        nav.sync_surface();

        assert_eq!(
            nav.surface().calls[before..],
            [
                SurfaceCall::Menu(vec![
                    "home".to_string(),
                    "projects".to_string(),
                    "about".to_string()
                ]),
                SurfaceCall::Active("about".to_string()),
                SurfaceCall::Content("<h1>About</h1>".to_string()),
                SurfaceCall::Fragment("about".to_string()),
                SurfaceCall::Sidebar(true),
            ]
        );
        // Replaying changes no navigator state
        assert_eq!(nav.active_page(), Some("about"));
        assert_eq!(nav.diagnostics().count(), 0);
    }

    #[test]
    fn test_sync_surface_before_startup_sends_menu_and_sidebar_only() {
        let mut nav = with_pages();
        let before = nav.surface().calls.len();

        nav.sync_surface();

        assert_eq!(
            nav.surface().calls[before..],
            [
                SurfaceCall::Menu(vec![
                    "home".to_string(),
                    "projects".to_string(),
                    "about".to_string()
                ]),
                SurfaceCall::Sidebar(false),
            ]
        );
    }

    #[test]
    fn test_unknown_page_message() {
        let err = UnknownPageError {
            id: "nowhere".to_string(),
        };
        assert_eq!(err.to_string(), "Page not found: nowhere");
    }
}
