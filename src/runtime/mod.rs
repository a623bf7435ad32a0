//! Page runtime: the only parts of the portfolio with behavior.
//!
//! | Module     | Owns                                          |
//! |------------|-----------------------------------------------|
//! | [`reveal`] | element id → reveal state, observation        |
//! | [`nav`]    | section ids, anchor capability, navigator     |
//! | [`menu`]   | mobile overlay open/closed state machine      |
//!
//! [`Page`] wires the three to a host that implements the capabilities.
//! The browser adapter (`crate::web`) is one such host; tests use a
//! recording fake. Nothing in here depends on a DOM.

pub mod menu;
pub mod nav;
pub mod reveal;

pub use menu::{MenuController, MenuEvent, MenuState};
pub use nav::{Navigation, ScrollBehavior, Section, SectionAnchors, SectionNavigator};
pub use reveal::{
    DEFAULT_THRESHOLD, ElementId, Intersection, IntersectionHost, Mount, ObserveError,
    ObserverMode, RevealState, VisibilityObserver,
};

/// Presentation side: subscribes to state transitions.
pub trait RenderSurface {
    /// Apply the final visual state of a revealed element.
    fn show_revealed(&mut self, id: ElementId);

    /// Show or hide the mobile overlay.
    fn show_menu(&mut self, state: MenuState);

    /// Drop the hidden initial state from elements that were never revealed.
    /// Called on teardown, after observation has stopped.
    fn release(&mut self);
}

/// Everything a host must provide to run a [`Page`].
pub trait PageHost: IntersectionHost + SectionAnchors + RenderSurface {}

impl<T: IntersectionHost + SectionAnchors + RenderSurface> PageHost for T {}

/// Runtime tuning, written into the page at build time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub threshold: f64,
    pub scroll: ScrollBehavior,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            scroll: ScrollBehavior::Smooth,
        }
    }
}

/// A mounted page view.
///
/// Owns the controllers and the host. After [`Page::unmount`] every
/// operation is a no-op, so late host callbacks cannot act on a torn-down
/// page.
pub struct Page<H: PageHost> {
    host: H,
    observer: VisibilityObserver,
    menu: MenuController,
    navigator: SectionNavigator,
    mounted: bool,
}

impl<H: PageHost> Page<H> {
    /// Mount the page: start observing `targets` and render the closed menu.
    pub fn mount(mut host: H, targets: &[ElementId], settings: Settings) -> Self {
        let mut observer = VisibilityObserver::new(settings.threshold);
        if let Mount::FailOpen(ids) = observer.observe(&mut host, targets) {
            for id in ids {
                host.show_revealed(id);
            }
        }

        let menu = MenuController::new();
        host.show_menu(menu.state());

        Self {
            host,
            observer,
            menu,
            navigator: SectionNavigator::new(settings.scroll),
            mounted: true,
        }
    }

    #[inline]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[inline]
    pub const fn menu_state(&self) -> MenuState {
        self.menu.state()
    }

    #[inline]
    pub const fn observer_mode(&self) -> ObserverMode {
        self.observer.mode()
    }

    pub fn reveal_state(&self, id: ElementId) -> Option<RevealState> {
        self.observer.state(id)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Menu button click.
    pub fn toggle_menu(&mut self) -> MenuState {
        if self.mounted {
            let state = self.menu.toggle();
            self.host.show_menu(state);
        }
        self.menu.state()
    }

    /// Nav item click. Always leaves the menu closed.
    pub fn navigate(&mut self, target: &str) -> Navigation {
        if !self.mounted {
            return Navigation::Detached;
        }
        let was_open = self.menu.is_open();
        let outcome = self.navigator.navigate(&mut self.host, &mut self.menu, target);
        if was_open {
            self.host.show_menu(self.menu.state());
        }
        outcome
    }

    /// Host callback with a batch of intersection changes.
    ///
    /// Returns how many elements were revealed by this batch.
    pub fn handle_intersections(&mut self, batch: &[Intersection]) -> usize {
        if !self.mounted {
            return 0;
        }
        let revealed = self.observer.record(batch);
        for &id in &revealed {
            self.host.unobserve(id);
            self.host.show_revealed(id);
        }
        revealed.len()
    }

    /// Tear the page down. Idempotent.
    ///
    /// Pending elements are released so content never stays hidden without
    /// an observer to reveal it.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.observer.disconnect(&mut self.host);
        self.host.release();
        self.menu.reset();
        self.mounted = false;
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use rustc_hash::FxHashSet;

    /// Host that records every call the runtime makes.
    #[derive(Debug, Default)]
    pub struct RecordingHost {
        pub unavailable: bool,
        pub anchors: FxHashSet<Section>,
        pub observing: Vec<ElementId>,
        pub threshold: Option<f64>,
        pub scrolls: Vec<(Section, ScrollBehavior)>,
        pub revealed: Vec<ElementId>,
        pub menu_renders: Vec<MenuState>,
        pub disconnected: bool,
        pub released: usize,
    }

    impl RecordingHost {
        pub fn with_all_sections() -> Self {
            Self {
                anchors: Section::ALL.into_iter().collect(),
                ..Self::default()
            }
        }
    }

    impl IntersectionHost for RecordingHost {
        fn observe(&mut self, targets: &[ElementId], threshold: f64) -> Result<(), ObserveError> {
            if self.unavailable {
                return Err(ObserveError::Unavailable);
            }
            self.observing.extend_from_slice(targets);
            self.threshold = Some(threshold);
            Ok(())
        }

        fn unobserve(&mut self, target: ElementId) {
            self.observing.retain(|id| *id != target);
        }

        fn disconnect(&mut self) {
            self.observing.clear();
            self.disconnected = true;
        }
    }

    impl SectionAnchors for RecordingHost {
        type Anchor = Section;

        fn resolve(&self, section: Section) -> Option<Section> {
            self.anchors.contains(&section).then_some(section)
        }

        fn scroll_into_view(&mut self, anchor: &Section, behavior: ScrollBehavior) {
            self.scrolls.push((*anchor, behavior));
        }
    }

    impl RenderSurface for RecordingHost {
        fn show_revealed(&mut self, id: ElementId) {
            self.revealed.push(id);
        }

        fn show_menu(&mut self, state: MenuState) {
            self.menu_renders.push(state);
        }

        fn release(&mut self) {
            self.released += 1;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::testing::RecordingHost;
    use super::*;

    fn targets(n: u32) -> Vec<ElementId> {
        (0..n).map(ElementId).collect()
    }

    fn mount(host: RecordingHost, n: u32) -> Page<RecordingHost> {
        Page::mount(host, &targets(n), Settings::default())
    }

    #[test]
    fn test_mount_observes_and_renders_closed_menu() {
        let page = mount(RecordingHost::with_all_sections(), 3);

        assert!(page.is_mounted());
        assert_eq!(page.observer_mode(), ObserverMode::Observing);
        assert_eq!(page.menu_state(), MenuState::Closed);
        assert_eq!(page.host().observing, targets(3));
        assert_eq!(page.host().threshold, Some(0.1));
        assert_eq!(page.host().menu_renders, vec![MenuState::Closed]);
    }

    #[test]
    fn test_toggle_then_navigate_to_about() {
        let mut page = mount(RecordingHost::with_all_sections(), 1);

        assert_eq!(page.toggle_menu(), MenuState::Open);
        let outcome = page.navigate("about");

        assert_eq!(outcome, Navigation::Scrolled(Section::About));
        assert_eq!(page.menu_state(), MenuState::Closed);
        assert_eq!(
            page.host().scrolls,
            vec![(Section::About, ScrollBehavior::Smooth)]
        );
        assert_eq!(
            page.host().menu_renders,
            vec![MenuState::Closed, MenuState::Open, MenuState::Closed]
        );
    }

    #[test]
    fn test_navigate_with_closed_menu_does_not_rerender() {
        let mut page = mount(RecordingHost::with_all_sections(), 1);
        page.navigate("stack");
        assert_eq!(page.host().menu_renders, vec![MenuState::Closed]);
    }

    #[test]
    fn test_navigate_invalid_target_closes_menu_without_scroll() {
        let mut page = mount(RecordingHost::with_all_sections(), 1);
        page.toggle_menu();

        assert_eq!(page.navigate("resume"), Navigation::UnknownTarget);
        assert_eq!(page.menu_state(), MenuState::Closed);
        assert!(page.host().scrolls.is_empty());
    }

    #[test]
    fn test_navigate_missing_anchor() {
        let mut page = mount(RecordingHost::default(), 1);
        page.toggle_menu();

        assert_eq!(
            page.navigate("contact"),
            Navigation::AnchorMissing(Section::Contact)
        );
        assert_eq!(page.menu_state(), MenuState::Closed);
        assert!(page.host().scrolls.is_empty());
    }

    #[test]
    fn test_navigate_every_target_from_every_state() {
        let targets = ["home", "about", "stack", "projects", "contact", "", "blog"];
        for open in [false, true] {
            for target in targets {
                let mut page = mount(RecordingHost::with_all_sections(), 0);
                if open {
                    page.toggle_menu();
                }
                page.navigate(target);
                assert_eq!(page.menu_state(), MenuState::Closed, "{target} open={open}");
            }
        }
    }

    #[test]
    fn test_reveal_once_with_single_side_effect() {
        let mut page = mount(RecordingHost::with_all_sections(), 2);
        let entry = Intersection::entering(ElementId(1), 0.15);

        assert_eq!(page.handle_intersections(&[entry]), 1);
        assert_eq!(page.reveal_state(ElementId(1)), Some(RevealState::Revealed));

        assert_eq!(page.handle_intersections(&[entry]), 0);
        assert_eq!(page.reveal_state(ElementId(1)), Some(RevealState::Revealed));
        assert_eq!(page.host().revealed, vec![ElementId(1)]);
    }

    #[test]
    fn test_revealed_element_is_unobserved() {
        let mut page = mount(RecordingHost::with_all_sections(), 2);
        page.handle_intersections(&[Intersection::entering(ElementId(0), 0.5)]);
        assert_eq!(page.host().observing, vec![ElementId(1)]);
    }

    #[test]
    fn test_fail_open_shows_everything() {
        let host = RecordingHost {
            unavailable: true,
            ..RecordingHost::with_all_sections()
        };
        let page = mount(host, 3);

        assert_eq!(page.observer_mode(), ObserverMode::FailOpen);
        assert_eq!(page.host().revealed, targets(3));
        for id in targets(3) {
            assert_eq!(page.reveal_state(id), Some(RevealState::Revealed));
        }
    }

    #[test]
    fn test_unmount_then_intersection_is_noop() {
        let mut page = mount(RecordingHost::with_all_sections(), 2);
        page.toggle_menu();

        page.unmount();
        let revealed = page.handle_intersections(&[Intersection::entering(ElementId(0), 1.0)]);

        assert_eq!(revealed, 0);
        assert!(!page.is_mounted());
        assert!(page.host().disconnected);
        assert!(page.host().revealed.is_empty());
        assert_eq!(page.reveal_state(ElementId(0)), None);
        assert_eq!(page.menu_state(), MenuState::Closed);
    }

    #[test]
    fn test_unmount_ignores_later_clicks() {
        let mut page = mount(RecordingHost::with_all_sections(), 0);
        page.unmount();
        page.unmount();

        assert_eq!(page.toggle_menu(), MenuState::Closed);
        assert_eq!(page.navigate("about"), Navigation::Detached);
        assert!(page.host().scrolls.is_empty());
        assert_eq!(page.into_host().menu_renders, vec![MenuState::Closed]);
    }

    #[test]
    fn test_unmount_releases_pending_elements() {
        let mut page = mount(RecordingHost::with_all_sections(), 3);
        page.handle_intersections(&[Intersection::entering(ElementId(0), 0.5)]);
        assert_eq!(page.host().released, 0);

        page.unmount();
        page.unmount();

        // Released once, after observation stopped
        assert!(page.host().disconnected);
        assert!(page.host().observing.is_empty());
        assert_eq!(page.host().released, 1);
        assert_eq!(page.host().revealed, vec![ElementId(0)]);
    }

    #[test]
    fn test_settings_scroll_behavior_reaches_host() {
        let settings = Settings {
            threshold: 0.25,
            scroll: ScrollBehavior::Instant,
        };
        let mut page = Page::mount(RecordingHost::with_all_sections(), &targets(1), settings);
        page.navigate("home");

        assert_eq!(page.host().threshold, Some(0.25));
        assert_eq!(page.host().scrolls, vec![(Section::Home, ScrollBehavior::Instant)]);
    }
}
