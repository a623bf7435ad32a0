//! Browser host for the page runtime.
//!
//! Built for `wasm32` with `wasm-pack build --target web`. The generated
//! page loads the bundle from `runtime/` and the `start` function mounts the
//! runtime against the live document:
//!
//! - `[data-reveal="N"]` elements are observed with `IntersectionObserver`
//!   and get the `active` class when revealed
//! - `[data-nav="section"]` clicks are routed through the navigator
//! - `[data-menu-toggle]` clicks toggle the overlay `#mobile-menu`
//!
//! `<html>` receives `reveal-ready` only while observation is running; the
//! stylesheet hides `.reveal` elements only under that class, so a page
//! whose runtime fails to load, or is unmounted, still shows everything.

use crate::runtime::{
    ElementId, Intersection, IntersectionHost, MenuState, Navigation, ObserveError, Page,
    RenderSurface, ScrollBehavior, Section, SectionAnchors, Settings,
};
use rustc_hash::FxHashMap;
use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{
    Document, Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollIntoViewOptions,
};

/// Class toggled on revealed elements.
const ACTIVE_CLASS: &str = "active";
/// Class on `<html>` enabling the hidden initial reveal state.
const READY_CLASS: &str = "reveal-ready";
/// Class on `<nav>` while the overlay is open (swaps the menu icon).
const MENU_OPEN_CLASS: &str = "menu-open";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;
type Slot = Rc<RefCell<Option<Page<DomHost>>>>;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

// ============================================================================
// DOM host
// ============================================================================

pub struct DomHost {
    document: Document,
    elements: FxHashMap<ElementId, Element>,
    callback: ObserverCallback,
    observer: Option<IntersectionObserver>,
}

impl DomHost {
    fn new(document: Document, elements: FxHashMap<ElementId, Element>, callback: ObserverCallback) -> Self {
        Self {
            document,
            elements,
            callback,
            observer: None,
        }
    }

    fn root_class(&self, class: &str, on: bool) {
        if let Some(root) = self.document.document_element() {
            let _ = root.class_list().toggle_with_force(class, on);
        }
    }
}

impl IntersectionHost for DomHost {
    fn observe(&mut self, targets: &[ElementId], threshold: f64) -> Result<(), ObserveError> {
        let window = web_sys::window().ok_or(ObserveError::Unavailable)?;
        let supported = js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false);
        if !supported {
            return Err(ObserveError::Unavailable);
        }

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(self.callback.as_ref().unchecked_ref(), &init)
                .map_err(|err| ObserveError::Host(format!("{err:?}")))?;

        for id in targets {
            if let Some(element) = self.elements.get(id) {
                observer.observe(element);
            }
        }

        self.observer = Some(observer);
        self.root_class(READY_CLASS, true);
        Ok(())
    }

    fn unobserve(&mut self, target: ElementId) {
        if let (Some(observer), Some(element)) = (&self.observer, self.elements.get(&target)) {
            observer.unobserve(element);
        }
    }

    fn disconnect(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

impl SectionAnchors for DomHost {
    type Anchor = Element;

    fn resolve(&self, section: Section) -> Option<Element> {
        self.document.get_element_by_id(section.id())
    }

    fn scroll_into_view(&mut self, anchor: &Element, behavior: ScrollBehavior) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
            ScrollBehavior::Auto => web_sys::ScrollBehavior::Auto,
        });
        anchor.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

impl RenderSurface for DomHost {
    fn show_revealed(&mut self, id: ElementId) {
        if let Some(element) = self.elements.get(&id) {
            let _ = element.class_list().add_1(ACTIVE_CLASS);
        }
    }

    fn show_menu(&mut self, state: MenuState) {
        let open = state.is_open();
        if let Some(overlay) = self.document.get_element_by_id("mobile-menu") {
            let _ = overlay.toggle_attribute_with_force("hidden", !open);
        }
        if let Some(nav) = self.document.query_selector("nav").ok().flatten() {
            let _ = nav.class_list().toggle_with_force(MENU_OPEN_CLASS, open);
        }
        for button in query_all(&self.document, "[data-menu-toggle]") {
            let _ = button.set_attribute("aria-expanded", if open { "true" } else { "false" });
        }
    }

    fn release(&mut self) {
        self.root_class(READY_CLASS, false);
    }
}

// ============================================================================
// Event wiring
// ============================================================================

/// An event listener that is removed when dropped.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(target: EventTarget, kind: &'static str, closure: Closure<dyn FnMut(Event)>) -> Self {
        let _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        Self {
            target,
            kind,
            closure,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Mounted runtime: the page slot plus the listeners feeding it.
struct App {
    slot: Slot,
    _listeners: Vec<Listener>,
}

impl App {
    fn mount(document: Document) -> Self {
        let slot: Slot = Rc::new(RefCell::new(None));
        let settings = read_settings(&document);
        let elements = collect_reveal_targets(&document);
        let mut targets: Vec<_> = elements.keys().copied().collect();
        targets.sort_unstable();

        let callback = observer_callback(Rc::downgrade(&slot));
        let host = DomHost::new(document.clone(), elements, callback);
        *slot.borrow_mut() = Some(Page::mount(host, &targets, settings));

        let mut listeners = Vec::new();
        for button in query_all(&document, "[data-menu-toggle]") {
            let weak = Rc::downgrade(&slot);
            let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                with_page(&weak, |page| {
                    page.toggle_menu();
                });
            });
            listeners.push(Listener::attach(button.into(), "click", closure));
        }
        for link in query_all(&document, "[data-nav]") {
            let target = link.get_attribute("data-nav").unwrap_or_default();
            let weak = Rc::downgrade(&slot);
            let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                event.prevent_default();
                with_page(&weak, |page| {
                    let outcome = page.navigate(&target);
                    report_navigation(&target, outcome);
                });
            });
            listeners.push(Listener::attach(link.into(), "click", closure));
        }

        Self {
            slot,
            _listeners: listeners,
        }
    }

    fn unmount(self) {
        if let Ok(mut guard) = self.slot.try_borrow_mut()
            && let Some(page) = guard.as_mut()
        {
            page.unmount();
        }
        // Listeners and the observer callback drop with `self`.
    }
}

fn observer_callback(slot: Weak<RefCell<Option<Page<DomHost>>>>) -> ObserverCallback {
    Closure::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
        let batch: Vec<Intersection> = entries
            .iter()
            .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
            .filter_map(|entry| {
                let id = reveal_id(&entry.target())?;
                Some(Intersection {
                    id,
                    ratio: entry.intersection_ratio(),
                    is_intersecting: entry.is_intersecting(),
                })
            })
            .collect();
        with_page(&slot, |page| {
            page.handle_intersections(&batch);
        });
    })
}

/// Run `f` against the mounted page, if it still exists and is not busy.
fn with_page(slot: &Weak<RefCell<Option<Page<DomHost>>>>, f: impl FnOnce(&mut Page<DomHost>)) {
    let Some(slot) = slot.upgrade() else {
        return;
    };
    if let Ok(mut guard) = slot.try_borrow_mut()
        && let Some(page) = guard.as_mut()
    {
        f(page);
    }
}

#[cfg(debug_assertions)]
fn report_navigation(target: &str, outcome: Navigation) {
    if !outcome.scrolled() {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "folio: no anchor for navigation target `{target}` ({outcome:?})"
        )));
    }
}

#[cfg(not(debug_assertions))]
fn report_navigation(_target: &str, _outcome: Navigation) {}

// ============================================================================
// Document queries
// ============================================================================

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn reveal_id(element: &Element) -> Option<ElementId> {
    element
        .get_attribute("data-reveal")?
        .parse()
        .ok()
        .map(ElementId)
}

fn collect_reveal_targets(document: &Document) -> FxHashMap<ElementId, Element> {
    query_all(document, "[data-reveal]")
        .into_iter()
        .filter_map(|element| Some((reveal_id(&element)?, element)))
        .collect()
}

/// Read `data-reveal-threshold` and `data-scroll` from `<body>`.
fn read_settings(document: &Document) -> Settings {
    let mut settings = Settings::default();
    let Some(body) = document.body() else {
        return settings;
    };
    if let Some(threshold) = body
        .get_attribute("data-reveal-threshold")
        .and_then(|v| v.parse().ok())
    {
        settings.threshold = threshold;
    }
    if let Some(scroll) = body
        .get_attribute("data-scroll")
        .and_then(|v| v.parse().ok())
    {
        settings.scroll = scroll;
    }
    settings
}

// ============================================================================
// Exports
// ============================================================================

/// Mount the runtime when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    mount();
}

/// Mount the runtime against the current document. No-op if already mounted.
#[wasm_bindgen]
pub fn mount() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    APP.with(|app| {
        let mut app = app.borrow_mut();
        if app.is_none() {
            *app = Some(App::mount(document));
        }
    });
}

/// Tear the runtime down: stop observing and detach listeners.
#[wasm_bindgen]
pub fn unmount() {
    if let Some(app) = APP.with(|app| app.borrow_mut().take()) {
        app.unmount();
    }
}
