//! Recording collaborators and a harness wiring them to a real controller.

#![allow(dead_code)]

use search_screen::{
    BrowserDirection, BrowserNavigation, DefaultSearchController, LoadRequest, MemorySettings, MetricEvent,
    MetricsRecorder, NavController, NavDestination, SearchInteractor, SearchSeed, SearchSettings, SearchState,
    SearchStore, SessionId,
};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserCall {
    Load(LoadRequest),
    Open(BrowserDirection),
    SelectSession(SessionId),
}

#[derive(Debug, Default)]
pub struct RecordingBrowser {
    pub calls: RefCell<Vec<BrowserCall>>,
}

impl RecordingBrowser {
    pub fn loads(&self) -> Vec<LoadRequest> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                BrowserCall::Load(request) => Some(request.clone()),
                _ => None,
            })
            .collect()
    }
}

impl BrowserNavigation for RecordingBrowser {
    fn open_to_browser_and_load(&self, request: LoadRequest) {
        self.calls.borrow_mut().push(BrowserCall::Load(request));
    }

    fn open_to_browser(&self, from: BrowserDirection) {
        self.calls.borrow_mut().push(BrowserCall::Open(from));
    }

    fn select_session(&self, id: &SessionId) {
        self.calls.borrow_mut().push(BrowserCall::SelectSession(id.clone()));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCall {
    Up,
    To(NavDestination),
}

#[derive(Debug, Default)]
pub struct RecordingNav {
    pub calls: RefCell<Vec<NavCall>>,
}

impl NavController for RecordingNav {
    fn navigate_up(&self) {
        self.calls.borrow_mut().push(NavCall::Up);
    }

    fn navigate(&self, destination: NavDestination) {
        self.calls.borrow_mut().push(NavCall::To(destination));
    }
}

#[derive(Debug, Default)]
pub struct RecordingMetrics {
    pub events: RefCell<Vec<MetricEvent>>,
}

impl MetricsRecorder for RecordingMetrics {
    fn track(&self, event: MetricEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// A real store and controller behind an interactor, with every collaborator
/// recording what it was asked to do.
pub struct Harness {
    pub store: Rc<SearchStore>,
    pub browser: Rc<RecordingBrowser>,
    pub nav: Rc<RecordingNav>,
    pub metrics: Rc<RecordingMetrics>,
    pub settings: Rc<MemorySettings>,
    pub interactor: SearchInteractor,
    /// Every state the store published, in order.
    pub published: Rc<RefCell<Vec<SearchState>>>,
}

impl Harness {
    pub fn new(seed: SearchSeed) -> Self {
        Self::with_settings(seed, MemorySettings::default())
    }

    pub fn with_settings(seed: SearchSeed, settings: MemorySettings) -> Self {
        let settings = Rc::new(settings);
        let store = Rc::new(SearchStore::new(SearchState::seed(seed, settings.as_ref())));
        let browser = Rc::new(RecordingBrowser::default());
        let nav = Rc::new(RecordingNav::default());
        let metrics = Rc::new(RecordingMetrics::default());

        let published = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&published);
        store.subscribe(move |state: &SearchState| sink.borrow_mut().push(state.clone()));

        let shared_settings: Rc<dyn SearchSettings> = settings.clone();
        let controller = DefaultSearchController::new(
            Rc::clone(&store),
            browser.clone(),
            nav.clone(),
            metrics.clone(),
            shared_settings,
        );

        Self {
            store,
            browser,
            nav,
            metrics,
            settings,
            interactor: SearchInteractor::new(Box::new(controller)),
            published,
        }
    }

    pub fn events(&self) -> Vec<MetricEvent> {
        self.metrics.events.borrow().clone()
    }

    pub fn browser_calls(&self) -> Vec<BrowserCall> {
        self.browser.calls.borrow().clone()
    }

    pub fn nav_calls(&self) -> Vec<NavCall> {
        self.nav.calls.borrow().clone()
    }
}
