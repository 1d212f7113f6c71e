mod update;

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use hothub_core::{
    GateView, Janitor, KvStore, LazyModule, ModuleLoader, OfferOrchestrator, OfferSurface, Route,
    StyleScope, VerificationGate,
};

use crate::admin::{AdminLoadResult, AdminModule};
use crate::catalog::VideoSummary;
use crate::embeds::EmbedSurface;
use crate::theme::Theme;

/// How long the splash intro runs before completing on its own.
pub const SPLASH_DURATION: Duration = Duration::from_secs(2);

/// Ticks between purchase-notification rotations (the loop ticks at ~100ms).
pub const PURCHASE_ROTATE_TICKS: usize = 40;

/// Ticks a transient toast stays on screen.
pub const TOAST_TICKS: usize = 30;

/// Input mode determines how keyboard input is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    PathEntry,
}

/// Terminal stand-in for the document-root style scope: holds the dark
/// marker bootstrap applies. Only bootstrap writes it.
#[derive(Debug, Default)]
pub struct RootScope {
    pub dark: bool,
}

impl StyleScope for RootScope {
    fn set_dark_marker(&mut self, on: bool) {
        self.dark = on;
    }
}

pub type DynStore = Box<dyn KvStore>;

/// Main application state.
pub struct App {
    pub gate: VerificationGate<DynStore>,
    pub offer: OfferOrchestrator<DynStore>,
    pub route: Route,
    /// Set once the gate first resolves to Application.
    pub routes_mounted: bool,
    /// Destination to open on mount instead of the root (CLI `--start-path`).
    pub start_route: Option<Route>,

    pub splash_start: Instant,
    pub splash_done: bool,

    pub theme: Theme,
    pub catalog: Vec<VideoSummary>,
    pub home_cursor: usize,

    pub admin: LazyModule<AdminModule>,
    pub admin_loader: Box<dyn ModuleLoader>,

    pub badges: EmbedSurface,
    pub janitor: Janitor,

    pub input_mode: InputMode,
    pub path_buffer: String,
    pub show_help: bool,

    /// Rotating purchase notices (first toast surface).
    pub purchase_index: usize,
    pub purchase_change_tick: usize,
    /// Transient shell message and its expiry tick (second toast surface).
    pub toast: Option<(String, usize)>,

    pub tick: usize,
    pub should_quit: bool,
    /// Last area the floating trigger rendered at (for mouse click mapping).
    pub last_trigger_area: Option<Rect>,
}

impl App {
    pub fn new(
        durable: DynStore,
        ephemeral: DynStore,
        admin_loader: Box<dyn ModuleLoader>,
        theme: Theme,
        catalog: Vec<VideoSummary>,
    ) -> Self {
        Self {
            gate: VerificationGate::new(durable),
            offer: OfferOrchestrator::new(ephemeral),
            route: Route::Home,
            routes_mounted: false,
            start_route: None,
            splash_start: Instant::now(),
            splash_done: false,
            theme,
            catalog,
            home_cursor: 0,
            admin: LazyModule::new(),
            admin_loader,
            badges: EmbedSurface::default(),
            janitor: Janitor::default(),
            input_mode: InputMode::Normal,
            path_buffer: String::new(),
            show_help: false,
            purchase_index: 0,
            purchase_change_tick: 0,
            toast: None,
            tick: 0,
            should_quit: false,
            last_trigger_area: None,
        }
    }

    pub fn push_toast(&mut self, message: impl Into<String>) {
        self.toast = Some((message.into(), self.tick + TOAST_TICKS));
    }

    /// One-shot splash completion (auto after the intro, or skipped).
    pub(crate) fn finish_splash(&mut self) {
        if self.splash_done {
            return;
        }
        self.splash_done = true;
        self.maybe_mount_routes();
    }

    /// Mount the routed tree the first time the gate resolves to Application.
    pub(crate) fn maybe_mount_routes(&mut self) {
        if self.routes_mounted || self.gate.view(self.splash_done) != GateView::Application {
            return;
        }
        self.routes_mounted = true;
        self.route = self.start_route.take().unwrap_or(Route::Home);
        self.offer.mount(&self.route, Instant::now());
        self.purchase_change_tick = self.tick;
        self.after_route_change();
        tracing::info!("routes mounted at {}", self.route.path());
    }

    /// Navigate within the mounted tree.
    pub(crate) fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        tracing::info!("navigate: {}", route.path());
        self.route = route;
        self.offer.enter_route(&self.route, Instant::now());
        self.after_route_change();
    }

    /// Page-mount side effects: embeds inject into the host surface (and the
    /// janitor re-sweeps), admin destinations request their module.
    fn after_route_change(&mut self) {
        self.badges.clear_embeds();
        if let Route::Video(id) = &self.route {
            let id = id.clone();
            self.badges.inject_for_embed(&id);
            self.janitor.on_mutation(&mut self.badges);
        }
        if matches!(self.route, Route::Admin | Route::AdminLogin)
            && self.admin.request(self.admin_loader.as_mut())
        {
            tracing::info!("admin module load requested");
        }
        self.last_trigger_area = None;
    }

    /// Deferred admin module delivery, drained from the loader channel.
    pub fn on_admin_loaded(&mut self, result: AdminLoadResult) {
        match result {
            Ok(module) => self.admin.complete(module),
            Err(e) => {
                tracing::warn!("admin module load failed: {e}");
                self.push_toast("Admin failed to load");
                self.admin.fail(e);
            }
        }
    }

    /// Render the current view. Exactly one of the gate's four views is on
    /// screen; layered surfaces only exist inside the Application view.
    pub fn view(&mut self, f: &mut ratatui::Frame) {
        match self.gate.view(self.splash_done) {
            GateView::Splash => {
                crate::view::splash::render(f, &self.theme, self.tick, self.splash_start.elapsed());
                return;
            }
            GateView::AccessDenied => {
                crate::view::denied::render(f, &self.theme);
                return;
            }
            GateView::VerificationPrompt => {
                crate::view::verify::render(f, &self.theme);
                return;
            }
            GateView::Application => {}
        }

        let area = f.area();
        let content_area = crate::view::chrome::render_header(f, area, &self.theme, &self.route);

        // Split the footer row out so it spans the full width.
        let footer_area = Rect {
            x: content_area.x,
            y: content_area.y + content_area.height.saturating_sub(1),
            width: content_area.width,
            height: 1.min(content_area.height),
        };
        let body_area = Rect {
            height: content_area.height.saturating_sub(1),
            ..content_area
        };

        // Clone route to avoid borrow conflict with &mut self
        let route = self.route.clone();
        match &route {
            Route::Home => crate::view::home::render_in(f, self, body_area),
            Route::Video(id) => crate::view::video::render_in(f, self, id, body_area),
            Route::Admin => crate::view::admin::render_in(f, self, body_area),
            Route::AdminLogin => crate::view::admin_login::render_in(f, self, body_area),
            Route::NotFound(path) => {
                crate::view::not_found::render_in(f, &self.theme, path, body_area)
            }
        }

        crate::view::chrome::render_footer(f, footer_area, &self.theme, &route);

        // Offer layer: the overlay, or its floating trigger, or neither on
        // admin routes.
        self.last_trigger_area = None;
        match self.offer.surface(&route) {
            OfferSurface::Overlay => crate::view::offer::render_popup(f, &self.theme),
            OfferSurface::Trigger => {
                self.last_trigger_area =
                    Some(crate::view::offer::render_trigger(f, &self.theme, body_area));
            }
            OfferSurface::Hidden => {}
        }

        if !route.under_admin() {
            crate::view::notification::render(f, self, body_area);
        }

        if let Some((message, _)) = self.toast.clone() {
            crate::view::notification::render_toast(f, &self.theme, &message, body_area);
        }

        if self.input_mode == InputMode::PathEntry {
            crate::view::path_entry::render(f, &self.theme, &self.path_buffer, footer_area);
        }

        if self.show_help {
            crate::view::help::render(f, &self.theme);
        }
    }
}

#[cfg(test)]
mod tests;
