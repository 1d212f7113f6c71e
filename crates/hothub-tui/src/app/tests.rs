use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use hothub_core::storage::{KvStore, MemoryStore, VERIFICATION_KEY};
use hothub_core::{GateView, LoadState, ModuleLoader, OfferSurface, Route};

use super::{App, InputMode, PURCHASE_ROTATE_TICKS, SPLASH_DURATION};
use crate::action::Action;
use crate::admin::AdminModule;
use crate::catalog;
use crate::theme::Theme;
use crate::view::notification::PURCHASES;

struct CountingLoader {
    begins: Arc<AtomicUsize>,
}

impl ModuleLoader for CountingLoader {
    fn begin(&mut self) {
        self.begins.fetch_add(1, Ordering::SeqCst);
    }
}

/// Create a minimal App for testing (memory stores, counting loader).
fn test_app_with(durable: MemoryStore) -> (App, Arc<AtomicUsize>) {
    let begins = Arc::new(AtomicUsize::new(0));
    let loader = CountingLoader {
        begins: Arc::clone(&begins),
    };
    let mut app = App::new(
        Box::new(durable),
        Box::new(MemoryStore::default()),
        Box::new(loader),
        Theme::dark(),
        catalog::demo(),
    );
    app.gate.hydrate();
    (app, begins)
}

fn granted_store() -> MemoryStore {
    let mut store = MemoryStore::default();
    store.set(VERIFICATION_KEY, "granted");
    store
}

/// Skip the splash intro (any key does it).
fn skip_splash(app: &mut App) {
    app.update(Action::MoveDown);
}

fn granted_app() -> (App, Arc<AtomicUsize>) {
    let (mut app, begins) = test_app_with(granted_store());
    skip_splash(&mut app);
    (app, begins)
}

// ── Gate view resolution ────────────────────────────────────────

#[test]
fn unhydrated_gate_stays_on_splash() {
    let begins = Arc::new(AtomicUsize::new(0));
    let mut app = App::new(
        Box::new(MemoryStore::default()),
        Box::new(MemoryStore::default()),
        Box::new(CountingLoader { begins }),
        Theme::dark(),
        catalog::demo(),
    );

    skip_splash(&mut app);
    assert!(app.splash_done);
    // Still loading: the splash keeps priority over every status.
    assert_eq!(app.gate.view(app.splash_done), GateView::Splash);
    assert!(!app.routes_mounted);
}

#[test]
fn any_key_skips_the_splash_exactly_once() {
    let (mut app, _) = test_app_with(MemoryStore::default());
    assert_eq!(app.gate.view(app.splash_done), GateView::Splash);

    skip_splash(&mut app);
    assert_eq!(app.gate.view(app.splash_done), GateView::VerificationPrompt);
}

#[test]
fn splash_auto_completes_after_the_fixed_intro() {
    let (mut app, _) = test_app_with(MemoryStore::default());

    app.update(Action::Tick);
    assert!(!app.splash_done);

    app.splash_start = Instant::now() - SPLASH_DURATION;
    app.update(Action::Tick);
    assert!(app.splash_done);
}

#[test]
fn grant_mounts_the_routed_tree_at_home() {
    let (mut app, _) = test_app_with(MemoryStore::default());
    skip_splash(&mut app);

    app.update(Action::Grant);
    assert_eq!(app.gate.view(app.splash_done), GateView::Application);
    assert!(app.routes_mounted);
    assert_eq!(app.route, Route::Home);
    // The welcome toast is queued (second surface).
    assert!(app.toast.is_some());
}

#[test]
fn start_path_overrides_the_mount_destination() {
    let (mut app, _) = test_app_with(granted_store());
    app.start_route = Some(Route::parse("/video/3"));
    skip_splash(&mut app);

    assert_eq!(app.route, Route::Video("3".to_string()));
}

#[test]
fn deny_is_terminal_for_the_session() {
    let (mut app, _) = test_app_with(MemoryStore::default());
    skip_splash(&mut app);

    app.update(Action::Deny);
    assert_eq!(app.gate.view(app.splash_done), GateView::AccessDenied);

    // No way back from the denial screen.
    app.update(Action::Grant);
    app.update(Action::DrillIn);
    assert_eq!(app.gate.view(app.splash_done), GateView::AccessDenied);
    assert!(!app.routes_mounted);
}

#[test]
fn already_verified_visitors_go_straight_to_the_app() {
    let (app, _) = granted_app();
    assert_eq!(app.gate.view(app.splash_done), GateView::Application);
    assert!(app.routes_mounted);
}

// ── Offer orchestration ─────────────────────────────────────────

#[test]
fn offer_auto_shows_after_the_delay_and_not_before() {
    let (mut app, _) = granted_app();
    let now = Instant::now();

    assert!(!app.offer.poll(now));
    assert_eq!(app.offer.surface(&app.route), OfferSurface::Trigger);

    assert!(app.offer.poll(now + Duration::from_millis(600)));
    assert_eq!(app.offer.surface(&app.route), OfferSurface::Overlay);
}

#[test]
fn closing_the_overlay_suppresses_further_auto_shows() {
    let (mut app, _) = granted_app();
    let now = Instant::now();
    assert!(app.offer.poll(now + Duration::from_millis(600)));

    // Esc lands in the overlay intercept and closes it.
    app.update(Action::NavigateBack);
    assert_eq!(app.offer.surface(&app.route), OfferSurface::Trigger);
    assert_eq!(app.route, Route::Home);

    // Remount of the route tree in the same session: the flag wins.
    app.offer.mount(&Route::Home, Instant::now());
    assert!(!app.offer.poll(Instant::now() + Duration::from_secs(10)));
}

#[test]
fn trigger_opens_without_consulting_the_flag() {
    let (mut app, _) = granted_app();
    let now = Instant::now();
    assert!(app.offer.poll(now + Duration::from_millis(600)));
    app.update(Action::CloseOffer);

    app.update(Action::OpenOffer);
    assert_eq!(app.offer.surface(&app.route), OfferSurface::Overlay);
}

#[test]
fn admin_routes_hide_every_offer_surface() {
    let (mut app, _) = granted_app();
    app.update(Action::GoAdmin);

    assert_eq!(app.route, Route::Admin);
    assert!(app.route.under_admin());
    assert_eq!(app.offer.surface(&app.route), OfferSurface::Hidden);

    // The pending timer died when navigation crossed into admin.
    assert!(!app.offer.poll(Instant::now() + Duration::from_secs(10)));
}

#[test]
fn open_offer_is_ignored_on_admin_routes() {
    let (mut app, _) = granted_app();
    app.update(Action::GoAdmin);
    app.update(Action::OpenOffer);
    assert_eq!(app.offer.surface(&app.route), OfferSurface::Hidden);
    assert!(!app.offer.is_visible());
}

// ── Lazy admin module ───────────────────────────────────────────

#[test]
fn admin_module_is_requested_once_and_only_on_navigation() {
    let (mut app, begins) = granted_app();
    assert_eq!(begins.load(Ordering::SeqCst), 0);

    app.update(Action::GoAdmin);
    assert_eq!(*app.admin.state(), LoadState::Pending);
    assert_eq!(begins.load(Ordering::SeqCst), 1);

    // Leaving and coming back must not re-request.
    app.update(Action::NavigateBack);
    app.update(Action::GoAdmin);
    assert_eq!(begins.load(Ordering::SeqCst), 1);
}

#[test]
fn admin_delivery_transitions_to_ready() {
    let (mut app, _) = granted_app();
    app.update(Action::GoAdmin);

    app.on_admin_loaded(Ok(AdminModule::demo()));
    assert!(app.admin.is_ready());
}

#[test]
fn admin_load_failure_is_sticky_and_surfaces_a_toast() {
    let (mut app, _) = granted_app();
    app.update(Action::GoAdmin);
    app.toast = None;

    app.on_admin_loaded(Err("chunk fetch failed".to_string()));
    assert_eq!(
        *app.admin.state(),
        LoadState::Failed("chunk fetch failed".to_string())
    );
    assert!(app.toast.is_some());

    // A late success is dropped; the composer does not retry.
    app.on_admin_loaded(Ok(AdminModule::demo()));
    assert!(!app.admin.is_ready());
}

// ── Path entry ──────────────────────────────────────────────────

fn type_path(app: &mut App, path: &str) {
    app.update(Action::StartPathEntry);
    assert_eq!(app.input_mode, InputMode::PathEntry);
    app.path_buffer.clear();
    for ch in path.chars() {
        app.update(Action::PathInput(ch));
    }
    app.update(Action::PathConfirm);
}

#[test]
fn path_entry_reaches_the_video_route() {
    let (mut app, _) = granted_app();
    type_path(&mut app, "/video/5");
    assert_eq!(app.route, Route::Video("5".to_string()));
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn path_entry_reaches_admin_login_and_requests_the_module() {
    let (mut app, begins) = granted_app();
    type_path(&mut app, "/admin/login");
    assert_eq!(app.route, Route::AdminLogin);
    assert_eq!(begins.load(Ordering::SeqCst), 1);
}

#[test]
fn unknown_paths_land_on_not_found() {
    let (mut app, _) = granted_app();
    type_path(&mut app, "/definitely/not/a/page");
    assert_eq!(
        app.route,
        Route::NotFound("/definitely/not/a/page".to_string())
    );
}

#[test]
fn backspace_edits_the_path_buffer() {
    let (mut app, _) = granted_app();
    app.update(Action::StartPathEntry);
    app.update(Action::PathInput('a'));
    app.update(Action::PathInput('\x08'));
    app.update(Action::PathInput('\x08'));
    assert_eq!(app.path_buffer, "");
    app.update(Action::PathCancel);
    assert_eq!(app.input_mode, InputMode::Normal);
}

// ── Embeds and the janitor ──────────────────────────────────────

#[test]
fn video_page_embeds_are_swept_on_mount() {
    let (mut app, _) = granted_app();
    app.update(Action::DrillIn);
    assert_eq!(app.route, Route::Video("1".to_string()));

    let labels: Vec<&str> = app.badges.visible_labels().collect();
    assert_eq!(labels, vec!["embedded via streamcdn \u{00B7} clip 1"]);
    assert_eq!(app.janitor.removed_total(), 1);
}

#[test]
fn leaving_the_video_page_clears_its_embeds() {
    let (mut app, _) = granted_app();
    app.update(Action::DrillIn);
    app.update(Action::NavigateBack);
    assert_eq!(app.badges.visible_labels().count(), 0);
}

// ── Toast surfaces ──────────────────────────────────────────────

#[test]
fn purchase_ticker_rotates_on_its_own_timer() {
    let (mut app, _) = granted_app();
    assert_eq!(app.purchase_index, 0);

    for _ in 0..=PURCHASE_ROTATE_TICKS {
        app.update(Action::Tick);
    }
    assert_eq!(app.purchase_index, 1 % PURCHASES.len());
}

#[test]
fn transient_toast_expires() {
    let (mut app, _) = granted_app();
    app.push_toast("saved");
    assert!(app.toast.is_some());

    for _ in 0..=super::TOAST_TICKS {
        app.update(Action::Tick);
    }
    assert!(app.toast.is_none());
}

// ── Help overlay ────────────────────────────────────────────────

#[test]
fn help_overlay_intercepts_input() {
    let (mut app, _) = granted_app();
    app.update(Action::ToggleHelp);
    assert!(app.show_help);

    let cursor = app.home_cursor;
    app.update(Action::MoveDown);
    assert!(!app.show_help);
    assert_eq!(app.home_cursor, cursor);
}
