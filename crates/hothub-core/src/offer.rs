use std::time::{Duration, Instant};

use crate::route::Route;
use crate::storage::{KvStore, POPUP_SHOWN_KEY, SHOWN_SENTINEL};

/// Delay between entering an eligible route and the overlay auto-showing.
pub const AUTO_SHOW_DELAY: Duration = Duration::from_millis(500);

/// What the offer layer contributes on the current route.
///
/// One variant at a time: the overlay and its floating trigger are never
/// simultaneously visible, and admin routes get neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferSurface {
    Overlay,
    Trigger,
    Hidden,
}

/// Auto-shows the promotional overlay once per session, and arbitrates the
/// overlay vs. floating-trigger visibility on every route.
///
/// The arming rule mirrors an effect keyed on admin-ness: the one-shot timer
/// is armed when the route tree mounts outside the admin prefix (or when
/// navigation re-enters non-admin scope), keeps running across non-admin
/// route changes, and is canceled the moment navigation crosses into admin.
pub struct OfferOrchestrator<S: KvStore> {
    ephemeral: S,
    visible: bool,
    deadline: Option<Instant>,
    in_admin_scope: bool,
}

impl<S: KvStore> OfferOrchestrator<S> {
    pub fn new(ephemeral: S) -> Self {
        Self {
            ephemeral,
            visible: false,
            deadline: None,
            in_admin_scope: false,
        }
    }

    fn already_shown(&self) -> bool {
        self.ephemeral.get(POPUP_SHOWN_KEY).as_deref() == Some(SHOWN_SENTINEL)
    }

    fn mark_shown(&mut self) {
        self.ephemeral.set(POPUP_SHOWN_KEY, SHOWN_SENTINEL);
    }

    fn arm(&mut self, now: Instant) {
        if !self.already_shown() {
            self.deadline = Some(now + AUTO_SHOW_DELAY);
        }
    }

    /// Route-tree mount (or remount). Reads the session flag once and arms
    /// the auto-show timer if eligible.
    pub fn mount(&mut self, route: &Route, now: Instant) {
        self.deadline = None;
        self.in_admin_scope = route.under_admin();
        if !self.in_admin_scope {
            self.arm(now);
        }
    }

    /// Route change within a mounted tree. Only a change of admin-ness
    /// disturbs the timer: leaving non-admin scope cancels it, re-entering
    /// re-arms it, and non-admin to non-admin navigation lets it run.
    pub fn enter_route(&mut self, route: &Route, now: Instant) {
        let admin = route.under_admin();
        if admin == self.in_admin_scope {
            return;
        }
        self.in_admin_scope = admin;
        self.deadline = None;
        if !admin {
            self.arm(now);
        }
    }

    /// Deadline check, driven by the shell tick. Returns true when the
    /// overlay just auto-showed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.visible = true;
                self.mark_shown();
                true
            }
            _ => false,
        }
    }

    /// Manual open from the floating trigger. Does not consult or mutate the
    /// session flag.
    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Manual close. Persists the session flag so no further auto-show
    /// happens this session, and cancels any still-pending timer.
    pub fn close(&mut self) {
        self.visible = false;
        self.deadline = None;
        self.mark_shown();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn surface(&self, route: &Route) -> OfferSurface {
        if route.under_admin() {
            OfferSurface::Hidden
        } else if self.visible {
            OfferSurface::Overlay
        } else {
            OfferSurface::Trigger
        }
    }
}
