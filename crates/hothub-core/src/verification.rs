use crate::storage::{KvStore, VERIFICATION_KEY};

/// Whether the visitor has confirmed they are of age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationStatus {
    /// Nothing persisted yet (or nothing readable) — the prompt must be shown.
    Unknown,
    Granted,
    Denied,
}

impl VerificationStatus {
    /// Decode a persisted value. Unreadable or unrecognized values fail open
    /// to `Unknown` so the visitor is re-prompted, never silently admitted
    /// or locked out.
    fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("granted") => Self::Granted,
            Some("denied") => Self::Denied,
            _ => Self::Unknown,
        }
    }
}

/// Which of the four exclusive shell views should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateView {
    Splash,
    AccessDenied,
    VerificationPrompt,
    Application,
}

/// The age-verification gate.
///
/// Hydrated once from durable storage at startup; `grant`/`deny` record the
/// visitor's decision exactly once per session and persist it. A persisted
/// denial is terminal: there is no in-session path back, only an external
/// reset of the state file.
pub struct VerificationGate<S: KvStore> {
    store: S,
    status: VerificationStatus,
    loading: bool,
}

impl<S: KvStore> VerificationGate<S> {
    /// The gate starts in the loading state; callers see `Splash` until
    /// [`hydrate`](Self::hydrate) has run.
    pub fn new(store: S) -> Self {
        Self {
            store,
            status: VerificationStatus::Unknown,
            loading: true,
        }
    }

    /// Read the persisted status. One-shot; safe to call again but the
    /// shell only does so at mount.
    pub fn hydrate(&mut self) {
        self.status = VerificationStatus::from_stored(self.store.get(VERIFICATION_KEY).as_deref());
        self.loading = false;
        tracing::debug!("verification gate hydrated: {:?}", self.status);
    }

    pub fn status(&self) -> VerificationStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Record the visitor's confirmation. Only meaningful from `Unknown`;
    /// repeat calls and calls after a denial are ignored.
    pub fn grant(&mut self) {
        if self.status != VerificationStatus::Unknown {
            return;
        }
        self.status = VerificationStatus::Granted;
        self.store.set(VERIFICATION_KEY, "granted");
    }

    /// Record the visitor's refusal. Terminal for the session once set.
    pub fn deny(&mut self) {
        if self.status != VerificationStatus::Unknown {
            return;
        }
        self.status = VerificationStatus::Denied;
        self.store.set(VERIFICATION_KEY, "denied");
    }

    /// Resolve the current view. Priority order, first match wins:
    /// load in progress or splash not complete, then denial, then the
    /// prompt, then the routed application.
    pub fn view(&self, splash_done: bool) -> GateView {
        if self.loading || !splash_done {
            return GateView::Splash;
        }
        match self.status {
            VerificationStatus::Denied => GateView::AccessDenied,
            VerificationStatus::Unknown => GateView::VerificationPrompt,
            VerificationStatus::Granted => GateView::Application,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn gate_with(value: Option<&str>) -> VerificationGate<MemoryStore> {
        let mut store = MemoryStore::default();
        if let Some(v) = value {
            store.set(VERIFICATION_KEY, v);
        }
        let mut gate = VerificationGate::new(store);
        gate.hydrate();
        gate
    }

    #[test]
    fn loading_always_resolves_to_splash() {
        let gate = VerificationGate::new(MemoryStore::default());
        assert!(gate.is_loading());
        assert_eq!(gate.view(true), GateView::Splash);
        assert_eq!(gate.view(false), GateView::Splash);
    }

    #[test]
    fn splash_takes_priority_over_any_status() {
        for stored in [None, Some("granted"), Some("denied")] {
            let gate = gate_with(stored);
            assert_eq!(gate.view(false), GateView::Splash);
        }
    }

    #[test]
    fn each_status_resolves_to_exactly_one_view() {
        assert_eq!(gate_with(None).view(true), GateView::VerificationPrompt);
        assert_eq!(gate_with(Some("granted")).view(true), GateView::Application);
        assert_eq!(gate_with(Some("denied")).view(true), GateView::AccessDenied);
    }

    #[test]
    fn unrecognized_stored_value_fails_open_to_prompt() {
        let gate = gate_with(Some("yes please"));
        assert_eq!(gate.status(), VerificationStatus::Unknown);
        assert_eq!(gate.view(true), GateView::VerificationPrompt);
    }

    #[test]
    fn grant_persists_and_is_idempotent() {
        let mut gate = gate_with(None);
        gate.grant();
        gate.grant();
        assert_eq!(gate.status(), VerificationStatus::Granted);

        // A fresh gate over the same store hydrates straight to Granted.
        let mut rehydrated = VerificationGate::new(gate.store.clone());
        rehydrated.hydrate();
        assert_eq!(rehydrated.view(true), GateView::Application);
    }

    #[test]
    fn deny_is_terminal_within_the_session() {
        let mut gate = gate_with(None);
        gate.deny();
        assert_eq!(gate.view(true), GateView::AccessDenied);

        gate.grant();
        assert_eq!(gate.status(), VerificationStatus::Denied);
        assert_eq!(gate.view(true), GateView::AccessDenied);
    }

    #[test]
    fn external_reset_recovers_from_denial() {
        let mut store = MemoryStore::default();
        store.set(VERIFICATION_KEY, "denied");

        // Clearing the durable entry is the only escape hatch.
        store.remove(VERIFICATION_KEY);
        let mut gate = VerificationGate::new(store);
        gate.hydrate();
        assert_eq!(gate.view(true), GateView::VerificationPrompt);
    }
}
