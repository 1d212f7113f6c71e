use crate::sanitize::{HostSurface, Janitor};
use crate::storage::{KvStore, THEME_KEY};

/// Stored theme choice. Only an explicit `"light"` lifts the dark marker;
/// absent or unrecognized values keep it — fail-safe default-to-dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// The document-root style scope: the one place the dark marker lives.
/// Only bootstrap ever touches it.
pub trait StyleScope {
    fn set_dark_marker(&mut self, on: bool);
}

/// One-time startup effects, in mount order: resolve and apply the stored
/// theme, then attach the overlay janitor (which runs its initial sweep).
/// Returns the resolved preference and the live janitor; the caller feeds
/// the janitor subsequent mutation batches and drops it on unmount.
pub fn bootstrap<S, D, H>(store: &S, scope: &mut D, surface: &mut H) -> (ThemePreference, Janitor)
where
    S: KvStore,
    D: StyleScope + ?Sized,
    H: HostSurface + ?Sized,
{
    let pref = ThemePreference::from_stored(store.get(THEME_KEY).as_deref());
    scope.set_dark_marker(pref.is_dark());
    tracing::info!("theme applied: {pref:?}");

    (pref, Janitor::attach(surface))
}
