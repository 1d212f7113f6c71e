//! Sequencing logic for the hothub shell: the age-verification gate, the
//! session-scoped offer popup, path routing with an on-demand admin subtree,
//! and the one-time bootstrap effects (theme, overlay janitor).
//!
//! This crate is UI-free. The terminal shell lives in `hothub-tui`; anything
//! it renders is decided here, against injected storage and host seams, so
//! every view transition is testable without a terminal.

use thiserror::Error;

pub mod bootstrap;
pub mod lazy;
pub mod offer;
pub mod route;
pub mod sanitize;
pub mod storage;
pub mod verification;

// Re-export for convenience
pub use bootstrap::{StyleScope, ThemePreference, bootstrap};
pub use lazy::{LazyModule, LoadState, ModuleLoader};
pub use offer::{AUTO_SHOW_DELAY, OfferOrchestrator, OfferSurface};
pub use route::Route;
pub use sanitize::{HostSurface, InlineStyle, Janitor, NoopSurface};
pub use storage::{FileStore, KvStore, MemoryStore};
pub use verification::{GateView, VerificationGate, VerificationStatus};

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("state serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
