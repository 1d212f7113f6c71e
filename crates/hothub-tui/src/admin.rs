use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;

use hothub_core::ModuleLoader;

/// The admin subtree's view-model. Constructed only when the module loads —
/// visitors who never open `/admin` never pay for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminModule {
    pub total_videos: usize,
    pub pending_review: usize,
    pub flagged_comments: usize,
    pub recent_uploads: Vec<String>,
}

impl AdminModule {
    pub fn demo() -> Self {
        Self {
            total_videos: 8,
            pending_review: 2,
            flagged_comments: 5,
            recent_uploads: vec![
                "Neon Rain Walkthrough".to_string(),
                "Desert Road Sunrise".to_string(),
                "Rooftop Golden Hour".to_string(),
            ],
        }
    }
}

/// Result delivered back to the event loop when the module finishes loading.
pub type AdminLoadResult = Result<AdminModule, String>;

/// Loads the admin module on a background task after a short delay, standing
/// in for a deferred chunk fetch. Delivery goes through the shell's channel;
/// the lazy handle transitions when the loop drains it.
pub struct TokioModuleLoader {
    tx: UnboundedSender<AdminLoadResult>,
    delay: Duration,
}

impl TokioModuleLoader {
    pub fn new(tx: UnboundedSender<AdminLoadResult>, delay: Duration) -> Self {
        Self { tx, delay }
    }
}

impl ModuleLoader for TokioModuleLoader {
    fn begin(&mut self) {
        let tx = self.tx.clone();
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(Ok(AdminModule::demo()));
        });
    }
}
