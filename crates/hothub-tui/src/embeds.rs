use hothub_core::sanitize::{MAX_LAYER_INDEX, PINNED_BOTTOM};
use hothub_core::{HostSurface, InlineStyle};

/// Elements third-party video embeds inject around the player.
///
/// This is the shell's host surface: the janitor sweeps the unwanted
/// floating badges; whatever survives renders as provider attribution on the
/// video page.
#[derive(Debug, Default)]
pub struct EmbedSurface {
    next_id: u64,
    items: Vec<Badge>,
}

#[derive(Debug, Clone)]
struct Badge {
    id: u64,
    label: String,
    style: InlineStyle,
}

impl EmbedSurface {
    /// Page unmount: embeds take their elements with them.
    pub fn clear_embeds(&mut self) {
        self.items.clear();
    }

    /// Mount side effect of a video page: the provider injects a benign
    /// attribution line plus a floating promo badge pinned over the player.
    pub fn inject_for_embed(&mut self, video_id: &str) {
        self.push(format!("embedded via streamcdn · clip {video_id}"), InlineStyle::default());
        self.push(
            "GET OUR APP — TAP HERE".to_string(),
            InlineStyle {
                position: Some("fixed".to_string()),
                bottom: Some(PINNED_BOTTOM.to_string()),
                z_index: Some(MAX_LAYER_INDEX),
            },
        );
    }

    fn push(&mut self, label: String, style: InlineStyle) {
        self.next_id += 1;
        self.items.push(Badge {
            id: self.next_id,
            label,
            style,
        });
    }

    /// Labels of everything still standing after the janitor's sweeps.
    pub fn visible_labels(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|b| b.label.as_str())
    }
}

impl HostSurface for EmbedSurface {
    fn injected(&self) -> Vec<(u64, InlineStyle)> {
        self.items.iter().map(|b| (b.id, b.style.clone())).collect()
    }

    fn remove(&mut self, id: u64) {
        self.items.retain(|b| b.id != id);
    }
}
