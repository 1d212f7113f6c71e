//! Overlay janitor: strips elements that third-party embeds inject over the
//! shell, identified by their inline style fingerprint.

/// The layering index injected badges use to sit above everything else.
pub const MAX_LAYER_INDEX: i64 = 2_147_483_647;

/// The bottom offset the unwanted badges pin themselves to.
pub const PINNED_BOTTOM: &str = "1rem";

/// Inline style properties of an injected element, as reported by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    pub position: Option<String>,
    pub bottom: Option<String>,
    pub z_index: Option<i64>,
}

impl InlineStyle {
    /// The fingerprint of an unwanted overlay: fixed positioning, bottom
    /// pinned to [`PINNED_BOTTOM`], and the maximal layering index — all
    /// three at once. Anything less stays untouched.
    pub fn is_unwanted_overlay(&self) -> bool {
        self.position.as_deref() == Some("fixed")
            && self.bottom.as_deref() == Some(PINNED_BOTTOM)
            && self.z_index == Some(MAX_LAYER_INDEX)
    }
}

/// Mutable surface that third-party embeds inject elements into.
///
/// The shell only ever enumerates and removes; it never inserts. Hosts
/// without injected content can use [`NoopSurface`].
pub trait HostSurface {
    /// Snapshot of currently injected elements as (id, style) pairs.
    fn injected(&self) -> Vec<(u64, InlineStyle)>;
    fn remove(&mut self, id: u64);
}

/// A host with nothing to sweep. Keeps non-host environments (tests of
/// unrelated components) free of surface plumbing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSurface;

impl HostSurface for NoopSurface {
    fn injected(&self) -> Vec<(u64, InlineStyle)> {
        Vec::new()
    }

    fn remove(&mut self, _id: u64) {}
}

/// Remove every fingerprint match from the surface. Returns how many were
/// removed.
pub fn sweep<H: HostSurface + ?Sized>(surface: &mut H) -> usize {
    let doomed: Vec<u64> = surface
        .injected()
        .into_iter()
        .filter(|(_, style)| style.is_unwanted_overlay())
        .map(|(id, _)| id)
        .collect();
    for id in &doomed {
        surface.remove(*id);
    }
    if !doomed.is_empty() {
        tracing::debug!("janitor removed {} injected overlay(s)", doomed.len());
    }
    doomed.len()
}

/// Sweeps a host surface on attach and after every mutation batch, for the
/// lifetime of the shell. Dropping the janitor is the teardown; there is no
/// other disconnect step.
#[derive(Debug, Default)]
pub struct Janitor {
    removed_total: usize,
}

impl Janitor {
    /// Run the initial sweep and start watching.
    pub fn attach<H: HostSurface + ?Sized>(surface: &mut H) -> Self {
        let mut janitor = Self { removed_total: 0 };
        janitor.removed_total += sweep(surface);
        janitor
    }

    /// Re-run the sweep after an observed mutation batch.
    pub fn on_mutation<H: HostSurface + ?Sized>(&mut self, surface: &mut H) {
        self.removed_total += sweep(surface);
    }

    pub fn removed_total(&self) -> usize {
        self.removed_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeSurface {
        next_id: u64,
        items: Vec<(u64, InlineStyle)>,
    }

    impl FakeSurface {
        fn inject(&mut self, style: InlineStyle) -> u64 {
            self.next_id += 1;
            self.items.push((self.next_id, style));
            self.next_id
        }
    }

    impl HostSurface for FakeSurface {
        fn injected(&self) -> Vec<(u64, InlineStyle)> {
            self.items.clone()
        }

        fn remove(&mut self, id: u64) {
            self.items.retain(|(i, _)| *i != id);
        }
    }

    fn unwanted() -> InlineStyle {
        InlineStyle {
            position: Some("fixed".to_string()),
            bottom: Some(PINNED_BOTTOM.to_string()),
            z_index: Some(MAX_LAYER_INDEX),
        }
    }

    #[test]
    fn fingerprint_requires_all_three_properties() {
        assert!(unwanted().is_unwanted_overlay());

        let near_misses = [
            InlineStyle {
                position: Some("absolute".to_string()),
                ..unwanted()
            },
            InlineStyle {
                bottom: Some("2rem".to_string()),
                ..unwanted()
            },
            InlineStyle {
                z_index: Some(1000),
                ..unwanted()
            },
            InlineStyle::default(),
        ];
        for style in near_misses {
            assert!(!style.is_unwanted_overlay(), "{style:?}");
        }
    }

    #[test]
    fn attach_sweeps_preexisting_matches() {
        let mut surface = FakeSurface::default();
        surface.inject(unwanted());
        let benign = surface.inject(InlineStyle::default());

        let janitor = Janitor::attach(&mut surface);
        assert_eq!(janitor.removed_total(), 1);
        assert_eq!(surface.items.len(), 1);
        assert_eq!(surface.items[0].0, benign);
    }

    #[test]
    fn mutation_batches_are_re_swept() {
        let mut surface = FakeSurface::default();
        let mut janitor = Janitor::attach(&mut surface);

        surface.inject(unwanted());
        surface.inject(unwanted());
        surface.inject(InlineStyle {
            position: Some("fixed".to_string()),
            ..InlineStyle::default()
        });
        janitor.on_mutation(&mut surface);

        assert_eq!(janitor.removed_total(), 2);
        assert_eq!(surface.items.len(), 1);

        // Quiet batches are a no-op.
        janitor.on_mutation(&mut surface);
        assert_eq!(janitor.removed_total(), 2);
    }

    #[test]
    fn noop_surface_sweeps_clean() {
        let mut surface = NoopSurface;
        assert_eq!(sweep(&mut surface), 0);
    }
}
