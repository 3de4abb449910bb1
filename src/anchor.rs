use tracing::debug;

use crate::constants::DEEP_LINK_DELAY;
use crate::timer::OneShot;

/// In-page target of an href: `"#pricing"` gives `Some("pricing")`.
/// A bare `"#"` and anything not starting with `#` has no target.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// A deep link waiting for layout to settle before it is resolved.
///
/// Only the most recent hash is kept; a hash change while one is pending
/// replaces it and restarts the delay.
#[derive(Debug)]
pub struct DeepLink {
    delay: f32,
    target: Option<String>,
    timer: OneShot,
}

impl Default for DeepLink {
    fn default() -> Self {
        Self::new(DEEP_LINK_DELAY)
    }
}

impl DeepLink {
    pub fn new(delay: f32) -> Self {
        Self { delay, target: None, timer: OneShot::new() }
    }

    /// Called on page load and on every hash change.
    pub fn on_hash_change(&mut self, hash: &str) -> bool {
        let Some(id) = anchor_target(hash) else {
            return false;
        };

        debug!(id, "deep link scheduled");
        self.target = Some(id.to_owned());
        self.timer.arm(self.delay);
        true
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_armed()
    }

    /// Yields the target id once its delay has elapsed.
    pub fn advance(&mut self, dt: f32) -> Option<String> {
        self.timer.advance(dt)?;
        self.target.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_anchor_ids() {
        assert_eq!(anchor_target("#features"), Some("features"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("faq.html#install"), None);
    }

    #[test]
    fn deep_link_resolves_after_delay() {
        let mut link = DeepLink::default();
        assert!(link.on_hash_change("#download"));
        assert!(link.is_pending());
        assert_eq!(link.advance(0.05), None);
        assert_eq!(link.advance(0.05).as_deref(), Some("download"));
        assert!(!link.is_pending());
        assert_eq!(link.advance(1.0), None);
    }

    #[test]
    fn newer_hash_replaces_pending_one() {
        let mut link = DeepLink::default();
        link.on_hash_change("#first");
        link.advance(0.05);
        link.on_hash_change("#second");
        assert_eq!(link.advance(0.05), None);
        assert_eq!(link.advance(0.05).as_deref(), Some("second"));
    }

    #[test]
    fn empty_hash_schedules_nothing() {
        let mut link = DeepLink::default();
        assert!(!link.on_hash_change(""));
        assert!(!link.on_hash_change("#"));
        assert!(!link.is_pending());
    }
}
