//! Carousel controller.
//!
//! Owns a cyclic slide index, drops navigation while a transition settles,
//! and publishes the role of every slide after each accepted move.

use tracing::{debug, warn};

use crate::constants::TRANSITION_DURATION;
use crate::input::Command;
use crate::state::{CarouselState, Role};
use crate::timer::OneShot;

/// Everything a renderer needs after an index change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleFrame {
    pub current_index: usize,
    pub roles: Vec<Role>,
}

impl RoleFrame {
    pub fn compute(current_index: usize, slide_count: usize) -> Self {
        let roles = (0..slide_count)
            .map(|index| Role::of(index, current_index, slide_count))
            .collect();
        Self { current_index, roles }
    }

    pub fn role(&self, index: usize) -> Role {
        self.roles.get(index).copied().unwrap_or(Role::None)
    }

    /// Active marker for an indicator or caption mirrored 1:1 with the slides.
    pub fn is_marked(&self, index: usize) -> bool {
        index == self.current_index
    }

    pub fn markers(&self, len: usize) -> Vec<bool> {
        (0..len).map(|index| self.is_marked(index)).collect()
    }
}

/// Render boundary. Receives frames, never touches controller state.
pub trait RoleSink {
    fn publish(&mut self, frame: &RoleFrame);
}

impl RoleSink for Vec<RoleFrame> {
    fn publish(&mut self, frame: &RoleFrame) {
        self.push(frame.clone());
    }
}

/// Active markers of the indicator dots and captions, as last published.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerSet {
    pub indicators: Vec<bool>,
    pub captions: Vec<bool>,
}

impl MarkerSet {
    pub fn new(indicator_count: usize, caption_count: usize) -> Self {
        Self {
            indicators: vec![false; indicator_count],
            captions: vec![false; caption_count],
        }
    }

    pub fn active_indicator(&self) -> Option<usize> {
        self.indicators.iter().position(|marked| *marked)
    }

    pub fn active_caption(&self) -> Option<usize> {
        self.captions.iter().position(|marked| *marked)
    }
}

impl RoleSink for MarkerSet {
    fn publish(&mut self, frame: &RoleFrame) {
        self.indicators = frame.markers(self.indicators.len());
        self.captions = frame.markers(self.captions.len());
    }
}

#[derive(Debug)]
pub struct Carousel {
    slide_count: usize,
    state: CarouselState,
    settle_delay: f32,
    unlock: OneShot,
    torn_down: bool,
}

impl Carousel {
    pub fn new(slide_count: usize) -> Self {
        Self::with_settle_delay(slide_count, TRANSITION_DURATION)
    }

    pub fn with_settle_delay(slide_count: usize, settle_delay: f32) -> Self {
        Self {
            slide_count,
            state: CarouselState::default(),
            settle_delay,
            unlock: OneShot::new(),
            torn_down: false,
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    /// No slides, or already torn down.
    pub fn is_inert(&self) -> bool {
        self.slide_count == 0 || self.torn_down
    }

    /// Frame rendered once when the slide collection is first observed.
    pub fn initial_frame(&self) -> Option<RoleFrame> {
        if self.is_inert() {
            return None;
        }
        Some(self.publish_roles())
    }

    pub fn next(&mut self) -> Option<RoleFrame> {
        if self.is_inert() {
            return None;
        }
        let target = (self.state.current_index + 1) % self.slide_count;
        self.transition(target, "next")
    }

    pub fn previous(&mut self) -> Option<RoleFrame> {
        if self.is_inert() {
            return None;
        }
        let target = (self.state.current_index + self.slide_count - 1) % self.slide_count;
        self.transition(target, "previous")
    }

    pub fn go_to(&mut self, target: usize) -> Option<RoleFrame> {
        if self.is_inert() {
            return None;
        }
        if target >= self.slide_count {
            warn!(index = target, slide_count = self.slide_count, "go_to target out of range, ignored");
            return None;
        }
        if target == self.state.current_index {
            return None;
        }
        self.transition(target, "go_to")
    }

    fn transition(&mut self, target: usize, origin: &'static str) -> Option<RoleFrame> {
        if self.state.is_animating {
            debug!(origin, "carousel busy, input dropped");
            return None;
        }

        self.state.is_animating = true;
        self.state.current_index = target;
        self.unlock.arm(self.settle_delay);

        Some(self.publish_roles())
    }

    pub fn publish_roles(&self) -> RoleFrame {
        debug!(current_index = self.state.current_index, "publishing slide roles");
        RoleFrame::compute(self.state.current_index, self.slide_count)
    }

    /// Feeds elapsed seconds to the settle timer.
    pub fn advance(&mut self, dt: f32) {
        if let Some(generation) = self.unlock.advance(dt) {
            self.state.is_animating = false;
            debug!(generation, "transition settled");
        }
    }

    /// Cancels any pending unlock; the controller stays inert afterwards.
    pub fn teardown(&mut self) {
        self.unlock.cancel();
        self.torn_down = true;
    }

    pub fn dispatch(&mut self, command: Command) -> Option<RoleFrame> {
        match command {
            Command::Next => self.next(),
            Command::Previous => self.previous(),
            Command::GoTo(target) => self.go_to(target),
        }
    }

    /// Applies `command` and hands the frame to `sink` when it was accepted.
    pub fn dispatch_to(&mut self, command: Command, sink: &mut impl RoleSink) -> bool {
        match self.dispatch(command) {
            Some(frame) => {
                sink.publish(&frame);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, SwipeTracker};
    use proptest::prelude::*;

    fn settle(carousel: &mut Carousel) {
        carousel.advance(TRANSITION_DURATION);
    }

    fn count(frame: &RoleFrame, role: Role) -> usize {
        frame.roles.iter().filter(|r| **r == role).count()
    }

    #[test]
    fn starts_at_first_slide() {
        let carousel = Carousel::new(5);
        assert_eq!(carousel.state(), CarouselState { current_index: 0, is_animating: false });

        let frame = carousel.initial_frame().unwrap();
        assert_eq!(frame.roles, vec![Role::Active, Role::Next, Role::None, Role::None, Role::Prev]);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0);
        assert!(carousel.initial_frame().is_none());
        assert!(carousel.next().is_none());
        assert!(carousel.previous().is_none());
        assert!(carousel.go_to(0).is_none());
        assert!(!carousel.is_animating());
    }

    #[test]
    fn next_wraps_around() {
        let mut carousel = Carousel::new(3);
        for expected in [1, 2, 0, 1] {
            let frame = carousel.next().unwrap();
            assert_eq!(frame.current_index, expected);
            settle(&mut carousel);
        }
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let mut carousel = Carousel::new(4);
        let frame = carousel.previous().unwrap();
        assert_eq!(frame.current_index, 3);
        assert_eq!(frame.role(2), Role::Prev);
        assert_eq!(frame.role(0), Role::Next);
    }

    #[test]
    fn input_during_lockout_is_dropped() {
        let mut carousel = Carousel::new(5);
        assert!(carousel.next().is_some());
        assert!(carousel.next().is_none());
        assert!(carousel.previous().is_none());
        assert!(carousel.go_to(3).is_none());
        assert_eq!(carousel.current_index(), 1);

        carousel.advance(TRANSITION_DURATION / 2.0);
        assert!(carousel.is_animating());
        assert!(carousel.next().is_none());

        settle(&mut carousel);
        assert!(!carousel.is_animating());
        assert_eq!(carousel.next().unwrap().current_index, 2);
    }

    #[test]
    fn dropped_input_is_not_replayed_after_unlock() {
        let mut carousel = Carousel::new(5);
        carousel.next();
        carousel.next();
        carousel.next();
        settle(&mut carousel);
        settle(&mut carousel);
        assert_eq!(carousel.current_index(), 1);
        assert!(!carousel.is_animating());
    }

    #[test]
    fn go_to_current_is_a_no_op() {
        let mut carousel = Carousel::new(4);
        carousel.go_to(2);
        settle(&mut carousel);

        let before = carousel.state();
        assert!(carousel.go_to(2).is_none());
        assert_eq!(carousel.state(), before);
        assert!(!carousel.is_animating());
    }

    #[test]
    fn go_to_jumps_directly() {
        let mut carousel = Carousel::new(6);
        let frame = carousel.go_to(4).unwrap();
        assert_eq!(frame.current_index, 4);
        assert_eq!(frame.role(3), Role::Prev);
        assert_eq!(frame.role(5), Role::Next);
        assert!(carousel.is_animating());
    }

    #[test]
    fn out_of_range_go_to_is_ignored() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.go_to(7).is_none());
        assert_eq!(carousel.current_index(), 0);
        assert!(!carousel.is_animating());
    }

    #[test]
    fn single_slide_is_always_active() {
        let mut carousel = Carousel::new(1);
        assert_eq!(carousel.initial_frame().unwrap().roles, vec![Role::Active]);

        let frame = carousel.next().unwrap();
        assert_eq!(frame.current_index, 0);
        assert_eq!(frame.roles, vec![Role::Active]);
    }

    #[test]
    fn two_slides_alternate_active_and_prev() {
        let mut carousel = Carousel::new(2);
        assert_eq!(carousel.initial_frame().unwrap().roles, vec![Role::Active, Role::Prev]);

        let frame = carousel.next().unwrap();
        assert_eq!(frame.roles, vec![Role::Prev, Role::Active]);
        settle(&mut carousel);

        let frame = carousel.next().unwrap();
        assert_eq!(frame.roles, vec![Role::Active, Role::Prev]);
    }

    #[test]
    fn three_slides_have_no_hidden_slide() {
        let frame = RoleFrame::compute(1, 3);
        assert_eq!(frame.roles, vec![Role::Prev, Role::Active, Role::Next]);
    }

    #[test]
    fn markers_follow_current_index() {
        let frame = RoleFrame::compute(2, 4);
        assert_eq!(frame.markers(4), vec![false, false, true, false]);
        assert_eq!(frame.markers(2), vec![false, false]);
    }

    #[test]
    fn marker_set_follows_published_frames() {
        let mut carousel = Carousel::new(4);
        let mut markers = MarkerSet::new(4, 4);
        assert_eq!(markers.active_indicator(), None);

        markers.publish(&carousel.initial_frame().unwrap());
        assert_eq!(markers.indicators, vec![true, false, false, false]);

        assert!(carousel.dispatch_to(Command::GoTo(3), &mut markers));
        assert_eq!(markers.indicators, vec![false, false, false, true]);
        assert_eq!(markers.captions, markers.indicators);
        assert_eq!(markers.active_caption(), Some(3));

        // Dropped input leaves the markers where they were
        assert!(!carousel.dispatch_to(Command::Next, &mut markers));
        assert_eq!(markers.active_indicator(), Some(3));
    }

    #[test]
    fn marker_set_tolerates_shorter_collections() {
        let mut markers = MarkerSet::new(2, 0);
        markers.publish(&RoleFrame::compute(3, 5));
        assert_eq!(markers.indicators, vec![false, false]);
        assert!(markers.captions.is_empty());
    }

    #[test]
    fn teardown_cancels_pending_unlock() {
        let mut carousel = Carousel::new(3);
        carousel.next();
        carousel.teardown();
        settle(&mut carousel);

        assert!(carousel.is_inert());
        assert!(carousel.is_animating());
        assert!(carousel.next().is_none());
        assert!(carousel.initial_frame().is_none());
    }

    #[test]
    fn dispatch_to_publishes_accepted_commands_only() {
        let mut carousel = Carousel::new(4);
        let mut sink: Vec<RoleFrame> = Vec::new();

        assert!(carousel.dispatch_to(Command::GoTo(2), &mut sink));
        assert!(!carousel.dispatch_to(Command::Next, &mut sink));
        settle(&mut carousel);
        assert!(carousel.dispatch_to(Command::Previous, &mut sink));

        let indices: Vec<usize> = sink.iter().map(|f| f.current_index).collect();
        assert_eq!(indices, vec![2, 1]);
    }

    #[test]
    fn arrow_keys_round_trip() {
        let mut carousel = Carousel::new(5);
        let start = carousel.current_index();

        carousel.dispatch(Key::from("ArrowRight").carousel_command().unwrap());
        settle(&mut carousel);
        carousel.dispatch(Key::from("ArrowLeft").carousel_command().unwrap());
        settle(&mut carousel);

        assert_eq!(carousel.current_index(), start);
    }

    #[test]
    fn swipe_triggers_exactly_one_next() {
        let mut carousel = Carousel::new(5);
        let mut sink: Vec<RoleFrame> = Vec::new();
        let mut tracker = SwipeTracker::default();

        tracker.touch_start(300.0);
        if let Some(command) = tracker.touch_end(200.0) {
            carousel.dispatch_to(command, &mut sink);
        }
        settle(&mut carousel);
        tracker.touch_start(300.0);
        if let Some(command) = tracker.touch_end(280.0) {
            carousel.dispatch_to(command, &mut sink);
        }

        assert_eq!(sink.len(), 1);
        assert_eq!(carousel.current_index(), 1);
    }

    proptest! {
        #[test]
        fn settled_nexts_count_modulo(n in 1usize..16, k in 0usize..48) {
            let mut carousel = Carousel::new(n);
            for _ in 0..k {
                carousel.next();
                settle(&mut carousel);
            }
            prop_assert_eq!(carousel.current_index(), k % n);
        }

        #[test]
        fn previous_undoes_next(n in 1usize..16, start in 0usize..16) {
            let mut carousel = Carousel::new(n);
            carousel.go_to(start % n);
            settle(&mut carousel);
            let before = carousel.current_index();

            carousel.next();
            settle(&mut carousel);
            carousel.previous();
            settle(&mut carousel);

            prop_assert_eq!(carousel.current_index(), before);
        }

        #[test]
        fn busy_next_changes_index_once(n in 2usize..16) {
            let mut carousel = Carousel::new(n);
            carousel.next();
            carousel.next();
            prop_assert_eq!(carousel.current_index(), 1);
        }

        #[test]
        fn large_carousels_have_one_of_each_role(n in 4usize..32, current in 0usize..32) {
            let frame = RoleFrame::compute(current % n, n);
            prop_assert_eq!(count(&frame, Role::Active), 1);
            prop_assert_eq!(count(&frame, Role::Prev), 1);
            prop_assert_eq!(count(&frame, Role::Next), 1);
            prop_assert_eq!(count(&frame, Role::None), n - 3);
        }

        #[test]
        fn two_slides_never_show_next(steps in 0usize..12) {
            let mut carousel = Carousel::new(2);
            for _ in 0..steps {
                carousel.next();
                settle(&mut carousel);
            }
            let frame = carousel.publish_roles();
            prop_assert_eq!(count(&frame, Role::Next), 0);
            prop_assert_eq!(count(&frame, Role::Active), 1);
            prop_assert_eq!(count(&frame, Role::Prev), 1);
        }
    }
}
