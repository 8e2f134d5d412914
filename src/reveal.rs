//! Scroll-driven reveal state shared by every animated section.
//!
//! [`RevealState`] is a plain state machine: the reactive layer in
//! `app::reveal` feeds it scroll offsets, intersection reports and timer
//! fires, and executes the [`ChildTimer`] commands it hands back.

use std::time::Duration;

/// Offset (px) at or below which the page counts as "at the top".
pub const SCROLL_TOP_THRESHOLD: f64 = 50.0;

/// Delay between a section revealing and its dependent child animation.
pub const CHILD_ANIMATION_DELAY: Duration = Duration::from_millis(700);

/// Reports whether the page is scrolled near the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    threshold: f64,
}

impl ScrollTracker {
    pub const fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn at_top(&self, offset: f64) -> bool {
        offset <= self.threshold
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(SCROLL_TOP_THRESHOLD)
    }
}

/// Tunables for a nested region whose animation waits on the parent reveal.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildConfig {
    pub threshold: f64,
    pub root_margin: &'static str,
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    pub scroll_threshold: f64,
    /// Fraction of the section that must be visible.
    pub intersection_threshold: f64,
    /// CSS margin applied to the viewport, e.g. `-60px`.
    pub root_margin: &'static str,
    /// Refuse to reveal while the page is at the top.
    pub gate_on_scroll: bool,
    pub child: Option<ChildConfig>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: SCROLL_TOP_THRESHOLD,
            intersection_threshold: 0.3,
            root_margin: "0px",
            gate_on_scroll: true,
            child: None,
        }
    }
}

/// What the owner of the child timer has to do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildTimer {
    Keep,
    Schedule(Duration),
    Cancel,
}

#[derive(Debug, Clone)]
pub struct RevealState {
    config: RevealConfig,
    tracker: ScrollTracker,
    at_top: bool,
    can_animate: bool,
    visible: bool,
    section_in_view: bool,
    child_in_view: bool,
    pending_child: bool,
    child_timer: bool,
    child_animated: bool,
}

impl RevealState {
    pub fn new(config: RevealConfig) -> Self {
        let tracker = ScrollTracker::new(config.scroll_threshold);
        Self {
            config,
            tracker,
            at_top: true,
            can_animate: true,
            visible: false,
            section_in_view: false,
            child_in_view: false,
            pending_child: false,
            child_timer: false,
            child_animated: false,
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn can_animate(&self) -> bool {
        self.can_animate
    }

    pub fn at_top(&self) -> bool {
        self.at_top
    }

    pub fn child_pending(&self) -> bool {
        self.pending_child
    }

    pub fn child_scheduled(&self) -> bool {
        self.child_timer
    }

    pub fn child_animated(&self) -> bool {
        self.child_animated
    }

    /// Rendered fill width (percent) for a skill bar of the given level.
    pub fn child_fill(&self, level: u8) -> u8 {
        if self.child_animated {
            level.min(100)
        } else {
            0
        }
    }

    pub fn on_scroll(&mut self, offset: f64) -> ChildTimer {
        let was_at_top = self.at_top;
        self.at_top = self.tracker.at_top(offset);
        if self.at_top {
            return self.reset();
        }
        if was_at_top && self.section_in_view {
            // observers don't fire again for an element that stays in view
            return self.try_reveal();
        }
        ChildTimer::Keep
    }

    pub fn on_section_intersection(&mut self, intersecting: bool) -> ChildTimer {
        self.section_in_view = intersecting;
        if intersecting {
            self.try_reveal()
        } else {
            ChildTimer::Keep
        }
    }

    pub fn on_child_intersection(&mut self, intersecting: bool) -> ChildTimer {
        let Some(child) = &self.config.child else {
            return ChildTimer::Keep;
        };
        self.child_in_view = intersecting;
        if !intersecting || self.child_animated || self.child_timer {
            return ChildTimer::Keep;
        }
        if self.visible {
            self.child_timer = true;
            ChildTimer::Schedule(child.delay)
        } else {
            self.pending_child = true;
            ChildTimer::Keep
        }
    }

    /// Applies a fired child timer. Returns `false` for a fire nobody is
    /// waiting on any more.
    pub fn on_child_timer(&mut self) -> bool {
        if !self.child_timer {
            return false;
        }
        self.child_timer = false;
        self.pending_child = false;
        self.child_animated = true;
        true
    }

    pub fn teardown(&mut self) -> ChildTimer {
        self.pending_child = false;
        self.cancel_child_timer()
    }

    fn try_reveal(&mut self) -> ChildTimer {
        if !self.can_animate || self.visible {
            return ChildTimer::Keep;
        }
        if self.config.gate_on_scroll && self.at_top {
            return ChildTimer::Keep;
        }
        self.visible = true;
        self.can_animate = false;
        match &self.config.child {
            // the child observer stays quiet while its region never leaves view
            Some(child)
                if (self.pending_child || self.child_in_view)
                    && !self.child_timer
                    && !self.child_animated =>
            {
                self.child_timer = true;
                ChildTimer::Schedule(child.delay)
            }
            _ => ChildTimer::Keep,
        }
    }

    fn reset(&mut self) -> ChildTimer {
        self.visible = false;
        self.can_animate = true;
        self.pending_child = false;
        self.child_animated = false;
        self.cancel_child_timer()
    }

    fn cancel_child_timer(&mut self) -> ChildTimer {
        if self.child_timer {
            self.child_timer = false;
            ChildTimer::Cancel
        } else {
            ChildTimer::Keep
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gated() -> RevealState {
        RevealState::new(RevealConfig::default())
    }

    fn with_child() -> RevealState {
        RevealState::new(RevealConfig {
            intersection_threshold: 0.18,
            root_margin: "-60px",
            gate_on_scroll: false,
            child: Some(ChildConfig {
                threshold: 0.25,
                root_margin: "-60px",
                delay: CHILD_ANIMATION_DELAY,
            }),
            ..RevealConfig::default()
        })
    }

    #[test]
    fn test_hidden_and_armed_after_mount() {
        let state = gated();
        assert!(!state.visible());
        assert!(state.can_animate());
        assert!(state.at_top());
        assert!(!state.child_pending());
    }

    #[test]
    fn test_scroll_tracker_threshold_is_inclusive() {
        let tracker = ScrollTracker::default();
        assert!(tracker.at_top(0.0));
        assert!(tracker.at_top(50.0));
        assert!(!tracker.at_top(50.5));
    }

    #[test]
    fn test_gated_section_ignores_intersection_at_top() {
        let mut state = gated();
        assert_eq!(state.on_section_intersection(true), ChildTimer::Keep);
        assert!(!state.visible());

        // leaving the top while still in view reveals
        state.on_scroll(300.0);
        assert!(state.visible());
        assert!(!state.can_animate());
    }

    #[test]
    fn test_reveal_disarms() {
        let mut state = gated();
        state.on_scroll(400.0);
        state.on_section_intersection(true);
        assert!(state.visible());
        assert!(!state.can_animate());
    }

    #[test]
    fn test_visible_is_sticky_until_top() {
        let mut state = gated();
        state.on_scroll(400.0);
        state.on_section_intersection(true);

        for offset in [800.0, 1200.0, 90.0, 51.0] {
            state.on_section_intersection(false);
            state.on_scroll(offset);
            state.on_section_intersection(true);
            assert!(state.visible());
            assert!(!state.can_animate());
        }
    }

    #[test]
    fn test_reset_cycle_reveals_once_per_visit() {
        enum Ev {
            Scroll(f64),
            Section(bool),
        }

        let mut state = gated();
        let mut reveals = 0;
        for _ in 0..3 {
            for ev in [
                Ev::Scroll(10.0),
                Ev::Scroll(600.0),
                Ev::Section(true),
                Ev::Section(false),
                Ev::Section(true),
                Ev::Scroll(900.0),
            ] {
                let before = state.visible();
                match ev {
                    Ev::Scroll(offset) => state.on_scroll(offset),
                    Ev::Section(seen) => state.on_section_intersection(seen),
                };
                if !before && state.visible() {
                    reveals += 1;
                }
            }
        }
        assert_eq!(reveals, 3);
    }

    #[test]
    fn test_return_to_top_resets_and_rearms() {
        let mut state = gated();
        state.on_scroll(400.0);
        state.on_section_intersection(true);

        state.on_scroll(10.0);
        assert!(!state.visible());
        assert!(state.can_animate());
        assert!(state.at_top());
    }

    #[test]
    fn test_ungated_section_reveals_at_top() {
        let mut state = with_child();
        state.on_section_intersection(true);
        assert!(state.visible());
    }

    #[test]
    fn test_child_schedules_after_parent_reveal() {
        let mut state = with_child();
        assert_eq!(state.on_section_intersection(true), ChildTimer::Keep);
        assert_eq!(
            state.on_child_intersection(true),
            ChildTimer::Schedule(CHILD_ANIMATION_DELAY)
        );
        assert!(!state.child_pending());
        assert_eq!(state.child_fill(85), 0);

        assert!(state.on_child_timer());
        assert!(state.child_animated());
        assert_eq!(state.child_fill(85), 85);
        assert_eq!(state.child_fill(89), 89);
    }

    #[test]
    fn test_child_seen_first_waits_for_parent() {
        let mut state = with_child();
        state.on_scroll(200.0);
        state.on_section_intersection(false);

        assert_eq!(state.on_child_intersection(true), ChildTimer::Keep);
        assert!(state.child_pending());
        assert!(!state.child_animated());
        // nothing scheduled, so a stray fire changes nothing
        assert!(!state.on_child_timer());
        assert!(!state.child_animated());

        assert_eq!(
            state.on_section_intersection(true),
            ChildTimer::Schedule(CHILD_ANIMATION_DELAY)
        );
        assert!(state.visible());
        assert!(state.child_pending());

        assert!(state.on_child_timer());
        assert!(!state.child_pending());
        assert!(state.child_animated());
    }

    #[test]
    fn test_child_churn_does_not_reschedule() {
        let mut state = with_child();
        state.on_section_intersection(true);
        state.on_child_intersection(true);
        assert_eq!(state.on_child_intersection(false), ChildTimer::Keep);
        assert_eq!(state.on_child_intersection(true), ChildTimer::Keep);
        state.on_child_timer();
        assert_eq!(state.on_child_intersection(true), ChildTimer::Keep);
    }

    #[test]
    fn test_reset_cancels_scheduled_child() {
        let mut state = with_child();
        state.on_scroll(300.0);
        state.on_section_intersection(true);
        state.on_child_intersection(true);
        assert!(state.child_scheduled());

        assert_eq!(state.on_scroll(10.0), ChildTimer::Cancel);
        assert!(!state.child_scheduled());
        // the cancelled timer fired anyway
        assert!(!state.on_child_timer());
        assert!(!state.child_animated());
    }

    #[test]
    fn test_reset_clears_filled_bars() {
        let mut state = with_child();
        state.on_scroll(300.0);
        state.on_section_intersection(true);
        state.on_child_intersection(true);
        state.on_child_timer();
        assert_eq!(state.child_fill(80), 80);

        assert_eq!(state.on_scroll(10.0), ChildTimer::Keep);
        assert!(!state.visible());
        assert!(state.can_animate());
        assert_eq!(state.child_fill(80), 0);
    }

    #[test]
    fn test_reset_drops_pending_child() {
        let mut state = with_child();
        state.on_scroll(300.0);
        state.on_child_intersection(true);
        assert!(state.child_pending());

        state.on_scroll(0.0);
        assert!(!state.child_pending());
        state.on_child_intersection(false);
        assert_eq!(state.on_section_intersection(true), ChildTimer::Keep);
    }

    #[test]
    fn test_child_still_in_view_rearms_after_reset() {
        let mut state = with_child();
        state.on_scroll(300.0);
        state.on_section_intersection(true);
        assert_eq!(
            state.on_child_intersection(true),
            ChildTimer::Schedule(CHILD_ANIMATION_DELAY)
        );
        assert!(state.on_child_timer());

        // back to the top and down again; neither observer reports anything new
        state.on_scroll(10.0);
        assert_eq!(state.child_fill(80), 0);
        assert_eq!(
            state.on_scroll(300.0),
            ChildTimer::Schedule(CHILD_ANIMATION_DELAY)
        );
        assert!(state.visible());

        assert!(state.on_child_timer());
        assert_eq!(state.child_fill(80), 80);
    }

    #[test]
    fn test_teardown_cancels_timer() {
        let mut state = with_child();
        state.on_section_intersection(true);
        state.on_child_intersection(true);
        assert_eq!(state.teardown(), ChildTimer::Cancel);
        assert_eq!(state.teardown(), ChildTimer::Keep);
        assert!(!state.on_child_timer());
    }

    #[test]
    fn test_child_events_ignored_without_child_config() {
        let mut state = gated();
        state.on_scroll(300.0);
        state.on_section_intersection(true);
        assert_eq!(state.on_child_intersection(true), ChildTimer::Keep);
        assert!(!state.child_pending());
    }
}
