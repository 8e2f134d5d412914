use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, use_window_scroll, UseIntersectionObserverOptions,
};

use crate::reveal::{ChildTimer, RevealConfig, RevealState};

/// Direction a revealed block slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Up,
    FromLeft,
    FromRight,
}

impl Motion {
    fn classes(self, visible: bool) -> &'static str {
        match (self, visible) {
            (Motion::Up, true) => "opacity-100 translate-y-0",
            (Motion::Up, false) => "opacity-0 translate-y-8",
            (Motion::FromLeft, true) | (Motion::FromRight, true) => "opacity-100 translate-x-0",
            (Motion::FromLeft, false) => "opacity-0 -translate-x-8",
            (Motion::FromRight, false) => "opacity-0 translate-x-8",
        }
    }
}

#[derive(Clone, Copy)]
pub struct Reveal {
    state: StoredValue<RevealState>,
    visible: RwSignal<bool>,
    child_animated: RwSignal<bool>,
}

impl Reveal {
    pub fn visible(&self) -> bool {
        self.visible.get()
    }

    /// `base` plus the shown/hidden classes for `motion`.
    pub fn class(&self, base: &str, motion: Motion) -> String {
        format!("{base} {}", motion.classes(self.visible()))
    }

    /// Skill-bar width in percent; `0` until the child animation runs.
    pub fn child_fill(&self, level: u8) -> u8 {
        self.child_animated.track();
        self.state.with_value(|s| s.child_fill(level))
    }

    pub fn child_animated(&self) -> bool {
        self.child_animated.get()
    }
}

fn clear_timer(timer: StoredValue<Option<TimeoutHandle>>) {
    if let Some(handle) = timer.try_update_value(Option::take).flatten() {
        handle.clear();
    }
}

/// Drives a [`RevealState`] from the window scroll offset and intersection
/// observers on `section` and, when the config has one, `child`.
///
/// Listeners, observers and any pending child timer are released when the
/// calling component's owner is disposed.
pub fn use_reveal(
    section: NodeRef<html::Section>,
    child: Option<NodeRef<html::Div>>,
    config: RevealConfig,
) -> Reveal {
    let section_options = UseIntersectionObserverOptions::default()
        .thresholds(vec![config.intersection_threshold])
        .root_margin(config.root_margin.to_string());
    let child_config = config.child.clone();

    let state = StoredValue::new(RevealState::new(config));
    let timer = StoredValue::new(None::<TimeoutHandle>);
    let visible = RwSignal::new(false);
    let child_animated = RwSignal::new(false);

    let publish = move || {
        let Some((v, c)) = state.try_with_value(|s| (s.visible(), s.child_animated())) else {
            return;
        };
        if visible.get_untracked() != v {
            visible.set(v);
        }
        if child_animated.get_untracked() != c {
            child_animated.set(c);
        }
    };

    let apply = move |cmd: ChildTimer| {
        match cmd {
            ChildTimer::Keep => {}
            ChildTimer::Cancel => clear_timer(timer),
            ChildTimer::Schedule(delay) => {
                clear_timer(timer);
                let fire = move || {
                    timer.try_set_value(None);
                    if state.try_update_value(|s| s.on_child_timer()) == Some(true) {
                        publish();
                    }
                };
                match set_timeout_with_handle(fire, delay) {
                    Ok(handle) => timer.set_value(Some(handle)),
                    Err(e) => log::warn!("couldn't schedule child animation: {e:?}"),
                }
            }
        }
        publish();
    };

    let (_, scroll_y) = use_window_scroll();
    Effect::watch(
        move || scroll_y.get(),
        move |offset, _, _| {
            if let Some(cmd) = state.try_update_value(|s| s.on_scroll(*offset)) {
                apply(cmd);
            }
        },
        true,
    );

    use_intersection_observer_with_options(
        section,
        move |entries, _| {
            let Some(entry) = entries.last() else {
                return;
            };
            let seen = entry.is_intersecting();
            if let Some(cmd) = state.try_update_value(|s| s.on_section_intersection(seen)) {
                apply(cmd);
            }
        },
        section_options,
    );

    if let (Some(child), Some(child_config)) = (child, child_config) {
        use_intersection_observer_with_options(
            child,
            move |entries, _| {
                let Some(entry) = entries.last() else {
                    return;
                };
                let seen = entry.is_intersecting();
                if let Some(cmd) = state.try_update_value(|s| s.on_child_intersection(seen)) {
                    apply(cmd);
                }
            },
            UseIntersectionObserverOptions::default()
                .thresholds(vec![child_config.threshold])
                .root_margin(child_config.root_margin.to_string()),
        );
    }

    on_cleanup(move || {
        state.try_update_value(|s| s.teardown());
        clear_timer(timer);
    });

    Reveal {
        state,
        visible,
        child_animated,
    }
}
