use std::time::Duration;

use leptos::prelude::*;

use crate::contact::{Notification, NotificationKind};

const TOAST_DURATION: Duration = Duration::from_secs(5);

/// Page-wide transient notification, shared through context.
#[derive(Clone, Copy)]
pub struct Toaster {
    current: RwSignal<Option<(u64, Notification)>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(0),
        }
    }

    pub fn show(&self, notification: Notification) {
        let id = self.next_id.with_value(|id| *id);
        self.next_id.update_value(|id| *id += 1);
        self.current.set(Some((id, notification)));

        let current = self.current;
        set_timeout(
            move || {
                // a newer toast owns the slot now
                let _ = current.try_update(|c| {
                    if c.as_ref().is_some_and(|(shown, _)| *shown == id) {
                        *c = None;
                    }
                });
            },
            TOAST_DURATION,
        );
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn Toast() -> impl IntoView {
    let toaster = expect_context::<Toaster>();
    move || {
        toaster.current.get().map(|(_, note)| {
            let accent = match note.kind {
                NotificationKind::Success => "border-[#783162]",
                NotificationKind::Error => "border-red-500",
            };
            view! {
                <div
                    role="status"
                    class=format!(
                        "fixed bottom-6 right-6 z-[60] max-w-sm bg-white rounded-xl shadow-2xl border-l-4 p-4 animate-fadeIn {accent}",
                    )
                    on:click=move |_| toaster.dismiss()
                >
                    <p class="font-semibold text-[#2d2d2d]">{note.title}</p>
                    <p class="text-sm text-[#2d2d2d]/70">{note.description}</p>
                </div>
            }
        })
    }
}
