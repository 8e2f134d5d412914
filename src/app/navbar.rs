use leptos::{either::Either, prelude::*};
use leptos_use::use_window_scroll;

use crate::content::portfolio;
use crate::reveal::ScrollTracker;
use crate::sections::SectionId;

use super::dom::scroll_to_section;

/// Past this offset the bar gets its solid background.
const NAVBAR_SOLID_OFFSET: f64 = 20.0;

#[component]
pub fn Navbar() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let tracker = ScrollTracker::new(NAVBAR_SOLID_OFFSET);
    let is_scrolled = move || !tracker.at_top(scroll_y.get());
    let (menu_open, set_menu_open) = signal(false);

    let go = move |section: SectionId| {
        scroll_to_section(section);
        set_menu_open(false);
    };

    let nav_link = move |section: SectionId, class: &'static str| {
        view! {
            <a
                href=section.href()
                class=class
                on:click=move |ev| {
                    ev.prevent_default();
                    go(section);
                }
            >
                {section.label()}
            </a>
        }
    };

    view! {
        <nav class=move || {
            format!(
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 {}",
                if is_scrolled() {
                    "bg-white/95 backdrop-blur-md shadow-lg"
                } else {
                    "bg-transparent"
                },
            )
        }>
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a
                        href=SectionId::Home.href()
                        class="text-xl font-bold text-[#783162] hover:text-[#d4af37] transition-colors"
                        on:click=move |ev| {
                            ev.prevent_default();
                            go(SectionId::Home);
                        }
                    >
                        {portfolio().profile.name.clone()}
                    </a>
                    <div class="hidden md:flex ml-10 items-baseline space-x-8">
                        {SectionId::ALL
                            .into_iter()
                            .map(|section| nav_link(
                                section,
                                "relative px-3 py-2 text-sm font-medium text-[#2d2d2d] hover:text-[#783162] transition-colors",
                            ))
                            .collect_view()}
                    </div>
                    <button
                        class="md:hidden text-[#783162] hover:text-[#d4af37] transition-colors text-2xl"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
                {move || {
                    if menu_open.get() {
                        Either::Left(
                            view! {
                                <div class="md:hidden px-2 pt-2 pb-3 space-y-1 bg-white/95 backdrop-blur-md rounded-lg mt-2 shadow-lg">
                                    {SectionId::ALL
                                        .into_iter()
                                        .map(|section| nav_link(
                                            section,
                                            "block px-3 py-2 text-base font-medium text-[#2d2d2d] hover:text-[#783162] hover:bg-[#f5f5f5] rounded-md transition-colors",
                                        ))
                                        .collect_view()}
                                </div>
                            },
                        )
                    } else {
                        Either::Right(())
                    }
                }}
            </div>
        </nav>
    }
}
