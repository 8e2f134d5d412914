use leptos::prelude::*;

use crate::build_info::copyright_year;
use crate::content::portfolio;
use crate::sections::SectionId;

use super::dom::{scroll_to_section, scroll_to_top};

#[component]
pub fn Footer() -> impl IntoView {
    let profile = &portfolio().profile;

    let links = SectionId::ALL
        .into_iter()
        .map(|section| {
            view! {
                <a
                    href=section.href()
                    class="text-white/70 hover:text-[#d4af37] transition-colors text-sm"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_section(section);
                    }
                >
                    {section.label()}
                </a>
            }
        })
        .collect_view();

    view! {
        <footer class="bg-[#2d2d2d] text-white py-12 relative">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="max-w-6xl mx-auto flex flex-col items-center gap-6 text-center">
                    <button
                        class="w-12 h-12 bg-[#783162] hover:bg-[#d4af37] rounded-full flex items-center justify-center shadow-lg transition-all duration-300 transform hover:scale-110"
                        aria-label="Back to top"
                        on:click=move |_| scroll_to_top()
                    >
                        "↑"
                    </button>
                    <h3 class="text-2xl font-bold text-[#d4af37]">{profile.name.clone()}</h3>
                    <p class="text-white/70 max-w-md">{profile.tagline.clone()}</p>
                    <nav class="flex flex-wrap justify-center gap-6">{links}</nav>
                    <div class="w-full h-px bg-white/10"></div>
                    <p class="text-white/50 text-sm">
                        {format!("© {} {}. All rights reserved.", copyright_year(), profile.name)}
                    </p>
                    <p class="text-white/50 text-sm">
                        "Made with " <span class="text-[#d4af37]">"♥"</span> " in Indonesia"
                    </p>
                </div>
            </div>
        </footer>
    }
}

