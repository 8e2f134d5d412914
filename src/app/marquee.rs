use leptos::prelude::*;

use crate::content::{portfolio, Technology};

use super::dom::hide_broken_image;

// Each row holds three copies so the -33.333% keyframe loops seamlessly.
const COPIES: usize = 3;

#[component]
pub fn TechMarquee() -> impl IntoView {
    let technologies = &portfolio().technologies;

    let row = move |animation: &'static str, accent_left: bool| {
        let items = std::iter::repeat(technologies.iter())
            .take(COPIES)
            .flatten()
            .map(|tech| tech_card(tech, accent_left))
            .collect_view();
        view! {
            <div class="flex overflow-hidden mb-4">
                <div class=format!("flex {animation}")>{items}</div>
            </div>
        }
    };

    view! {
        <div class="w-full overflow-hidden bg-white py-12 relative">
            <div class="absolute inset-0 bg-gradient-to-r from-[#783162]/5 via-transparent to-[#d4af37]/5"></div>
            <div class="relative">
                <div class="text-center mb-8">
                    <h3 class="text-2xl font-bold text-[#2d2d2d] mb-2">
                        "Teknologi & " <span class="text-[#783162]">"Framework"</span>
                    </h3>
                    <div class="w-16 h-0.5 bg-gradient-to-r from-[#783162] to-[#d4af37] mx-auto"></div>
                </div>
                {row("animate-marquee-smooth", true)}
                {row("animate-marquee-smooth-reverse", false)}
            </div>
        </div>
    }
}

fn tech_card(tech: &Technology, accent_left: bool) -> impl IntoView {
    let side = if accent_left { "left" } else { "right" };
    view! {
        <div
            class="flex items-center gap-3 mx-6 bg-white rounded-2xl p-4 shadow-lg hover:shadow-xl hover:scale-105 transition-all duration-300 border border-[#f5f5f5] min-w-fit"
            style=format!("border-{side}: 4px solid {}", tech.color)
        >
            <img
                src=tech.icon.clone()
                alt=tech.name.clone()
                class="w-8 h-8 object-contain"
                on:error=move |ev| hide_broken_image(&ev)
            />
            <span class="font-semibold text-[#2d2d2d] text-lg whitespace-nowrap">
                {tech.name.clone()}
            </span>
        </div>
    }
}
