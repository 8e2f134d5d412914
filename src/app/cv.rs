use leptos::{html, prelude::*};

use crate::content::portfolio;
use crate::sections::SectionId;

use super::reveal::{use_reveal, Motion, Reveal};

struct TimelineEntry<'a> {
    year: &'a str,
    title: &'a str,
    place: &'a str,
    description: &'a str,
}

#[component]
pub fn Cv() -> impl IntoView {
    let data = portfolio();
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_reveal(
        section_ref,
        None,
        SectionId::Cv.reveal_config().unwrap_or_default(),
    );

    let education = data
        .education
        .iter()
        .enumerate()
        .map(|(index, item)| {
            timeline_item(
                reveal,
                index,
                "🎓",
                TimelineEntry {
                    year: &item.year,
                    title: &item.degree,
                    place: &item.institution,
                    description: &item.description,
                },
            )
        })
        .collect_view();
    let experience = data
        .experience
        .iter()
        .enumerate()
        .map(|(index, item)| {
            timeline_item(
                reveal,
                index,
                "💼",
                TimelineEntry {
                    year: &item.year,
                    title: &item.position,
                    place: &item.company,
                    description: &item.description,
                },
            )
        })
        .collect_view();

    view! {
        <section
            id=SectionId::Cv.anchor()
            node_ref=section_ref
            class="py-12 sm:py-16 md:py-20 bg-gradient-to-br from-[#f5f5f5] to-white relative overflow-hidden w-full"
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10 w-full">
                <div class="max-w-6xl mx-auto w-full">
                    <div class=move || {
                        reveal.class("text-center mb-8 sm:mb-12 md:mb-16 transition-all duration-1000", Motion::Up)
                    }>
                        <h2 class="text-2xl sm:text-3xl md:text-4xl lg:text-5xl font-bold text-[#2d2d2d] mb-4 sm:mb-6 px-2">
                            "Curriculum " <span class="text-[#783162]">"Vitae"</span>
                        </h2>
                        <div class="w-16 sm:w-20 md:w-24 h-0.5 sm:h-1 bg-gradient-to-r from-[#783162] to-[#d4af37] mx-auto rounded-full mb-4 sm:mb-6"></div>
                        <p class="text-[#2d2d2d]/70 text-sm sm:text-base md:text-lg mt-4 sm:mt-6 max-w-2xl mx-auto px-4">
                            "Riwayat pendidikan dan pengalaman yang membentuk dasar ketertarikan saya dalam teknologi dan logika sistem."
                        </p>
                    </div>
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 sm:gap-10 md:gap-12">
                        <div class=move || {
                            reveal.class("transition-all duration-1000 delay-200", Motion::FromLeft)
                        }>
                            <TimelineHeading icon="🎓" title="Pendidikan" accent="bg-[#783162]" />
                            <div class="relative">{education}</div>
                        </div>
                        <div class=move || {
                            reveal.class("transition-all duration-1000 delay-400", Motion::FromRight)
                        }>
                            <TimelineHeading icon="💼" title="Pengalaman" accent="bg-[#d4af37]" />
                            <div class="relative">{experience}</div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineHeading(icon: &'static str, title: &'static str, accent: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 mb-6 sm:mb-8">
            <div class=format!(
                "w-8 h-8 sm:w-10 sm:h-10 md:w-12 md:h-12 {accent} rounded-full flex items-center justify-center text-white flex-shrink-0",
            )>{icon}</div>
            <h3 class="text-xl sm:text-2xl md:text-3xl font-bold text-[#2d2d2d]">{title}</h3>
        </div>
    }
}

fn timeline_item(
    reveal: Reveal,
    index: usize,
    icon: &'static str,
    entry: TimelineEntry<'_>,
) -> impl IntoView {
    let delay = format!("transition-delay: {}ms", index * 150 + 300);
    view! {
        <div
            class=move || reveal.class("relative pl-6 sm:pl-8 pb-6 sm:pb-8 transition-all duration-1000", Motion::FromRight)
            style=delay
        >
            <div class="absolute left-3 sm:left-4 top-0 bottom-0 w-0.5 bg-[#783162]/20"></div>
            <div class="absolute left-0 top-1 sm:top-2 w-6 h-6 sm:w-8 sm:h-8 bg-white border-2 sm:border-4 border-[#783162] rounded-full flex items-center justify-center text-xs shadow-lg z-10">
                {icon}
            </div>
            <div class="bg-white rounded-xl sm:rounded-2xl p-4 sm:p-6 shadow-lg hover:shadow-xl transition-all duration-300 transform hover:scale-105 ml-2 sm:ml-4 border border-[#f5f5f5]">
                <span class="text-[#783162] font-semibold text-xs sm:text-sm">{entry.year.to_string()}</span>
                <h3 class="text-base sm:text-lg md:text-xl font-bold text-[#2d2d2d] mb-1 sm:mb-2 line-clamp-2">
                    {entry.title.to_string()}
                </h3>
                <h4 class="text-sm sm:text-base md:text-lg text-[#783162] font-semibold mb-2 sm:mb-3 line-clamp-2">
                    {entry.place.to_string()}
                </h4>
                <p class="text-[#2d2d2d]/70 leading-relaxed text-xs sm:text-sm md:text-base line-clamp-4">
                    {entry.description.to_string()}
                </p>
            </div>
        </div>
    }
}
