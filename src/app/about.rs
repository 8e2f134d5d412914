use leptos::{html, prelude::*};

use crate::content::{portfolio, Skill};
use crate::popup::{proficiency_label, InputMode, PopupSelection};
use crate::sections::SectionId;

use super::dismiss::use_dismiss_on_outside;
use super::marquee::TechMarquee;
use super::reveal::{use_reveal, Motion, Reveal};

fn detect_input_mode() -> InputMode {
    if window().navigator().max_touch_points() > 0 {
        InputMode::Touch
    } else {
        InputMode::Pointer
    }
}

#[component]
pub fn About() -> impl IntoView {
    let data = portfolio();
    let section_ref = NodeRef::<html::Section>::new();
    let skills_ref = NodeRef::<html::Div>::new();
    let reveal = use_reveal(
        section_ref,
        Some(skills_ref),
        SectionId::About.reveal_config().unwrap_or_default(),
    );

    let selection = RwSignal::new(PopupSelection::default());
    Effect::new(move |_| {
        let mode = detect_input_mode();
        selection.update(|s| s.set_mode(mode));
    });

    let rows = StoredValue::new(
        data.skills
            .iter()
            .map(|s| (s.name.clone(), NodeRef::<html::Div>::new()))
            .collect::<Vec<_>>(),
    );
    use_dismiss_on_outside(
        move || {
            let open = selection.with_untracked(|s| {
                (s.mode() == InputMode::Touch)
                    .then(|| s.open().map(str::to_owned))
                    .flatten()
            })?;
            rows.with_value(|rows| {
                rows.iter()
                    .find(|(name, _)| *name == open)
                    .and_then(|(_, row)| row.get_untracked())
                    .map(web_sys::Element::from)
            })
        },
        move || selection.update(PopupSelection::dismiss),
    );

    let skill_rows = data
        .skills
        .iter()
        .enumerate()
        .map(|(idx, skill)| {
            let row_ref = rows.with_value(|rows| rows[idx].1);
            view! { <SkillRow skill=skill.clone() idx row_ref selection reveal /> }
        })
        .collect_view();

    let services = data
        .services
        .iter()
        .map(|service| {
            view! {
                <div class="text-center p-6 bg-[#f5f5f5] rounded-2xl hover:shadow-lg hover:shadow-[#783162]/10 transition-all duration-300 transform hover:scale-105">
                    <h4 class="text-xl font-bold text-[#2d2d2d] mb-3">{service.title.clone()}</h4>
                    <p class="text-[#2d2d2d]/70 leading-relaxed">{service.description.clone()}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section
            id=SectionId::About.anchor()
            node_ref=section_ref
            class="py-20 bg-white relative overflow-hidden"
        >
            <div class="absolute top-0 right-0 w-96 h-96 bg-[#783162]/10 rounded-full blur-3xl -translate-y-48 translate-x-48 pointer-events-none"></div>
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="max-w-6xl mx-auto">
                    <div class=move || reveal.class("text-center mb-8 transition-all duration-700", Motion::Up)>
                        <h2 class="text-4xl md:text-5xl font-bold text-[#2d2d2d] mb-6">
                            "Tentang " <span class="text-[#783162]">"Saya"</span>
                        </h2>
                        <div class="w-24 h-1 bg-gradient-to-r from-[#783162] to-[#d4af37] mx-auto rounded-full"></div>
                    </div>

                    <div class=move || reveal.class("transition-all duration-700 delay-150", Motion::Up)>
                        <TechMarquee />
                    </div>

                    <div class="grid lg:grid-cols-2 gap-12 items-center mb-20">
                        <div class=move || {
                            reveal.class("transition-all duration-700 delay-200", Motion::FromLeft)
                        }>
                            <h3 class="text-2xl font-bold text-[#2d2d2d] mb-6">
                                "Peminat Pengembangan Backend"
                            </h3>
                            <p class="text-[#2d2d2d]/80 text-lg leading-relaxed mb-8">
                                {data.profile.description.clone()}
                            </p>
                            <div class="space-y-3">
                                <div class="flex items-center gap-3">
                                    <span class="font-semibold text-[#783162]">"Email:"</span>
                                    <span class="text-[#2d2d2d]">{data.profile.email.clone()}</span>
                                </div>
                                <div class="flex items-center gap-3">
                                    <span class="font-semibold text-[#783162]">"Location:"</span>
                                    <span class="text-[#2d2d2d]">{data.profile.location.clone()}</span>
                                </div>
                            </div>
                        </div>

                        <div
                            node_ref=skills_ref
                            class=move || {
                                reveal.class("transition-all duration-700 delay-300", Motion::FromRight)
                            }
                        >
                            <h3 class="text-2xl font-bold text-[#2d2d2d] mb-8">"Keahlian"</h3>
                            <div class="space-y-6">{skill_rows}</div>
                        </div>
                    </div>

                    <div class=move || reveal.class("transition-all duration-700 delay-500", Motion::Up)>
                        <h3 class="text-3xl font-bold text-center text-[#2d2d2d] mb-12">
                            "Kemampuan " <span class="text-[#783162]">"Saya"</span>
                        </h3>
                        <div class="flex justify-center">
                            <div class="grid md:grid-cols-3 gap-8 max-w-4xl">{services}</div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillRow(
    skill: Skill,
    idx: usize,
    row_ref: NodeRef<html::Div>,
    selection: RwSignal<PopupSelection>,
    reveal: Reveal,
) -> impl IntoView {
    let Skill { name, level } = skill;
    // bars cascade once the fill starts
    let stagger_ms = 150 * idx + 200;
    let bar_style = move || {
        let delay = if reveal.child_animated() { stagger_ms } else { 0 };
        format!(
            "width: {}%; background: linear-gradient(90deg, #783162, #d4af37); transition: width 1.4s cubic-bezier(.22,1,.36,1) {delay}ms",
            reveal.child_fill(level),
        )
    };

    let enter_name = name.clone();
    let leave_name = name.clone();
    let tap_name = name.clone();
    let open_name = name.clone();

    view! {
        <div
            node_ref=row_ref
            class="group relative"
            on:mouseenter=move |_| selection.update(|s| s.pointer_enter(&enter_name))
            on:mouseleave=move |_| selection.update(|s| s.pointer_leave(&leave_name))
            on:click=move |_| selection.update(|s| s.tap(&tap_name))
        >
            <div class="flex justify-between items-center mb-2">
                <span class="font-medium text-[#2d2d2d] cursor-pointer hover:text-[#783162] transition-colors">
                    {name.clone()}
                </span>
                <span class="text-[#783162] font-bold">{format!("{level}%")}</span>
            </div>
            <div class="w-full bg-[#f5f5f5] rounded-full h-3 overflow-hidden relative">
                <div class="h-full rounded-full" style=bar_style></div>
            </div>
            {move || {
                selection
                    .with(|s| s.is_open(&open_name))
                    .then(|| {
                        view! {
                            <div class="absolute left-0 -top-16 z-50 bg-white rounded-lg shadow-xl p-4 border border-[#783162]/20 min-w-[200px] animate-fadeIn">
                                <h4 class="font-bold text-[#783162] mb-2">{name.clone()}</h4>
                                <p class="text-sm text-[#2d2d2d] font-semibold mb-1">
                                    {format!("Proficiency: {level}%")}
                                </p>
                                <p class="text-xs text-[#2d2d2d]/70">{proficiency_label(level)}</p>
                                <div class="absolute top-full left-6 w-0 h-0 border-l-4 border-r-4 border-t-4 border-l-transparent border-r-transparent border-t-white"></div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
