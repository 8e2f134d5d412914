use leptos::{html, prelude::*};

use crate::content::{portfolio, Project};
use crate::sections::SectionId;

use super::dom::hide_broken_image;
use super::reveal::{use_reveal, Motion, Reveal};

#[component]
pub fn Portfolio() -> impl IntoView {
    let data = portfolio();
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_reveal(
        section_ref,
        None,
        SectionId::Portfolio.reveal_config().unwrap_or_default(),
    );

    let cards = data
        .projects
        .iter()
        .enumerate()
        .map(|(index, project)| project_card(reveal, index, project))
        .collect_view();

    view! {
        <section
            id=SectionId::Portfolio.anchor()
            node_ref=section_ref
            class="py-20 bg-white relative overflow-hidden"
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="max-w-6xl mx-auto">
                    <div class=move || reveal.class("text-center mb-16 transition-all duration-1000", Motion::Up)>
                        <h2 class="text-4xl md:text-5xl font-bold text-[#783162] mb-6">"Portofolio"</h2>
                        <div class="w-24 h-1 bg-gradient-to-r from-[#783162] to-[#d4af37] mx-auto rounded-full"></div>
                        <p class="text-[#2d2d2d]/70 text-lg mt-6 max-w-2xl mx-auto">
                            "Project yang pernah saya buat selama belajar, sebagai bukti nyata kemampuan saya dalam mengembangkan aplikasi."
                        </p>
                    </div>
                    <div class="grid md:grid-cols-2 gap-8">{cards}</div>
                    <div class=move || reveal.class("text-center mt-12 transition-all duration-1000 delay-700", Motion::Up)>
                        <a
                            href=data.social_media.github.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center bg-[#783162] hover:bg-[#783162]/90 text-white px-8 py-3 rounded-full font-semibold shadow-lg hover:shadow-xl transform hover:scale-105 transition-all duration-300"
                        >
                            <i class="devicon-github-plain mr-2" />
                            "View All Projects on GitHub"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn project_card(reveal: Reveal, index: usize, project: &Project) -> impl IntoView {
    let delay = format!("transition-delay: {}ms", index * 150 + 400);
    let technologies = project
        .technologies
        .iter()
        .map(|tech| {
            view! {
                <span class="px-3 py-1 bg-[#f5f5f5] text-[#783162] text-sm font-medium rounded-full hover:bg-[#783162] hover:text-white transition-colors">
                    {tech.clone()}
                </span>
            }
        })
        .collect_view();
    let demo = project.demo_link.clone().map(|link| {
        view! {
            <a
                href=link
                target="_blank"
                rel="noopener noreferrer"
                class="flex-1 text-center py-2 rounded-md text-[#2d2d2d] hover:text-[#783162] hover:bg-[#783162]/5"
            >
                "Live Demo"
            </a>
        }
    });

    view! {
        <div
            class=move || {
                reveal
                    .class(
                        "group bg-white rounded-2xl overflow-hidden shadow-lg hover:shadow-2xl hover:shadow-[#783162]/20 transition-all duration-500 transform hover:scale-105 border border-[#f5f5f5]",
                        Motion::Up,
                    )
            }
            style=delay
        >
            <div class="relative overflow-hidden">
                <img
                    src=project.image.clone()
                    alt=project.title.clone()
                    class="w-full h-48 object-cover transition-transform duration-500 group-hover:scale-110"
                    on:error=move |ev| hide_broken_image(&ev)
                />
                <div class="absolute inset-0 bg-gradient-to-t from-[#783162]/80 via-transparent to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold text-[#2d2d2d] mb-3 group-hover:text-[#783162] transition-colors">
                    {project.title.clone()}
                </h3>
                <p class="text-[#2d2d2d]/70 leading-relaxed mb-4">{project.description.clone()}</p>
                <div class="flex flex-wrap gap-2 mb-4">{technologies}</div>
                <div class="flex gap-3 pt-4 border-t border-[#f5f5f5]">
                    <a
                        href=project.github_link.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex-1 text-center py-2 rounded-md text-[#2d2d2d] hover:text-[#783162] hover:bg-[#783162]/5"
                    >
                        <i class="devicon-github-plain mr-2" />
                        "Source Code"
                    </a>
                    {demo}
                </div>
            </div>
        </div>
    }
}
