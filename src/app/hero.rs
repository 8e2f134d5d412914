use leptos::prelude::*;

use crate::content::portfolio;
use crate::sections::SectionId;

use super::dom::{hide_broken_image, scroll_to_section};

#[component]
pub fn Hero() -> impl IntoView {
    let profile = &portfolio().profile;

    view! {
        <section
            id=SectionId::Home.anchor()
            class="min-h-screen flex items-center justify-center bg-gradient-to-br from-[#f5f5f5] via-white to-[#f8f9fa] relative overflow-hidden"
        >
            <div class="absolute inset-0">
                <div class="absolute top-20 right-20 w-64 h-64 bg-[#783162]/5 rounded-full blur-3xl animate-pulse"></div>
                <div class="absolute bottom-20 left-20 w-96 h-96 bg-[#d4af37]/5 rounded-full blur-3xl animate-pulse delay-1000"></div>
            </div>
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="text-center max-w-4xl mx-auto">
                    <div class="mb-12 mt-10 animate-fade-in">
                        <div class="w-48 h-48 mx-auto relative">
                            <div class="w-full h-full rounded-full border-4 border-[#783162] overflow-hidden shadow-2xl hover:scale-105 transition-transform duration-300">
                                <img
                                    src=profile.profile_image.clone()
                                    alt=profile.name.clone()
                                    class="w-full h-full object-cover"
                                    on:error=move |ev| hide_broken_image(&ev)
                                />
                            </div>
                            <div class="absolute inset-0 rounded-full border-4 border-[#d4af37]/30 animate-ping"></div>
                        </div>
                    </div>
                    <div class="mb-8 animate-slide-up">
                        <h1 class="text-4xl md:text-6xl lg:text-7xl font-bold text-[#2d2d2d] mb-4">
                            {profile.name.clone()}
                        </h1>
                        <p class="text-xl md:text-2xl text-[#783162] font-medium mb-6">
                            {profile.tagline.clone()}
                        </p>
                        <p class="text-lg text-[#2d2d2d]/70 max-w-2xl mx-auto leading-relaxed">
                            {profile.description.clone()}
                        </p>
                    </div>
                    <div class="animate-bounce">
                        <button
                            class="text-[#783162] hover:text-[#d4af37] transition-colors text-3xl"
                            aria-label="Scroll to about"
                            on:click=move |_| scroll_to_section(SectionId::About)
                        >
                            "↓"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
