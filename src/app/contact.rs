use leptos::{either::Either, html, prelude::*, task::spawn_local};

use crate::contact::{submit, ContactForm, SubmitOutcome};
use crate::content::portfolio;
use crate::relay::{EmailJsRelay, RelayConfig};
use crate::sections::SectionId;

use super::reveal::{use_reveal, Motion};
use super::toast::Toaster;

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-xl border-2 border-[#f5f5f5] focus:border-[#783162] focus:ring-0 focus:outline-none transition-colors";

fn social_icon(platform: &str) -> &'static str {
    match platform {
        "github" => "devicon-github-plain",
        "linkedin" => "devicon-linkedin-plain",
        "twitter" => "devicon-twitter-original",
        _ => "devicon-instagram-plain",
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let data = portfolio();
    let toaster = expect_context::<Toaster>();
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_reveal(
        section_ref,
        None,
        SectionId::Contact.reveal_config().unwrap_or_default(),
    );

    let form = RwSignal::new(ContactForm::default());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let snapshot = form.get_untracked();
        spawn_local(async move {
            let relay = EmailJsRelay::new(RelayConfig::from_build_env(), data.profile.name.clone());
            let outcome = submit(&snapshot, &relay, move |flag| {
                let _ = submitting.try_set(flag);
            })
            .await;
            match &outcome {
                SubmitOutcome::Sent => log::info!("contact message sent"),
                SubmitOutcome::Rejected(err) => log::info!("contact form rejected: {err}"),
                SubmitOutcome::Failed(err) => log::error!("contact relay failed: {err}"),
            }
            toaster.show(outcome.notification());
            if outcome.clears_form() {
                let _ = form.try_update(ContactForm::clear);
            }
        });
    };

    let socials = data
        .social_media
        .links()
        .into_iter()
        .map(|(platform, url)| {
            view! {
                <a
                    href=url.to_string()
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=platform
                    class="w-12 h-12 bg-white border-2 border-[#783162] rounded-full flex items-center justify-center text-[#783162] hover:bg-[#783162] hover:text-white hover:border-[#d4af37] hover:shadow-lg hover:shadow-[#783162]/30 transition-all duration-300 transform hover:scale-110"
                >
                    <i class=social_icon(platform) />
                </a>
            }
        })
        .collect_view();

    view! {
        <section
            id=SectionId::Contact.anchor()
            node_ref=section_ref
            class="py-20 bg-gradient-to-br from-[#f5f5f5] to-white relative overflow-hidden"
        >
            <div class="absolute top-0 right-0 w-96 h-96 bg-[#783162]/5 rounded-full blur-3xl -translate-y-48 translate-x-48"></div>
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="max-w-6xl mx-auto">
                    <div class=move || reveal.class("text-center mb-16 transition-all duration-1000", Motion::Up)>
                        <h2 class="text-4xl md:text-5xl font-bold text-[#2d2d2d] mb-6">
                            "Let's " <span class="text-[#783162]">"Connect"</span>
                        </h2>
                        <div class="w-24 h-1 bg-gradient-to-r from-[#783162] to-[#d4af37] mx-auto rounded-full"></div>
                        <p class="text-[#2d2d2d]/70 text-lg mt-6 max-w-2xl mx-auto">
                            "Have a project in mind or want to collaborate? I'd love to hear from you!"
                        </p>
                    </div>

                    <div class="grid lg:grid-cols-2 gap-12 items-start">
                        <div class=move || {
                            reveal.class("transition-all duration-1000 delay-200", Motion::FromLeft)
                        }>
                            <h3 class="text-3xl font-bold text-[#2d2d2d] mb-8">"Get in Touch"</h3>
                            <div class="space-y-6 mb-10">
                                <ContactDetail icon="✉" label="Email" value=data.profile.email.clone() />
                                <ContactDetail
                                    icon="⌖"
                                    label="Location"
                                    value=data.profile.location.clone()
                                />
                            </div>
                            <h4 class="text-xl font-bold text-[#2d2d2d] mb-6">"Follow Me"</h4>
                            <div class="flex gap-4">{socials}</div>
                        </div>

                        <div class=move || {
                            reveal.class("transition-all duration-1000 delay-400", Motion::FromRight)
                        }>
                            <div class="bg-white rounded-2xl p-8 shadow-xl border border-[#f5f5f5]">
                                <h3 class="text-2xl font-bold text-[#2d2d2d] mb-6">"Send Message"</h3>
                                <form class="space-y-6" on:submit=on_submit>
                                    <input
                                        type="text"
                                        name="name"
                                        placeholder="Your Name"
                                        required
                                        class=INPUT_CLASS
                                        prop:value=move || form.with(|f| f.name.clone())
                                        on:input=move |ev| {
                                            form.update(|f| f.name = event_target_value(&ev))
                                        }
                                    />
                                    <input
                                        type="email"
                                        name="email"
                                        placeholder="Your Email"
                                        required
                                        class=INPUT_CLASS
                                        prop:value=move || form.with(|f| f.email.clone())
                                        on:input=move |ev| {
                                            form.update(|f| f.email = event_target_value(&ev))
                                        }
                                    />
                                    <textarea
                                        name="message"
                                        placeholder="Your Message"
                                        required
                                        rows="5"
                                        class=format!("{INPUT_CLASS} resize-none")
                                        prop:value=move || form.with(|f| f.message.clone())
                                        on:input=move |ev| {
                                            form.update(|f| f.message = event_target_value(&ev))
                                        }
                                    ></textarea>
                                    <button
                                        type="submit"
                                        disabled=move || submitting.get()
                                        class="w-full bg-[#783162] hover:bg-[#783162]/90 text-white py-3 px-6 rounded-xl font-semibold shadow-lg hover:shadow-xl transform hover:scale-105 transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed disabled:transform-none"
                                    >
                                        {move || {
                                            if submitting.get() {
                                                Either::Left(
                                                    view! {
                                                        <span class="flex items-center justify-center gap-2">
                                                            <span class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                                                            "Sending..."
                                                        </span>
                                                    },
                                                )
                                            } else {
                                                Either::Right(
                                                    view! {
                                                        <span class="flex items-center justify-center gap-2">
                                                            "Send Message"
                                                        </span>
                                                    },
                                                )
                                            }
                                        }}
                                    </button>
                                </form>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactDetail(icon: &'static str, label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 p-4 bg-white rounded-2xl shadow-lg hover:shadow-xl transition-all duration-300">
            <div class="w-12 h-12 bg-[#783162] rounded-full flex items-center justify-center text-white text-xl">
                {icon}
            </div>
            <div>
                <h4 class="font-semibold text-[#2d2d2d]">{label}</h4>
                <p class="text-[#2d2d2d]/70">{value}</p>
            </div>
        </div>
    }
}
