mod about;
mod contact;
mod cv;
mod dismiss;
mod dom;
mod footer;
mod hero;
mod marquee;
mod navbar;
mod portfolio;
mod reveal;
mod toast;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::About;
use contact::Contact;
use cv::Cv;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use portfolio::Portfolio;
use toast::{Toast, Toaster};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="font-sans antialiased bg-white text-[#2d2d2d]">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(Toaster::new());

    let profile = &crate::content::portfolio().profile;
    let name = profile.name.clone();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Meta name="description" content=profile.tagline.clone() />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The single scrolling page: every section stacked in navigation order.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen overflow-x-hidden">
            <Navbar />
            <main>
                <Hero />
                <About />
                <Cv />
                <Portfolio />
                <Contact />
            </main>
            <Footer />
            <Toast />
        </div>
    }
}
