mod about;
mod contact;
mod education;
mod footer;
mod hero;
mod navbar;
mod projects;
mod reveal;
mod skills;

use leptos::{html, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_element_bounding, UseElementBoundingReturn};

use crate::content::PROFILE;
use crate::nav::Section;

use about::About;
use contact::Contact;
use education::Education;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta name="description" content=PROFILE.tagline />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-gray-900 text-white">
                <App />
            </body>
        </html>
    }
}

/// Viewport-relative top of every rendered section, fed to the navbar.
#[derive(Debug, Clone, Copy)]
pub struct SectionTops(RwSignal<Vec<(Section, f64)>>);

impl SectionTops {
    fn new() -> Self {
        Self(RwSignal::new(Vec::new()))
    }

    fn report(&self, section: Section, top: f64) {
        self.0.update(|tops| {
            if let Some(entry) = tops.iter_mut().find(|(s, _)| *s == section) {
                entry.1 = top;
            } else {
                tops.push((section, top));
            }
        });
    }

    pub fn with<U>(&self, f: impl FnOnce(&[(Section, f64)]) -> U) -> U {
        self.0.with(|tops| f(tops))
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(SectionTops::new());

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />

        <Router>
            <div class="relative w-full min-h-screen overflow-x-hidden">
                <Navbar />
                <main class="relative w-full overflow-x-hidden">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Skills />
        <Education />
        <Projects />
        <Contact />
    }
}

/// Slanted gradient backdrop shared by every section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Backdrop {
    #[default]
    Gray,
    Panel,
}

impl Backdrop {
    fn class(self) -> &'static str {
        match self {
            Backdrop::Gray => "from-gray-900 via-gray-900 to-gray-800",
            Backdrop::Panel => "from-panel via-panel to-gray-900",
        }
    }
}

/// A top-level page section. Registers its position with [`SectionTops`].
#[component]
pub fn PageSection(
    section: Section,
    #[prop(optional)] backdrop: Backdrop,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Section>::new();
    let UseElementBoundingReturn { top, .. } = use_element_bounding(node);
    if let Some(tops) = use_context::<SectionTops>() {
        Effect::new(move |_| tops.report(section, top.get()));
    }

    view! {
        <div class="section-wrapper">
            <section
                id=section.id()
                node_ref=node
                class=format!("relative bg-gray-900 scroll-mt-20 {class}")
            >
                <div class=format!(
                    "absolute inset-0 bg-gradient-to-b clip-slant {}",
                    backdrop.class(),
                )></div>
                {children()}
            </section>
        </div>
    }
}
