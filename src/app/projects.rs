use leptos::{
    ev::{self, KeyboardEvent},
    prelude::*,
};
use leptos_use::{use_document, use_event_listener};

use crate::content::{Project, PROJECTS};
use crate::nav::Section;

use super::reveal::{Reveal, SectionHeading};
use super::{Backdrop, PageSection};

const CARD_TECH_LIMIT: usize = 3;

#[cfg(feature = "hydrate")]
fn lock_body_scroll(locked: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let overflow = if locked { "hidden" } else { "unset" };
    if let Err(e) = body.style().set_property("overflow", overflow) {
        log::warn!("couldn't set body overflow to {overflow}: {e:?}");
    }
}

#[cfg(not(feature = "hydrate"))]
fn lock_body_scroll(_locked: bool) {}

#[component]
fn ProjectCard(project: &'static Project, on_details: Callback<()>) -> impl IntoView {
    let (tech, more) = project.tech_preview(CARD_TECH_LIMIT);
    view! {
        <Reveal class="bg-panel/80 backdrop-blur-sm rounded-3xl overflow-hidden hover:shadow-xl group">
            <div class="relative aspect-video w-full overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover transition-transform duration-300 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-panel to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300" />
            </div>
            <div class="p-8">
                <h3 class="text-2xl font-semibold text-white mb-3">{project.title}</h3>
                <p class="text-gray-400 mb-6 line-clamp-2">{project.short_description}</p>
                <div class="flex flex-wrap gap-2 mb-6">
                    {tech
                        .iter()
                        .map(|t| {
                            view! {
                                <span class="px-3 py-1 bg-primary/10 text-primary rounded-full text-sm">
                                    {*t}
                                </span>
                            }
                        })
                        .collect_view()}
                    {more
                        .map(|n| {
                            view! {
                                <span class="px-3 py-1 bg-primary/10 text-primary rounded-full text-sm">
                                    {format!("+{n} more")}
                                </span>
                            }
                        })}
                </div>
                <button
                    on:click=move |_| on_details.run(())
                    class="w-full px-6 py-3 bg-primary text-white rounded-xl font-medium hover:bg-primary/90 transition-all duration-300"
                >
                    "View Details"
                </button>
            </div>
        </Reveal>
    }
}

#[component]
fn DetailList(title: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-xl font-semibold text-white mb-3">{title}</h3>
            <ul class="list-disc list-inside text-gray-400 space-y-2">
                {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn ProjectModal(project: &'static Project, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 bg-black/60 backdrop-blur-[8px] z-[99]"
            on:click=move |_| on_close.run(())
        />
        <div
            class="fixed inset-0 z-[100] overflow-y-auto"
            role="dialog"
            aria-modal="true"
            aria-labelledby=format!("{}-title", project.slug())
        >
            <div
                class="min-h-full flex items-center justify-center p-4"
                on:click=move |ev| {
                    // clicks in the padding around the panel act like the backdrop
                    if ev.target() == ev.current_target() {
                        on_close.run(());
                    }
                }
            >
                <div class="relative bg-panel rounded-3xl w-full max-w-4xl my-8">
                    <button
                        on:click=move |_| on_close.run(())
                        aria-label="Close"
                        class="absolute top-4 right-4 p-3 bg-panel hover:bg-primary rounded-full transition-all duration-300 hover:scale-110 z-[101] shadow-lg text-white text-2xl leading-none"
                    >
                        <i class="extra-close"></i>
                    </button>
                    <div class="p-8">
                        <h2 id=format!("{}-title", project.slug()) class="text-3xl font-bold text-white mb-6">
                            {project.title}
                        </h2>
                        <div class="aspect-video w-full rounded-2xl overflow-hidden mb-8">
                            <img
                                src=project.image
                                alt=project.title
                                class="w-full h-full object-cover"
                            />
                        </div>
                        <div class="space-y-8">
                            <div>
                                <h3 class="text-xl font-semibold text-white mb-3">
                                    "Project Overview"
                                </h3>
                                <p class="text-gray-400">{project.description}</p>
                            </div>
                            <div>
                                <h3 class="text-xl font-semibold text-white mb-3">
                                    "Main Technology Stack"
                                </h3>
                                <div class="flex flex-wrap gap-2">
                                    {project
                                        .main_tech
                                        .iter()
                                        .map(|t| {
                                            view! {
                                                <span class="px-4 py-2 bg-primary/10 text-primary rounded-xl text-sm font-medium">
                                                    {*t}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                            <DetailList title="Technologies Used" items=project.technologies />
                            <DetailList title="Key Features" items=project.features />
                            <DetailList title="Challenges Faced" items=project.challenges />
                            <DetailList title="Future Improvements" items=project.improvements />
                            <div class="flex flex-wrap gap-4">
                                {project
                                    .github
                                    .map(|href| {
                                        view! {
                                            <a
                                                href=href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="flex items-center gap-2 px-6 py-3 bg-primary text-white rounded-xl font-medium hover:bg-primary/90 transition-all duration-300"
                                            >
                                                <i class="devicon-github-plain"></i>
                                                <span>"View Code"</span>
                                            </a>
                                        }
                                    })}
                                {project
                                    .live
                                    .map(|href| {
                                        view! {
                                            <a
                                                href=href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="flex items-center gap-2 px-6 py-3 bg-gray-700 text-white rounded-xl font-medium hover:bg-gray-700/90 transition-all duration-300"
                                            >
                                                <i class="extra-external"></i>
                                                <span>"Live Demo"</span>
                                            </a>
                                        }
                                    })}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let selected = RwSignal::new(None::<usize>);
    let close = Callback::new(move |_: ()| selected.set(None));

    // body must not scroll behind an open modal
    Effect::new(move |_| lock_body_scroll(selected.with(Option::is_some)));
    on_cleanup(|| lock_body_scroll(false));

    let _ = use_event_listener(use_document(), ev::keydown, move |ev: KeyboardEvent| {
        if ev.key() == "Escape" && selected.get_untracked().is_some() {
            close.run(());
        }
    });

    view! {
        <PageSection section=Section::Projects backdrop=Backdrop::Panel class="py-20">
            <div class="container relative mx-auto px-4 z-10">
                <SectionHeading
                    eyebrow="My Work"
                    title="Featured Projects"
                    blurb="Here are some of my recent projects that showcase my skills and experience in web development."
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 max-w-7xl mx-auto">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            let on_details = Callback::new(move |_: ()| {
                                log::debug!("opening project details: {}", project.title);
                                selected.set(Some(i));
                            });
                            view! { <ProjectCard project on_details /> }
                        })
                        .collect_view()}
                </div>
                {move || {
                    selected
                        .get()
                        .and_then(|i| PROJECTS.get(i))
                        .map(|project| view! { <ProjectModal project on_close=close /> })
                }}
            </div>
        </PageSection>
    }
}
