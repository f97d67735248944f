use leptos::prelude::*;
use leptos_use::{use_window_scroll, use_window_size, UseWindowSizeReturn};

use crate::content::PROFILE;
use crate::nav::{active_section, is_scrolled, MenuState, Section};

use super::SectionTops;

#[component]
pub fn Navbar() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let UseWindowSizeReturn { height, .. } = use_window_size();
    let tops = expect_context::<SectionTops>();
    let active = Memo::new(move |_| {
        let viewport = height.get();
        tops.with(|t| active_section(t, viewport))
    });
    let menu = RwSignal::new(MenuState::default());

    let link_class = move |section: Section| {
        move || {
            if active.get() == section {
                "text-primary font-semibold"
            } else {
                "text-gray-300 hover:text-primary"
            }
        }
    };

    view! {
        <nav class=move || {
            let bg = if is_scrolled(scroll_y.get()) || menu.get().is_open() {
                "bg-gray-900/90 backdrop-blur-md shadow-lg py-3"
            } else {
                "bg-transparent py-5"
            };
            format!("fixed top-0 inset-x-0 z-[90] transition-all duration-300 {bg}")
        }>
            <div class="container mx-auto px-4 flex items-center justify-between">
                <a href=Section::Home.href() class="text-2xl font-bold text-primary">
                    {PROFILE.name}
                </a>
                <ul class="hidden md:flex items-center gap-8">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <li>
                                    <a
                                        href=section.href()
                                        class=link_class(section)
                                        aria-current=move || {
                                            (active.get() == section).then_some("true")
                                        }
                                    >
                                        {section.label()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    class="md:hidden p-2 text-gray-300 hover:text-primary"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=move |_| menu.update(MenuState::toggle)
                >
                    {move || if menu.get().is_open() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu.get().is_open()>
                <ul class="md:hidden container mx-auto px-4 pt-4 pb-2 flex flex-col gap-3">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <li>
                                    <a
                                        href=section.href()
                                        class=link_class(section)
                                        on:click=move |_| menu.update(MenuState::close)
                                    >
                                        {section.label()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </nav>
    }
}
