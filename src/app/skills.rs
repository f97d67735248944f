use leptos::{html, prelude::*};

use crate::content::{SkillCategory, SKILL_CATEGORIES};
use crate::nav::Section;

use super::reveal::{use_reveal, SectionHeading};
use super::PageSection;

#[component]
fn SkillCard(category: &'static SkillCategory, index: usize) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node);
    let card_delay = 200 * index as u32;
    let bar_delay = card_delay + 500;

    view! {
        <div
            node_ref=node
            class=move || {
                let state = if revealed.get() {
                    "opacity-100 translate-y-0"
                } else {
                    "opacity-0 translate-y-5"
                };
                format!(
                    "bg-gray-800/50 backdrop-blur-sm p-8 rounded-2xl hover:shadow-xl border border-gray-700/50 transition-all duration-700 {state}",
                )
            }
            style=format!("transition-delay: {card_delay}ms")
        >
            <div class="text-center mb-8">
                <i class=format!(
                    "{} text-6xl text-primary inline-block transition-transform hover:scale-110",
                    category.icon,
                )></i>
                <h3 class="text-2xl font-semibold text-white mt-4">{category.title}</h3>
            </div>
            <div class="space-y-6">
                {category
                    .skills
                    .iter()
                    .map(|skill| {
                        let level = skill.level;
                        view! {
                            <div class="relative">
                                <div class="flex justify-between mb-2">
                                    <span class="text-gray-300 font-medium">{skill.name}</span>
                                    <span class="text-primary font-semibold">
                                        {format!("{level}%")}
                                    </span>
                                </div>
                                <div class="w-full bg-gray-700/50 rounded-full h-2.5">
                                    <div
                                        class="bg-primary rounded-full h-2.5 transition-[width] duration-1000 ease-out"
                                        style=move || {
                                            let width = if revealed.get() { level } else { 0 };
                                            format!("width: {width}%; transition-delay: {bar_delay}ms")
                                        }
                                        role="progressbar"
                                        aria-valuenow=level.to_string()
                                        aria-valuemin="0"
                                        aria-valuemax="100"
                                        aria-label=skill.name
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <PageSection section=Section::Skills class="py-20">
            <div class="container relative mx-auto px-4 z-10">
                <SectionHeading eyebrow="What I Can Do" title="My Skills" />
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(index, category)| view! { <SkillCard category index /> })
                        .collect_view()}
                </div>
            </div>
        </PageSection>
    }
}
