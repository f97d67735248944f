use leptos::prelude::*;

use crate::content::{ABOUT_BLOCKS, FEATURE_CARDS};
use crate::nav::Section;

use super::reveal::{Reveal, SectionHeading};
use super::PageSection;

#[component]
fn Aurora() -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden">
            <div class="aurora-container absolute inset-0" aria-hidden="true">
                <div class="aurora-1"></div>
                <div class="aurora-2"></div>
                <div class="aurora-3"></div>
                <div class="aurora-4"></div>
            </div>
            <div class="aurora-glass absolute inset-0 backdrop-blur-[100px]"></div>
        </div>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <PageSection section=Section::About class="min-h-screen py-20">
            <Aurora />
            <div class="container relative mx-auto px-4 z-10">
                <SectionHeading eyebrow="Get to Know" title="About Me" />
                <div class="max-w-6xl mx-auto">
                    <div class="grid md:grid-cols-2 gap-8 mb-12">
                        {ABOUT_BLOCKS
                            .iter()
                            .enumerate()
                            .map(|(i, block)| {
                                let base = 600 + 200 * i as u32;
                                view! {
                                    <Reveal
                                        delay=base
                                        class="bg-gray-800/50 backdrop-blur-sm p-8 rounded-2xl border border-gray-700/50"
                                    >
                                        <h3 class="text-2xl font-semibold text-white mb-6">
                                            {block.title}
                                        </h3>
                                        <div class="space-y-6">
                                            {block
                                                .paragraphs
                                                .iter()
                                                .enumerate()
                                                .map(|(j, p)| {
                                                    view! {
                                                        <Reveal delay={base + 200 * (j as u32 + 1)}>
                                                            <p class="text-lg text-gray-300 leading-relaxed">
                                                                {*p}
                                                            </p>
                                                        </Reveal>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                        {FEATURE_CARDS
                            .iter()
                            .enumerate()
                            .map(|(i, card)| {
                                view! {
                                    <Reveal
                                        delay={1400 + 200 * i as u32}
                                        class="group text-center p-8 rounded-2xl bg-gray-800/50 backdrop-blur-sm border border-gray-700/50 hover:shadow-xl"
                                    >
                                        <div class="text-6xl mb-6 mx-auto transition-transform group-hover:scale-110">
                                            {card.emoji}
                                        </div>
                                        <h4 class="text-2xl font-semibold text-white mb-4">
                                            {card.title}
                                        </h4>
                                        <p class="text-gray-300">{card.description}</p>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </PageSection>
    }
}
