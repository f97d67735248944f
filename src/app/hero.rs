use leptos::prelude::*;

use crate::content::{PROFILE, SOCIAL_LINKS};
use crate::nav::Section;

use super::reveal::{AnimatedText, Reveal, RevealFrom};
use super::PageSection;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <PageSection section=Section::Home class="min-h-screen flex items-center">
            <div class="container relative mx-auto px-4 z-10 py-20">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <Reveal from=RevealFrom::Faded class="text-center lg:text-left">
                        <div class="bg-gray-800/50 backdrop-blur-sm p-8 rounded-2xl border border-gray-700/50 mb-8">
                            <div class="mb-6">
                                <AnimatedText
                                    text="Hi,"
                                    class="text-4xl md:text-6xl font-bold mb-2"
                                    delay=200
                                />
                                <AnimatedText
                                    text=PROFILE.greeting
                                    class="text-4xl md:text-6xl font-bold text-primary"
                                    delay=400
                                />
                            </div>
                            <AnimatedText
                                text=PROFILE.role
                                class="text-2xl md:text-3xl text-gray-300 mb-6"
                                delay=600
                            />
                            <Reveal delay=800>
                                <p class="text-lg text-gray-300 mb-8">{PROFILE.tagline}</p>
                            </Reveal>
                            <Reveal delay=1000>
                                <a
                                    href=PROFILE.resume
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="inline-block px-8 py-3 bg-primary text-white rounded-lg font-medium hover:bg-primary/90 hover:scale-105 transition-all duration-300 hover:shadow-xl"
                                >
                                    "Download Resume"
                                </a>
                            </Reveal>
                        </div>
                        <div class="flex justify-center lg:justify-start space-x-4">
                            {SOCIAL_LINKS
                                .iter()
                                .enumerate()
                                .map(|(i, link)| {
                                    view! {
                                        <Reveal delay={1200 + 100 * i as u32}>
                                            <a
                                                href=link.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=link.label
                                                class="block text-2xl text-gray-300 hover:text-primary hover:scale-110 transition-all p-3 bg-gray-800/50 rounded-lg backdrop-blur-sm border border-gray-700/50"
                                            >
                                                <i class=link.icon.class()></i>
                                            </a>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                    <Reveal from=RevealFrom::Scaled delay=500 class="flex justify-center lg:justify-end">
                        <div class="relative w-64 h-64 md:w-80 md:h-80 bg-gray-800/50 backdrop-blur-sm rounded-full border border-gray-700/50 p-4 hover:scale-105 transition-transform">
                            <img
                                src=PROFILE.portrait
                                alt=PROFILE.name
                                class="w-full h-full object-cover rounded-full"
                            />
                        </div>
                    </Reveal>
                </div>
            </div>
        </PageSection>
    }
}
