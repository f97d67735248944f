use leptos::prelude::*;

use crate::content::{copyright_year, FOOTER_CONTACTS, PROFILE, SOCIAL_LINKS};
use crate::nav::Section;

use super::reveal::{Reveal, RevealFrom};

const LINK_CLASS: &str = "group flex items-center gap-3 text-gray-400 hover:text-primary p-2 rounded-lg hover:bg-gray-800/50 hover:translate-x-1 transition-all duration-300";
const ICON_CLASS: &str = "w-8 h-8 flex items-center justify-center rounded-full bg-gray-800/50 text-primary transition-transform group-hover:scale-110";

#[component]
fn FooterColumn(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <Reveal class="w-full md:w-1/3 px-6 mb-12 md:mb-0">
            <h3 class="text-white text-xl font-semibold mb-6 pb-2 border-b border-gray-800">
                {title}
            </h3>
            {children()}
        </Reveal>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative bg-gray-900 pt-24 pb-12">
            <div class="absolute inset-0 bg-gradient-to-b from-gray-900 to-gray-800 clip-slant-top"></div>
            <div class="container relative mx-auto px-4 z-10">
                <div class="flex flex-wrap">
                    <FooterColumn title="About Me">
                        <div class="space-y-6">
                            <Reveal delay=200>
                                <h2 class="text-2xl font-bold text-primary">{PROFILE.name}</h2>
                            </Reveal>
                            <p class="text-gray-400 leading-relaxed">{PROFILE.bio}</p>
                            <div class="space-y-3">
                                {FOOTER_CONTACTS
                                    .iter()
                                    .map(|c| {
                                        view! {
                                            <a href=c.href class=LINK_CLASS>
                                                <span class=ICON_CLASS>
                                                    <i class=c.icon.class()></i>
                                                </span>
                                                <span class="flex flex-col">
                                                    <span class="text-sm text-gray-500">{c.title}</span>
                                                    <span class="text-gray-300">{c.value}</span>
                                                </span>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </FooterColumn>
                    <FooterColumn title="Quick Links">
                        <nav class="grid gap-2">
                            {Section::ALL
                                .into_iter()
                                .map(|section| {
                                    view! {
                                        <a href=section.href() class=LINK_CLASS>
                                            <span class=ICON_CLASS>
                                                <i class=format!("extra-{}", section.id())></i>
                                            </span>
                                            <span>{section.long_label()}</span>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </nav>
                    </FooterColumn>
                    <FooterColumn title="Connect With Me">
                        <div class="space-y-6">
                            <p class="text-gray-400">
                                "Follow me on social media to stay updated with my latest projects and tech articles."
                            </p>
                            <div class="grid gap-2">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class=LINK_CLASS
                                            >
                                                <span class=ICON_CLASS>
                                                    <i class=link.icon.class()></i>
                                                </span>
                                                <span>{link.footer_label}</span>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </FooterColumn>
                </div>
                <Reveal
                    from=RevealFrom::Faded
                    delay=800
                    class="text-center mt-16 pt-8 border-t border-gray-800"
                >
                    <p class="text-gray-400 mb-4">"Thank you for visiting my portfolio"</p>
                    <p class="text-gray-500 text-sm">
                        {format!("© {} {}. All rights reserved.", copyright_year(), PROFILE.name)}
                    </p>
                </Reveal>
            </div>
        </footer>
    }
}
