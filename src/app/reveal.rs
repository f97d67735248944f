use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Where a revealed element starts before it enters the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealFrom {
    #[default]
    Below,
    Above,
    Left,
    Scaled,
    Faded,
}

impl RevealFrom {
    fn hidden_class(self) -> &'static str {
        match self {
            RevealFrom::Below => "opacity-0 translate-y-5",
            RevealFrom::Above => "opacity-0 -translate-y-5",
            RevealFrom::Left => "opacity-0 -translate-x-5",
            RevealFrom::Scaled => "opacity-0 scale-50",
            RevealFrom::Faded => "opacity-0",
        }
    }
}

const SHOWN: &str = "opacity-100 translate-x-0 translate-y-0 scale-100";

/// Flips to `true` the first time `node` is visible and stays there.
pub fn use_reveal(node: NodeRef<html::Div>) -> ReadSignal<bool> {
    let visible = use_element_visibility(node);
    let (revealed, set_revealed) = signal(false);
    Effect::new(move |_| {
        if visible.get() && !revealed.get_untracked() {
            set_revealed.set(true);
        }
    });
    revealed
}

#[component]
pub fn Reveal(
    /// Transition delay in milliseconds.
    #[prop(optional)]
    delay: u32,
    #[prop(optional)] from: RevealFrom,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node);
    let hidden = from.hidden_class();

    view! {
        <div
            node_ref=node
            class=move || {
                let state = if revealed.get() { SHOWN } else { hidden };
                format!("{class} transition-all duration-700 ease-out {state}")
            }
            style=format!("transition-delay: {delay}ms")
        >
            {children()}
        </div>
    }
}

/// Letter-by-letter entrance used by the hero headline.
#[component]
pub fn AnimatedText(
    text: &'static str,
    #[prop(optional)] delay: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node);

    view! {
        <div node_ref=node class=format!("flex flex-wrap overflow-hidden {class}")>
            {text
                .chars()
                .enumerate()
                .map(|(i, c)| {
                    let c = if c == ' ' { '\u{00A0}' } else { c };
                    let letter_delay = delay + 30 * i as u32;
                    view! {
                        <span
                            class=move || {
                                let state = if revealed.get() {
                                    SHOWN
                                } else {
                                    "opacity-0 -translate-x-5 translate-y-2.5"
                                };
                                format!("inline-block text-white transition-all duration-500 {state}")
                            }
                            style=format!("transition-delay: {letter_delay}ms")
                        >
                            {c.to_string()}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Eyebrow, title and optional blurb that open each section.
#[component]
pub fn SectionHeading(
    eyebrow: &'static str,
    title: &'static str,
    #[prop(optional)] blurb: Option<&'static str>,
) -> impl IntoView {
    view! {
        <Reveal from=RevealFrom::Above class="text-center mb-16">
            <Reveal delay=200>
                <span class="text-primary text-lg font-medium mb-4 block">{eyebrow}</span>
            </Reveal>
            <Reveal delay=400>
                <h2 class="text-4xl md:text-5xl font-bold text-white mb-6">{title}</h2>
            </Reveal>
            {blurb
                .map(|b| {
                    view! {
                        <Reveal delay=600>
                            <p class="text-gray-400 max-w-2xl mx-auto">{b}</p>
                        </Reveal>
                    }
                })}
        </Reveal>
    }
}
