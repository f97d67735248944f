use leptos::{either::*, ev::SubmitEvent, prelude::*};

use crate::contact::{ContactForm, Field, SubmissionStatus, SubmitAttempt, SUBMIT_DELAY};
use crate::content::{ContactChannel, CONTACT_CHANNELS};
use crate::nav::Section;

use super::reveal::{Reveal, SectionHeading};
use super::{Backdrop, PageSection};

#[component]
fn ContactCard(channel: &'static ContactChannel, delay: u32) -> impl IntoView {
    let external = channel.is_external();
    view! {
        <Reveal delay>
            <a
                href=channel.href
                target=external.then_some("_blank")
                rel=external.then_some("noopener noreferrer")
                class="group bg-panel/80 backdrop-blur-sm p-10 rounded-3xl hover:shadow-xl transition-all duration-300 text-center flex flex-col items-center justify-center hover:-translate-y-1"
            >
                <div class="w-16 h-16 bg-primary/10 rounded-2xl flex items-center justify-center mb-6 group-hover:bg-primary/20 group-hover:scale-105 transition-all duration-300 text-primary text-2xl">
                    <i class=channel.icon.class()></i>
                </div>
                <h3 class="text-2xl font-semibold text-white mb-3">{channel.title}</h3>
                <p class="text-gray-400 group-hover:text-primary transition-colors duration-300">
                    {channel.value}
                </p>
            </a>
        </Reveal>
    }
}

#[component]
fn InputField(field: Field, form: RwSignal<ContactForm>, delay: u32) -> impl IntoView {
    let (focused, set_focused) = signal(false);
    let value = move || form.with(|f| f.fields().get(field).to_string());
    let error = move || form.with(|f| f.error_for(field));
    let input_class = move || {
        let border = match (error().is_some(), focused.get()) {
            (true, _) => "border-red-400",
            (false, true) => "border-primary",
            (false, false) => "border-gray-700/50",
        };
        format!(
            "w-full px-4 py-3 bg-gray-800/50 backdrop-blur-sm border {border} rounded-lg text-white placeholder-gray-400 focus:outline-none focus:border-primary transition-colors",
        )
    };
    let id = field.as_str();

    view! {
        <Reveal delay class="mb-6">
            <label class="block text-gray-300 mb-2 font-medium" for=id>
                {field.label()}
                " "
                {move || {
                    error()
                        .map(|e| {
                            view! { <span class="text-red-400 text-sm">"- " {e.to_string()}</span> }
                        })
                }}
            </label>
            {if field == Field::Message {
                Either::Left(
                    view! {
                        <textarea
                            id=id
                            name=id
                            rows="4"
                            placeholder=field.placeholder()
                            class=move || format!("{} resize-none", input_class())
                            prop:value=value
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.on_field_change(field, value));
                            }
                            on:focus=move |_| set_focused.set(true)
                            on:blur=move |_| set_focused.set(false)
                        />
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <input
                            type=field.input_type()
                            id=id
                            name=id
                            placeholder=field.placeholder()
                            class=input_class
                            prop:value=value
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.on_field_change(field, value));
                            }
                            on:focus=move |_| set_focused.set(true)
                            on:blur=move |_| set_focused.set(false)
                        />
                    },
                )
            }}
        </Reveal>
    }
}

#[component]
fn SubmitButton(form: RwSignal<ContactForm>) -> impl IntoView {
    let status = move || form.with(ContactForm::status);
    view! {
        <button
            type="submit"
            disabled=move || !form.with(ContactForm::can_submit)
            class=move || {
                let state = if status().is_busy() {
                    "opacity-75 cursor-not-allowed"
                } else {
                    "hover:bg-primary/90 hover:scale-[1.02] active:scale-[0.98]"
                };
                format!(
                    "w-full px-8 py-4 bg-primary text-white rounded-xl font-medium transition-all duration-300 flex items-center justify-center gap-2 {state}",
                )
            }
        >
            {move || {
                let status = status();
                match status {
                    SubmissionStatus::Sending => {
                        EitherOf3::A(
                            view! {
                                <span class="animate-spin rounded-full h-5 w-5 border-b-2 border-white"></span>
                                <span>{status.label()}</span>
                            },
                        )
                    }
                    SubmissionStatus::Success => {
                        EitherOf3::B(
                            view! {
                                <i class="extra-check"></i>
                                <span>{status.label()}</span>
                            },
                        )
                    }
                    _ => EitherOf3::C(status.label()),
                }
            }}
        </button>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(ContactForm::begin_submit) {
            Some(SubmitAttempt::Accepted(_)) => {
                // no backend: the delay stands in for delivering the message
                set_timeout(
                    move || {
                        form.try_update(|f| f.complete_submit(Ok(())));
                    },
                    SUBMIT_DELAY,
                );
            }
            Some(SubmitAttempt::Rejected { errors }) => {
                log::debug!("contact form rejected with {errors} invalid field(s)");
            }
            Some(SubmitAttempt::Ignored) | None => {}
        }
    };

    view! {
        <PageSection section=Section::Contact backdrop=Backdrop::Panel class="py-20">
            <div class="container relative mx-auto px-4 z-[50]">
                <SectionHeading
                    eyebrow="Get in Touch"
                    title="Contact Me"
                    blurb="Have a question or want to work together? Feel free to reach out to me using the form below or through any of the contact methods."
                />
                <div class="grid md:grid-cols-3 gap-8 mb-20 max-w-5xl mx-auto px-4">
                    {CONTACT_CHANNELS
                        .iter()
                        .enumerate()
                        .map(|(i, channel)| {
                            view! { <ContactCard channel delay={600 + 200 * i as u32} /> }
                        })
                        .collect_view()}
                </div>
                <Reveal delay=1200 class="max-w-2xl mx-auto">
                    <form
                        on:submit=on_submit
                        novalidate=true
                        class="bg-panel/80 backdrop-blur-sm p-8 md:p-10 rounded-3xl"
                    >
                        <div class="grid md:grid-cols-2 gap-6">
                            <InputField field=Field::Name form delay=1400 />
                            <InputField field=Field::Email form delay=1600 />
                        </div>
                        <InputField field=Field::Subject form delay=1800 />
                        <InputField field=Field::Message form delay=2000 />
                        <SubmitButton form />
                        {move || {
                            form.with(ContactForm::failure_message)
                                .map(|msg| {
                                    view! { <p class="mt-4 text-red-400 text-center">{msg}</p> }
                                })
                        }}
                    </form>
                </Reveal>
            </div>
        </PageSection>
    }
}
