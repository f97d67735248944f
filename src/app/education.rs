use leptos::prelude::*;

use crate::content::{Education as EducationEntry, EDUCATION};
use crate::nav::Section;

use super::reveal::{Reveal, RevealFrom, SectionHeading};
use super::{Backdrop, PageSection};

#[component]
fn EducationCard(entry: &'static EducationEntry) -> impl IntoView {
    view! {
        <Reveal class="bg-panel/80 backdrop-blur-sm p-8 rounded-3xl hover:shadow-xl max-w-3xl mx-auto">
            <div class="flex justify-center items-center text-6xl text-primary mb-6 transition-transform hover:scale-110">
                <i class="extra-graduation"></i>
            </div>
            <h3 class="text-2xl font-semibold text-white mb-2 text-center">{entry.degree}</h3>
            <h4 class="text-xl text-primary mb-4 text-center">{entry.institution}</h4>
            <p class="text-gray-300 mb-2 text-center">{entry.duration}</p>
            <p class="text-gray-400 text-center">{entry.description}</p>
            <ul class="mt-6 space-y-3 flex flex-col items-center">
                {entry
                    .achievements
                    .iter()
                    .enumerate()
                    .map(|(i, achievement)| {
                        view! {
                            <li>
                                <Reveal
                                    from=RevealFrom::Left
                                    delay={200 * i as u32}
                                    class="text-gray-400 flex items-center justify-center text-center"
                                >
                                    <span class="text-primary mr-2">"•"</span>
                                    {*achievement}
                                </Reveal>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </Reveal>
    }
}

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <PageSection section=Section::Education backdrop=Backdrop::Panel class="py-20">
            <div class="container relative mx-auto px-4 z-10">
                <SectionHeading
                    eyebrow="Academic Journey"
                    title="Education"
                    blurb="My academic background and achievements that have shaped my journey in technology."
                />
                <div class="max-w-4xl mx-auto">
                    {EDUCATION.iter().map(|entry| view! { <EducationCard entry /> }).collect_view()}
                </div>
            </div>
        </PageSection>
    }
}
