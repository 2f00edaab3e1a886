use crate::content::Job;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExperienceSectionProps {
    pub experience: &'static [Job],
    pub revealed: bool,
}

#[function_component(ExperienceSection)]
pub fn experience_section(props: &ExperienceSectionProps) -> Html {
    html! {
        <section
            id="experience"
            class={classes!("experience-section", props.revealed.then_some("revealed"))}
        >
            <div class="section-inner">
                <h2 class="section-heading">{ "Experience" }</h2>
                <div class="experience-grid">
                    {
                        for props.experience.iter().map(|job| html! {
                            <div class="experience-card">
                                <div class="experience-header">
                                    <span class="experience-icon">
                                        { if job.position == "Lead Developer" { "\u{1F4BB}" } else { "\u{1F3E2}" } }
                                    </span>
                                    <h3 class="experience-position">{ job.position }</h3>
                                </div>
                                <p class="experience-company">{ job.company }</p>
                                <p class="experience-period">{ job.period }</p>
                            </div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}
