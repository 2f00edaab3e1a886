use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AboutSectionProps {
    pub about: &'static str,
    pub skills: &'static [&'static str],
    pub revealed: bool,
}

#[function_component(AboutSection)]
pub fn about_section(props: &AboutSectionProps) -> Html {
    html! {
        <section
            id="about"
            class={classes!("about-section", props.revealed.then_some("revealed"))}
        >
            <div class="section-inner">
                <h2 class="about-blurb">{ props.about }</h2>
                <div class="skills-grid">
                    {
                        for props.skills.iter().map(|skill| html! {
                            <div class="skill-card">{ *skill }</div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}
