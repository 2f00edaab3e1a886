use crate::content::Project;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProjectsSectionProps {
    pub projects: &'static [Project],
    pub revealed: bool,
}

#[function_component(ProjectsSection)]
pub fn projects_section(props: &ProjectsSectionProps) -> Html {
    html! {
        <section
            id="projects"
            class={classes!("projects-section", props.revealed.then_some("revealed"))}
        >
            <div class="section-inner">
                <h2 class="section-heading">{ "Projects" }</h2>
                <div class="project-grid">
                    {
                        for props.projects.iter().map(|project| html! {
                            <div class="project-card">
                                <h3 class="project-title">{ project.title }</h3>
                                <p class="project-description">{ project.description }</p>
                                <div class="project-tags">
                                    {
                                        for project.tags.iter().map(|tag| html! {
                                            <span class="project-tag">{ *tag }</span>
                                        })
                                    }
                                </div>
                                <a href={project.link} class="project-link">{ "View Project" }</a>
                            </div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}
