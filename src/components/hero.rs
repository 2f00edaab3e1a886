use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub name: &'static str,
    pub title: &'static str,
}

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("GitHub", "https://github.com"),
    ("LinkedIn", "https://www.linkedin.com"),
    ("Email", "mailto:sukithabandara13@gmail.com"),
];

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <section id="home" class="hero">
            <div class="hero-avatar">
                <img src="profile-pic.jpg" alt={props.name} />
            </div>
            <h1 class="hero-name">{ props.name }</h1>
            <p class="hero-title">{ props.title }</p>
            <div class="hero-socials">
                {
                    for SOCIAL_LINKS.iter().map(|(label, href)| html! {
                        <a class="social-button" href={*href} title={*label}
                           target="_blank" rel="noopener noreferrer">
                            { *label }
                        </a>
                    })
                }
            </div>
            <a href="#contact" class="connect-button">
                <span>{ "Let's Connect" }</span>
                <svg class="connect-arrow" width="24" height="24" viewBox="0 0 24 24"
                     fill="none" stroke="currentColor" stroke-width="2">
                    <path stroke-linecap="round" stroke-linejoin="round"
                          d="M17 8l4 4m0 0l-4 4m4-4H3" />
                </svg>
            </a>
        </section>
    }
}
