use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageFooterProps {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
}

const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("LinkedIn", "https://www.linkedin.com"),
    ("GitHub", "https://github.com"),
    ("Twitter", "https://twitter.com"),
    ("Instagram", "https://www.instagram.com"),
];

#[function_component(PageFooter)]
pub fn page_footer(props: &PageFooterProps) -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="page-footer">
            <div class="footer-inner">
                <h3 class="footer-heading">{ "Let's Connect!" }</h3>
                <p class="footer-blurb">
                    { "I'm always open to new opportunities, ideas, or collaborations. \
                       Feel free to reach out!" }
                </p>
                <div class="footer-columns">
                    <div class="footer-column">
                        <h4>{ "Contact" }</h4>
                        <p>
                            { "Email: " }
                            <a href={format!("mailto:{}", props.email)}>{ props.email }</a>
                        </p>
                        <p>{ format!("Phone: {}", props.phone) }</p>
                    </div>
                    <div class="footer-column">
                        <h4>{ "Social Media" }</h4>
                        <div class="footer-socials">
                            {
                                for SOCIAL_LINKS.iter().map(|(label, href)| html! {
                                    <a href={*href} target="_blank" rel="noopener noreferrer">
                                        { *label }
                                    </a>
                                })
                            }
                        </div>
                    </div>
                    <div class="footer-column">
                        <h4>{ "Get in Touch" }</h4>
                        <p>{ format!("\u{00A9} {} {}. All Rights Reserved.", year, props.name) }</p>
                    </div>
                </div>
                <a href="#home" class="back-to-top">{ "\u{2191} Back to Top" }</a>
            </div>
        </footer>
    }
}
