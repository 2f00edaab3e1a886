use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub revealed: bool,
}

// Static form: HTML5 `required` validation only, no submission pipeline.
#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    html! {
        <section
            id="contact"
            class={classes!("contact-section", props.revealed.then_some("revealed"))}
        >
            <div class="section-inner">
                <h2 class="section-heading">{ "Contact" }</h2>
                <form class="contact-form" action="#">
                    <input
                        type="text"
                        name="name"
                        placeholder="Your Name"
                        required=true
                    />
                    <input
                        type="email"
                        name="email"
                        placeholder="Your Email"
                        required=true
                    />
                    <textarea
                        name="message"
                        placeholder="Your Message"
                        rows="6"
                        required=true
                    />
                    <button type="submit" class="send-button">{ "Send Message" }</button>
                </form>
            </div>
        </section>
    }
}
