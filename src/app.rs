use crate::components::{
    about::AboutSection,
    contact::ContactSection,
    experience::ExperienceSection,
    footer::PageFooter,
    hero::Hero,
    loading::LoadingScreen,
    nav::NavBar,
    projects::ProjectsSection,
};
use crate::content::{Section, PROFILE};
use crate::theme;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

const LOADING_DELAY_MS: u32 = 2000;

/// Fraction of the viewport height a section must straddle to count as the
/// active navigation target.
const ACTIVE_SECTION_MIDPOINT: f64 = 0.5;

/// Fraction of the viewport height at which a section's reveal animation
/// triggers.
const REVEAL_THRESHOLD: f64 = 0.8;

pub struct App {
    active_section: Section,
    menu_open: bool,
    scroll_progress: f64,
    revealed: [bool; Section::ALL.len()],
    loading: bool,
    dark_mode: bool,
    // RAII handles: dropping them removes the listener / cancels the timer.
    _scroll_listener: Option<EventListener>,
    loading_timer: Option<Timeout>,
}

pub enum Msg {
    Scrolled,
    LoadingFinished,
    ToggleMenu,
    CloseMenu,
    ToggleDarkMode,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let dark_mode = theme::load_dark_mode();
        theme::apply_dark_mode(dark_mode);

        let scroll_listener = web_sys::window().map(|window| {
            let link = ctx.link().clone();
            EventListener::new(&window, "scroll", move |_| {
                link.send_message(Msg::Scrolled);
            })
        });

        let loading_timer = {
            let link = ctx.link().clone();
            Timeout::new(LOADING_DELAY_MS, move || {
                link.send_message(Msg::LoadingFinished);
            })
        };

        Self {
            active_section: Section::Home,
            menu_open: false,
            scroll_progress: 0.0,
            revealed: [false; Section::ALL.len()],
            loading: true,
            dark_mode,
            _scroll_listener: scroll_listener,
            loading_timer: Some(loading_timer),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Scrolled => self.recompute_scroll_state(),
            Msg::LoadingFinished => {
                self.loading = false;
                self.loading_timer = None;
                self.recompute_scroll_state();
                true
            }
            Msg::ToggleMenu => {
                self.menu_open = !self.menu_open;
                true
            }
            Msg::CloseMenu => {
                if self.menu_open {
                    self.menu_open = false;
                    true
                } else {
                    false
                }
            }
            Msg::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                theme::apply_dark_mode(self.dark_mode);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! { <LoadingScreen /> };
        }

        html! {
            <div class="page">
                <div
                    class="scroll-progress"
                    style={format!("width: {}%", self.scroll_progress)}
                />
                <NavBar
                    name={PROFILE.name}
                    active_section={self.active_section}
                    menu_open={self.menu_open}
                    dark_mode={self.dark_mode}
                    on_toggle_menu={ctx.link().callback(|_| Msg::ToggleMenu)}
                    on_nav_click={ctx.link().callback(|_| Msg::CloseMenu)}
                    on_toggle_dark_mode={ctx.link().callback(|_| Msg::ToggleDarkMode)}
                />
                <Hero name={PROFILE.name} title={PROFILE.title} />
                <AboutSection
                    about={PROFILE.about}
                    skills={PROFILE.skills}
                    revealed={self.revealed[Section::About.index()]}
                />
                <ProjectsSection
                    projects={PROFILE.projects}
                    revealed={self.revealed[Section::Projects.index()]}
                />
                <ExperienceSection
                    experience={PROFILE.experience}
                    revealed={self.revealed[Section::Experience.index()]}
                />
                <ContactSection revealed={self.revealed[Section::Contact.index()]} />
                <PageFooter
                    name={PROFILE.name}
                    email={PROFILE.email}
                    phone={PROFILE.phone}
                />
            </div>
        }
    }
}

impl App {
    /// Refreshes every scroll-derived piece of state: the top progress bar,
    /// the scroll-spy highlight, and per-section reveal flags.
    fn recompute_scroll_state(&mut self) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let Some(document) = window.document() else {
            return false;
        };

        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let window_height = window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0);
        let document_height = document
            .document_element()
            .map(|root| f64::from(root.scroll_height()))
            .unwrap_or(0.0);

        let scrollable = document_height - window_height;
        self.scroll_progress = if scrollable > 0.0 {
            (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };

        for section in Section::ALL {
            let Some(element) = document.get_element_by_id(section.id()) else {
                continue;
            };
            let rect = element.get_bounding_client_rect();
            let midpoint = window_height * ACTIVE_SECTION_MIDPOINT;
            if rect.top() <= midpoint && rect.bottom() >= midpoint {
                self.active_section = section;
            }
            self.revealed[section.index()] = rect.top() <= window_height * REVEAL_THRESHOLD;
        }

        true
    }
}
