use crate::content::Section;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub name: &'static str,
    pub active_section: Section,
    pub menu_open: bool,
    pub dark_mode: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_nav_click: Callback<()>,
    pub on_toggle_dark_mode: Callback<()>,
}

fn nav_links(active: Section, on_click: &Callback<()>, class: &'static str) -> Html {
    html! {
        for Section::ALL.iter().map(|section| {
            let on_click = on_click.clone();
            html! {
                <a
                    href={format!("#{}", section.id())}
                    class={classes!(class, (*section == active).then_some("active"))}
                    onclick={Callback::from(move |_| on_click.emit(()))}
                >
                    { section.label() }
                </a>
            }
        })
    }
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let on_toggle_menu = {
        let callback = props.on_toggle_menu.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };
    let on_toggle_dark_mode = {
        let callback = props.on_toggle_dark_mode.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    html! {
        <nav class="nav-bar">
            <div class="nav-inner">
                <h1 class="nav-brand">{ props.name }</h1>
                <button class="menu-toggle" onclick={on_toggle_menu}>
                    { if props.menu_open { "\u{2715}" } else { "\u{2630}" } }
                </button>
                <div class="nav-links">
                    { nav_links(props.active_section, &props.on_nav_click, "nav-link") }
                </div>
                <button class="dark-mode-toggle" onclick={on_toggle_dark_mode}>
                    { if props.dark_mode { "\u{2600}" } else { "\u{263E}" } }
                </button>
            </div>
            {
                if props.menu_open {
                    html! {
                        <div class="mobile-menu">
                            { nav_links(props.active_section, &props.on_nav_click, "mobile-link") }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}
