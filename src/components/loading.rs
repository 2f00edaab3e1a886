use yew::prelude::*;

/// Full-screen spinner shown while the page pretends to load.
#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    html! {
        <div class="loading-screen">
            <div class="spinner"></div>
        </div>
    }
}
