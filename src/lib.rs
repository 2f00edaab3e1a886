use wasm_bindgen::prelude::*;

pub mod animation;
mod app;
pub mod components;
pub mod content;
mod theme;

#[wasm_bindgen(start)]
pub fn run_app() {
    // Readable panic messages in the browser console.
    console_error_panic_hook::set_once();

    yew::Renderer::<app::App>::new().render();
}
