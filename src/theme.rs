//! Dark-mode preference: one boolean in localStorage, mirrored onto the
//! `<body>` class list so the stylesheet can theme everything.

use gloo::storage::{LocalStorage, Storage};

const DARK_MODE_KEY: &str = "darkMode";

/// Reads the saved preference; missing or unreadable storage means light mode.
pub fn load_dark_mode() -> bool {
    LocalStorage::get(DARK_MODE_KEY).unwrap_or(false)
}

/// Persists the preference and applies the `dark` class to `<body>`.
pub fn apply_dark_mode(enabled: bool) {
    if let Err(err) = LocalStorage::set(DARK_MODE_KEY, enabled) {
        gloo::console::log!(format!("Failed to save dark mode preference: {:?}", err));
    }

    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    if let Some(body) = body {
        let class_list = body.class_list();
        let result = if enabled {
            class_list.add_1("dark")
        } else {
            class_list.remove_1("dark")
        };
        if result.is_err() {
            gloo::console::log!("Failed to toggle dark mode class on <body>");
        }
    }
}
