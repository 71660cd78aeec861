use leptos::prelude::*;
use novadigital_landing_core::content::{BRAND, LOGO_URL, NAV_LINKS};
use novadigital_landing_core::{HeaderConfig, HeaderState};

use crate::lifecycle::{listen, register};

#[component]
pub fn Header(config: HeaderConfig) -> impl IntoView {
    let (state, set_state) = signal(HeaderState::default());

    // Shown once the first frame is painted, scroll or not.
    request_animation_frame(move || set_state.update(|s| s.on_ready()));

    if let Some(window) = web_sys::window() {
        if let Some(subscription) = listen("header-scroll", &window, "scroll", true, move |_| {
            set_state.update(|s| s.on_scroll())
        }) {
            register(subscription);
        }
    }

    let header_config = config.clone();
    let header_class = move || state.get().header_class(&header_config);
    let menu_class = move || state.get().menu_class(&config);

    view! {
        <header class=header_class>
            <div class="container nav">
                <a href="#home" class="logo" aria-label="Company home">
                    <img src=LOGO_URL alt="Logo" />
                    <span>{BRAND}</span>
                </a>
                <nav class=menu_class>
                    {NAV_LINKS.iter().map(|link| {
                        view! {
                            <a href=link.href on:click=move |_| set_state.update(|s| s.close_menu())>
                                {link.label}
                            </a>
                        }
                    }).collect::<Vec<_>>()}
                </nav>
                <button
                    class="hamburger"
                    aria-label="Toggle menu"
                    aria-expanded=move || state.get().menu_open.to_string()
                    on:click=move |_| set_state.update(|s| s.toggle_menu())
                >
                    <span />
                </button>
            </div>
        </header>
    }
}
