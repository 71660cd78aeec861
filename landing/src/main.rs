// NovaDigital Landing Page — Leptos 0.8 Edition
// Developed by The NovaDigital Team (c)2025

mod canvas;
mod lifecycle;
mod logging;
mod reveal;
mod sections;

use leptos::prelude::*;
use lifecycle::PageTeardown;
use novadigital_landing_core::LandingConfig;
use sections::*;
use tracing::{debug, info};

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let config = LandingConfig::load_embedded();
    let teardown = PageTeardown::provide();

    // Runs after the first render, when every reveal target is in the DOM.
    let reveal_config = config.reveal.clone();
    Effect::new(move || match reveal::observe_reveals(&reveal_config) {
        Some(subscription) => teardown.add(subscription),
        None => debug!("reveal animations disabled"),
    });

    info!("landing page mounted");

    view! {
        <div id="home">
            <Header config=config.header />
            <Hero particles=config.particles />
            <Services />
            <WhyUs />
            <Testimonials config=config.rotator />
            <Contact />
            <Footer />
        </div>
    }
}
