use leptos::html::Canvas;
use leptos::prelude::*;
use novadigital_landing_core::ParticleConfig;
use novadigital_landing_core::content::{HERO, SPLINE_SCENE_URL};
use tracing::debug;

use crate::canvas::ParticleAnimation;
use crate::lifecycle::register;

#[component]
pub fn Hero(particles: ParticleConfig) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="spline-wrap" aria-hidden="true">
                <spline-viewer url=SPLINE_SCENE_URL></spline-viewer>
            </div>
            <ParticleCanvas config=particles />
            <div class="bg-overlay"></div>
            <div class="hero-content reveal">
                <h1>{HERO.title}</h1>
                <p>{HERO.description}</p>
                <div class="actions">
                    <a href=HERO.primary.href class="btn primary">{HERO.primary.label}</a>
                    <a href=HERO.secondary.href class="btn ghost">{HERO.secondary.label}</a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ParticleCanvas(config: ParticleConfig) -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();
    let started = StoredValue::new(false);

    Effect::new(move || {
        let Some(element) = canvas_ref.get() else {
            return;
        };
        if started.get_value() {
            return;
        }
        started.set_value(true);
        match ParticleAnimation::new(element, config.clone()) {
            Some(mut animation) => {
                animation.start();
                register(animation.into_subscription());
            }
            None => debug!("hero canvas has no drawing context"),
        }
    });

    view! { <canvas node_ref=canvas_ref class="hero-canvas"></canvas> }
}
