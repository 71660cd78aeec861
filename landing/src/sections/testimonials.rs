use leptos::prelude::*;
use novadigital_landing_core::content::TESTIMONIALS;
use novadigital_landing_core::{RotatorConfig, Subscription, TestimonialRotator};
use tracing::{debug, warn};

use crate::lifecycle::register;

#[component]
pub fn Testimonials(config: RotatorConfig) -> impl IntoView {
    let (rotator, set_rotator) = signal(TestimonialRotator::new(TESTIMONIALS.len()));

    // Manual selection only moves the index; the interval keeps its schedule.
    match set_interval_with_handle(
        move || set_rotator.update(|r| {
            r.advance();
        }),
        config.interval(),
    ) {
        Ok(handle) => register(Subscription::new("testimonial-interval", move || handle.clear())),
        Err(e) => warn!("testimonial rotation disabled: {e:?}"),
    }

    let select = move |index: usize| {
        set_rotator.update(|r| {
            if let Err(e) = r.select(index) {
                debug!("{e}");
            }
        })
    };

    view! {
        <section class="section">
            <div class="container">
                <h2 class="reveal">"What Clients Say"</h2>
                <p class="lead reveal">
                    "Trusted by startups and enterprises for quality, speed, and reliability."
                </p>
                <div class="slider reveal">
                    <div class="slides" style:transform=move || rotator.get().track_transform()>
                        {TESTIMONIALS.iter().map(|t| {
                            view! {
                                <div class="slide">
                                    <div class="avatar" aria-hidden="true"></div>
                                    <div class="content">
                                        <h4>{t.name}</h4>
                                        <p>"“"{t.quote}"”"</p>
                                    </div>
                                </div>
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                    <div class="slider-controls">
                        {(0..TESTIMONIALS.len()).map(|i| {
                            view! {
                                <button
                                    aria-label=format!("Go to slide {}", i + 1)
                                    class=move || if rotator.get().is_active(i) { "dot active" } else { "dot" }
                                    on:click=move |_| select(i)
                                />
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}
