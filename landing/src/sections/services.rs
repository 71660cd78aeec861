use leptos::prelude::*;
use novadigital_landing_core::RevealKind;
use novadigital_landing_core::content::{SERVICES, service_icon_url};

#[component]
pub fn Services() -> impl IntoView {
    let reveal = RevealKind::Up.class();
    view! {
        <section id="services" class="section">
            <div class="container">
                <h2 class=reveal>"Our Services"</h2>
                <p class=format!("lead {reveal}")>
                    "Strategic, scalable, and future‑proof solutions designed for real business impact."
                </p>
                <div class="services-grid">
                    {SERVICES.iter().enumerate().map(|(i, service)| {
                        view! {
                            <article class=format!("service-card {reveal}")>
                                <div class="service-icon">
                                    <img src=service_icon_url(i) alt="" />
                                </div>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                            </article>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
