use leptos::prelude::*;
use novadigital_landing_core::RevealKind;
use novadigital_landing_core::content::WHY_US;

const STAR_PATH: &str = "M12 2l3 7 7 1-5 5 1 7-6-3-6 3 1-7-5-5 7-1z";

#[component]
pub fn WhyUs() -> impl IntoView {
    let reveal = RevealKind::Up.class();
    view! {
        <section id="why" class="section">
            <div class="container">
                <h2 class=reveal>"Why Choose Us"</h2>
                <p class=format!("lead {reveal}")>
                    "We pair design excellence with robust engineering for results you can measure."
                </p>
                <div class="why-grid">
                    {WHY_US.iter().enumerate().map(|(i, item)| {
                        let side = RevealKind::alternating(i).class();
                        view! {
                            <div class=format!("why-item {side}")>
                                <div class="why-icon" aria-hidden="true">
                                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                        <path d=STAR_PATH />
                                    </svg>
                                </div>
                                <div>
                                    <h4>{item.title}</h4>
                                    <p>{item.description}</p>
                                </div>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
