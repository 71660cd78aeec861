use leptos::prelude::*;
use novadigital_landing_core::content::CONTACT_MAILTO;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="section">
            <div class="container">
                <div class="cta reveal">
                    <h3>"Let’s Build Something Amazing Together"</h3>
                    <p>"Tell us about your challenge and we’ll craft a solution that elevates your business."</p>
                    <div>
                        <a class="btn primary" href=CONTACT_MAILTO>"Contact Us"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
