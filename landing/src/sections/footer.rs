use leptos::prelude::*;
use novadigital_landing_core::content::{
    BRAND, FOOTER_LINKS, FOOTER_LOGO_URL, SocialNetwork, copyright,
};

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <div class="logo footer-brand">
                    <img src=FOOTER_LOGO_URL alt="Logo" />
                    <strong>{BRAND}</strong>
                </div>
                <div class="quick">
                    {FOOTER_LINKS.iter().map(|link| {
                        view! { <a href=link.href>{link.label}</a> }
                    }).collect::<Vec<_>>()}
                </div>
                <div class="social">
                    {SocialNetwork::ALL.iter().map(|network| {
                        view! {
                            <a href="#" aria-label=network.label() title=network.label()>
                                <svg width="18" height="18" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                                    <path d=network.icon_path() />
                                </svg>
                            </a>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
            <div class="footer-copyright">{copyright(year)}</div>
        </footer>
    }
}
