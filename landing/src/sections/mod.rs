// Landing page sections
// Developed by The NovaDigital Team (c)2025

mod contact;
mod footer;
mod header;
mod hero;
mod services;
mod testimonials;
mod why_us;

pub use contact::Contact;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use services::Services;
pub use testimonials::Testimonials;
pub use why_us::WhyUs;
