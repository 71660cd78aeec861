//! Page state and animation logic for the NovaDigital landing page.
//!
//! Everything here is DOM-free so it can be exercised with plain `cargo test`.
//! The `novadigital-landing` crate binds these types to the browser.
//!
//! Developed by The NovaDigital Team (c)2025

pub mod config;
pub mod content;
pub mod error;
pub mod header;
pub mod particles;
pub mod reveal;
pub mod rotator;
pub mod teardown;

pub use config::{HeaderConfig, LandingConfig, ParticleConfig, RevealConfig, RotatorConfig};
pub use error::{ConfigError, SlideOutOfRange};
pub use header::HeaderState;
pub use particles::{Canvas, GlowDisc, Line, Particle, ParticleField, SurfaceGeometry};
pub use reveal::{RevealKind, RevealTracker, RevealTransition};
pub use rotator::TestimonialRotator;
pub use teardown::{CancelToken, Subscription, Teardown};
