//! End-to-end checks for the page behaviors, driven the way the browser
//! bindings drive them.

use novadigital_landing_core::content::TESTIMONIALS;
use novadigital_landing_core::{
    CancelToken, HeaderState, LandingConfig, ParticleField, RevealTracker, RevealTransition,
    Subscription, Teardown, TestimonialRotator,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn resize_mid_animation_rebuilds_field_for_new_surface() {
    let config = LandingConfig::default();
    let max_dx = config.particles.speed_max;
    let max_dy = config.particles.vertical_speed;
    let mut field = ParticleField::new(config.particles, StdRng::seed_from_u64(42));

    field.on_resize(800.0, 600.0, 1.0);
    for _ in 0..120 {
        field.step_all();
    }

    let geometry = field.on_resize(400.0, 300.0, 1.0);
    assert_eq!((geometry.buffer_width, geometry.buffer_height), (400, 300));
    assert_eq!(field.particles().len(), 70);
    for p in field.particles() {
        assert!((0.0..400.0).contains(&p.x) && (0.0..300.0).contains(&p.y));
    }

    field.step_all();
    assert_eq!(field.particles().len(), 70);
    for p in field.particles() {
        // One step moves a scattered particle by less than one velocity bound.
        assert!(p.x > -max_dx && p.x < 400.0 + max_dx, "x = {}", p.x);
        assert!(p.y >= -max_dy && p.y < 300.0 + max_dy, "y = {}", p.y);
    }
}

#[test]
fn resize_with_unchanged_surface_keeps_buffer_size() {
    let mut field = ParticleField::new(
        LandingConfig::default().particles,
        StdRng::seed_from_u64(1),
    );
    let first = field.on_resize(1280.0, 720.0, 2.0);
    let second = field.on_resize(1280.0, 720.0, 2.0);
    assert_eq!(
        (first.buffer_width, first.buffer_height),
        (second.buffer_width, second.buffer_height)
    );
    assert_eq!((first.buffer_width, first.buffer_height), (2304, 1296));
}

#[test]
fn rotator_covers_every_testimonial() {
    let mut rotator = TestimonialRotator::new(TESTIMONIALS.len());
    assert_eq!(rotator.slide_count(), 3);

    // Five interval ticks with a user selection in between.
    rotator.advance();
    rotator.advance();
    assert_eq!(rotator.index(), 2);
    rotator.select(0).expect("valid slide");
    rotator.advance();
    assert_eq!(rotator.index(), 1);
    rotator.advance();
    rotator.advance();
    assert_eq!(rotator.index(), 0);
    assert!((0..3).contains(&rotator.index()));
}

#[test]
fn reveal_never_reverts_after_scrolling_away() {
    let config = LandingConfig::default();
    let mut tracker = RevealTracker::new(config.reveal.threshold);
    let samples = [(0.0, false), (0.1, true), (0.25, true), (0.0, false), (0.05, true)];
    let transitions: Vec<_> = samples
        .iter()
        .map(|&(ratio, hit)| tracker.observe(7, ratio, hit))
        .collect();
    assert_eq!(
        transitions,
        vec![
            RevealTransition::Hidden,
            RevealTransition::Hidden,
            RevealTransition::BecameShown,
            RevealTransition::AlreadyShown,
            RevealTransition::AlreadyShown,
        ]
    );
}

#[test]
fn scroll_after_menu_toggle_closes_menu() {
    let mut header = HeaderState::default();
    header.on_ready();
    header.toggle_menu();
    assert!(header.menu_open);
    header.on_scroll();
    assert!(header.visible && !header.menu_open);
}

#[test]
fn page_teardown_cancels_every_loop() {
    let frame = CancelToken::new();
    let interval = CancelToken::new();
    let mut teardown = Teardown::new();
    teardown.add(Subscription::cancelling("frame", frame.clone()));
    teardown.add(Subscription::cancelling("interval", interval.clone()));

    drop(teardown);
    assert!(frame.is_cancelled());
    assert!(interval.is_cancelled());
}
