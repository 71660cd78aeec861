//! Hero background particle field.
//!
//! A fixed-size collection of glowing dots drifting across the drawing
//! surface over a faint grid. Particles that drift past the padded surface
//! bounds re-enter from the left or right edge. The field never touches the
//! DOM: drawing goes through the [`Canvas`] trait, which the browser crate
//! implements on top of `CanvasRenderingContext2d`.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::config::ParticleConfig;

const FALLBACK_HUE: u16 = 188;

/// Display and backing-buffer dimensions of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceGeometry {
    /// Display width (CSS pixels). All drawing happens in these units.
    pub width: f64,
    pub height: f64,
    /// Effective device pixel ratio after capping.
    pub pixel_ratio: f64,
    pub buffer_width: u32,
    pub buffer_height: u32,
}

impl SurfaceGeometry {
    /// Measure a surface of `width` x `height` display units.
    ///
    /// Non-finite or non-positive pixel ratios count as 1; the ratio is then
    /// capped at `max_pixel_ratio`.
    pub fn measure(width: f64, height: f64, device_pixel_ratio: f64, max_pixel_ratio: f64) -> Self {
        let reported = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        let pixel_ratio = reported.min(max_pixel_ratio);
        let width = width.max(0.0);
        let height = height.max(0.0);
        Self {
            width,
            height,
            pixel_ratio,
            buffer_width: (width * pixel_ratio).floor() as u32,
            buffer_height: (height * pixel_ratio).floor() as u32,
        }
    }

    /// True when `(x, y)` lies inside the surface padded by `margin` on every side.
    pub fn contains_padded(&self, x: f64, y: f64, margin: f64) -> bool {
        x >= -margin && x <= self.width + margin && y >= -margin && y <= self.height + margin
    }
}

/// One glowing dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub opacity: f64,
    pub hue: u16,
}

/// Where a (re)spawned particle is placed horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spawn {
    /// Anywhere across the surface. Used when the collection is (re)built.
    Scattered,
    /// Exactly on the left or right edge. Used after leaving the bounds.
    Edge,
}

/// A straight grid line in display units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

/// A particle's paint: a disc filled with a radial gradient from `color` at
/// the centre to transparent at `gradient_radius`.
#[derive(Debug, Clone, PartialEq)]
pub struct GlowDisc {
    pub x: f64,
    pub y: f64,
    pub disc_radius: f64,
    pub gradient_radius: f64,
    pub color: String,
}

/// Drawing operations the particle field needs from a 2D context.
pub trait Canvas {
    /// Scale drawing coordinates so one display unit maps to `ratio` buffer pixels.
    fn set_transform_scale(&mut self, ratio: f64);
    fn clear(&mut self, width: f64, height: f64);
    fn set_global_alpha(&mut self, alpha: f64);
    fn set_stroke_style(&mut self, color: &str);
    fn stroke_line(&mut self, line: Line);
    fn fill_glow(&mut self, disc: &GlowDisc);
}

/// Vertical then horizontal grid lines every `spacing` units, starting at 0.
pub fn grid_lines(width: f64, height: f64, spacing: f64) -> Vec<Line> {
    let mut lines = Vec::new();
    if spacing.is_nan() || spacing <= 0.0 {
        return lines;
    }
    let mut x = 0.0;
    while x < width {
        lines.push(Line { x0: x, y0: 0.0, x1: x, y1: height });
        x += spacing;
    }
    let mut y = 0.0;
    while y < height {
        lines.push(Line { x0: 0.0, y0: y, x1: width, y1: y });
        y += spacing;
    }
    lines
}

/// The animated particle collection for one drawing surface.
pub struct ParticleField<R> {
    config: ParticleConfig,
    geometry: SurfaceGeometry,
    particles: Vec<Particle>,
    rng: R,
}

impl<R: Rng> ParticleField<R> {
    /// An empty field; call [`ParticleField::on_resize`] once the surface is measured.
    pub fn new(config: ParticleConfig, rng: R) -> Self {
        Self {
            particles: Vec::with_capacity(config.count),
            config,
            geometry: SurfaceGeometry::default(),
            rng,
        }
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn geometry(&self) -> SurfaceGeometry {
        self.geometry
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Re-measure the surface. Idempotent for an unchanged size and ratio.
    pub fn resize(&mut self, width: f64, height: f64, device_pixel_ratio: f64) -> SurfaceGeometry {
        self.geometry =
            SurfaceGeometry::measure(width, height, device_pixel_ratio, self.config.max_pixel_ratio);
        self.geometry
    }

    /// Rebuild the whole collection with scattered positions.
    pub fn init_particles(&mut self) {
        self.particles.clear();
        for _ in 0..self.config.count {
            let particle = spawn(&mut self.rng, &self.config, &self.geometry, Spawn::Scattered);
            self.particles.push(particle);
        }
    }

    /// Resize handler: re-measure, then rebuild the collection for the new size.
    pub fn on_resize(&mut self, width: f64, height: f64, device_pixel_ratio: f64) -> SurfaceGeometry {
        let geometry = self.resize(width, height, device_pixel_ratio);
        self.init_particles();
        debug!(
            width = geometry.width,
            height = geometry.height,
            ratio = geometry.pixel_ratio,
            count = self.particles.len(),
            "particle field resized"
        );
        geometry
    }

    /// Advance one particle by its velocity. Returns true when it left the
    /// padded bounds and was respawned on an edge.
    pub fn step(&mut self, index: usize) -> bool {
        let Some(particle) = self.particles.get_mut(index) else {
            return false;
        };
        particle.x += particle.vx;
        particle.y += particle.vy;
        if self
            .geometry
            .contains_padded(particle.x, particle.y, self.config.edge_margin)
        {
            return false;
        }
        *particle = spawn(&mut self.rng, &self.config, &self.geometry, Spawn::Edge);
        true
    }

    /// Step every particle once. Returns the number of respawns.
    pub fn step_all(&mut self) -> usize {
        (0..self.particles.len()).filter(|&i| self.step(i)).count()
    }

    /// The paint for one particle.
    pub fn glow(&self, particle: &Particle) -> GlowDisc {
        GlowDisc {
            x: particle.x,
            y: particle.y,
            disc_radius: particle.radius * self.config.glow_scale,
            gradient_radius: self.config.gradient_radius,
            color: format!(
                "hsla({}, {}%, {}%, {})",
                particle.hue, self.config.saturation, self.config.lightness, particle.opacity
            ),
        }
    }

    pub fn draw(&self, particle: &Particle, canvas: &mut impl Canvas) {
        canvas.fill_glow(&self.glow(particle));
    }

    /// Apply the current pixel-ratio transform to `canvas`.
    pub fn apply_transform(&self, canvas: &mut impl Canvas) {
        canvas.set_transform_scale(self.geometry.pixel_ratio);
    }

    /// One animation frame: clear, grid, then step and draw every particle.
    pub fn render_frame(&mut self, canvas: &mut impl Canvas) {
        let SurfaceGeometry { width, height, .. } = self.geometry;
        canvas.clear(width, height);

        canvas.set_global_alpha(self.config.grid_alpha);
        canvas.set_stroke_style(&self.config.grid_color);
        for line in grid_lines(width, height, self.config.grid_spacing) {
            canvas.stroke_line(line);
        }
        canvas.set_global_alpha(1.0);

        for i in 0..self.particles.len() {
            self.step(i);
            let particle = self.particles[i];
            self.draw(&particle, &mut *canvas);
        }
    }
}

/// Uniform sample from `[min, max)`, or `min` for an empty range.
fn sample<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    if min < max { rng.gen_range(min..max) } else { min }
}

fn spawn<R: Rng>(
    rng: &mut R,
    config: &ParticleConfig,
    geometry: &SurfaceGeometry,
    mode: Spawn,
) -> Particle {
    let x = match mode {
        Spawn::Scattered => sample(rng, 0.0, geometry.width),
        Spawn::Edge => {
            if rng.gen_bool(0.5) {
                0.0
            } else {
                geometry.width
            }
        }
    };
    let y = sample(rng, 0.0, geometry.height);
    let speed = sample(rng, config.speed_min, config.speed_max);
    // Independent of the entry edge, so an edge spawn may head straight back out.
    let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    let vy = sample(rng, -config.vertical_speed, config.vertical_speed);
    let radius = sample(rng, config.radius_min, config.radius_max);
    let opacity = sample(rng, config.opacity_min, config.opacity_max);
    let hue = config.hues.choose(rng).copied().unwrap_or(FALLBACK_HUE);
    Particle {
        x,
        y,
        vx: speed * direction,
        vy,
        radius,
        opacity,
        hue,
    }
}
