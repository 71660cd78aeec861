//! Browser side of the hero particle field.
//!
//! [`ParticleAnimation`] owns one canvas element, its particle field and the
//! `requestAnimationFrame` chain that drives it. Start it once the element is
//! mounted; stopping (or dropping) it cancels the pending frame and removes
//! the resize listener.

use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use novadigital_landing_core::{
    CancelToken, Canvas, GlowDisc, Line, ParticleConfig, ParticleField, Subscription,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::lifecycle::listen;

const TRANSPARENT: &str = "rgba(0,0,0,0)";

/// [`Canvas`] backed by a browser 2D context. Failed calls are ignored.
pub struct WebCanvas {
    ctx: CanvasRenderingContext2d,
}

impl WebCanvas {
    /// The element's 2D context, or `None` when the browser has none to give.
    pub fn from_element(element: &HtmlCanvasElement) -> Option<Self> {
        let ctx = element
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }
}

impl Canvas for WebCanvas {
    fn set_transform_scale(&mut self, ratio: f64) {
        let _ = self.ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0);
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn stroke_line(&mut self, line: Line) {
        self.ctx.begin_path();
        self.ctx.move_to(line.x0, line.y0);
        self.ctx.line_to(line.x1, line.y1);
        self.ctx.stroke();
    }

    fn fill_glow(&mut self, disc: &GlowDisc) {
        self.ctx.begin_path();
        let Ok(gradient) = self
            .ctx
            .create_radial_gradient(disc.x, disc.y, 0.0, disc.x, disc.y, disc.gradient_radius)
        else {
            return;
        };
        let _ = gradient.add_color_stop(0.0, &disc.color);
        let _ = gradient.add_color_stop(1.0, TRANSPARENT);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        if self
            .ctx
            .arc(disc.x, disc.y, disc.disc_radius, 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }
}

struct Surface {
    element: HtmlCanvasElement,
    canvas: WebCanvas,
    field: ParticleField<SmallRng>,
}

impl Surface {
    /// Match the backing buffer to the element's display size and rebuild the field.
    fn fit(&mut self) {
        let ratio = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);
        let width = f64::from(self.element.client_width());
        let height = f64::from(self.element.client_height());
        let geometry = self.field.on_resize(width, height, ratio);
        self.element.set_width(geometry.buffer_width);
        self.element.set_height(geometry.buffer_height);
        // Resizing the buffer resets the context transform.
        self.field.apply_transform(&mut self.canvas);
    }

    fn render(&mut self) {
        self.field.render_frame(&mut self.canvas);
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// The particle animation for one canvas element.
pub struct ParticleAnimation {
    surface: Rc<RefCell<Surface>>,
    token: CancelToken,
    frame_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<FrameCallback>>>,
    resize: Option<Subscription>,
}

impl ParticleAnimation {
    pub fn new(element: HtmlCanvasElement, config: ParticleConfig) -> Option<Self> {
        let Some(canvas) = WebCanvas::from_element(&element) else {
            debug!("no 2d context; particle field disabled");
            return None;
        };
        let field = ParticleField::new(config, SmallRng::from_entropy());
        Some(Self {
            surface: Rc::new(RefCell::new(Surface {
                element,
                canvas,
                field,
            })),
            token: CancelToken::new(),
            frame_id: Rc::new(Cell::new(None)),
            tick: Rc::new(RefCell::new(None)),
            resize: None,
        })
    }

    pub fn is_running(&self) -> bool {
        self.tick.borrow().is_some() && !self.token.is_cancelled()
    }

    /// Measure, populate and begin the frame loop. Calling twice is a no-op;
    /// a stopped animation cannot be restarted.
    pub fn start(&mut self) {
        if self.tick.borrow().is_some() || self.token.is_cancelled() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };

        self.surface.borrow_mut().fit();

        let surface = self.surface.clone();
        self.resize = listen("particle-resize", &window, "resize", true, move |_| {
            surface.borrow_mut().fit();
        });

        let surface = self.surface.clone();
        let token = self.token.clone();
        let frame_id = self.frame_id.clone();
        let tick = self.tick.clone();
        *self.tick.borrow_mut() = Some(Closure::new(move |_timestamp: f64| {
            if token.is_cancelled() {
                return;
            }
            surface.borrow_mut().render();
            if token.is_cancelled() {
                return;
            }
            frame_id.set(request_frame(&tick));
        }));
        self.frame_id.set(request_frame(&self.tick));
        debug!("particle animation started");
    }

    /// Cancel the pending frame and release the resize listener.
    pub fn stop(&mut self) {
        self.token.cancel();
        if let Some(id) = self.frame_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        // Breaks the closure -> tick -> closure cycle.
        if self.tick.borrow_mut().take().is_some() {
            debug!("particle animation stopped");
        }
        self.resize = None;
    }

    /// Hand ownership to a teardown: releasing the subscription stops the loop.
    pub fn into_subscription(self) -> Subscription {
        let mut animation = self;
        Subscription::new("particle-frames", move || animation.stop())
    }
}

impl Drop for ParticleAnimation {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &Rc<RefCell<Option<FrameCallback>>>) -> Option<i32> {
    let window = web_sys::window()?;
    let tick = tick.borrow();
    let callback = tick.as_ref()?;
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            warn!("requestAnimationFrame failed: {e:?}");
            None
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mounted_canvas(width: u32, height: u32) -> HtmlCanvasElement {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("document");
        let element = document
            .create_element("canvas")
            .expect("canvas")
            .dyn_into::<HtmlCanvasElement>()
            .expect("canvas element");
        element
            .set_attribute("style", &format!("width:{width}px;height:{height}px"))
            .expect("style");
        document.body().expect("body").append_child(&element).expect("mount");
        element
    }

    #[wasm_bindgen_test]
    fn start_sizes_backing_buffer() {
        let element = mounted_canvas(400, 300);
        let mut animation =
            ParticleAnimation::new(element.clone(), ParticleConfig::default()).expect("2d context");
        animation.start();
        assert!(animation.is_running());

        let ratio = web_sys::window().expect("window").device_pixel_ratio().min(1.8);
        assert_eq!(element.width(), (400.0 * ratio).floor() as u32);
        assert_eq!(animation.surface.borrow().field.particles().len(), 70);

        animation.stop();
        assert!(!animation.is_running());
    }

    #[wasm_bindgen_test]
    fn stopped_animation_does_not_restart() {
        let element = mounted_canvas(120, 80);
        let mut animation =
            ParticleAnimation::new(element, ParticleConfig::default()).expect("2d context");
        animation.stop();
        animation.start();
        assert!(!animation.is_running());
    }
}
