use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::domain::{Body, Shape, StageError};
use crate::simulation::RenderSurface;

/// Full-viewport overlay; sits behind content and never takes input
const OVERLAY_STYLE: [(&str, &str); 6] = [
    ("position", "fixed"),
    ("inset", "0"),
    ("pointer-events", "none"),
    ("z-index", "0"),
    ("opacity", "0.6"),
    ("display", "block"),
];

/// 2D canvas appended to the mount point
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

fn js_err(e: JsValue) -> StageError {
    StageError::SurfaceUnavailable(format!("{e:?}"))
}

impl CanvasSurface {
    /// Create the overlay canvas inside the element with id `container_id`
    pub fn create(document: &Document, container_id: &str) -> Result<Self, StageError> {
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| StageError::MissingMountPoint(format!("#{container_id}")))?;

        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| StageError::SurfaceUnavailable("created element is not a canvas".into()))?;

        let style = canvas.style();
        for (name, value) in OVERLAY_STYLE {
            style.set_property(name, value).map_err(js_err)?;
        }
        canvas.set_attribute("aria-hidden", "true").map_err(js_err)?;

        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| StageError::SurfaceUnavailable("2d context not supported".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| StageError::SurfaceUnavailable("unexpected 2d context type".into()))?;

        container.append_child(&canvas).map_err(js_err)?;

        Ok(Self { canvas, ctx, width: 0.0, height: 0.0 })
    }

    fn draw(&self, body: &Body) -> Result<(), JsValue> {
        let style = &body.style;
        let (x, y) = (body.pos.x as f64, body.pos.y as f64);

        self.ctx.begin_path();
        match body.shape {
            Shape::Circle { radius } => self.ctx.arc(x, y, radius as f64, 0.0, TAU)?,
            Shape::Rect { width, height } => {
                let (w, h) = (width as f64, height as f64);
                self.ctx.rect(x - w * 0.5, y - h * 0.5, w, h);
            }
        }
        self.ctx.set_fill_style_str(&style.fill.to_css());
        self.ctx.fill();
        if style.stroke_width > 0.0 {
            self.ctx.set_stroke_style_str(&style.stroke.to_css());
            self.ctx.set_line_width(style.stroke_width as f64);
            self.ctx.stroke();
        }
        Ok(())
    }
}

impl RenderSurface for CanvasSurface {
    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    fn paint(&mut self, bodies: &[Body]) {
        self.ctx.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        for body in bodies.iter().filter(|b| b.style.visible) {
            if let Err(e) = self.draw(body) {
                console_warn!("paint failed for body {}: {:?}", body.id, e);
                return;
            }
        }
    }

    fn release(&mut self) {
        self.canvas.remove();
    }
}
