use crate::domain::Body;

/// Where the stage paints. The browser canvas lives in `host`; tests and the
/// JS-driven facade use `NullSurface` and read the instance buffer instead.
pub trait RenderSurface {
    fn resize(&mut self, width: f32, height: f32);

    /// Draw the current body states (walls included; skip invisible ones)
    fn paint(&mut self, bodies: &[Body]);

    /// Free the surface (detach canvas, drop context)
    fn release(&mut self);
}

/// Paints nothing
#[derive(Default, Debug, Clone, Copy)]
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn resize(&mut self, _width: f32, _height: f32) {}

    fn paint(&mut self, _bodies: &[Body]) {}

    fn release(&mut self) {}
}
