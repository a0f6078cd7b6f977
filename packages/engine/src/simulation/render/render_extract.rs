use crate::domain::{Body, Shape};

/// Floats per body in the instance buffer:
/// `[x, y, half_w, half_h, shape, category, fill, stroke, stroke_width]`
///
/// `shape` is 0 for circles and 1 for rectangles; colors are 0xRRGGBB (exact
/// in an f32).
pub const INSTANCE_STRIDE: usize = 9;

/// Rebuild the flat instance buffer from visible bodies.
/// Returns the number of instances written.
pub(crate) fn extract_instances(bodies: &[Body], out: &mut Vec<f32>) -> usize {
    out.clear();
    let mut count = 0;
    for body in bodies.iter().filter(|b| b.style.visible) {
        let half = body.shape.half_extents();
        let shape = match body.shape {
            Shape::Circle { .. } => 0.0,
            Shape::Rect { .. } => 1.0,
        };
        out.extend_from_slice(&[
            body.pos.x,
            body.pos.y,
            half.x,
            half.y,
            shape,
            body.category.as_u8() as f32,
            body.style.fill.0 as f32,
            body.style.stroke.0 as f32,
            body.style.stroke_width,
        ]);
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::palette::note_style;
    use crate::domain::{Category, Material, Vec2};

    #[test]
    fn walls_are_not_exported() {
        let bodies = vec![
            Body::wall(1, Vec2::new(0.0, -10.0), 100.0, 20.0),
            Body::rect(2, Category::Note, Vec2::new(30.0, 40.0), 60.0, 30.0, Material::new(0.9, 0.04, 0.0005), note_style(1)),
        ];
        let mut out = Vec::new();
        assert_eq!(extract_instances(&bodies, &mut out), 1);
        assert_eq!(out.len(), INSTANCE_STRIDE);
        assert_eq!(&out[..6], &[30.0, 40.0, 30.0, 15.0, 1.0, 2.0]);
        assert_eq!(out[6] as u32, note_style(1).fill.0);
    }
}
