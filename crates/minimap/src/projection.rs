//! World-to-viewport mapping for the minimap.
//!
//! World +y is south and screen +y is down, so the axes map directly; the
//! fit only scales and centers. Degenerate bounds (a single scene, or all
//! scenes on one grid line) fall back to centered placement instead of a
//! division by zero.

use foundation::bounds::Aabb2;
use foundation::math::Vec2;
use scene::NodePosition;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MinimapProjection {
    world_center: Vec2,
    screen_center: Vec2,
    scale: f64,
}

impl MinimapProjection {
    /// Fit all node positions into the viewport, aspect-ratio preserving,
    /// with `padding` pixels kept clear on every side. `None` when there
    /// are no positions to fit.
    pub fn fit(positions: &[NodePosition], viewport: Viewport, padding: f64) -> Option<Self> {
        let points: Vec<Vec2> = positions.iter().map(|p| p.to_vec2()).collect();
        let bounds = Aabb2::from_points(&points)?;

        let inner_w = (viewport.width - 2.0 * padding).max(0.0);
        let inner_h = (viewport.height - 2.0 * padding).max(0.0);
        let [span_x, span_y] = bounds.span();

        let scale_x = (span_x > 0.0).then(|| inner_w / span_x);
        let scale_y = (span_y > 0.0).then(|| inner_h / span_y);
        let scale = match (scale_x, scale_y) {
            (Some(sx), Some(sy)) => sx.min(sy),
            (Some(sx), None) => sx,
            (None, Some(sy)) => sy,
            // Zero-span bounds on both axes: scale is irrelevant, every
            // node lands on the viewport center.
            (None, None) => 1.0,
        };

        Some(Self {
            world_center: bounds.center(),
            screen_center: Vec2::new(viewport.width * 0.5, viewport.height * 0.5),
            scale,
        })
    }

    pub fn project(&self, position: NodePosition) -> [f64; 2] {
        let d = position.to_vec2() - self.world_center;
        [
            self.screen_center.x + d.x * self.scale,
            self.screen_center.y + d.y * self.scale,
        ]
    }
}
