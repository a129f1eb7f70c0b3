pub mod marker;
pub mod projection;

pub use marker::DirectionMarker;
pub use projection::{MinimapProjection, Viewport};
