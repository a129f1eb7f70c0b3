pub mod angle;
pub mod grid;
pub mod vec;

pub use angle::*;
pub use grid::*;
pub use vec::*;
