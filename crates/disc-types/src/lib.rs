pub mod dimensions;
pub mod material;
pub mod points;
pub mod segments;

pub use dimensions::*;
pub use material::*;
pub use points::*;
pub use segments::*;

/// Number of control points in a disc profile.
pub const POINT_COUNT: usize = 7;

/// Number of curved segments between consecutive control points (1-2 .. 6-7).
pub const SEGMENT_COUNT: usize = POINT_COUNT - 1;
