pub mod angle;
pub mod convert;
pub mod error;
pub mod random;
pub mod vector;

pub use angle::{DEGREES_PER_RADIAN, degrees_to_radians, radians_to_degrees};
pub use convert::{Coordinates, DEFAULT_FIXED_PRECISION, FixedCoordinates, MAX_FIXED_PRECISION};
pub use error::VectorError;
pub use vector::Vector;
