//! A mutable 2D vector with a chainable API.
//!
//! ```
//! use vec2_lite_rs::math::Vector;
//!
//! let mut v = Vector::new(3.0, 4.0);
//! v.normalize().multiply_scalar(10.0).rotate_deg(90.0);
//! assert!((v.length() - 10.0).abs() < 1e-9);
//! ```

pub mod math;
