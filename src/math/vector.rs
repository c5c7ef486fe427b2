use core::ops::{AddAssign, MulAssign, Neg, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::math::angle::{degrees_to_radians, radians_to_degrees};

/// A point or direction in the plane.
///
/// Almost every operation mutates the vector in place and returns `&mut Self`,
/// so calls chain:
///
/// ```
/// use vec2_lite_rs::math::Vector;
///
/// let mut v = Vector::new(100.0, 50.0);
/// v.limit(80.0, 0.9).add_scalar(1.0);
/// assert_eq!(v, Vector::new(91.0, 51.0));
/// ```
///
/// Degenerate inputs never panic and never fail: normalizing a zero vector
/// yields `(1, 0)` and dividing by a zero scalar yields `0` on the affected
/// axis. Division by another vector is left unguarded and follows IEEE-754.
///
/// A `Vector` is plain data with no interior locking. Sharing one mutably
/// between threads requires the caller to synchronize access.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    // Addition

    #[inline]
    pub fn add_x(&mut self, other: Self) -> &mut Self {
        self.add_scalar_x(other.x)
    }

    #[inline]
    pub fn add_y(&mut self, other: Self) -> &mut Self {
        self.add_scalar_y(other.y)
    }

    #[inline]
    pub fn add(&mut self, other: Self) -> &mut Self {
        self.add_x(other).add_y(other)
    }

    #[inline]
    pub fn add_scalar(&mut self, scalar: f64) -> &mut Self {
        self.add_scalar_x(scalar).add_scalar_y(scalar)
    }

    #[inline]
    pub fn add_scalar_x(&mut self, scalar: f64) -> &mut Self {
        self.x += scalar;
        self
    }

    #[inline]
    pub fn add_scalar_y(&mut self, scalar: f64) -> &mut Self {
        self.y += scalar;
        self
    }

    // Subtraction

    #[inline]
    pub fn subtract_x(&mut self, other: Self) -> &mut Self {
        self.subtract_scalar_x(other.x)
    }

    #[inline]
    pub fn subtract_y(&mut self, other: Self) -> &mut Self {
        self.subtract_scalar_y(other.y)
    }

    #[inline]
    pub fn subtract(&mut self, other: Self) -> &mut Self {
        self.subtract_x(other).subtract_y(other)
    }

    #[inline]
    pub fn subtract_scalar(&mut self, scalar: f64) -> &mut Self {
        self.subtract_scalar_x(scalar).subtract_scalar_y(scalar)
    }

    #[inline]
    pub fn subtract_scalar_x(&mut self, scalar: f64) -> &mut Self {
        self.x -= scalar;
        self
    }

    #[inline]
    pub fn subtract_scalar_y(&mut self, scalar: f64) -> &mut Self {
        self.y -= scalar;
        self
    }

    // Assignment

    /// Overwrites `x` with `other.x`.
    #[inline]
    pub fn copy_x(&mut self, other: Self) -> &mut Self {
        self.x = other.x;
        self
    }

    /// Overwrites `y` with `other.y`.
    #[inline]
    pub fn copy_y(&mut self, other: Self) -> &mut Self {
        self.y = other.y;
        self
    }

    /// Overwrites both axes with those of `other`.
    #[inline]
    pub fn copy(&mut self, other: Self) -> &mut Self {
        self.copy_x(other).copy_y(other)
    }

    #[inline]
    pub fn zero(&mut self) -> &mut Self {
        self.x = 0.0;
        self.y = 0.0;
        self
    }

    // Multiplication

    #[inline]
    pub fn multiply_x(&mut self, other: Self) -> &mut Self {
        self.multiply_scalar_x(other.x)
    }

    #[inline]
    pub fn multiply_y(&mut self, other: Self) -> &mut Self {
        self.multiply_scalar_y(other.y)
    }

    #[inline]
    pub fn multiply(&mut self, other: Self) -> &mut Self {
        self.multiply_x(other).multiply_y(other)
    }

    #[inline]
    pub fn multiply_scalar(&mut self, scalar: f64) -> &mut Self {
        self.multiply_scalar_x(scalar).multiply_scalar_y(scalar)
    }

    #[inline]
    pub fn multiply_scalar_x(&mut self, scalar: f64) -> &mut Self {
        self.x *= scalar;
        self
    }

    #[inline]
    pub fn multiply_scalar_y(&mut self, scalar: f64) -> &mut Self {
        self.y *= scalar;
        self
    }

    // Division

    /// Divides `x` by `other.x`. A zero divisor is not guarded.
    #[inline]
    pub fn divide_x(&mut self, other: Self) -> &mut Self {
        self.x /= other.x;
        self
    }

    /// Divides `y` by `other.y`. A zero divisor is not guarded.
    #[inline]
    pub fn divide_y(&mut self, other: Self) -> &mut Self {
        self.y /= other.y;
        self
    }

    /// Component-wise division by `other`.
    ///
    /// Unlike [`divide_scalar`](Self::divide_scalar), a zero component in
    /// `other` is not special-cased and produces an infinity or NaN.
    #[inline]
    pub fn divide(&mut self, other: Self) -> &mut Self {
        self.divide_x(other).divide_y(other)
    }

    /// Divides both axes by `scalar`, or sets both to `0` when `scalar` is zero.
    pub fn divide_scalar(&mut self, scalar: f64) -> &mut Self {
        if scalar != 0.0 {
            self.x /= scalar;
            self.y /= scalar;
        } else {
            log::trace!("divide_scalar by zero, zeroing {}", self);
            self.x = 0.0;
            self.y = 0.0;
        }
        self
    }

    /// Divides `x` by `scalar`, or sets it to `0` when `scalar` is zero.
    pub fn divide_scalar_x(&mut self, scalar: f64) -> &mut Self {
        if scalar != 0.0 {
            self.x /= scalar;
        } else {
            log::trace!("divide_scalar_x by zero");
            self.x = 0.0;
        }
        self
    }

    /// Divides `y` by `scalar`, or sets it to `0` when `scalar` is zero.
    pub fn divide_scalar_y(&mut self, scalar: f64) -> &mut Self {
        if scalar != 0.0 {
            self.y /= scalar;
        } else {
            log::trace!("divide_scalar_y by zero");
            self.y = 0.0;
        }
        self
    }

    // Negation

    #[inline]
    pub fn invert_x(&mut self) -> &mut Self {
        self.x *= -1.0;
        self
    }

    #[inline]
    pub fn invert_y(&mut self) -> &mut Self {
        self.y *= -1.0;
        self
    }

    #[inline]
    pub fn invert(&mut self) -> &mut Self {
        self.invert_x().invert_y()
    }

    /// Multiplies each axis whose absolute value exceeds `max` by `factor`.
    ///
    /// Axes are treated independently:
    ///
    /// ```
    /// use vec2_lite_rs::math::Vector;
    ///
    /// let mut v = Vector::new(100.0, 50.0);
    /// v.limit(80.0, 0.9);
    /// assert_eq!(v, Vector::new(90.0, 50.0));
    /// ```
    pub fn limit(&mut self, max: f64, factor: f64) -> &mut Self {
        if self.x.abs() > max {
            self.x *= factor;
        }
        if self.y.abs() > max {
            self.y *= factor;
        }
        self
    }

    /// Rounds both axes to the nearest integer.
    ///
    /// Halfway cases round away from zero, so `2.5` becomes `3` and `-2.5`
    /// becomes `-3`.
    #[inline]
    pub fn round(&mut self) -> &mut Self {
        self.x = self.x.round();
        self.y = self.y.round();
        self
    }

    // Interpolation

    /// Moves `x` toward `other.x` by `amount` (0 keeps, 1 reaches).
    #[inline]
    pub fn mix_x(&mut self, other: Self, amount: f64) -> &mut Self {
        self.x += (other.x - self.x) * amount;
        self
    }

    #[inline]
    pub fn mix_y(&mut self, other: Self, amount: f64) -> &mut Self {
        self.y += (other.y - self.y) * amount;
        self
    }

    #[inline]
    pub fn mix(&mut self, other: Self, amount: f64) -> &mut Self {
        self.mix_x(other, amount).mix_y(other, amount)
    }

    /// Replaces this vector with its projection onto `other`.
    ///
    /// Projecting onto the zero vector yields `(0, 0)`. The direction of
    /// `other` is taken with `hypot`, so very small or very large targets
    /// neither underflow nor overflow.
    pub fn project_onto(&mut self, other: Self) -> &mut Self {
        let length = other.x.hypot(other.y);
        if length == 0.0 {
            log::trace!("project_onto zero vector, zeroing {}", self);
            return self.zero();
        }
        let mut unit = other;
        unit.divide_scalar(length);
        let coeff = self.dot(unit);
        self.copy(unit).multiply_scalar(coeff)
    }

    // Length

    #[inline]
    pub fn length(self) -> f64 {
        self.length_sq().sqrt()
    }

    #[inline]
    pub fn magnitude(self) -> f64 {
        self.length()
    }

    #[inline]
    pub fn length_sq(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Scales the vector to unit length.
    ///
    /// A zero vector has no direction and becomes `(1, 0)`.
    pub fn normalize(&mut self) -> &mut Self {
        let length = self.length();
        if length == 0.0 {
            log::trace!("normalize on zero vector, using (1, 0)");
            self.x = 1.0;
            self.y = 0.0;
        } else {
            self.x /= length;
            self.y /= length;
        }
        self
    }

    #[inline]
    pub fn norm(&mut self) -> &mut Self {
        self.normalize()
    }

    // Products

    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    // Distance

    /// Signed difference `self.x - other.x`.
    #[inline]
    pub fn distance_x(self, other: Self) -> f64 {
        self.x - other.x
    }

    #[inline]
    pub fn abs_distance_x(self, other: Self) -> f64 {
        self.distance_x(other).abs()
    }

    /// Signed difference `self.y - other.y`.
    #[inline]
    pub fn distance_y(self, other: Self) -> f64 {
        self.y - other.y
    }

    #[inline]
    pub fn abs_distance_y(self, other: Self) -> f64 {
        self.distance_y(other).abs()
    }

    #[inline]
    pub fn distance_sq(self, other: Self) -> f64 {
        let dx = self.distance_x(other);
        let dy = self.distance_y(other);
        dx * dx + dy * dy
    }

    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        self.distance_sq(other).sqrt()
    }

    // Predicates

    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Exact comparison of both axes, no tolerance.
    #[inline]
    pub fn is_equal_to(self, other: Self) -> bool {
        self.x == other.x && self.y == other.y
    }

    // Angles

    /// Angle from the positive x-axis, `atan2(y, x)`, in radians.
    #[inline]
    pub fn horizontal_angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    #[inline]
    pub fn horizontal_angle_deg(self) -> f64 {
        radians_to_degrees(self.horizontal_angle())
    }

    /// Angle from the positive y-axis, `atan2(x, y)`, in radians.
    #[inline]
    pub fn vertical_angle(self) -> f64 {
        self.x.atan2(self.y)
    }

    #[inline]
    pub fn vertical_angle_deg(self) -> f64 {
        radians_to_degrees(self.vertical_angle())
    }

    #[inline]
    pub fn angle(self) -> f64 {
        self.horizontal_angle()
    }

    #[inline]
    pub fn angle_deg(self) -> f64 {
        self.horizontal_angle_deg()
    }

    /// Heading of the vector in radians; same as [`horizontal_angle`](Self::horizontal_angle).
    #[inline]
    pub fn direction(self) -> f64 {
        self.horizontal_angle()
    }

    // Rotation

    /// Rotates counter-clockwise by `angle` radians.
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        let nx = self.x * cos - self.y * sin;
        let ny = self.x * sin + self.y * cos;
        self.x = nx;
        self.y = ny;
        self
    }

    #[inline]
    pub fn rotate_deg(&mut self, degrees: f64) -> &mut Self {
        self.rotate(degrees_to_radians(degrees))
    }

    /// Rotates so that the horizontal angle becomes `rotation` radians,
    /// keeping the length.
    #[inline]
    pub fn rotate_to(&mut self, rotation: f64) -> &mut Self {
        let delta = rotation - self.angle();
        self.rotate(delta)
    }

    #[inline]
    pub fn rotate_to_deg(&mut self, degrees: f64) -> &mut Self {
        self.rotate_to(degrees_to_radians(degrees))
    }

    /// Rotates by the current angle plus `rotation` radians.
    ///
    /// The resulting heading is `2 * angle() + rotation`; a vector on the
    /// positive x-axis is therefore simply rotated by `rotation`.
    #[inline]
    pub fn rotate_by(&mut self, rotation: f64) -> &mut Self {
        let angle = self.angle() + rotation;
        self.rotate(angle)
    }

    #[inline]
    pub fn rotate_by_deg(&mut self, degrees: f64) -> &mut Self {
        self.rotate_by(degrees_to_radians(degrees))
    }
}

impl Neg for Vector {
    type Output = Self;
    #[inline]
    fn neg(mut self) -> Self {
        self.invert();
        self
    }
}

impl AddAssign for Vector {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.add(rhs);
    }
}

impl SubAssign for Vector {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.subtract(rhs);
    }
}

impl MulAssign<f64> for Vector {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.multiply_scalar(rhs);
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl UlpsEq for Vector {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
    }
}
