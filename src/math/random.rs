use rand::Rng;

use crate::math::Vector;

/// Uniform value in the closed interval spanned by `a` and `b`, in either order.
#[inline]
fn random_between(rng: &mut impl Rng, a: f64, b: f64) -> f64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    rng.gen_range(lo..=hi)
}

/// Randomization within the rectangle spanned by two corners.
///
/// Corners may be passed in any order. All methods panic if a bound is NaN
/// or infinite.
impl Vector {
    pub fn randomize_x(
        &mut self,
        rng: &mut impl Rng,
        top_left: Vector,
        bottom_right: Vector,
    ) -> &mut Self {
        self.x = random_between(rng, top_left.x, bottom_right.x);
        self
    }

    pub fn randomize_y(
        &mut self,
        rng: &mut impl Rng,
        top_left: Vector,
        bottom_right: Vector,
    ) -> &mut Self {
        self.y = random_between(rng, top_left.y, bottom_right.y);
        self
    }

    pub fn randomize(
        &mut self,
        rng: &mut impl Rng,
        top_left: Vector,
        bottom_right: Vector,
    ) -> &mut Self {
        self.randomize_x(rng, top_left, bottom_right)
            .randomize_y(rng, top_left, bottom_right)
    }

    /// Randomizes either `x` or `y`, chosen with equal odds.
    pub fn randomize_any(
        &mut self,
        rng: &mut impl Rng,
        top_left: Vector,
        bottom_right: Vector,
    ) -> &mut Self {
        if rng.gen_bool(0.5) {
            self.randomize_x(rng, top_left, bottom_right)
        } else {
            self.randomize_y(rng, top_left, bottom_right)
        }
    }
}
