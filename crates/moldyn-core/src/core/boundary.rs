use super::models::container::Interval;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What happens to a particle whose unconstrained position update leaves the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Boundary {
    /// Hard reflecting walls: the position is mirrored back inside and the
    /// velocity component is reversed.
    ///
    /// Only one reflection is applied per step, so a particle travelling more
    /// than one container width in a single step (`|v·dt| >= width`) can end
    /// up outside the box.
    #[default]
    Walls,
    /// Periodic wraparound: the position re-enters from the opposite face and
    /// the velocity is untouched.
    Periodic,
    /// No boundary: particles move freely outside the nominal container.
    Open,
}

impl Boundary {
    /// Applies the policy to one axis of one particle.
    ///
    /// # Arguments
    ///
    /// * `interval` - The container bounds along this axis.
    /// * `x` - The position component, already advanced by the unconstrained update.
    /// * `v` - The velocity component; only modified by [`Boundary::Walls`].
    #[inline]
    pub fn apply(&self, interval: &Interval, x: &mut f64, v: &mut f64) {
        match self {
            Boundary::Walls => {
                if *x < interval.min {
                    *x = 2.0 * interval.min - *x;
                    *v = -*v;
                } else if *x > interval.max {
                    *x = 2.0 * interval.max - *x;
                    *v = -*v;
                }
            }
            Boundary::Periodic => {
                if *x < interval.min || *x >= interval.max {
                    *x = wrap(*x, interval);
                }
            }
            Boundary::Open => {}
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Boundary::Walls => "walls",
            Boundary::Periodic => "periodic",
            Boundary::Open => "open",
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps `x` into `[min, max)` by Euclidean modulus of the container width.
#[inline]
fn wrap(x: f64, interval: &Interval) -> f64 {
    let width = interval.width();
    let offset = (x - interval.min).rem_euclid(width);
    // rem_euclid can round up to exactly `width` for tiny negative offsets.
    if offset >= width {
        interval.min
    } else {
        interval.min + offset
    }
}
