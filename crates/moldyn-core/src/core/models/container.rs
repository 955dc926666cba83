use super::particle::Vector;

/// A closed interval `[min, max]` bounding the container along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> f64 {
        0.5 * (self.min + self.max)
    }

    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }

    /// An interval is degenerate when it has no interior or a non-finite endpoint.
    pub fn is_degenerate(&self) -> bool {
        !(self.min.is_finite() && self.max.is_finite() && self.min < self.max)
    }
}

/// The axis-aligned box particles live in, one [`Interval`] per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Container<const D: usize> {
    axes: [Interval; D],
}

impl<const D: usize> Container<D> {
    pub fn new(axes: [Interval; D]) -> Self {
        Self { axes }
    }

    /// A cube `[0, side]^D`.
    pub fn cube(side: f64) -> Self {
        Self::new([Interval::new(0.0, side); D])
    }

    pub fn axis(&self, k: usize) -> Option<&Interval> {
        self.axes.get(k)
    }

    pub fn axes(&self) -> &[Interval; D] {
        &self.axes
    }

    /// Product of the axis widths (a length in 1D, an area in 2D).
    pub fn volume(&self) -> f64 {
        self.axes.iter().map(Interval::width).product()
    }

    pub fn center(&self) -> Vector<D> {
        Vector::from_fn(|k, _| self.axes[k].center())
    }

    pub fn contains(&self, x: &Vector<D>) -> bool {
        self.axes
            .iter()
            .enumerate()
            .all(|(k, interval)| interval.contains(x[k]))
    }

    /// Index of the first degenerate axis, if any.
    pub fn first_degenerate_axis(&self) -> Option<usize> {
        self.axes.iter().position(Interval::is_degenerate)
    }
}
