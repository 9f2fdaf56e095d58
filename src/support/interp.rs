//! Interpolation over tabulated charts.
//!
//! Empirical charts are tabulated on ascending, non-uniform grids. This module
//! reads them with a four-point scheme: inside an interior interval the result
//! is a linear blend of the two parabolas through the neighboring node
//! triples, so the interpolant passes through every node and has a continuous
//! slope across nodes. The first and last intervals use the single parabola
//! through the three nodes at that end.
//!
//! The scheme reproduces quadratics exactly:
//!
//! ```
//! use twine_propeller::support::interp::Curve;
//!
//! let x = [0.0, 0.5, 1.0, 1.5, 2.0, 3.0, 5.0];
//! let y = x.map(|x| 2.0 * x * x - x + 1.0);
//! let curve = Curve::new(&x, &y);
//!
//! let lookup = curve.eval(2.5_f64);
//! assert!((lookup.value - 11.0).abs() < 1e-12);
//! assert!(!lookup.is_clamped());
//! ```
//!
//! Queries outside a grid are clamped to the nearest end node and flagged
//! with an [`Extrapolation`] per clamped axis. The clamped value is constant,
//! so its slope with respect to the query is zero.
//!
//! All lookups are generic over [`Scalar`], which lets the same code produce
//! plain values (`f64`) or values with partial derivatives
//! ([`Dual64`](crate::support::dual::Dual64)).

use crate::support::dual::Scalar;

/// Side of a grid on which an out-of-range query was clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extrapolation {
    /// The query was below the first grid node.
    Below,
    /// The query was above the last grid node.
    Above,
}

/// Node indices and weights that interpolate a query point over a grid.
///
/// A stencil touches at most four consecutive nodes starting at `start`.
/// It is independent of the tabulated values, so one stencil can be reused for
/// every row of a surface or for values that are themselves computed lazily
/// (see [`Stencil::apply`]).
#[derive(Debug, Clone, Copy)]
pub struct Stencil<S> {
    start: usize,
    len: usize,
    weights: [S; 4],
    extrapolation: Option<Extrapolation>,
}

impl<S: Scalar> Stencil<S> {
    /// Locates `x` on an ascending `grid`.
    ///
    /// # Panics
    ///
    /// Panics if `grid` is empty.
    pub fn locate(grid: &[f64], x: S) -> Self {
        let n = grid.len();
        assert!(n > 0, "interpolation grid must not be empty");

        let xv = x.re();
        if n == 1 || xv < grid[0] {
            let extrapolation = (xv < grid[0]).then_some(Extrapolation::Below);
            return Self::clamped(0, extrapolation);
        }
        if xv > grid[n - 1] {
            return Self::clamped(n - 1, Some(Extrapolation::Above));
        }

        // First node at or above the query, never the leading node.
        let idx = 1 + grid[1..].partition_point(|&node| node < xv);

        if n == 2 {
            let t = (x - grid[0]) / (grid[1] - grid[0]);
            return Self::from_weights(0, &[S::one() - t, t]);
        }
        if n == 3 || idx == 1 {
            return Self::from_weights(0, &parabola(&grid[0..3], x));
        }
        if idx == n - 1 {
            return Self::from_weights(n - 3, &parabola(&grid[n - 3..n], x));
        }

        let j = idx - 2;
        let ra = (-x + grid[idx]) / (grid[idx] - grid[idx - 1]);
        let rb = S::one() - ra;
        let left = parabola(&grid[j..j + 3], x);
        let right = parabola(&grid[j + 1..j + 4], x);

        Self::from_weights(
            j,
            &[
                ra * left[0],
                ra * left[1] + rb * right[0],
                ra * left[2] + rb * right[1],
                rb * right[2],
            ],
        )
    }

    fn clamped(index: usize, extrapolation: Option<Extrapolation>) -> Self {
        let mut stencil = Self::from_weights(index, &[S::one()]);
        stencil.extrapolation = extrapolation;
        stencil
    }

    fn from_weights(start: usize, weights: &[S]) -> Self {
        let mut all = [S::zero(); 4];
        all[..weights.len()].copy_from_slice(weights);
        Self {
            start,
            len: weights.len(),
            weights: all,
            extrapolation: None,
        }
    }

    /// Returns where the query was clamped, if it fell outside the grid.
    pub fn extrapolation(&self) -> Option<Extrapolation> {
        self.extrapolation
    }

    /// Iterates over the grid indices this stencil reads.
    pub fn indices(&self) -> impl Iterator<Item = usize> + use<S> {
        self.start..self.start + self.len
    }

    /// Iterates over `(index, weight)` pairs.
    pub fn weighted(&self) -> impl Iterator<Item = (usize, S)> {
        self.indices().zip(self.weights[..self.len].iter().copied())
    }

    /// Combines the values produced by `value_at` for each stencil index.
    ///
    /// Only the indices returned by [`Stencil::indices`] are requested.
    pub fn apply(&self, mut value_at: impl FnMut(usize) -> S) -> S {
        self.weighted()
            .fold(S::zero(), |acc, (i, w)| acc + w * value_at(i))
    }

    /// Combines tabulated values.
    pub fn apply_to(&self, values: &[f64]) -> S {
        self.weights[..self.len]
            .iter()
            .zip(&values[self.start..self.start + self.len])
            .fold(S::zero(), |acc, (&w, &y)| acc + w * y)
    }
}

/// Lagrange weights of the parabola through three nodes.
fn parabola<S: Scalar>(nodes: &[f64], x: S) -> [S; 3] {
    let [x0, x1, x2] = [nodes[0], nodes[1], nodes[2]];
    let d0 = x - x0;
    let d1 = x - x1;
    let d2 = x - x2;
    [
        d1 * d2 / ((x0 - x1) * (x0 - x2)),
        d0 * d2 / ((x1 - x0) * (x1 - x2)),
        d0 * d1 / ((x2 - x0) * (x2 - x1)),
    ]
}

/// An interpolated value and whether the query had to be clamped.
#[derive(Debug, Clone, Copy)]
pub struct Lookup<S> {
    pub value: S,
    /// Clamping of each query axis in argument order. Curves use only the first.
    pub extrapolation: [Option<Extrapolation>; 2],
}

impl<S> Lookup<S> {
    /// Returns `true` if any axis was clamped.
    #[must_use]
    pub fn is_clamped(&self) -> bool {
        self.clamps().next().is_some()
    }

    /// Iterates over the clamps applied to the query.
    pub fn clamps(&self) -> impl Iterator<Item = Extrapolation> {
        self.extrapolation.into_iter().flatten()
    }
}

/// A tabulated function `y(x)` on an ascending grid.
#[derive(Debug, Clone, Copy)]
pub struct Curve<'a> {
    x: &'a [f64],
    y: &'a [f64],
}

impl<'a> Curve<'a> {
    /// Creates a curve from matching grid and value slices.
    ///
    /// # Panics
    ///
    /// Panics if the slices differ in length or are empty.
    #[must_use]
    pub const fn new(x: &'a [f64], y: &'a [f64]) -> Self {
        assert!(!x.is_empty() && x.len() == y.len(), "curve axes must match");
        Self { x, y }
    }

    /// Returns the grid.
    #[must_use]
    pub fn grid(&self) -> &'a [f64] {
        self.x
    }

    /// Returns the tabulated values.
    #[must_use]
    pub fn values(&self) -> &'a [f64] {
        self.y
    }

    /// Interpolates the curve at `x`.
    pub fn eval<S: Scalar>(&self, x: S) -> Lookup<S> {
        let stencil = Stencil::locate(self.x, x);
        Lookup {
            value: stencil.apply_to(self.y),
            extrapolation: [stencil.extrapolation(), None],
        }
    }

    /// Reads the curve backwards, interpolating `x` at a given `y`.
    ///
    /// The values must be strictly increasing.
    pub fn inverse<S: Scalar>(&self, y: S) -> Lookup<S> {
        Curve::new(self.y, self.x).eval(y)
    }
}

/// A tabulated function `z(row, col)`.
///
/// Every row is tabulated on the same column grid.
#[derive(Debug, Clone, Copy)]
pub struct Surface<'a> {
    rows: &'a [f64],
    cols: &'a [f64],
    values: &'a [&'a [f64]],
}

impl<'a> Surface<'a> {
    /// Creates a surface; `values[i][j]` is the value at `(rows[i], cols[j])`.
    ///
    /// # Panics
    ///
    /// Panics if the value table does not match the axes.
    #[must_use]
    pub const fn new(rows: &'a [f64], cols: &'a [f64], values: &'a [&'a [f64]]) -> Self {
        assert!(rows.len() == values.len(), "surface rows must match");
        let mut i = 0;
        while i < values.len() {
            assert!(values[i].len() == cols.len(), "surface columns must match");
            i += 1;
        }
        Self { rows, cols, values }
    }

    /// Returns the row grid.
    #[must_use]
    pub fn rows(&self) -> &'a [f64] {
        self.rows
    }

    /// Returns the column grid.
    #[must_use]
    pub fn cols(&self) -> &'a [f64] {
        self.cols
    }

    /// Interpolates the surface at `(row, col)`.
    ///
    /// Each axis is clamped and reported on its own.
    pub fn eval<S: Scalar>(&self, row: S, col: S) -> Lookup<S> {
        let across = Stencil::locate(self.cols, col);
        let down = Stencil::locate(self.rows, row);
        Lookup {
            value: down.apply(|i| across.apply_to(self.values[i])),
            extrapolation: [down.extrapolation(), across.extrapolation()],
        }
    }
}
