//! Dense cost grid searched with A*.
//!
//! A [`SquareGrid`] stores one traversal cost per cell in row-major order
//! (`index = x + y * width`). A cost of `0` marks the cell impassable; any
//! positive value is the cost of entering it. Neighbours are computed
//! geometrically from the 3×3 block around a cell, with diagonal moves gated
//! by a [`Corners`] policy.

use waypoint_core::{Point, Range};

use crate::astar::astar_path;
use crate::error::{self, Result};
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Multiplier applied to a cell's cost when it is entered diagonally.
pub const DIAGONAL_COST_FACTOR: f64 = 1.4;

/// How diagonal moves interact with blocked orthogonal cells.
///
/// Variants are ordered from most to least restrictive:
/// `None < Walk < Cut < Phase`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Corners {
    /// No diagonal movement.
    #[default]
    None,
    /// Diagonal only when both flanking orthogonal cells are passable.
    Walk,
    /// Diagonal unless both flanking orthogonal cells are blocked.
    Cut,
    /// Diagonal whenever the target cell is passable.
    Phase,
}

impl Corners {
    /// Whether this policy permits any diagonal movement.
    #[inline]
    pub fn allows_diagonals(self) -> bool {
        self > Corners::None
    }
}

/// A fixed-size grid of per-cell traversal costs.
#[derive(Clone, Debug, PartialEq)]
pub struct SquareGrid {
    rng: Range,
    costs: Vec<f64>,
}

impl SquareGrid {
    /// Create a grid from a row-major cost field.
    ///
    /// Fails with [`PathError::SizeMismatch`](crate::PathError::SizeMismatch)
    /// unless `costs` holds exactly `width * height` values.
    pub fn new(width: i32, height: i32, costs: impl Into<Vec<f64>>) -> Result<Self> {
        let rng = Range::sized(width, height);
        let costs = costs.into();
        error::check_size(rng.len(), costs.len())?;
        Ok(Self { rng, costs })
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.rng.width()
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.rng.height()
    }

    /// The rectangle `[0, width) × [0, height)`.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Row-major cost field.
    #[inline]
    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    /// Flat index of `p`, or `None` when out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        self.rng.index_of(p)
    }

    /// Position of the cell at flat index `idx`.
    #[inline]
    pub fn point(&self, idx: usize) -> Option<Point> {
        self.rng.point_at(idx)
    }

    /// Cost of entering `p`, or `None` when out of bounds.
    #[inline]
    pub fn cost(&self, p: Point) -> Option<f64> {
        self.index(p).map(|i| self.costs[i])
    }

    /// Whether `p` is inside the grid and has non-zero cost.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        self.cost(p).is_some_and(|c| c != 0.0)
    }

    /// Cheapest path from `origin` to `target` as flat cell indices.
    ///
    /// Uses A* with a Manhattan-distance heuristic. Diagonal steps cost
    /// [`DIAGONAL_COST_FACTOR`] times the entered cell's cost and are
    /// allowed according to `corners`. Returns an empty vector when either
    /// endpoint is out of bounds or no route exists.
    pub fn find(&self, origin: Point, target: Point, corners: Corners) -> Vec<usize> {
        if !self.rng.contains(origin) || !self.rng.contains(target) {
            log::debug!("grid search {} -> {}: endpoint out of {}", origin, target, self.rng);
            return Vec::new();
        }
        let pather = GridPather {
            grid: self,
            corners,
        };
        astar_path(&pather, origin, target)
            .into_iter()
            .filter_map(|p| self.index(p))
            .collect()
    }

    /// Map a path of flat indices back to positions.
    pub fn path_points(&self, path: &[usize]) -> Vec<Point> {
        path.iter().filter_map(|&i| self.point(i)).collect()
    }

    /// Total movement cost of a path of flat indices, as charged by
    /// [`find`](Self::find). `None` for an empty path or an index out of
    /// bounds.
    pub fn path_cost(&self, path: &[usize]) -> Option<f64> {
        if path.is_empty() {
            return None;
        }
        let points: Vec<Point> = path.iter().map(|&i| self.point(i)).collect::<Option<_>>()?;
        points
            .windows(2)
            .map(|w| Some(step_cost(self.cost(w[1])?, w[0], w[1])))
            .sum()
    }
}

#[inline]
fn step_cost(cell: f64, from: Point, to: Point) -> f64 {
    if from.is_diagonal_to(to) {
        cell * DIAGONAL_COST_FACTOR
    } else {
        cell
    }
}

// ---------------------------------------------------------------------------
// GridPather
// ---------------------------------------------------------------------------

/// A [`SquareGrid`] seen through a corner policy, searchable with
/// [`astar_path`].
#[derive(Clone, Copy, Debug)]
pub struct GridPather<'a> {
    /// Grid whose costs and walls are searched.
    pub grid: &'a SquareGrid,
    /// Policy gating diagonal steps.
    pub corners: Corners,
}

impl GridPather<'_> {
    #[inline]
    fn blocked(&self, p: Point) -> bool {
        !self.grid.passable(p)
    }

    /// Whether the diagonal step `from → to` passes the corner policy.
    fn diagonal_allowed(&self, from: Point, to: Point) -> bool {
        if !self.corners.allows_diagonals() {
            return false;
        }
        if self.corners >= Corners::Phase {
            return true;
        }
        // The two orthogonal cells flanking the move.
        let side_x = self.blocked(Point::new(to.x, from.y));
        let side_y = self.blocked(Point::new(from.x, to.y));
        if self.corners < Corners::Cut {
            !(side_x || side_y)
        } else {
            !(side_x && side_y)
        }
    }
}

impl Pather for GridPather<'_> {
    type Node = Point;

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_8() {
            if p.is_diagonal_to(n) && !self.corners.allows_diagonals() {
                continue;
            }
            if self.blocked(n) {
                continue;
            }
            if p.is_diagonal_to(n) && !self.diagonal_allowed(p, n) {
                continue;
            }
            buf.push(n);
        }
    }
}

impl WeightedPather for GridPather<'_> {
    fn cost(&self, from: Point, to: Point) -> f64 {
        let cell = self.grid.cost(to).unwrap_or(f64::INFINITY);
        step_cost(cell, from, to)
    }
}

impl AstarPather for GridPather<'_> {
    fn estimate(&self, from: Point, to: Point) -> f64 {
        f64::from(from.manhattan(to))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn corners_round_trip() {
        for corners in [Corners::None, Corners::Walk, Corners::Cut, Corners::Phase] {
            let json = serde_json::to_string(&corners).unwrap();
            let back: Corners = serde_json::from_str(&json).unwrap();
            assert_eq!(back, corners);
        }
    }
}
