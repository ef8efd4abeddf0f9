//! Levenshtein distance with a reusable score matrix.
//!
//! Matching is case-insensitive: both operands are lower-cased char by char
//! before comparison. The DP buffer is sized once for the longest term in the
//! corpus and reused for every comparison during build and search.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::error::DomainError;

/// Largest accepted per-operation cost.
pub const MAX_COST: usize = 1 << 16;

/// Per-operation edit costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostModel {
    pub insert: usize,
    pub delete: usize,
    pub substitute: usize,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            insert: 1,
            delete: 1,
            substitute: 1,
        }
    }
}

impl CostModel {
    /// Zero costs break "distance is 0 iff equal", which tree pruning relies on.
    /// Costs above [`MAX_COST`] are rejected so matrix cells cannot overflow.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (name, cost) in [
            ("insert", self.insert),
            ("delete", self.delete),
            ("substitute", self.substitute),
        ] {
            if !(1..=MAX_COST).contains(&cost) {
                return Err(DomainError::InvalidCost { name });
            }
        }
        Ok(())
    }

    /// Distance is only symmetric when inserting and deleting cost the same.
    pub fn is_symmetric(&self) -> bool {
        self.insert == self.delete
    }
}

/// Length of a string as seen by the distance function (chars after case folding).
pub fn folded_len(s: &str) -> usize {
    s.chars().flat_map(char::to_lowercase).count()
}

/// Square DP buffer of side `capacity + 1`, row and column 0 pre-filled.
#[derive(Debug, Clone)]
pub struct ScoreMatrix {
    side: usize,
    cells: Vec<usize>,
}

impl ScoreMatrix {
    pub fn new(capacity: usize, costs: &CostModel) -> Self {
        let side = capacity + 1;
        let mut cells = vec![0; side * side];
        for i in 0..side {
            cells[i * side] = i.saturating_mul(costs.delete);
            cells[i] = i.saturating_mul(costs.insert);
        }
        Self { side, cells }
    }

    /// Longest operand (in chars) the matrix can hold.
    pub fn capacity(&self) -> usize {
        self.side - 1
    }

    #[inline]
    fn at(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.side + j]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: usize) {
        self.cells[i * self.side + j] = value;
    }
}

/// Levenshtein distance calculator owning its scratch buffers.
#[derive(Debug, Clone)]
pub struct EditDistance {
    costs: CostModel,
    matrix: ScoreMatrix,
    left: Vec<char>,
    right: Vec<char>,
}

impl Default for EditDistance {
    fn default() -> Self {
        Self::new(CostModel::default())
    }
}

impl EditDistance {
    pub fn new(costs: CostModel) -> Self {
        Self::with_capacity(costs, 0)
    }

    pub fn with_capacity(costs: CostModel, capacity: usize) -> Self {
        Self {
            costs,
            matrix: ScoreMatrix::new(capacity, &costs),
            left: Vec::with_capacity(capacity),
            right: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.matrix.capacity()
    }

    /// Grow the score matrix so operands up to `len` chars fit. Never shrinks.
    pub fn reserve(&mut self, len: usize) {
        if len > self.matrix.capacity() {
            self.matrix = ScoreMatrix::new(len, &self.costs);
        }
    }

    /// Case-insensitive Levenshtein distance between `a` and `b`.
    pub fn distance(&mut self, a: &str, b: &str) -> usize {
        fold_into(a, &mut self.left);
        fold_into(b, &mut self.right);

        let rows = self.left.len();
        let cols = self.right.len();
        let needed = rows.max(cols);
        if needed > self.matrix.capacity() {
            debug!(
                "score matrix too small ({} < {}), growing",
                self.matrix.capacity(),
                needed
            );
            self.reserve(needed);
        }

        let Self {
            costs,
            matrix,
            left,
            right,
        } = self;

        for i in 1..=rows {
            for j in 1..=cols {
                let substitute = if left[i - 1] == right[j - 1] {
                    0
                } else {
                    costs.substitute
                };
                let best = matrix
                    .at(i - 1, j)
                    .saturating_add(costs.delete)
                    .min(matrix.at(i, j - 1).saturating_add(costs.insert))
                    .min(matrix.at(i - 1, j - 1).saturating_add(substitute));
                matrix.set(i, j, best);
            }
        }
        matrix.at(rows, cols)
    }
}

fn fold_into(s: &str, buf: &mut Vec<char>) {
    buf.clear();
    buf.extend(s.chars().flat_map(char::to_lowercase));
}
