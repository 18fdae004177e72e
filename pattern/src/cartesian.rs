//! Random-access Cartesian product over a list of axes.

use crate::{PatternError, PatternResult};

/// The Cartesian product of N non-empty axes.
///
/// Combination `i` picks, for axis `k`, the element at
/// `(i / suffix[k + 1]) % len(axis k)`, where `suffix[k]` is the product of
/// the sizes of axes `k..N`. The last axis therefore varies fastest.
#[derive(Debug, Clone)]
pub struct CartesianProduct<'a, T> {
    axes: Vec<&'a [T]>,
    suffix: Vec<usize>,
}

impl<'a, T> CartesianProduct<'a, T> {
    /// Fails with `IllegalState` when there are no axes, when an axis is
    /// empty, or when the number of combinations overflows `usize`.
    pub fn new(axes: Vec<&'a [T]>) -> PatternResult<Self> {
        if axes.is_empty() {
            return Err(PatternError::illegal_state(
                "cartesian product requires at least one axis",
            ));
        }
        let mut suffix = vec![1usize; axes.len() + 1];
        for (k, axis) in axes.iter().enumerate().rev() {
            if axis.is_empty() {
                return Err(PatternError::illegal_state(format!(
                    "cartesian product axis {} is empty",
                    k
                )));
            }
            suffix[k] = suffix[k + 1].checked_mul(axis.len()).ok_or_else(|| {
                PatternError::illegal_state("cartesian product size overflows usize")
            })?;
        }
        tracing::trace!(axes = axes.len(), combinations = suffix[0], "cartesian product");
        Ok(Self { axes, suffix })
    }

    /// Total number of combinations: the product of the axis sizes.
    pub fn len(&self) -> usize {
        self.suffix[0]
    }

    /// Never true: every axis is non-empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The per-axis indices of combination `index`.
    pub fn indices(&self, index: usize) -> Option<Vec<usize>> {
        if index >= self.len() {
            return None;
        }
        Some(
            self.axes
                .iter()
                .enumerate()
                .map(|(k, axis)| (index / self.suffix[k + 1]) % axis.len())
                .collect(),
        )
    }

    /// Combination `index`: one element from each axis, in axis order.
    pub fn get(&self, index: usize) -> Option<Vec<&'a T>> {
        let indices = self.indices(index)?;
        Some(
            self.axes
                .iter()
                .zip(indices)
                .map(|(axis, i)| &axis[i])
                .collect(),
        )
    }

    /// All combinations in index order.
    pub fn iter(&self) -> impl Iterator<Item = Vec<&'a T>> + '_ {
        (0..self.len()).filter_map(move |index| self.get(index))
    }
}
