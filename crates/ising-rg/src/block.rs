use ising_core::errors::{ErrorInfo, IsingError};
use ising_core::Spin;
use serde::{Deserialize, Serialize};

use crate::aggregate::SpinRelation;
use crate::lattice::{Configuration, BLOCKS};

struct NonEmptyBlock<const N: usize>;

impl<const N: usize> NonEmptyBlock<N> {
    const OK: () = assert!(N > 0, "majority rule needs at least one spin");
}

/// Applies the majority rule to a block of any length.
///
/// The block maps to [`Spin::Up`] only when its sum is strictly positive; a
/// zero sum (possible for even lengths) maps to [`Spin::Down`].
pub fn majority_rule(block: &[Spin]) -> Result<Spin, IsingError> {
    if block.is_empty() {
        let info = ErrorInfo::new("empty-block", "majority rule needs at least one spin")
            .with_context("len", "0");
        return Err(IsingError::Lattice(info));
    }
    Ok(strict_majority(block))
}

/// Fixed-size form of [`majority_rule`]; empty blocks fail to compile.
pub fn block_majority<const N: usize>(block: &[Spin; N]) -> Spin {
    let () = NonEmptyBlock::<N>::OK;
    strict_majority(block)
}

fn strict_majority(block: &[Spin]) -> Spin {
    let sum: i32 = block.iter().map(|spin| spin.value()).sum();
    if sum > 0 {
        Spin::Up
    } else {
        Spin::Down
    }
}

/// Coarse-grained pair `(s1', s2')` derived from a fine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockSpins([Spin; BLOCKS]);

impl BlockSpins {
    /// Maps each contiguous block of `configuration` through the majority rule.
    pub fn coarse_grain(configuration: &Configuration) -> Self {
        Self(configuration.blocks().map(|block| block_majority(&block)))
    }

    /// Block spins in coarse ring order.
    pub fn spins(&self) -> &[Spin; BLOCKS] {
        &self.0
    }

    /// Whether the two block spins agree.
    pub fn relation(&self) -> SpinRelation {
        let [first, second] = self.0;
        if first == second {
            SpinRelation::Equal
        } else {
            SpinRelation::Unequal
        }
    }
}
