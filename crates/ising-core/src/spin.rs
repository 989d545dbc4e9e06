use std::fmt;
use std::ops::Neg;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, IsingError};

/// Two-state Ising degree of freedom taking the values `+1` and `-1`.
///
/// Serialises as the signed integer it represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Spin {
    /// The `-1` state.
    Down,
    /// The `+1` state.
    Up,
}

impl Spin {
    /// Both spin states, `Down` first.
    pub const ALL: [Spin; 2] = [Spin::Down, Spin::Up];

    /// Maps a set bit to [`Spin::Up`] and a cleared bit to [`Spin::Down`].
    pub const fn from_bit(bit: bool) -> Self {
        if bit {
            Spin::Up
        } else {
            Spin::Down
        }
    }

    /// Inverse of [`Spin::from_bit`].
    pub const fn as_bit(self) -> bool {
        matches!(self, Spin::Up)
    }

    /// Returns the signed value of the spin.
    pub const fn value(self) -> i32 {
        match self {
            Spin::Up => 1,
            Spin::Down => -1,
        }
    }

    /// Parses a signed value, rejecting anything other than `+1` or `-1`.
    pub fn from_value(value: i32) -> Result<Self, IsingError> {
        match value {
            1 => Ok(Spin::Up),
            -1 => Ok(Spin::Down),
            other => Err(IsingError::Lattice(
                ErrorInfo::new("invalid-spin", "spin values must be +1 or -1")
                    .with_context("value", other.to_string()),
            )),
        }
    }
}

impl Neg for Spin {
    type Output = Spin;

    fn neg(self) -> Spin {
        match self {
            Spin::Up => Spin::Down,
            Spin::Down => Spin::Up,
        }
    }
}

impl From<Spin> for i8 {
    fn from(spin: Spin) -> Self {
        match spin {
            Spin::Up => 1,
            Spin::Down => -1,
        }
    }
}

impl TryFrom<i8> for Spin {
    type Error = IsingError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Spin::from_value(i32::from(value))
    }
}

// Delegates to the integer formatter so width and alignment flags apply.
impl fmt::Display for Spin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}
