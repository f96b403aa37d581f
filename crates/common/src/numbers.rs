use std::convert::TryFrom;

use super::error::{Error, Result};

// Types for positive and non-negative integers.

/// Positive integer.
pub type Positive = std::num::NonZeroU32;
/// Non-negative integer.
pub type NonNegative = u32;
/// Positive number of bits.
pub type BitCount = Positive;

/// Returns true if `n` is a positive power of two.
pub const fn is_power_of_two(n: u64) -> bool {
    n != 0 && (n & (n - 1)) == 0
}

pub fn i64_to_u32(i: i64) -> Result<u32> {
    u32::try_from(i).map_err(|err| Error::InvalidArgument(err.to_string()))
}
