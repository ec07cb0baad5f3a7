//! Error type shared by the subnet calculations.

use crate::subnet::{MAX_PREFIX_LENGTH, MIN_PREFIX_LENGTH};

/// Input validation failures raised by the subnet calculations.
///
/// None of these are transient; they describe a bad value handed in by the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubnetError {
    /// The mask is not a run of 1-bits starting at bit 31, or has no 1-bits at all.
    #[error("Invalid subnet mask: '{mask}'")]
    InvalidSubnetMask { mask: String },

    #[error(
        "Incorrect routing prefix length: {length}. It must be between {min} and {max} (both inclusive)",
        min = MIN_PREFIX_LENGTH,
        max = MAX_PREFIX_LENGTH
    )]
    InvalidPrefixLength { length: i64 },

    /// Text that could not be read as an address, mask or prefix length.
    #[error("Invalid address: '{input}'")]
    InvalidAddress { input: String },
}
