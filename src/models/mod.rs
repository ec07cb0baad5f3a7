//! Value types built on top of the subnet arithmetic.
//!
//! - [`format_addr`] - dotted-decimal rendering of a raw `u32` address
//! - [`Subnet`] - validated network address and mask pair
//! - [`SubnetSummary`] - every calculated figure for one address and mask

mod ipv4;
mod subnet;
mod summary;

pub use ipv4::{format_addr, to_addr, to_bits};
pub use subnet::Subnet;
pub use summary::SubnetSummary;
