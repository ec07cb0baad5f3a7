//! Command line argument types and text parsing for the binary.

use crate::error::SubnetError;
use crate::models::to_bits;
use crate::subnet::{subnet_mask, MAX_PREFIX_LENGTH, MIN_PREFIX_LENGTH};
use clap::Parser;
use std::net::Ipv4Addr;

/// IPv4 subnet calculator: network, broadcast and host counts for an address and mask
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// IPv4 address in dotted-decimal form
    #[arg(value_parser = parse_address)]
    pub address: u32,

    /// Subnet mask: dotted-decimal (255.255.255.0), /24 or 24
    #[arg(value_parser = parse_mask)]
    pub mask: u32,

    /// Also report whether this address falls inside the subnet
    #[arg(long, value_parser = parse_address)]
    pub contains: Option<u32>,

    /// Print the summary as JSON
    #[arg(long, conflicts_with = "csv")]
    pub json: bool,

    /// Print the summary as a CSV header and row
    #[arg(long)]
    pub csv: bool,
}

/// Parse a dotted-decimal address into its raw `u32` form.
pub fn parse_address(input: &str) -> Result<u32, SubnetError> {
    input
        .trim()
        .parse::<Ipv4Addr>()
        .map(to_bits)
        .map_err(|_| SubnetError::InvalidAddress {
            input: input.to_string(),
        })
}

/// Parse a mask given as dotted decimal, `/n` or a bare prefix length.
///
/// Prefix lengths are converted with [`subnet_mask`]; dotted masks are passed
/// through as-is and validated by whichever calculation uses them.
pub fn parse_mask(input: &str) -> Result<u32, SubnetError> {
    let input = input.trim();
    if input.contains('.') {
        return parse_address(input);
    }
    let len: i64 = input
        .strip_prefix('/')
        .unwrap_or(input)
        .parse()
        .map_err(|_| SubnetError::InvalidAddress {
            input: input.to_string(),
        })?;
    match u8::try_from(len) {
        Ok(len) if (MIN_PREFIX_LENGTH..=MAX_PREFIX_LENGTH).contains(&len) => subnet_mask(len),
        _ => {
            log::debug!("rejected prefix length {len}");
            Err(SubnetError::InvalidPrefixLength { length: len })
        }
    }
}
