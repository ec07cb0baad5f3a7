//! IPv4 subnet calculations on raw `u32` addresses and masks.
//!
//! The arithmetic lives in [`subnet`]; [`models`] wraps it in value types and
//! [`output`] renders the results for the command line tool.

pub mod cli;
mod error;
pub mod models;
pub mod output;
pub mod subnet;

pub use error::SubnetError;
pub use models::{format_addr, Subnet, SubnetSummary};
pub use subnet::{
    broadcast, is_in_range, network, prefix_length, subnet_count, subnet_mask,
    usable_address_count, MAX_PREFIX_LENGTH, MIN_PREFIX_LENGTH,
};

use cli::Args;
use std::error::Error;

/// Produce the text the binary prints for the given arguments.
pub fn run(args: &Args) -> Result<String, Box<dyn Error>> {
    log::info!(
        "#Start run() address={} mask={}",
        format_addr(args.address),
        format_addr(args.mask)
    );
    let summary = SubnetSummary::calculate(args.address, args.mask)?;

    let mut out = if args.json {
        output::summary_json(&summary)?
    } else if args.csv {
        format!("{}\n{}", output::csv_header(), output::csv_row(&summary))
    } else {
        output::format_report(&summary)
    };

    if let Some(ip) = args.contains {
        let net = network(args.address, args.mask)?;
        let inside = is_in_range(ip, net, args.mask)?;
        log::debug!("{} in {}: {inside}", format_addr(ip), summary.cidr());
        out.push_str(&format!(
            "\n{} {} {}",
            format_addr(ip),
            if inside { "is in" } else { "is not in" },
            summary.cidr()
        ));
    }
    Ok(out)
}
