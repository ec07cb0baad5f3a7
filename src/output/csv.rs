//! CSV output formatting for subnet summaries.

use super::terminal::format_field;
use crate::models::SubnetSummary;

/// Column header matching [`csv_row`].
pub fn csv_header() -> String {
    [
        format_field("address", 17),
        format_field("mask", 17),
        format_field("prefix", 8),
        format_field("network", 17),
        format_field("broadcast", 17),
        format_field("usable", 12),
        format_field("subnets", 9),
    ]
    .join(",")
}

/// One quoted CSV row for a summary.
pub fn csv_row(summary: &SubnetSummary) -> String {
    format!(
        "{address},{mask},{prefix},{network},{broadcast},{usable},{subnets}",
        address = format_field(&summary.address, 17),
        mask = format_field(&summary.mask, 17),
        prefix = format_field(summary.prefix_length, 8),
        network = format_field(&summary.network, 17),
        broadcast = format_field(&summary.broadcast, 17),
        usable = format_field(summary.usable_addresses, 12),
        subnets = format_field(summary.subnet_count, 9),
    )
}
