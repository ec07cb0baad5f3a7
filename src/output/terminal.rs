//! Terminal output utilities.

use crate::models::SubnetSummary;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    if quoted.len() >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Human readable, coloured report of a [`SubnetSummary`].
pub fn format_report(summary: &SubnetSummary) -> String {
    let usable = if summary.usable_addresses > 0 {
        summary.usable_addresses.to_string().green()
    } else {
        summary.usable_addresses.to_string().yellow()
    };
    let rows = [
        ("Address", summary.address.normal()),
        ("Netmask", format!("{} = {}", summary.mask, summary.prefix_length).normal()),
        ("Network", summary.cidr().cyan()),
        ("Broadcast", summary.broadcast.cyan()),
        ("Usable", usable),
        ("Subnets", summary.subnet_count.to_string().normal()),
    ];
    rows.iter()
        .map(|(label, value)| format!("{:<10} {value}", format!("{label}:").bold()))
        .collect::<Vec<_>>()
        .join("\n")
}
