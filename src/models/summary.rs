//! Full calculation report for one address and mask.

use super::ipv4::format_addr;
use crate::error::SubnetError;
use crate::subnet;
use serde::Serialize;

/// Every figure the subnet calculations produce for a single address and mask.
///
/// Addresses are kept as dotted-decimal strings so the report serializes
/// straight to readable JSON.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetSummary {
    pub address: String,
    pub mask: String,
    pub prefix_length: u8,
    pub network: String,
    pub broadcast: String,
    /// Hosts excluding network and broadcast; -1 for a /32.
    pub usable_addresses: i64,
    pub subnet_count: u64,
}

impl SubnetSummary {
    /// Run every calculation for `ip` under `mask`.
    ///
    /// Fails before computing anything if `mask` is not a valid subnet mask.
    pub fn calculate(ip: u32, mask: u32) -> Result<SubnetSummary, SubnetError> {
        let prefix_length = subnet::prefix_length(mask)?;
        let summary = SubnetSummary {
            address: format_addr(ip),
            mask: format_addr(mask),
            prefix_length,
            network: format_addr(subnet::network(ip, mask)?),
            broadcast: format_addr(subnet::broadcast(ip, mask)?),
            usable_addresses: subnet::usable_address_count(mask)?,
            subnet_count: subnet::subnet_count(mask)?,
        };
        log::debug!("calculated {summary:?}");
        Ok(summary)
    }

    /// The `a.b.c.d/n` form of the network.
    pub fn cidr(&self) -> String {
        format!("{}/{}", self.network, self.prefix_length)
    }
}
