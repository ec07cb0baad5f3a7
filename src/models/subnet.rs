//! Validated subnet value type.

use super::ipv4::{format_addr, to_addr, to_bits};
use crate::error::SubnetError;
use crate::subnet;
use serde::Serialize;
use std::net::Ipv4Addr;

/// A network address together with a mask already known to be valid.
///
/// The address is always normalised to the network address, so two values
/// built from different hosts of the same subnet compare equal.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Subnet {
    network: u32,
    mask: u32,
    prefix_length: u8,
}

impl Subnet {
    /// Build the subnet holding `ip` under `mask`.
    pub fn new(ip: u32, mask: u32) -> Result<Subnet, SubnetError> {
        let prefix_length = subnet::prefix_length(mask)?;
        Ok(Subnet {
            network: subnet::network(ip, mask)?,
            mask,
            prefix_length,
        })
    }

    /// Build the subnet holding `ip` with a `/prefix_length` mask.
    pub fn from_prefix(ip: u32, prefix_length: u8) -> Result<Subnet, SubnetError> {
        Subnet::new(ip, subnet::subnet_mask(prefix_length)?)
    }

    pub fn from_addr(addr: Ipv4Addr, mask: Ipv4Addr) -> Result<Subnet, SubnetError> {
        Subnet::new(to_bits(addr), to_bits(mask))
    }

    pub fn network(&self) -> u32 {
        self.network
    }

    pub fn mask(&self) -> u32 {
        self.mask
    }

    pub fn prefix_length(&self) -> u8 {
        self.prefix_length
    }

    /// Highest address in the subnet.
    pub fn broadcast(&self) -> u32 {
        subnet::broadcast_bits(self.network, self.mask)
    }

    /// Lowest (network) address as an [`Ipv4Addr`].
    pub fn lo(&self) -> Ipv4Addr {
        to_addr(self.network)
    }

    /// Highest (broadcast) address as an [`Ipv4Addr`].
    pub fn hi(&self) -> Ipv4Addr {
        to_addr(self.broadcast())
    }

    /// Membership test, inclusive of the network and broadcast addresses.
    pub fn contains(&self, ip: u32) -> bool {
        subnet::in_range(ip, self.network, self.mask)
    }

    pub fn usable_address_count(&self) -> i64 {
        subnet::usable_for(self.prefix_length)
    }

    pub fn subnet_count(&self) -> u64 {
        subnet::subnets_for(self.prefix_length)
    }
}

impl Serialize for Subnet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl std::fmt::Display for Subnet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", format_addr(self.network), self.prefix_length)
    }
}
