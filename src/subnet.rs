//! Subnet arithmetic over raw `u32` addresses and masks.
//!
//! Addresses and masks are plain integers with the first octet in the most
//! significant byte, the same layout as `u32::from(Ipv4Addr)`. A mask is only
//! accepted when its 1-bits form one contiguous run starting at bit 31.

use crate::error::SubnetError;
use crate::models::format_addr;

/// Shortest routing prefix accepted.
pub const MIN_PREFIX_LENGTH: u8 = 1;
/// Longest routing prefix accepted (32 bits).
pub const MAX_PREFIX_LENGTH: u8 = 32;

/// Convert a subnet mask into its routing prefix length.
///
/// # Examples
/// ```
/// use ipv4_subnet_utils::subnet::prefix_length;
/// assert_eq!(prefix_length(0xFFFFFF00).unwrap(), 24);
/// assert!(prefix_length(0x00FF0000).is_err());
/// ```
pub fn prefix_length(mask: u32) -> Result<u8, SubnetError> {
    validate_mask(mask)
}

/// Returns the prefix length if `mask` is left-aligned and not empty.
fn validate_mask(mask: u32) -> Result<u8, SubnetError> {
    let len = mask.count_ones() as u8;
    if len < MIN_PREFIX_LENGTH || subnet_mask(len)? != mask {
        log::debug!("rejected subnet mask {mask:#010x} ({len} bits set)");
        return Err(SubnetError::InvalidSubnetMask {
            mask: format_addr(mask),
        });
    }
    Ok(len)
}

/// Convert a routing prefix length into a subnet mask.
///
/// # Examples
/// ```
/// use ipv4_subnet_utils::subnet::subnet_mask;
/// assert_eq!(subnet_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(subnet_mask(32).unwrap(), 0xFFFFFFFF);
/// assert!(subnet_mask(0).is_err());
/// ```
pub fn subnet_mask(prefix_length: u8) -> Result<u32, SubnetError> {
    if !(MIN_PREFIX_LENGTH..=MAX_PREFIX_LENGTH).contains(&prefix_length) {
        log::debug!("rejected prefix length {prefix_length}");
        return Err(SubnetError::InvalidPrefixLength {
            length: prefix_length.into(),
        });
    }
    // right_len is at most 31 here, so the shift cannot overflow
    let right_len = MAX_PREFIX_LENGTH - prefix_length;
    Ok(u32::MAX << right_len)
}

/// Number of host addresses in the subnet, network and broadcast excluded.
///
/// Computed literally as `2^(32 - len) - 2`, so a /31 gives 0 and a /32 gives -1.
pub fn usable_address_count(mask: u32) -> Result<i64, SubnetError> {
    let len = validate_mask(mask)?;
    let count = usable_for(len);
    log::trace!("usable_address_count(/{len}) = {count}");
    Ok(count)
}

/// Subnets obtainable by borrowing bits within one octet: `2^(len % 8)`.
pub fn subnet_count(mask: u32) -> Result<u64, SubnetError> {
    let len = validate_mask(mask)?;
    let count = subnets_for(len);
    log::trace!("subnet_count(/{len}) = {count}");
    Ok(count)
}

/// Network address (routing prefix) of `ip` under `mask`.
pub fn network(ip: u32, mask: u32) -> Result<u32, SubnetError> {
    validate_mask(mask)?;
    Ok(ip & mask)
}

/// Broadcast address, the highest address of the subnet holding `ip`.
pub fn broadcast(ip: u32, mask: u32) -> Result<u32, SubnetError> {
    validate_mask(mask)?;
    Ok(broadcast_bits(ip, mask))
}

/// Check whether `ip` lies between `network` and its broadcast address.
///
/// Both ends are inclusive and the comparison is unsigned.
pub fn is_in_range(ip: u32, network: u32, mask: u32) -> Result<bool, SubnetError> {
    validate_mask(mask)?;
    Ok(in_range(ip, network, mask))
}

// The helpers below assume `mask` and `len` were already validated.

pub(crate) fn broadcast_bits(ip: u32, mask: u32) -> u32 {
    ip | !mask
}

pub(crate) fn in_range(ip: u32, network: u32, mask: u32) -> bool {
    ip >= network && ip <= broadcast_bits(network, mask)
}

pub(crate) fn usable_for(len: u8) -> i64 {
    (1i64 << (MAX_PREFIX_LENGTH - len)) - 2
}

pub(crate) fn subnets_for(len: u8) -> u64 {
    1u64 << (len % 8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn ip(a: u8, b: u8, c: u8, d: u8) -> u32 {
        u32::from(Ipv4Addr::new(a, b, c, d))
    }

    #[test]
    fn test_subnet_mask() {
        assert_eq!(subnet_mask(1).unwrap(), 0x80000000);
        assert_eq!(subnet_mask(8).unwrap(), 0xFF000000);
        assert_eq!(subnet_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(subnet_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(subnet_mask(31).unwrap(), 0xFFFFFFFE);
        assert_eq!(subnet_mask(32).unwrap(), 0xFFFFFFFF);
    }

    #[test]
    fn test_subnet_mask_out_of_range() {
        assert_eq!(
            subnet_mask(0).unwrap_err(),
            SubnetError::InvalidPrefixLength { length: 0 }
        );
        assert_eq!(
            subnet_mask(33).unwrap_err(),
            SubnetError::InvalidPrefixLength { length: 33 }
        );
        assert!(subnet_mask(u8::MAX).is_err());
    }

    #[test]
    fn test_prefix_length_round_trip() {
        for len in MIN_PREFIX_LENGTH..=MAX_PREFIX_LENGTH {
            assert_eq!(prefix_length(subnet_mask(len).unwrap()).unwrap(), len);
        }
    }

    #[test]
    fn test_prefix_length_rejects_bad_masks() {
        assert_eq!(
            prefix_length(0x00FF0000).unwrap_err(),
            SubnetError::InvalidSubnetMask {
                mask: "0.255.0.0".to_string()
            }
        );
        assert_eq!(
            prefix_length(0).unwrap_err().to_string(),
            "Invalid subnet mask: '0.0.0.0'"
        );
        // right number of bits, wrong place
        assert!(prefix_length(0x7FFFFFFF).is_err());
        assert!(prefix_length(0xFFFF00FF).is_err());
        assert!(prefix_length(0x00000001).is_err());
        assert!(prefix_length(0xFFFFFF01).is_err());
    }

    #[test]
    fn test_usable_address_count() {
        assert_eq!(usable_address_count(subnet_mask(1).unwrap()).unwrap(), 2147483646);
        assert_eq!(usable_address_count(subnet_mask(8).unwrap()).unwrap(), 16777214);
        assert_eq!(usable_address_count(0xFFFFFF00).unwrap(), 254);
        assert_eq!(usable_address_count(subnet_mask(30).unwrap()).unwrap(), 2);
        assert_eq!(usable_address_count(subnet_mask(31).unwrap()).unwrap(), 0);
        assert_eq!(usable_address_count(0xFFFFFFFF).unwrap(), -1);
        assert!(usable_address_count(0x0000FFFF).is_err());
    }

    #[test]
    fn test_subnet_count() {
        assert_eq!(subnet_count(subnet_mask(26).unwrap()).unwrap(), 4);
        assert_eq!(subnet_count(subnet_mask(24).unwrap()).unwrap(), 1);
        assert_eq!(subnet_count(subnet_mask(23).unwrap()).unwrap(), 128);
        assert_eq!(subnet_count(subnet_mask(1).unwrap()).unwrap(), 2);
        assert_eq!(subnet_count(subnet_mask(32).unwrap()).unwrap(), 1);
        assert!(subnet_count(0).is_err());
    }

    #[test]
    fn test_network_and_broadcast() {
        let addr = ip(192, 168, 1, 130);
        assert_eq!(addr, 0xC0A80182);
        assert_eq!(network(addr, 0xFFFFFF00).unwrap(), 0xC0A80100);
        assert_eq!(broadcast(addr, 0xFFFFFF00).unwrap(), 0xC0A801FF);

        assert_eq!(network(addr, subnet_mask(32).unwrap()).unwrap(), addr);
        assert_eq!(broadcast(addr, subnet_mask(32).unwrap()).unwrap(), addr);
        assert_eq!(network(addr, subnet_mask(1).unwrap()).unwrap(), 0x80000000);
        assert_eq!(broadcast(addr, subnet_mask(1).unwrap()).unwrap(), u32::MAX);
        assert_eq!(
            broadcast(ip(10, 2, 3, 4), subnet_mask(8).unwrap()).unwrap(),
            ip(10, 255, 255, 255)
        );
    }

    #[test]
    fn test_network_rejects_bad_mask() {
        assert!(network(ip(10, 0, 0, 1), 0xFF00FF00).is_err());
        assert!(broadcast(ip(10, 0, 0, 1), 0).is_err());
    }

    #[test]
    fn test_is_in_range() {
        let net = ip(192, 168, 1, 0);
        let mask = subnet_mask(24).unwrap();
        assert!(is_in_range(ip(192, 168, 1, 0), net, mask).unwrap());
        assert!(is_in_range(ip(192, 168, 1, 77), net, mask).unwrap());
        assert!(is_in_range(ip(192, 168, 1, 255), net, mask).unwrap());
        assert!(!is_in_range(ip(192, 168, 2, 1), net, mask).unwrap());
        assert!(!is_in_range(ip(192, 168, 0, 255), net, mask).unwrap());
        assert!(is_in_range(ip(1, 1, 1, 1), net, 0x00FFFFFF).is_err());
    }

    #[test]
    fn test_is_in_range_unsigned_high_half() {
        // addresses with the top bit set must order above 127.x
        let net = ip(128, 0, 0, 0);
        let mask = subnet_mask(1).unwrap();
        assert!(is_in_range(ip(255, 255, 255, 255), net, mask).unwrap());
        assert!(is_in_range(ip(200, 1, 2, 3), net, mask).unwrap());
        assert!(!is_in_range(ip(127, 255, 255, 255), net, mask).unwrap());
    }

    #[test]
    fn test_is_in_range_unaligned_network() {
        // network is taken as given, not re-masked
        let mask = subnet_mask(24).unwrap();
        let start = ip(10, 0, 0, 100);
        assert!(!is_in_range(ip(10, 0, 0, 50), start, mask).unwrap());
        assert!(is_in_range(ip(10, 0, 0, 200), start, mask).unwrap());
    }

    #[test]
    fn test_idempotent() {
        let mask = subnet_mask(20).unwrap();
        let first = broadcast(ip(172, 16, 33, 9), mask).unwrap();
        for _ in 0..3 {
            assert_eq!(broadcast(ip(172, 16, 33, 9), mask).unwrap(), first);
        }
    }
}
