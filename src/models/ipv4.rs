//! Conversions between raw `u32` addresses and [`Ipv4Addr`].

use std::net::Ipv4Addr;

/// Render a raw address or mask in dotted-decimal form.
///
/// # Examples
/// ```
/// use ipv4_subnet_utils::models::format_addr;
/// assert_eq!(format_addr(0xFFFFFF00), "255.255.255.0");
/// ```
pub fn format_addr(bits: u32) -> String {
    to_addr(bits).to_string()
}

/// Raw `u32` as an [`Ipv4Addr`], first octet in the most significant byte.
pub fn to_addr(bits: u32) -> Ipv4Addr {
    Ipv4Addr::from(bits)
}

/// [`Ipv4Addr`] as a raw `u32`, the inverse of [`to_addr`].
pub fn to_bits(addr: Ipv4Addr) -> u32 {
    u32::from(addr)
}
