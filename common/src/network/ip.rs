//! # IP Classification
//!
//! Parses textual IPv4/IPv6 addresses into their big-endian byte form and
//! reports the address family.
//!
//! Parsing is strict: no trimming, no zone identifiers (`fe80::1%eth0`),
//! no shortened or octal IPv4 forms. IPv4-mapped IPv6 text
//! (`::ffff:192.0.2.1`) stays a 16 byte IPv6 address.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Address family of a parsed address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Number of bytes in the binary form.
    pub fn byte_len(self) -> usize {
        match self {
            Family::V4 => 4,
            Family::V6 => 16,
        }
    }

    /// Number of bits in the binary form, the largest valid CIDR prefix.
    pub fn bit_len(self) -> u8 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }

    /// `4` or `6`.
    pub fn number(self) -> u8 {
        match self {
            Family::V4 => 4,
            Family::V6 => 6,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::V4 => f.write_str("IPv4"),
            Family::V6 => f.write_str("IPv6"),
        }
    }
}

/// A validated address as a fixed length byte sequence.
///
/// The byte length is always 4 or 16; there is no way to build any other size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Address {
    V4([u8; 4]),
    V6([u8; 16]),
}

impl Address {
    /// Parses dotted-quad or colon-hex text. Returns `None` for anything else.
    pub fn parse(text: &str) -> Option<Self> {
        text.parse::<IpAddr>().ok().map(Self::from)
    }

    /// Wraps an already binary address. Only 4 and 16 byte slices are accepted.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if let Ok(octets) = <[u8; 4]>::try_from(bytes) {
            return Some(Address::V4(octets));
        }
        <[u8; 16]>::try_from(bytes).ok().map(Address::V6)
    }

    pub fn bytes(&self) -> &[u8] {
        match self {
            Address::V4(octets) => octets.as_slice(),
            Address::V6(octets) => octets.as_slice(),
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Address::V4(_) => Family::V4,
            Address::V6(_) => Family::V6,
        }
    }

    pub fn to_ip_addr(&self) -> IpAddr {
        match *self {
            Address::V4(octets) => IpAddr::V4(Ipv4Addr::from(octets)),
            Address::V6(octets) => IpAddr::V6(Ipv6Addr::from(octets)),
        }
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(ipv4_addr) => Address::V4(ipv4_addr.octets()),
            IpAddr::V6(ipv6_addr) => Address::V6(ipv6_addr.octets()),
        }
    }
}

impl FromStr for Address {
    type Err = std::net::AddrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<IpAddr>().map(Self::from)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_ip_addr(), f)
    }
}

/// Reports the family of `text`, or `None` when it is not an IP address.
pub fn classify(text: &str) -> Option<Family> {
    Address::parse(text).map(|address| address.family())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
