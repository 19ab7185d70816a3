//! # CIDR Ranges
//!
//! Parses `address/prefix` notation into a network/mask byte pair and tests
//! binary addresses for membership.
//!
//! Entry rules:
//! * No `/` means an exact host mask (`/32` or `/128`).
//! * The prefix is one or more decimal digits, at most the family bit length.
//! * Nothing is trimmed; an entry with surrounding spaces is invalid.
//!
//! List matching is permissive: malformed entries are skipped so that one bad
//! line in a list never hides a match further down.

use std::fmt;
use std::str::FromStr;

use ipnetwork::IpNetwork;
use tracing::{debug, trace};

use crate::error::CidrError;
use crate::network::ip::{Address, Family};

/// A parsed CIDR block, stored with its host bits already cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CidrRange {
    inner: IpNetwork,
}

impl CidrRange {
    /// Builds the range for `address/prefix`, zeroing the host bits of `address`.
    pub fn new(address: Address, prefix: u8) -> Result<Self, CidrError> {
        let too_long = |_| CidrError::PrefixTooLong {
            prefix: prefix.into(),
            max: address.family().bit_len(),
        };

        let network = IpNetwork::new(address.to_ip_addr(), prefix).map_err(too_long)?;
        let inner = IpNetwork::new(network.network(), prefix).map_err(too_long)?;

        Ok(Self { inner })
    }

    /// Parses a single CIDR entry such as `192.168.1.0/24`, `2001:db8::/32` or `10.0.0.1`.
    pub fn parse(text: &str) -> Result<Self, CidrError> {
        let (address_str, prefix_str) = match text.split_once('/') {
            Some((address_str, prefix_str)) => (address_str, Some(prefix_str)),
            None => (text, None),
        };

        let address = Address::parse(address_str)
            .ok_or_else(|| CidrError::InvalidAddress(address_str.to_string()))?;

        let prefix = match prefix_str {
            Some(prefix_str) => parse_prefix(prefix_str, address.family())?,
            None => address.family().bit_len(),
        };

        Self::new(address, prefix)
    }

    pub fn network(&self) -> Address {
        Address::from(self.inner.network())
    }

    pub fn mask(&self) -> Address {
        Address::from(self.inner.mask())
    }

    pub fn prefix(&self) -> u8 {
        self.inner.prefix()
    }

    pub fn family(&self) -> Family {
        self.network().family()
    }

    /// True when `address` is of the same family and falls inside the range.
    pub fn contains(&self, address: &Address) -> bool {
        address.family() == self.family() && self.inner.contains(address.to_ip_addr())
    }
}

impl FromStr for CidrRange {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CidrRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

/// Outcome of scanning a CIDR list for one address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListScan {
    /// Index of the first entry containing the address.
    pub matched: Option<usize>,
    /// Malformed entries passed over before the scan stopped.
    pub skipped: usize,
}

/// Membership test over binary forms. Different families never match.
pub fn ip_in_cidr_binary(address: &Address, range: &CidrRange) -> bool {
    range.contains(address)
}

/// Scans `cidrs` in order and stops at the first entry that contains `ip`.
///
/// `ip` that does not parse ends the scan before the list is read.
/// Entries that do not parse are skipped and counted.
pub fn scan_list<I>(ip: &str, cidrs: I) -> ListScan
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut scan = ListScan::default();

    let Some(address) = Address::parse(ip) else {
        trace!(input = ip, "Address does not parse, nothing can match");
        return scan;
    };

    for (idx, entry) in cidrs.into_iter().enumerate() {
        let entry = entry.as_ref();
        match CidrRange::parse(entry) {
            Ok(range) if range.contains(&address) => {
                scan.matched = Some(idx);
                break;
            }
            Ok(_) => {}
            Err(e) => {
                debug!(entry, reason = %e, "Skipping malformed CIDR entry");
                scan.skipped += 1;
            }
        }
    }

    scan
}

/// Returns the index of the first entry in `cidrs` that contains `ip`.
pub fn first_match<I>(ip: &str, cidrs: I) -> Option<usize>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    scan_list(ip, cidrs).matched
}

/// True when `ip` falls inside any entry of `cidrs`, scanning in order.
pub fn ip_in_cidr_list<I>(ip: &str, cidrs: I) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    first_match(ip, cidrs).is_some()
}

fn parse_prefix(prefix_str: &str, family: Family) -> Result<u8, CidrError> {
    if prefix_str.is_empty() || !prefix_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CidrError::InvalidPrefix(prefix_str.to_string()));
    }

    let max = family.bit_len();
    // All digits, so the only failure left is overflow, which is past any bit length.
    let prefix: u32 = prefix_str.parse().unwrap_or(u32::MAX);

    if prefix > u32::from(max) {
        return Err(CidrError::PrefixTooLong { prefix, max });
    }

    Ok(prefix as u8)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
