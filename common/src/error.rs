//! Error types for the parsers in [`crate::network`].
//!
//! Malformed input is an expected outcome, so each variant names the rule
//! that was broken rather than wrapping a lower level error.

use thiserror::Error;

/// Returned when a CIDR entry cannot be turned into a
/// [`CidrRange`](crate::network::range::CidrRange).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CidrError {
    #[error("invalid address in CIDR entry: '{0}'")]
    InvalidAddress(String),
    #[error("invalid prefix in CIDR entry: '{0}'")]
    InvalidPrefix(String),
    #[error("prefix /{prefix} exceeds the {max}-bit address length")]
    PrefixTooLong { prefix: u32, max: u8 },
}

/// Returned when a `host[:port]` string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostPortError {
    #[error("input is empty")]
    Empty,
    #[error("missing closing ']'")]
    UnclosedBracket,
    #[error("nothing between '[' and ']'")]
    EmptyBrackets,
    #[error("unexpected text after ']': '{0}'")]
    UnexpectedAfterBracket(String),
    #[error("':' is not followed by a port")]
    MissingPort,
    #[error("more than one ':' outside of brackets")]
    TooManyColons,
    #[error("port is not a decimal number: '{0}'")]
    NonNumericPort(String),
    #[error("invalid hostname: '{0}'")]
    InvalidHost(String),
}

/// Returned when a [`HostSpec`](crate::network::hostport::HostSpec) has no canonical text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReassembleError {
    #[error("a bracketed host needs a port")]
    BracketedWithoutPort,
    #[error("host is empty")]
    EmptyHost,
    #[error("port 0 cannot be written out")]
    ZeroPort,
}
