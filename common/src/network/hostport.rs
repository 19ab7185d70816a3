//! # Host and Port Parsing
//!
//! Splits `host[:port]` and `[host]:port` input into a normalized [`HostSpec`].
//!
//! Supported formats:
//! * **Host**: `example.com`, `localhost`, `10.0.0.1`.
//! * **Host and port**: `example.com:443`.
//! * **Bracketed**: `[2001:db8::1]`, `[2001:db8::1]:8080`.
//!
//! Port handling is lenient: `0`, values above 65535, and non-numeric text
//! after a bracketed host all leave the port empty instead of failing. Outside
//! brackets, a second `:` or a non-numeric port rejects the whole input.

use std::str::FromStr;

use tracing::trace;

use crate::error::{HostPortError, ReassembleError};
use crate::network::hostname::{self, HostnameRules};

/// Normalized result of parsing a `host[:port]` string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostSpec {
    /// Lowercase host without the trailing FQDN dot.
    pub host: String,
    /// Port in `1..=65535`, or `None`.
    pub port: Option<u16>,
    /// Whether the input used `[...]` around the host.
    pub bracketed: bool,
}

/// Port text captured before validation.
enum PortCandidate<'a> {
    Digits(&'a str),
    Malformed,
}

impl HostSpec {
    pub fn new(host: impl Into<String>, port: Option<u16>, bracketed: bool) -> Self {
        Self {
            host: host.into(),
            port,
            bracketed,
        }
    }

    pub fn parse(input: &str) -> Result<Self, HostPortError> {
        let result = parse_inner(input);
        if let Err(e) = &result {
            trace!(input, reason = %e, "Rejected host/port input");
        }
        result
    }

    /// Rebuilds the canonical text form.
    ///
    /// * `host` when there is no port and no brackets.
    /// * `host:port` when there is a port and no brackets.
    /// * `[host]:port` when bracketed.
    ///
    /// A bracketed host without a port has no canonical form.
    pub fn reassemble(&self) -> Result<String, ReassembleError> {
        if self.host.is_empty() {
            return Err(ReassembleError::EmptyHost);
        }

        match (self.bracketed, self.port) {
            (_, Some(0)) => Err(ReassembleError::ZeroPort),
            (false, None) => Ok(self.host.clone()),
            (false, Some(port)) => Ok(format!("{}:{}", self.host, port)),
            (true, Some(port)) => Ok(format!("[{}]:{}", self.host, port)),
            (true, None) => Err(ReassembleError::BracketedWithoutPort),
        }
    }
}

impl FromStr for HostSpec {
    type Err = HostPortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parses `input` into a [`HostSpec`]. Same as [`HostSpec::parse`].
pub fn parse_host_port(input: &str) -> Result<HostSpec, HostPortError> {
    HostSpec::parse(input)
}

fn parse_inner(input: &str) -> Result<HostSpec, HostPortError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(HostPortError::Empty);
    }

    let (host_str, port_candidate, bracketed) = match trimmed.strip_prefix('[') {
        Some(rest) => {
            let (host_str, port_candidate) = split_bracketed(rest)?;
            (host_str, port_candidate, true)
        }
        None => {
            let (host_str, port_candidate) = split_unbracketed(trimmed)?;
            (host_str, port_candidate, false)
        }
    };

    let host = normalize_host(host_str)?;
    let port = match port_candidate {
        Some(PortCandidate::Digits(digits)) => normalize_port(digits),
        Some(PortCandidate::Malformed) | None => None,
    };

    Ok(HostSpec {
        host,
        port,
        bracketed,
    })
}

/// Splits the text after `[` into the enclosed host and the port after `]:`.
fn split_bracketed(rest: &str) -> Result<(&str, Option<PortCandidate<'_>>), HostPortError> {
    let (host_str, baggage) = rest
        .split_once(']')
        .ok_or(HostPortError::UnclosedBracket)?;

    if host_str.is_empty() {
        return Err(HostPortError::EmptyBrackets);
    }

    if baggage.is_empty() {
        return Ok((host_str, None));
    }

    let port_str = baggage
        .strip_prefix(':')
        .ok_or_else(|| HostPortError::UnexpectedAfterBracket(baggage.to_string()))?;

    // A bare `:` after `]` is rejected; only non-empty non-numeric text degrades to no port.
    if port_str.is_empty() {
        return Err(HostPortError::MissingPort);
    }

    let candidate = if is_digits(port_str) {
        PortCandidate::Digits(port_str)
    } else {
        PortCandidate::Malformed
    };

    Ok((host_str, Some(candidate)))
}

fn split_unbracketed(text: &str) -> Result<(&str, Option<PortCandidate<'_>>), HostPortError> {
    let Some((host_str, port_str)) = text.split_once(':') else {
        return Ok((text, None));
    };

    if port_str.contains(':') {
        return Err(HostPortError::TooManyColons);
    }
    if port_str.is_empty() {
        return Err(HostPortError::MissingPort);
    }
    if !is_digits(port_str) {
        return Err(HostPortError::NonNumericPort(port_str.to_string()));
    }

    Ok((host_str, Some(PortCandidate::Digits(port_str))))
}

fn normalize_host(host_str: &str) -> Result<String, HostPortError> {
    let mut host = host_str.to_ascii_lowercase();
    if host.ends_with('.') {
        host.pop();
    }

    if !hostname::is_valid_hostname(&host, HostnameRules::PERMISSIVE) {
        return Err(HostPortError::InvalidHost(host_str.to_string()));
    }

    Ok(host)
}

/// Out of range and zero ports become `None`.
fn normalize_port(digits: &str) -> Option<u16> {
    digits.parse::<u16>().ok().filter(|port| *port != 0)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
