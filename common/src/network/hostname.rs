//! # Hostname Grammar
//!
//! Checks the textual shape of a host name. No resolution is performed.
//!
//! A full name is one or more labels followed by a top-level label and an
//! optional trailing dot, at most 253 characters overall:
//! * Labels are 1-63 ASCII letters, digits or interior hyphens.
//! * The top-level label is 2-63 letters, or punycode (`xn--` plus 1-59
//!   letters, digits or hyphens).
//!
//! Bare single labels and IP literals are only accepted when the caller
//! relaxes the rules through [`HostnameRules`].

use crate::network::ip;

pub const MAX_HOSTNAME_LEN: usize = 253;
pub const MAX_LABEL_LEN: usize = 63;

const PUNYCODE_PREFIX: &str = "xn--";
const MAX_PUNYCODE_TAIL_LEN: usize = 59;

/// Relaxations applied when a name is not a full multi-label hostname.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostnameRules {
    /// Accept IPv4/IPv6 literals such as `10.0.0.1` or `::1`.
    pub allow_ip_literal: bool,
    /// Accept a bare label such as `localhost`.
    pub allow_single_label: bool,
}

impl HostnameRules {
    pub const STRICT: Self = Self {
        allow_ip_literal: false,
        allow_single_label: false,
    };

    pub const PERMISSIVE: Self = Self {
        allow_ip_literal: true,
        allow_single_label: true,
    };
}

pub fn is_valid_hostname(text: &str, rules: HostnameRules) -> bool {
    if text.is_empty() {
        return false;
    }

    if is_full_hostname(text) {
        return true;
    }

    if rules.allow_single_label && is_valid_label(text) {
        return true;
    }

    rules.allow_ip_literal && ip::classify(text).is_some()
}

fn is_full_hostname(text: &str) -> bool {
    if text.len() > MAX_HOSTNAME_LEN {
        return false;
    }

    let name = text.strip_suffix('.').unwrap_or(text);
    let Some((labels, top_level)) = name.rsplit_once('.') else {
        return false;
    };

    labels.split('.').all(is_valid_label) && is_valid_top_level(top_level)
}

fn is_valid_label(label: &str) -> bool {
    (1..=MAX_LABEL_LEN).contains(&label.len())
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

fn is_valid_top_level(label: &str) -> bool {
    if (2..=MAX_LABEL_LEN).contains(&label.len())
        && label.bytes().all(|b| b.is_ascii_alphabetic())
    {
        return true;
    }

    // Punycode prefix is matched case-insensitively, like the rest of the name.
    let is_punycode = label.len() > PUNYCODE_PREFIX.len()
        && label.is_char_boundary(PUNYCODE_PREFIX.len())
        && label[..PUNYCODE_PREFIX.len()].eq_ignore_ascii_case(PUNYCODE_PREFIX);
    if !is_punycode {
        return false;
    }

    let tail = &label[PUNYCODE_PREFIX.len()..];
    (1..=MAX_PUNYCODE_TAIL_LEN).contains(&tail.len())
        && tail.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
