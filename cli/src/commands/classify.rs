use addrcheck_common::config::Config;
use addrcheck_common::network::ip::{self, Family};
use colored::*;

use crate::terminal::{colors, print};

/// Prints the family of each address. Returns `true` when all of them are valid.
pub fn classify(addresses: &[String], cfg: &Config) -> bool {
    print::fit_keys(addresses.iter().map(String::as_str));

    let mut all_valid = true;
    for address in addresses {
        let family = ip::classify(address);
        all_valid &= family.is_some();

        match cfg.quiet {
            2 => print::print(&bare(family)),
            _ => print::aligned_line(address, family_label(family)),
        }
    }

    all_valid
}

fn bare(family: Option<Family>) -> String {
    family.map_or_else(|| "invalid".to_string(), |family| family.to_string())
}

fn family_label(family: Option<Family>) -> ColoredString {
    match family {
        Some(Family::V4) => "IPv4".color(colors::IPV4_ADDR).bold(),
        Some(Family::V6) => "IPv6".color(colors::IPV6_ADDR).bold(),
        None => print::verdict(false),
    }
}
