use std::fs;
use std::path::{Path, PathBuf};

use addrcheck_common::config::Config;
use addrcheck_common::network::ip::Address;
use addrcheck_common::network::range::{self, ListScan};
use anyhow::Context;
use colored::*;
use tracing::{debug, warn};

use crate::terminal::{colors, print};

/// Runs `address` against the positional entries followed by the entries of each file.
pub fn matches(
    address: &str,
    mut cidrs: Vec<String>,
    files: &[PathBuf],
    cfg: &Config,
) -> anyhow::Result<bool> {
    for path in files {
        let entries = read_cidr_file(path)?;
        debug!(path = %path.display(), count = entries.len(), "Loaded CIDR entries");
        cidrs.extend(entries);
    }

    if Address::parse(address).is_none() {
        match cfg.quiet {
            2 => print::print("invalid"),
            _ => warn!("'{address}' is not a valid IP address"),
        }
        return Ok(false);
    }

    let scan: ListScan = range::scan_list(address, &cidrs);

    if cfg.quiet == 2 {
        print::print(scan.matched.map_or("no match", |_| "match"));
        return Ok(scan.matched.is_some());
    }

    print::fit_keys(["Address", "Entries", "Skipped", "Result"]);
    print::aligned_line("Address", address);
    print::aligned_line("Entries", cidrs.len().to_string());
    if scan.skipped > 0 {
        print::aligned_line("Skipped", scan.skipped.to_string().color(colors::ACCENT));
    }

    match scan.matched {
        Some(idx) => {
            let entry = format!("{} (entry #{})", cidrs[idx], idx + 1);
            print::aligned_line("Result", entry.color(colors::VALID).bold());
        }
        None => print::aligned_line("Result", "no match".color(colors::INVALID).bold()),
    }

    Ok(scan.matched.is_some())
}

/// Reads a CIDR list file. See [`cidr_lines`] for the line rules.
pub fn read_cidr_file(path: &Path) -> anyhow::Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read CIDR list '{}'", path.display()))?;

    Ok(cidr_lines(&content))
}

/// One entry per line; blank lines and `#` comments are dropped. Entries are not trimmed.
fn cidr_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
