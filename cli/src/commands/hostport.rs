use addrcheck_common::config::Config;
use addrcheck_common::network::hostport::HostSpec;
use colored::*;
use tracing::warn;

use crate::terminal::{colors, print};

pub fn hostport(input: &str, canonical: bool, cfg: &Config) -> bool {
    let spec = match HostSpec::parse(input) {
        Ok(spec) => spec,
        Err(e) => {
            match cfg.quiet {
                2 => print::print("invalid"),
                _ => warn!("'{input}' rejected: {e}"),
            }
            return false;
        }
    };

    let reassembled = canonical.then(|| spec.reassemble());

    if cfg.quiet == 2 {
        let port = spec.port.map_or_else(|| "-".to_string(), |port| port.to_string());
        print::print(&format!("{} {} {}", spec.host, port, spec.bracketed));
        if let Some(Ok(text)) = &reassembled {
            print::print(text);
        }
        return true;
    }

    print::fit_keys(["Host", "Port", "Bracketed", "Canonical"]);
    print::aligned_line("Host", spec.host.as_str());
    match spec.port {
        Some(port) => print::aligned_line("Port", port.to_string().color(colors::ACCENT)),
        None => print::aligned_line("Port", "none".dimmed()),
    }
    print::aligned_line("Bracketed", if spec.bracketed { "yes" } else { "no" });

    match reassembled {
        Some(Ok(text)) => print::aligned_line("Canonical", text.color(colors::VALID)),
        Some(Err(e)) => warn!("No canonical form: {e}"),
        None => {}
    }

    true
}
