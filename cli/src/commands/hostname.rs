use addrcheck_common::config::Config;
use addrcheck_common::network::hostname::{self, HostnameRules};

use crate::terminal::print;

pub fn hostname(name: &str, allow_ip: bool, allow_single_label: bool, cfg: &Config) -> bool {
    let rules = HostnameRules {
        allow_ip_literal: allow_ip,
        allow_single_label,
    };
    let valid = hostname::is_valid_hostname(name, rules);

    match cfg.quiet {
        2 => print::print(if valid { "valid" } else { "invalid" }),
        _ => {
            print::fit_keys([name]);
            print::aligned_line(name, print::verdict(valid));
        }
    }

    valid
}
