mod commands;
mod terminal;

use std::process::ExitCode;

use addrcheck_common::config::Config;
use commands::{CommandLine, Commands, classify, hostname, hostport, matches};
use terminal::{logging, print};

fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = Config {
        quiet: commands.quiet,
        no_color: commands.no_color,
    };
    print::initialize(&cfg);

    let passed = match commands.command {
        Commands::Classify { addresses } => {
            print::header("address classification", cfg.quiet);
            classify::classify(&addresses, &cfg)
        }
        Commands::Match { address, cidrs, files } => {
            print::header("cidr membership", cfg.quiet);
            matches::matches(&address, cidrs, &files, &cfg)?
        }
        Commands::Hostport { input, canonical } => {
            print::header("host and port", cfg.quiet);
            hostport::hostport(&input, canonical, &cfg)
        }
        Commands::Hostname {
            name,
            allow_ip,
            allow_single_label,
        } => {
            print::header("hostname syntax", cfg.quiet);
            hostname::hostname(&name, allow_ip, allow_single_label, &cfg)
        }
    };

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
