pub mod classify;
pub mod hostname;
pub mod hostport;
pub mod matches;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "addrcheck")]
#[command(about = "Validate IP addresses, CIDR lists and host:port input.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output (-q hides headers, -qq prints bare results)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report the family of one or more IP addresses
    #[command(alias = "c")]
    Classify {
        #[arg(required = true)]
        addresses: Vec<String>,
    },
    /// Check whether an address falls inside any CIDR entry
    #[command(alias = "m")]
    Match {
        address: String,
        cidrs: Vec<String>,
        /// Read more entries from a file, one per line
        #[arg(short, long = "file", value_name = "PATH")]
        files: Vec<PathBuf>,
    },
    /// Parse host[:port] or [ipv6]:port input
    #[command(alias = "hp")]
    Hostport {
        input: String,
        /// Also print the reassembled canonical form
        #[arg(long)]
        canonical: bool,
    },
    /// Check hostname syntax
    #[command(alias = "hn")]
    Hostname {
        name: String,
        /// Accept IPv4/IPv6 literals
        #[arg(long)]
        allow_ip: bool,
        /// Accept a bare label such as 'localhost'
        #[arg(long)]
        allow_single_label: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
