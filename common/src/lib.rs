//! # addrcheck common
//!
//! Validation and normalization of network addressing input.
//!
//! * **[`network::ip`]**: IP address classification over a fixed 4/16 byte form.
//! * **[`network::range`]**: CIDR parsing and membership tests.
//! * **[`network::hostname`]**: hostname grammar check.
//! * **[`network::hostport`]**: `host[:port]` and `[ipv6]:port` parsing.
//!
//! Every function here is pure: invalid text is reported through `Option`,
//! `bool` or a typed error, never through a panic.

pub mod config;
pub mod error;
pub mod network;
