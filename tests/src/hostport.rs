#![cfg(test)]
use addrcheck_common::error::HostPortError;
use addrcheck_common::network::hostport::{HostSpec, parse_host_port};

fn parsed(input: &str) -> (String, Option<u16>, bool) {
    let spec = parse_host_port(input).unwrap_or_else(|e| panic!("'{input}' rejected: {e}"));
    (spec.host, spec.port, spec.bracketed)
}

#[test]
fn documented_examples() {
    assert_eq!(parsed("example.com:443"), ("example.com".into(), Some(443), false));
    assert_eq!(parsed("[2001:db8::1]:8080"), ("2001:db8::1".into(), Some(8080), true));
    assert_eq!(parsed("EXAMPLE.com:080"), ("example.com".into(), Some(80), false));
    assert_eq!(parsed("example.com:0"), ("example.com".into(), None, false));
    assert_eq!(parsed("[2001:db8::1]:abc"), ("2001:db8::1".into(), None, true));
    assert_eq!(parse_host_port("foo:bar:443"), Err(HostPortError::TooManyColons));
}

#[test]
fn reassembly_is_idempotent() {
    let inputs = [
        "example.com:443",
        "WWW.Example.ORG.:8080",
        "localhost:1",
        "10.0.0.1:65535",
        "sub.xn--p1ai:22",
        "  api.example.net:00443  ",
    ];

    for input in inputs {
        let first: HostSpec = input.parse().unwrap();
        let canonical = first.reassemble().unwrap();
        assert_eq!(canonical, format!("{}:{}", first.host, first.port.unwrap()));

        let second: HostSpec = canonical.parse().unwrap();
        assert_eq!(second, first, "'{input}' -> '{canonical}'");
        assert_eq!(second.reassemble().unwrap(), canonical);
    }
}

#[test]
fn bracketed_reassembly() {
    let spec = parse_host_port("[FE80::1]:443").unwrap();
    assert_eq!(spec.reassemble().unwrap(), "[fe80::1]:443");

    let no_port = parse_host_port("[fe80::1]").unwrap();
    assert!(no_port.reassemble().is_err());
}

#[test]
fn host_length_boundaries_carry_through() {
    let label_63 = "a".repeat(63);
    assert!(parse_host_port(&format!("{label_63}.com:80")).is_ok());
    assert!(parse_host_port(&format!("a{label_63}.com:80")).is_err());

    let name_253 = format!("{0}.{0}.{0}.{1}.co", label_63, "b".repeat(58));
    assert_eq!(name_253.len(), 253);
    assert_eq!(parsed(&format!("{name_253}:443")), (name_253.clone(), Some(443), false));
    assert!(parse_host_port(&format!("{name_253}m:443")).is_err());
}

#[test]
fn out_of_range_ports_are_absent_not_errors() {
    for port in ["0", "65536", "70000", "000", "123456789012345678901234567890"] {
        assert_eq!(parsed(&format!("example.com:{port}")).1, None, "port '{port}'");
        assert_eq!(parsed(&format!("[::1]:{port}")).1, None, "port '{port}'");
    }
    for (port, expected) in [("1", 1), ("0080", 80), ("65535", 65535)] {
        assert_eq!(parsed(&format!("example.com:{port}")).1, Some(expected));
    }
}
