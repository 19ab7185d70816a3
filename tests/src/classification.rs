#![cfg(test)]
use addrcheck_common::network::hostname::{self, HostnameRules};
use addrcheck_common::network::ip::{self, Family};

/// Every dotted quad with octets in range is IPv4.
#[test]
fn dotted_quads_in_range_are_ipv4() {
    for a in [0u16, 1, 9, 10, 99, 100, 127, 199, 200, 254, 255] {
        for b in [0u16, 37, 255] {
            let text = format!("{a}.{b}.{a}.{b}");
            assert_eq!(ip::classify(&text), Some(Family::V4), "'{text}'");
        }
    }
}

#[test]
fn octet_past_255_or_fifth_octet_is_invalid() {
    let base = [192u16, 168, 10, 20];
    for idx in 0..4 {
        for bad in [256u16, 300, 999] {
            let mut octets = base;
            octets[idx] = bad;
            let text = octets.map(|o| o.to_string()).join(".");
            assert_eq!(ip::classify(&text), None, "'{text}'");
        }
    }

    assert_eq!(ip::classify("192.168.10.20.1"), None);
}

#[test]
fn surrounding_whitespace_is_never_trimmed() {
    for valid in ["10.0.0.1", "::1", "2001:db8::1", "::ffff:10.0.0.1"] {
        assert!(ip::classify(valid).is_some());
        for padded in [
            format!(" {valid}"),
            format!("{valid} "),
            format!("\t{valid}"),
            format!("{valid}\n"),
            format!(" {valid} "),
        ] {
            assert_eq!(ip::classify(&padded), None, "'{padded:?}'");
        }
    }
}

#[test]
fn ip_literal_relaxation_matches_classifier() {
    let rules = HostnameRules {
        allow_ip_literal: true,
        allow_single_label: false,
    };
    for text in ["10.0.0.1", "::1", "300.1.1.1", "fe80::1%lo", " 10.0.0.1", "1:2:3"] {
        assert_eq!(
            hostname::is_valid_hostname(text, rules),
            ip::classify(text).is_some(),
            "'{text}'"
        );
    }
}
