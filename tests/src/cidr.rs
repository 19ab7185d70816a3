#![cfg(test)]
use addrcheck_common::network::ip::Address;
use addrcheck_common::network::range::{self, CidrRange};

const V4_SAMPLES: [&str; 5] = [
    "0.0.0.0",
    "10.1.2.3",
    "127.0.0.1",
    "192.168.255.1",
    "255.255.255.255",
];
const V6_SAMPLES: [&str; 5] = [
    "::",
    "::1",
    "2001:db8::1",
    "fe80::abcd",
    "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff",
];

const GARBAGE: [&str; 8] = [
    "",
    "garbage",
    "10.0.0.0/abc",
    " 10.0.0.0/8",
    "10.0.0.0/8 ",
    "10.0.0.0/33",
    "::/129",
    "10.0.0.0/-1",
];

#[test]
fn empty_list_never_matches() {
    let empty: Vec<String> = Vec::new();
    for ip in V4_SAMPLES.iter().chain(&V6_SAMPLES) {
        assert!(!range::ip_in_cidr_list(ip, &empty));
    }
}

#[test]
fn garbage_never_suppresses_a_later_match() {
    let cases = [
        ("10.1.2.3", "10.0.0.0/8"),
        ("192.168.255.1", "192.168.0.0/16"),
        ("2001:db8::1", "2001:db8::/32"),
        ("::1", "::1"),
    ];

    for (ip, cidr) in cases {
        assert!(range::ip_in_cidr_list(ip, [cidr]));
        for garbage in GARBAGE {
            assert!(range::ip_in_cidr_list(ip, [garbage, cidr]), "'{garbage}' hid '{cidr}'");
        }

        let mut list: Vec<&str> = GARBAGE.to_vec();
        list.push(cidr);
        assert_eq!(range::first_match(ip, &list), Some(GARBAGE.len()));
    }
}

#[test]
fn zero_prefix_matches_whole_family_only() {
    for ip in V4_SAMPLES {
        assert!(range::ip_in_cidr_list(ip, ["203.0.113.9/0"]));
        assert!(!range::ip_in_cidr_list(ip, ["2001:db8::/0"]));
    }
    for ip in V6_SAMPLES {
        assert!(range::ip_in_cidr_list(ip, ["2001:db8::/0"]));
        assert!(!range::ip_in_cidr_list(ip, ["203.0.113.9/0"]));
    }
}

#[test]
fn full_prefix_matches_exact_address_only() {
    for (family, bits) in [(V4_SAMPLES, 32), (V6_SAMPLES, 128)] {
        for ip in family {
            let exact = format!("{ip}/{bits}");
            for other in family {
                assert_eq!(
                    range::ip_in_cidr_list(other, [exact.as_str()]),
                    ip == other,
                    "{other} in {exact}"
                );
                assert_eq!(range::ip_in_cidr_list(other, [ip]), ip == other, "{other} in {ip}");
            }
        }
    }
}

#[test]
fn oversized_prefix_never_matches() {
    for ip in V4_SAMPLES {
        for cidr in ["0.0.0.0/33", "0.0.0.0/64", "0.0.0.0/4294967296"] {
            assert!(!range::ip_in_cidr_list(ip, [cidr]));
        }
    }
    for ip in V6_SAMPLES {
        assert!(!range::ip_in_cidr_list(ip, ["::/129"]));
    }
}

#[test]
fn binary_matching_ignores_other_family() {
    let v4_range = CidrRange::parse("0.0.0.0/0").unwrap();
    let v6_range = CidrRange::parse("::/0").unwrap();

    let mapped = Address::parse("::ffff:10.0.0.1").unwrap();
    assert!(!range::ip_in_cidr_binary(&mapped, &v4_range));
    assert!(range::ip_in_cidr_binary(&mapped, &v6_range));

    let raw = Address::from_bytes(&[10, 0, 0, 1]).unwrap();
    assert!(range::ip_in_cidr_binary(&raw, &v4_range));
    assert!(!range::ip_in_cidr_binary(&raw, &v6_range));
}

#[test]
fn every_prefix_length_splits_at_the_right_bit() {
    // 10.0.0.0 and 10.128.0.0 first differ at bit 9, so prefixes up to 8 cover both.
    let base = "10.0.0.0";
    let upper_half = "10.128.0.0";
    for prefix in 0..=32 {
        let cidr = format!("{base}/{prefix}");
        assert!(range::ip_in_cidr_list(base, [cidr.as_str()]));
        assert_eq!(
            range::ip_in_cidr_list(upper_half, [cidr.as_str()]),
            prefix <= 8,
            "{upper_half} in {cidr}"
        );
    }
}
