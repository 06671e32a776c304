//! Integration tests for cloud-cidr
//!
//! These tests decode cloud API payloads that embed CIDR values and check
//! they survive a JSON round trip.

use cloud_cidr::json::{decode_document, from_json, to_json};
use cloud_cidr::{Cidr, CidrError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::net::IpAddr;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct PrivateNetwork {
    id: String,
    name: String,
    zone: String,
    cidr: Option<Cidr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_ip: Option<IpAddr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_ip: Option<IpAddr>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct ListPrivateNetworksResponse {
    private_networks: Vec<PrivateNetwork>,
}

fn read_test_data(name: &str) -> Vec<u8> {
    let path = format!("src/tests/test_data/{name}");
    std::fs::read(&path).unwrap_or_else(|e| panic!("Error reading {path}: {e}"))
}

#[test]
fn test_decode_private_networks() {
    let data: ListPrivateNetworksResponse =
        decode_document(&read_test_data("private_networks.json"))
            .expect("Failed to decode private networks");

    assert_eq!(data.private_networks.len(), 4, "Expected 4 private networks");

    let cidrs: Vec<Option<String>> = data
        .private_networks
        .iter()
        .map(|n| n.cidr.map(|c| c.to_string()))
        .collect();
    assert_eq!(
        cidrs,
        vec![
            Some("10.0.0.0/24".to_string()),
            Some("172.16.8.0/21".to_string()),
            None,
            Some("2a04:c43:e00::/48".to_string()),
        ]
    );
}

#[test]
fn test_address_range_inside_network() {
    let data: ListPrivateNetworksResponse =
        decode_document(&read_test_data("private_networks.json"))
            .expect("Failed to decode private networks");

    for network in &data.private_networks {
        let (Some(cidr), Some(start), Some(end)) = (network.cidr, network.start_ip, network.end_ip)
        else {
            continue;
        };
        assert!(cidr.contains(&start), "{start} not in {cidr} ({})", network.name);
        assert!(cidr.contains(&end), "{end} not in {cidr} ({})", network.name);
    }
}

#[test]
fn test_document_round_trip() {
    let data: ListPrivateNetworksResponse =
        decode_document(&read_test_data("private_networks.json"))
            .expect("Failed to decode private networks");

    let json = serde_json::to_vec(&data).expect("Failed to encode private networks");
    let again: ListPrivateNetworksResponse =
        decode_document(&json).expect("Failed to decode re-encoded networks");
    assert_eq!(again, data);
}

#[test]
fn test_decode_bad_cidr_reports_path() {
    let err = decode_document::<ListPrivateNetworksResponse>(&read_test_data(
        "private_networks_bad.json",
    ))
    .unwrap_err();

    match err {
        CidrError::Decode { path, .. } => assert_eq!(path, "private_networks[1].cidr"),
        e => panic!("Expected decode error, got {e:?}"),
    }
}

#[test]
fn test_single_value_operations() {
    let cidr = Cidr::parse("10.1.2.3/24").expect("valid CIDR");
    assert_eq!(cidr.to_string(), "10.1.2.0/24");
    assert_eq!(from_json(&to_json(&cidr)).unwrap(), cidr);
    assert_eq!(Cidr::must_parse("10.0.0.0/8"), Cidr::parse("10.0.0.0/8").unwrap());

    assert!(Cidr::must_parse("10.0.0.0/8").equal(&Cidr::must_parse("10.0.0.0/8")));
    assert!(!Cidr::must_parse("10.0.0.0/8").equal(&Cidr::must_parse("10.0.0.0/9")));

    assert!(Cidr::parse("not-a-cidr").unwrap_err().is_parse());
    assert!(from_json(b"123").unwrap_err().is_decode());
}

#[test]
fn test_dedup_by_network() {
    // host bits are dropped at parse time, so these collapse to two networks
    let cidrs: HashSet<Cidr> = ["10.0.0.1/8", "10.0.0.0/8", "10.255.0.0/8", "10.0.0.0/9"]
        .iter()
        .map(|s| Cidr::must_parse(s))
        .collect();
    assert_eq!(cidrs.len(), 2);
}

#[test]
fn test_value_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + Copy>() {}
    assert_send_sync::<Cidr>();
}
