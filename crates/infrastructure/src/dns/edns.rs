//! EDNS(0) pseudo-record handling.
//!
//! The OPT record reuses CLASS for the advertised UDP payload size and TTL for
//! the extended RCODE, version and flags, so it is projected before the
//! generic RDATA dispatch ever sees it.

use super::presentation::hex_upper;
use ferrous_sniffer_domain::{DecodeError, EdnsOptions};
use hickory_proto::rr::rdata::opt::{EdnsCode, EdnsOption};
use hickory_proto::rr::rdata::OPT;
use hickory_proto::rr::{RData, RecordType as WireRecordType};
use hickory_proto::serialize::binary::{BinDecoder, Restrict};
use std::net::{Ipv4Addr, Ipv6Addr};
use tracing::{debug, trace};

const OPTION_LLQ: u16 = 1;
const OPTION_UPDATE_LEASE: u16 = 2;
const OPTION_NSID: u16 = 3;
const OPTION_DAU: u16 = 5;
const OPTION_DHU: u16 = 6;
const OPTION_N3U: u16 = 7;
const OPTION_SUBNET: u16 = 8;
const OPTION_COOKIE: u16 = 10;
const LOCAL_OPTIONS: std::ops::RangeInclusive<u16> = 65001..=65534;

const DNSSEC_OK: u32 = 0x0000_8000;

/// Upper eight bits of the 12-bit extended RCODE carried in the OPT TTL.
pub fn extended_rcode_bits(ttl: u32) -> u16 {
    ((ttl >> 24) & 0xFF) as u16
}

/// Projects an OPT record whose RDATA starts at `offset` in `message`.
pub fn extract(
    message: &[u8],
    offset: usize,
    udp_size: u16,
    ttl: u32,
    rdlength: u16,
) -> Result<EdnsOptions, DecodeError> {
    let mut edns = EdnsOptions {
        version: ((ttl >> 16) & 0xFF) as u8,
        flags: if ttl & DNSSEC_OK != 0 { vec!["DO"] } else { Vec::new() },
        udp_size,
        ..Default::default()
    };

    if rdlength == 0 {
        return Ok(edns);
    }

    let opt = read_options(message, offset, rdlength)?;
    for (_, option) in opt.as_ref() {
        apply_option(&mut edns, option);
    }

    Ok(edns)
}

fn read_options(message: &[u8], offset: usize, rdlength: u16) -> Result<OPT, DecodeError> {
    let offset = u16::try_from(offset)
        .map_err(|_| DecodeError::MalformedMessage("OPT offset out of range".to_string()))?;
    let mut decoder = BinDecoder::new(message).clone(offset);
    let rdata = RData::read(&mut decoder, WireRecordType::OPT, Restrict::new(rdlength))
        .map_err(|e| DecodeError::MalformedMessage(format!("OPT record: {}", e)))?;

    match rdata {
        RData::OPT(opt) => Ok(opt),
        other => Err(DecodeError::MalformedMessage(format!(
            "OPT record decoded as {}",
            other.record_type()
        ))),
    }
}

/// Options are projected from their wire bytes by code, so the result does not
/// depend on which options the wire library models as typed variants.
fn apply_option(edns: &mut EdnsOptions, option: &EdnsOption) {
    let code = u16::from(EdnsCode::from(option));
    let data = match Vec::<u8>::try_from(option) {
        Ok(data) => data,
        Err(e) => {
            debug!(code, error = %e, "EDNS option could not be re-encoded");
            return;
        }
    };

    match code {
        OPTION_NSID => edns.nsid = Some(hex_upper(&data)),
        OPTION_COOKIE => edns.cookie = Some(hex_upper(&data)),
        OPTION_SUBNET => edns.subnet = client_subnet(&data),
        OPTION_UPDATE_LEASE => {
            if let Some(lease) = data.get(..4) {
                edns.update_lease =
                    Some(u32::from_be_bytes([lease[0], lease[1], lease[2], lease[3]]));
            }
        }
        OPTION_LLQ => edns.long_lived_queries = long_lived_query(&data),
        OPTION_DAU => edns.dnssec_algorithms_understood = Some(octet_list(&data)),
        OPTION_DHU => edns.ds_hash_understood = Some(octet_list(&data)),
        OPTION_N3U => edns.nsec3_hash_understood = Some(octet_list(&data)),
        code if LOCAL_OPTIONS.contains(&code) => edns.local = Some(hex_upper(&data)),
        code => {
            trace!(code, len = data.len(), "EDNS option not projected");
        }
    }
}

/// RFC 7871 client subnet as `address/source-prefix/scope-prefix`. The
/// address octets are truncated on the wire and zero-filled here.
fn client_subnet(data: &[u8]) -> Option<String> {
    let (header, address) = (data.get(..4)?, &data[4..]);
    let family = u16::from_be_bytes([header[0], header[1]]);
    let (source, scope) = (header[2], header[3]);

    let addr = match family {
        1 if address.len() <= 4 => {
            let mut octets = [0u8; 4];
            octets[..address.len()].copy_from_slice(address);
            Ipv4Addr::from(octets).to_string()
        }
        2 if address.len() <= 16 => {
            let mut octets = [0u8; 16];
            octets[..address.len()].copy_from_slice(address);
            Ipv6Addr::from(octets).to_string()
        }
        _ => return None,
    };

    Some(format!("{}/{}/{}", addr, source, scope))
}

fn octet_list(data: &[u8]) -> String {
    data.iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// RFC 8764 LLQ option: version, opcode, error, id and lease, space separated.
fn long_lived_query(data: &[u8]) -> Option<String> {
    if data.len() != 18 {
        return None;
    }
    let u16_at = |i: usize| u16::from_be_bytes([data[i], data[i + 1]]);
    let mut id = [0u8; 8];
    id.copy_from_slice(&data[6..14]);
    let lease = u32::from_be_bytes([data[14], data[15], data[16], data[17]]);
    Some(format!(
        "{} {} {} {} {}",
        u16_at(0),
        u16_at(2),
        u16_at(4),
        u64::from_be_bytes(id),
        lease
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(code: u16, data: &[u8]) -> Vec<u8> {
        let mut out = code.to_be_bytes().to_vec();
        out.extend_from_slice(&(data.len() as u16).to_be_bytes());
        out.extend_from_slice(data);
        out
    }

    #[test]
    fn test_header_fields_without_options() {
        let edns = extract(&[], 0, 4096, 0x0000_8000, 0).unwrap();
        assert_eq!(edns.udp_size, 4096);
        assert_eq!(edns.version, 0);
        assert_eq!(edns.flags, vec!["DO"]);
        assert!(edns.cookie.is_none());
    }

    #[test]
    fn test_extended_rcode_bits() {
        assert_eq!(extended_rcode_bits(0x0100_0000), 1);
        assert_eq!(extended_rcode_bits(0x0000_8000), 0);
    }

    #[test]
    fn test_cookie_nsid_and_subnet() {
        let mut rdata = option(OPTION_COOKIE, &[1, 2, 3, 4, 5, 6, 7, 8]);
        rdata.extend(option(OPTION_NSID, b"ns1"));
        // family 1, source /24, scope /0, 192.0.2
        rdata.extend(option(OPTION_SUBNET, &[0x00, 0x01, 24, 0, 192, 0, 2]));
        rdata.extend(option(OPTION_UPDATE_LEASE, &[0, 0, 0x0E, 0x10]));
        rdata.extend(option(65001, &[0xAB]));

        let edns = extract(&rdata, 0, 1232, 0, rdata.len() as u16).unwrap();
        assert_eq!(edns.cookie.as_deref(), Some("0102030405060708"));
        assert_eq!(edns.nsid.as_deref(), Some("6E7331"));
        assert_eq!(edns.subnet.as_deref(), Some("192.0.2.0/24/0"));
        assert_eq!(edns.update_lease, Some(3600));
        assert_eq!(edns.local.as_deref(), Some("AB"));
        assert!(edns.flags.is_empty());
    }

    #[test]
    fn test_hash_understood_lists() {
        let mut rdata = option(OPTION_DHU, &[1, 2]);
        rdata.extend(option(OPTION_N3U, &[1]));
        let edns = extract(&rdata, 0, 512, 0, rdata.len() as u16).unwrap();
        assert_eq!(edns.ds_hash_understood.as_deref(), Some("1 2"));
        assert_eq!(edns.nsec3_hash_understood.as_deref(), Some("1"));
    }

    #[test]
    fn test_algorithms_understood() {
        let rdata = option(OPTION_DAU, &[13, 8]);
        let edns = extract(&rdata, 0, 1232, 0, rdata.len() as u16).unwrap();
        assert_eq!(edns.dnssec_algorithms_understood.as_deref(), Some("8 13"));
    }

    #[test]
    fn test_long_lived_query() {
        let mut llq = vec![0x00, 0x01, 0x00, 0x01, 0x00, 0x00];
        llq.extend_from_slice(&0x0102_0304_0506_0708u64.to_be_bytes());
        llq.extend_from_slice(&[0x00, 0x00, 0x0E, 0x10]);
        let rdata = option(OPTION_LLQ, &llq);

        let edns = extract(&rdata, 0, 1232, 0, rdata.len() as u16).unwrap();
        assert_eq!(
            edns.long_lived_queries.as_deref(),
            Some("1 1 0 72623859790382856 3600")
        );
    }

    #[test]
    fn test_long_lived_query_with_wrong_length_is_dropped() {
        let rdata = option(OPTION_LLQ, &[0x00, 0x01]);
        let edns = extract(&rdata, 0, 1232, 0, rdata.len() as u16).unwrap();
        assert!(edns.long_lived_queries.is_none());
    }

    #[test]
    fn test_ipv6_client_subnet() {
        // family 2, source /56, scope /48, 2001:db8:1:2
        let rdata = option(
            OPTION_SUBNET,
            &[0x00, 0x02, 56, 48, 0x20, 0x01, 0x0d, 0xb8, 0x00, 0x01, 0x00],
        );
        let edns = extract(&rdata, 0, 1232, 0, rdata.len() as u16).unwrap();
        assert_eq!(edns.subnet.as_deref(), Some("2001:db8:1::/56/48"));
    }

    #[test]
    fn test_option_overrunning_rdata_is_malformed() {
        let rdata = [0x00, 0x0A, 0x00, 0x20, 0x01];
        assert!(extract(&rdata, 0, 512, 0, rdata.len() as u16).is_err());
    }
}
