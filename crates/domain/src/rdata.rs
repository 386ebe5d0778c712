//! Type-specific resource record payloads.
//!
//! `RecordData` has one variant per record type the normaliser knows about.
//! Types outside the catalogue, and records whose RDATA cannot be read, carry
//! [`RecordData::Unknown`], which serialises as an empty object.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecordData {
    A(AddressData),
    AAAA(AddressData),
    EUI48(AddressData),
    EUI64(AddressData),
    L32(L32Data),
    L64(L64Data),
    NID(NidData),

    NS(TargetData),
    CNAME(TargetData),
    PTR(TargetData),
    DNAME(TargetData),
    ANAME(TargetData),
    MB(TargetData),
    MD(TargetData),
    MF(TargetData),
    MG(TargetData),
    MR(TargetData),
    NSAPPTR(TargetData),
    MX(ExchangeData),
    KX(ExchangeData),
    RT(ExchangeData),
    AFSDB(ExchangeData),
    LP(LpData),
    MINFO(MinfoData),
    RP(RpData),
    PX(PxData),
    TALINK(TalinkData),

    SOA(SoaData),
    ZONEMD(ZonemdData),
    CSYNC(CsyncData),

    SRV(SrvData),
    NAPTR(NaptrData),
    SVCB(SvcbData),
    HTTPS(SvcbData),
    URI(UriData),
    LOC(LocData),
    GPOS(GposData),

    TXT(TxtData),
    SPF(TxtData),
    AVC(TxtData),
    HINFO(HinfoData),
    X25(X25Data),
    ISDN(IsdnData),
    NINFO(NinfoData),
    UINFO(UinfoData),
    UID(IdData),
    GID(IdData),

    DNSKEY(KeyData),
    CDNSKEY(KeyData),
    KEY(KeyData),
    DS(DsData),
    CDS(DsData),
    TA(DsData),
    DLV(DsData),
    RRSIG(SigData),
    SIG(SigData),
    NSEC(NsecData),
    NSEC3(Nsec3Data),
    NSEC3PARAM(Nsec3ParamData),
    TSIG(TsigData),

    TLSA(TlsaData),
    SMIMEA(TlsaData),
    SSHFP(SshfpData),
    CERT(CertData),
    OPENPGPKEY(OpenPgpKeyData),
    DHCID(DhcidData),
    CAA(CaaData),
    NULL(NullData),

    OPT(EdnsOptions),

    Unknown(Empty),
}

impl RecordData {
    pub fn unknown() -> Self {
        RecordData::Unknown(Empty {})
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, RecordData::Unknown(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Empty {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressData {
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct L32Data {
    pub preference: u16,
    pub locator32: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct L64Data {
    pub preference: u16,
    pub locator64: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NidData {
    pub preference: u16,
    pub node_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetData {
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeData {
    pub preference: u16,
    pub exchange: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LpData {
    pub preference: u16,
    pub fqdn: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinfoData {
    pub rmailbx: String,
    pub emailbx: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RpData {
    pub mbox: String,
    pub txt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PxData {
    pub preference: u16,
    pub map822: String,
    pub mapx400: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TalinkData {
    pub previous_name: String,
    pub next_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoaData {
    pub mname: String,
    pub rname: String,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZonemdData {
    pub serial: u32,
    pub scheme: u8,
    pub hash_algorithm: u8,
    pub digest: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CsyncData {
    pub serial: u32,
    pub flags: u16,
    pub type_bit_map: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SrvData {
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NaptrData {
    pub order: u16,
    pub preference: u16,
    pub flags: String,
    pub service: String,
    pub regexp: String,
    pub replacement: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SvcbData {
    pub priority: u16,
    pub target: String,
    pub params: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UriData {
    pub priority: u16,
    pub weight: u16,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocData {
    pub version: u8,
    pub size: String,
    pub horiz_pre: String,
    pub vert_pre: String,
    pub latitude: String,
    pub longitude: String,
    pub altitude: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GposData {
    pub longitude: String,
    pub latitude: String,
    pub altitude: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxtData {
    pub txt: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HinfoData {
    pub cpu: String,
    pub os: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct X25Data {
    pub psdn_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IsdnData {
    pub address: String,
    pub sub_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NinfoData {
    pub zs_data: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UinfoData {
    pub uinfo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdData {
    pub id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyData {
    pub flags: u16,
    pub protocol: u8,
    pub algorithm: u8,
    pub public_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DsData {
    pub key_tag: u16,
    pub algorithm: u8,
    pub digest_type: u8,
    pub digest: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SigData {
    pub type_covered: String,
    pub algorithm: u8,
    pub labels: u8,
    pub original_ttl: u32,
    pub expiration: String,
    pub inception: String,
    pub key_tag: u16,
    pub signer_name: String,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NsecData {
    pub next_domain: String,
    pub type_bit_map: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Nsec3Data {
    pub hash: u8,
    pub flags: u8,
    pub iterations: u16,
    pub salt: String,
    pub next_domain: String,
    pub type_bit_map: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Nsec3ParamData {
    pub hash: u8,
    pub flags: u8,
    pub iterations: u16,
    pub salt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TsigData {
    pub algorithm: String,
    pub time_signed: u64,
    pub fudge: u16,
    pub mac: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TlsaData {
    pub usage: u8,
    pub selector: u8,
    pub matching_type: u8,
    pub certificate: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SshfpData {
    pub algorithm: u8,
    #[serde(rename = "type")]
    pub fingerprint_type: u8,
    pub fingerprint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertData {
    #[serde(rename = "type")]
    pub cert_type: u16,
    pub key_tag: u16,
    pub algorithm: u8,
    pub certificate: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenPgpKeyData {
    pub public_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DhcidData {
    pub digest: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaaData {
    pub flag: u8,
    pub tag: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NullData {
    pub data: String,
}

/// EDNS(0) pseudo-record payload. Optional members are present only when
/// the corresponding option was encoded in the OPT RDATA.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EdnsOptions {
    pub version: u8,
    pub flags: Vec<&'static str>,
    pub udp_size: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_lease: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_lived_queries: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dnssec_algorithms_understood: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ds_hash_understood: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsec3_hash_understood: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_serializes_as_empty_object() {
        let json = serde_json::to_string(&RecordData::unknown()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_variant_serializes_payload_only() {
        let rdata = RecordData::MX(ExchangeData {
            preference: 10,
            exchange: "mail.example.com".to_string(),
        });
        let json = serde_json::to_string(&rdata).unwrap();
        assert_eq!(json, r#"{"preference":10,"exchange":"mail.example.com"}"#);
    }

    #[test]
    fn test_edns_omits_absent_options() {
        let edns = EdnsOptions {
            version: 0,
            flags: vec!["DO"],
            udp_size: 1232,
            cookie: Some("0102030405060708".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&RecordData::OPT(edns)).unwrap();
        assert_eq!(
            json,
            r#"{"version":0,"flags":["DO"],"udp_size":1232,"cookie":"0102030405060708"}"#
        );
    }
}
