use crate::dns_message::DnsMessage;
use serde::Serialize;

/// One normalised packet. Layers absent from the source packet are left as
/// `None` and never appear in the serialised form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PacketDocument {
    pub timestamp: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ethernet: Option<EthernetRecord>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4: Option<Ipv4Record>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<Ipv6Record>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icmpv4: Option<IcmpRecord>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icmpv6: Option<IcmpRecord>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub udp: Option<UdpRecord>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcp: Option<TcpRecord>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns: Option<DnsMessage>,
}

impl PacketDocument {
    pub fn new(timestamp: String) -> Self {
        Self {
            timestamp,
            ethernet: None,
            ipv4: None,
            ipv6: None,
            icmpv4: None,
            icmpv6: None,
            udp: None,
            tcp: None,
            dns: None,
        }
    }

    /// Canonical keys of the layers present, in document order.
    pub fn layer_names(&self) -> Vec<&'static str> {
        let mut names = vec!["timestamp"];
        if self.ethernet.is_some() {
            names.push("ethernet");
        }
        if self.ipv4.is_some() {
            names.push("ipv4");
        }
        if self.ipv6.is_some() {
            names.push("ipv6");
        }
        if self.icmpv4.is_some() {
            names.push("icmpv4");
        }
        if self.icmpv6.is_some() {
            names.push("icmpv6");
        }
        if self.udp.is_some() {
            names.push("udp");
        }
        if self.tcp.is_some() {
            names.push("tcp");
        }
        if self.dns.is_some() {
            names.push("dns");
        }
        names
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EthernetRecord {
    pub source_address: String,
    pub destination_address: String,
    #[serde(rename = "type")]
    pub ether_type: String,
    pub length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ipv4Record {
    pub version: u8,
    pub header_length: u8,
    pub tos: u8,
    pub total_length: u16,
    pub id: u16,
    pub flags: Vec<&'static str>,
    pub fragment_offset: u16,
    pub ttl: u8,
    pub protocol: String,
    pub checksum: u16,
    pub source_address: String,
    pub destination_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ipv6Record {
    pub version: u8,
    pub traffic_class: u8,
    pub flow_label: u32,
    pub total_length: u16,
    pub next_header: String,
    pub hop_limit: u8,
    pub source_address: String,
    pub destination_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UdpRecord {
    pub source_port: u16,
    pub destination_port: u16,
    pub length: u16,
    pub checksum: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TcpRecord {
    pub source_port: u16,
    pub destination_port: u16,
    pub sequence: u32,
    pub acknowledgment: u32,
    pub data_offset: u8,
    pub flags: Vec<&'static str>,
    pub window: u16,
    pub checksum: u16,
    pub urgent: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IcmpRecord {
    #[serde(rename = "type")]
    pub icmp_type: u8,
    pub code: u8,
    pub checksum: u16,
    pub type_name: String,
}
