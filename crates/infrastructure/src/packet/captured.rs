use chrono::{DateTime, Utc};
use etherparse::{
    Ethernet2Header, Ipv4Header, Ipv6Header, LaxNetSlice, LaxSlicedPacket, LinkSlice, TcpHeader,
    TransportSlice, UdpHeader,
};
use ferrous_sniffer_domain::{DomainError, LinkType, RawFrame};
use tracing::{debug, trace};

/// Type, code and checksum of an ICMPv4 or ICMPv6 message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IcmpHeader {
    pub icmp_type: u8,
    pub code: u8,
    pub checksum: u16,
}

/// A frame already split into its protocol layers. Every slot is optional;
/// `dns` holds the application payload when the transport carried DNS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedPacket {
    pub timestamp: DateTime<Utc>,
    pub frame_len: usize,
    pub ethernet: Option<Ethernet2Header>,
    pub ipv4: Option<Ipv4Header>,
    pub ipv6: Option<Ipv6Header>,
    pub udp: Option<UdpHeader>,
    pub tcp: Option<TcpHeader>,
    pub icmpv4: Option<IcmpHeader>,
    pub icmpv6: Option<IcmpHeader>,
    pub dns: Option<Vec<u8>>,
}

impl CapturedPacket {
    pub fn new(timestamp: DateTime<Utc>, frame_len: usize) -> Self {
        Self {
            timestamp,
            frame_len,
            ethernet: None,
            ipv4: None,
            ipv6: None,
            udp: None,
            tcp: None,
            icmpv4: None,
            icmpv6: None,
            dns: None,
        }
    }

    /// Slices `frame` into its layers. UDP or TCP traffic touching one of
    /// `dns_ports` has its payload kept for DNS normalisation.
    ///
    /// Frames cut short by the capture snaplen keep every layer that was
    /// captured in full. Only a frame too short for its first header is
    /// rejected.
    pub fn from_frame(frame: &RawFrame, dns_ports: &[u16]) -> Result<Self, DomainError> {
        let sliced = match frame.link_type {
            LinkType::Ethernet => LaxSlicedPacket::from_ethernet(&frame.data)
                .map_err(|e| DomainError::InvalidFrame(e.to_string()))?,
            LinkType::RawIp => LaxSlicedPacket::from_ip(&frame.data)
                .map_err(|e| DomainError::InvalidFrame(e.to_string()))?,
        };

        if let Some((error, layer)) = &sliced.stop_err {
            debug!(layer = %layer, error = %error, "Frame slicing stopped early");
        }

        let mut packet = Self::new(frame.timestamp, frame.len());

        if let Some(LinkSlice::Ethernet2(ethernet)) = &sliced.link {
            packet.ethernet = Some(ethernet.to_header());
        }

        let payload_complete = match &sliced.net {
            Some(LaxNetSlice::Ipv4(ipv4)) => {
                packet.ipv4 = Some(ipv4.header().to_header());
                !ipv4.payload().incomplete
            }
            Some(LaxNetSlice::Ipv6(ipv6)) => {
                packet.ipv6 = Some(ipv6.header().to_header());
                !ipv6.payload().incomplete
            }
            None => false,
        };

        match &sliced.transport {
            Some(TransportSlice::Udp(udp)) => {
                let header = udp.to_header();
                if payload_complete
                    && is_dns_traffic(dns_ports, header.source_port, header.destination_port)
                {
                    packet.dns = Some(udp.payload().to_vec());
                }
                packet.udp = Some(header);
            }
            Some(TransportSlice::Tcp(tcp)) => {
                let header = tcp.to_header();
                if payload_complete
                    && is_dns_traffic(dns_ports, header.source_port, header.destination_port)
                {
                    packet.dns = strip_length_prefix(tcp.payload());
                }
                packet.tcp = Some(header);
            }
            Some(TransportSlice::Icmpv4(icmp)) => {
                packet.icmpv4 = Some(IcmpHeader {
                    icmp_type: icmp.type_u8(),
                    code: icmp.code_u8(),
                    checksum: icmp.checksum(),
                });
            }
            Some(TransportSlice::Icmpv6(icmp)) => {
                packet.icmpv6 = Some(IcmpHeader {
                    icmp_type: icmp.type_u8(),
                    code: icmp.code_u8(),
                    checksum: icmp.checksum(),
                });
            }
            None => {}
        }

        trace!(
            frame_len = packet.frame_len,
            link_type = %frame.link_type,
            has_dns = packet.dns.is_some(),
            "Frame sliced"
        );

        Ok(packet)
    }
}

fn is_dns_traffic(dns_ports: &[u16], source: u16, destination: u16) -> bool {
    dns_ports.contains(&source) || dns_ports.contains(&destination)
}

/// DNS over TCP prefixes each message with a two-octet length (RFC 1035
/// section 4.2.2). Only a segment holding exactly one whole message yields
/// DNS; continuation segments and split messages are left to the transport
/// layers.
fn strip_length_prefix(payload: &[u8]) -> Option<Vec<u8>> {
    let (prefix, body) = payload.split_first_chunk::<2>()?;
    let declared = usize::from(u16::from_be_bytes(*prefix));
    (declared > 0 && body.len() == declared).then(|| body.to_vec())
}
