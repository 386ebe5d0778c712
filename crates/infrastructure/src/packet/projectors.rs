//! Field projectors: one pure function per protocol header, mapping the
//! decoded etherparse header to its document record.

use super::captured::IcmpHeader;
use etherparse::{Ethernet2Header, Ipv4Header, Ipv6Header, TcpHeader, UdpHeader};
use ferrous_sniffer_domain::protocols::{
    ether_type_name, format_mac, icmpv4_type_name, icmpv6_type_name, ip_protocol_name,
};
use ferrous_sniffer_domain::{
    EthernetRecord, IcmpRecord, Ipv4Record, Ipv6Record, TcpRecord, UdpRecord,
};
use std::net::{Ipv4Addr, Ipv6Addr};

pub fn project_ethernet(header: &Ethernet2Header, frame_len: usize) -> EthernetRecord {
    EthernetRecord {
        source_address: format_mac(&header.source),
        destination_address: format_mac(&header.destination),
        ether_type: ether_type_name(header.ether_type.0),
        length: frame_len,
    }
}

pub fn project_ipv4(header: &Ipv4Header) -> Ipv4Record {
    let mut flags = Vec::with_capacity(2);
    if header.dont_fragment {
        flags.push("DF");
    }
    if header.more_fragments {
        flags.push("MF");
    }

    Ipv4Record {
        version: 4,
        header_length: header.ihl(),
        tos: (header.dscp.value() << 2) | header.ecn.value(),
        total_length: header.total_len,
        id: header.identification,
        flags,
        fragment_offset: header.fragment_offset.value(),
        ttl: header.time_to_live,
        protocol: ip_protocol_name(header.protocol.0),
        checksum: header.header_checksum,
        source_address: Ipv4Addr::from(header.source).to_string(),
        destination_address: Ipv4Addr::from(header.destination).to_string(),
    }
}

pub fn project_ipv6(header: &Ipv6Header) -> Ipv6Record {
    Ipv6Record {
        version: 6,
        traffic_class: header.traffic_class,
        flow_label: header.flow_label.value(),
        total_length: header.payload_length,
        next_header: ip_protocol_name(header.next_header.0),
        hop_limit: header.hop_limit,
        source_address: Ipv6Addr::from(header.source).to_string(),
        destination_address: Ipv6Addr::from(header.destination).to_string(),
    }
}

pub fn project_udp(header: &UdpHeader) -> UdpRecord {
    UdpRecord {
        source_port: header.source_port,
        destination_port: header.destination_port,
        length: header.length,
        checksum: header.checksum,
    }
}

pub fn project_tcp(header: &TcpHeader) -> TcpRecord {
    let flags = [
        (header.ns, "NS"),
        (header.cwr, "CWR"),
        (header.ece, "ECE"),
        (header.urg, "URG"),
        (header.ack, "ACK"),
        (header.psh, "PSH"),
        (header.rst, "RST"),
        (header.syn, "SYN"),
        (header.fin, "FIN"),
    ]
    .into_iter()
    .filter_map(|(set, name)| set.then_some(name))
    .collect();

    TcpRecord {
        source_port: header.source_port,
        destination_port: header.destination_port,
        sequence: header.sequence_number,
        acknowledgment: header.acknowledgment_number,
        data_offset: header.data_offset(),
        flags,
        window: header.window_size,
        checksum: header.checksum,
        urgent: header.urgent_pointer,
    }
}

pub fn project_icmpv4(header: &IcmpHeader) -> IcmpRecord {
    IcmpRecord {
        icmp_type: header.icmp_type,
        code: header.code,
        checksum: header.checksum,
        type_name: icmpv4_type_name(header.icmp_type),
    }
}

pub fn project_icmpv6(header: &IcmpHeader) -> IcmpRecord {
    IcmpRecord {
        icmp_type: header.icmp_type,
        code: header.code,
        checksum: header.checksum,
        type_name: icmpv6_type_name(header.icmp_type),
    }
}
