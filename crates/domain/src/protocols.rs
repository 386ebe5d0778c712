//! Canonical names for link, network and control protocol codes.

pub fn ether_type_name(code: u16) -> String {
    let name = match code {
        0x0800 => "IPv4",
        0x0806 => "ARP",
        0x0842 => "WakeOnLAN",
        0x22F0 => "AVTP",
        0x8035 => "RARP",
        0x809B => "AppleTalk",
        0x80F3 => "AARP",
        0x8100 => "VLAN",
        0x8137 => "IPX",
        0x86DD => "IPv6",
        0x8808 => "EthernetFlowControl",
        0x8809 => "SlowProtocols",
        0x8847 => "MPLSUnicast",
        0x8848 => "MPLSMulticast",
        0x8863 => "PPPoEDiscovery",
        0x8864 => "PPPoESession",
        0x888E => "EAPOL",
        0x88A8 => "QinQ",
        0x88CC => "LinkLayerDiscovery",
        0x88E5 => "MACsec",
        0x88F7 => "PTP",
        0x9000 => "EthernetCTP",
        _ => return format!("0x{:04x}", code),
    };
    name.to_string()
}

pub fn ip_protocol_name(code: u8) -> String {
    let name = match code {
        0 => "IPv6HopByHop",
        1 => "ICMPv4",
        2 => "IGMP",
        4 => "IPv4",
        6 => "TCP",
        17 => "UDP",
        41 => "IPv6",
        43 => "IPv6Routing",
        44 => "IPv6Fragment",
        47 => "GRE",
        50 => "ESP",
        51 => "AH",
        58 => "ICMPv6",
        59 => "NoNextHeader",
        60 => "IPv6Destination",
        89 => "OSPF",
        103 => "PIM",
        112 => "VRRP",
        115 => "L2TP",
        132 => "SCTP",
        136 => "UDPLite",
        137 => "MPLSInIP",
        _ => return code.to_string(),
    };
    name.to_string()
}

pub fn icmpv4_type_name(code: u8) -> String {
    let name = match code {
        0 => "EchoReply",
        3 => "DestinationUnreachable",
        4 => "SourceQuench",
        5 => "Redirect",
        8 => "EchoRequest",
        9 => "RouterAdvertisement",
        10 => "RouterSolicitation",
        11 => "TimeExceeded",
        12 => "ParameterProblem",
        13 => "TimestampRequest",
        14 => "TimestampReply",
        15 => "InfoRequest",
        16 => "InfoReply",
        17 => "AddressMaskRequest",
        18 => "AddressMaskReply",
        _ => return format!("TYPE{}", code),
    };
    name.to_string()
}

pub fn icmpv6_type_name(code: u8) -> String {
    let name = match code {
        1 => "DestinationUnreachable",
        2 => "PacketTooBig",
        3 => "TimeExceeded",
        4 => "ParameterProblem",
        128 => "EchoRequest",
        129 => "EchoReply",
        130 => "MulticastListenerQuery",
        131 => "MulticastListenerReport",
        132 => "MulticastListenerDone",
        133 => "RouterSolicitation",
        134 => "RouterAdvertisement",
        135 => "NeighborSolicitation",
        136 => "NeighborAdvertisement",
        137 => "Redirect",
        143 => "MulticastListenerReportV2",
        _ => return format!("TYPE{}", code),
    };
    name.to_string()
}

/// Colon-separated lowercase hex, e.g. `00:1b:21:3a:4f:5e`.
pub fn format_mac(address: &[u8; 6]) -> String {
    address
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect::<Vec<_>>()
        .join(":")
}
