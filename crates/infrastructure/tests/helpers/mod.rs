#![allow(dead_code)]
use chrono::{DateTime, TimeZone, Utc};
use etherparse::PacketBuilder;
use ferrous_sniffer_domain::{LinkType, RawFrame};

pub const CLIENT_MAC: [u8; 6] = [0x02, 0x42, 0xac, 0x11, 0x00, 0x02];
pub const RESOLVER_MAC: [u8; 6] = [0x02, 0x42, 0xac, 0x11, 0x00, 0x01];
pub const CLIENT_IP: [u8; 4] = [192, 168, 1, 10];
pub const RESOLVER_IP: [u8; 4] = [192, 168, 1, 1];
pub const CLIENT_PORT: u16 = 40000;
pub const DNS_PORT: u16 = 53;

pub fn capture_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

pub fn dns_ports() -> Vec<u16> {
    vec![53, 5353]
}

pub struct FrameBuilder;

impl FrameBuilder {
    pub fn udp(source_port: u16, destination_port: u16, payload: &[u8]) -> RawFrame {
        let builder = PacketBuilder::ethernet2(CLIENT_MAC, RESOLVER_MAC)
            .ipv4(CLIENT_IP, RESOLVER_IP, 64)
            .udp(source_port, destination_port);
        let mut data = Vec::with_capacity(builder.size(payload.len()));
        builder.write(&mut data, payload).unwrap();
        RawFrame::ethernet(capture_time(), data)
    }

    pub fn udp_v6(source_port: u16, destination_port: u16, payload: &[u8]) -> RawFrame {
        let mut source = [0u8; 16];
        source[0] = 0xfe;
        source[1] = 0x80;
        source[15] = 0x0a;
        let mut destination = source;
        destination[15] = 0x01;

        let builder = PacketBuilder::ethernet2(CLIENT_MAC, RESOLVER_MAC)
            .ipv6(source, destination, 64)
            .udp(source_port, destination_port);
        let mut data = Vec::with_capacity(builder.size(payload.len()));
        builder.write(&mut data, payload).unwrap();
        RawFrame::ethernet(capture_time(), data)
    }

    /// A PSH/ACK segment carrying `payload` as-is.
    pub fn tcp(source_port: u16, destination_port: u16, payload: &[u8]) -> RawFrame {
        let builder = PacketBuilder::ethernet2(CLIENT_MAC, RESOLVER_MAC)
            .ipv4(CLIENT_IP, RESOLVER_IP, 64)
            .tcp(source_port, destination_port, 1000, 65535)
            .psh()
            .ack(2000);
        let mut data = Vec::with_capacity(builder.size(payload.len()));
        builder.write(&mut data, payload).unwrap();
        RawFrame::ethernet(capture_time(), data)
    }

    /// DNS over TCP: the message is written behind its two-octet length.
    pub fn tcp_dns(source_port: u16, destination_port: u16, message: &[u8]) -> RawFrame {
        let mut payload = (message.len() as u16).to_be_bytes().to_vec();
        payload.extend_from_slice(message);
        Self::tcp(source_port, destination_port, &payload)
    }

    /// `frame` as recorded with a capture snaplen of `snaplen` octets.
    pub fn snapped(mut frame: RawFrame, snaplen: usize) -> RawFrame {
        frame.data.truncate(snaplen);
        frame
    }

    pub fn tcp_syn(source_port: u16, destination_port: u16) -> RawFrame {
        let builder = PacketBuilder::ethernet2(CLIENT_MAC, RESOLVER_MAC)
            .ipv4(CLIENT_IP, RESOLVER_IP, 64)
            .tcp(source_port, destination_port, 1000, 65535)
            .syn();
        let mut data = Vec::with_capacity(builder.size(0));
        builder.write(&mut data, &[]).unwrap();
        RawFrame::ethernet(capture_time(), data)
    }

    pub fn icmp_echo_request() -> RawFrame {
        let builder = PacketBuilder::ethernet2(CLIENT_MAC, RESOLVER_MAC)
            .ipv4(CLIENT_IP, RESOLVER_IP, 64)
            .icmpv4_echo_request(0x0101, 1);
        let payload = b"ping";
        let mut data = Vec::with_capacity(builder.size(payload.len()));
        builder.write(&mut data, payload).unwrap();
        RawFrame::ethernet(capture_time(), data)
    }

    /// A UDP datagram without the link layer, as found in raw-IP captures.
    pub fn raw_ip_udp(source_port: u16, destination_port: u16, payload: &[u8]) -> RawFrame {
        let builder = PacketBuilder::ipv4(CLIENT_IP, RESOLVER_IP, 64).udp(source_port, destination_port);
        let mut data = Vec::with_capacity(builder.size(payload.len()));
        builder.write(&mut data, payload).unwrap();
        RawFrame::new(capture_time(), LinkType::RawIp, data)
    }
}

pub struct DnsWire;

impl DnsWire {
    /// `example.com. IN A` with RD set.
    pub fn example_com_query() -> Vec<u8> {
        let mut message = vec![
            0xbe, 0xef, // id
            0x01, 0x00, // RD
            0x00, 0x01, // qdcount
            0x00, 0x00, // ancount
            0x00, 0x00, // nscount
            0x00, 0x00, // arcount
        ];
        message.extend_from_slice(&example_com_question(0x0001));
        message
    }

    /// Answer to the query above: one A record and one MX whose exchange
    /// is compressed against the question name.
    pub fn example_com_response() -> Vec<u8> {
        let mut message = vec![
            0xbe, 0xef, // id
            0x81, 0x80, // QR RD RA
            0x00, 0x01, // qdcount
            0x00, 0x02, // ancount
            0x00, 0x00, // nscount
            0x00, 0x00, // arcount
        ];
        message.extend_from_slice(&example_com_question(0x0001));
        message.extend_from_slice(&[
            0xc0, 0x0c, // name -> offset 12
            0x00, 0x01, // A
            0x00, 0x01, // IN
            0x00, 0x00, 0x01, 0x2c, // ttl 300
            0x00, 0x04, // rdlength
            93, 184, 216, 34,
        ]);
        message.extend_from_slice(&[
            0xc0, 0x0c, // name -> offset 12
            0x00, 0x0f, // MX
            0x00, 0x01, // IN
            0x00, 0x00, 0x0e, 0x10, // ttl 3600
            0x00, 0x09, // rdlength
            0x00, 0x0a, // preference
            0x04, b'm', b'a', b'i', b'l', 0xc0, 0x0c, // mail.example.com
        ]);
        message
    }

    /// One answer of private-use type 65280 carrying three opaque octets.
    pub fn unknown_type_answer() -> Vec<u8> {
        let mut message = vec![
            0x00, 0x07, // id
            0x81, 0x00, // QR RD
            0x00, 0x01, // qdcount
            0x00, 0x01, // ancount
            0x00, 0x00, // nscount
            0x00, 0x00, // arcount
        ];
        message.extend_from_slice(&example_com_question(0xff00));
        message.extend_from_slice(&[
            0xc0, 0x0c, // name -> offset 12
            0xff, 0x00, // TYPE65280
            0x00, 0x01, // IN
            0x00, 0x00, 0x00, 0x3c, // ttl 60
            0x00, 0x03, // rdlength
            0x01, 0x02, 0x03,
        ]);
        message
    }

    /// Query with an OPT pseudo-record: 1232-octet payload, DO set and a
    /// client cookie.
    pub fn query_with_edns_cookie() -> Vec<u8> {
        let mut message = vec![
            0x12, 0x34, // id
            0x01, 0x20, // RD AD
            0x00, 0x01, // qdcount
            0x00, 0x00, // ancount
            0x00, 0x00, // nscount
            0x00, 0x01, // arcount
        ];
        message.extend_from_slice(&example_com_question(0x0001));
        message.extend_from_slice(&[
            0x00, // root
            0x00, 0x29, // OPT
            0x04, 0xd0, // udp payload size 1232
            0x00, 0x00, 0x80, 0x00, // ext rcode 0, version 0, DO
            0x00, 0x0c, // rdlength
            0x00, 0x0a, // COOKIE
            0x00, 0x08, // option length
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08,
        ]);
        message
    }

    /// Header flags AA, RD and AD on a query.
    pub fn query_with_flags_aa_rd_ad() -> Vec<u8> {
        let mut message = vec![
            0x00, 0x01, // id
            0x05, 0x20, // AA RD / AD
            0x00, 0x01, // qdcount
            0x00, 0x00, // ancount
            0x00, 0x00, // nscount
            0x00, 0x00, // arcount
        ];
        message.extend_from_slice(&example_com_question(0x0001));
        message
    }

    /// Header promises five answers; only the question follows.
    pub fn overstated_counts() -> Vec<u8> {
        let mut message = vec![
            0x00, 0x02, // id
            0x81, 0x80, // QR RD RA
            0x00, 0x01, // qdcount
            0x00, 0x05, // ancount
            0x00, 0x02, // nscount
            0x00, 0x01, // arcount
        ];
        message.extend_from_slice(&example_com_question(0x0001));
        message
    }

    /// The response above cut off in the middle of its first answer.
    pub fn truncated_response() -> Vec<u8> {
        let mut message = Self::example_com_response();
        message.truncate(12 + 17 + 6);
        message
    }
}

/// `example.com.` with the given qtype, class IN. 17 octets.
fn example_com_question(qtype: u16) -> Vec<u8> {
    let mut question = vec![
        0x07, b'e', b'x', b'a', b'm', b'p', b'l', b'e', //
        0x03, b'c', b'o', b'm', //
        0x00,
    ];
    question.extend_from_slice(&qtype.to_be_bytes());
    question.extend_from_slice(&[0x00, 0x01]);
    question
}
