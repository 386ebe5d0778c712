//! Ferrous Sniffer Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_record;
pub mod document;
pub mod errors;
pub mod protocols;
pub mod raw_frame;
pub mod rdata;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_message::{DnsFlags, DnsMessage, DnsQuestion, DnsResourceRecord, DnsSections};
pub use dns_record::RecordType;
pub use document::{
    EthernetRecord, IcmpRecord, Ipv4Record, Ipv6Record, PacketDocument, TcpRecord, UdpRecord,
};
pub use errors::{DecodeError, DomainError};
pub use raw_frame::{format_capture_time, LinkType, RawFrame};
pub use rdata::{EdnsOptions, RecordData};
