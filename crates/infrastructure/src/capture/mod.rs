pub mod pcap_source;

pub use pcap_source::PcapFileSource;
