pub mod edns;
pub mod normalizer;
pub mod presentation;
pub mod rdata_decoder;
pub mod record_mapper;

pub use normalizer::DnsNormalizer;
pub use record_mapper::{map_rdata, RecordHeader};
