#![allow(dead_code)]
use ferrous_sniffer_domain::rdata::AddressData;
use ferrous_sniffer_domain::{DnsResourceRecord, RecordData};

pub struct ResourceRecordBuilder {
    name: String,
    rtype: String,
    class: String,
    ttl: u32,
    rdata_length: u16,
    rdata: RecordData,
}

impl ResourceRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.com".to_string(),
            rtype: "A".to_string(),
            class: "IN".to_string(),
            ttl: 300,
            rdata_length: 4,
            rdata: RecordData::A(AddressData {
                address: "93.184.216.34".to_string(),
            }),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn rtype(mut self, rtype: &str) -> Self {
        self.rtype = rtype.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn rdata(mut self, rdata: RecordData, rdata_length: u16) -> Self {
        self.rdata = rdata;
        self.rdata_length = rdata_length;
        self
    }

    pub fn build(self) -> DnsResourceRecord {
        DnsResourceRecord {
            name: self.name,
            rtype: self.rtype,
            class: self.class,
            ttl: self.ttl,
            rdata_length: self.rdata_length,
            rdata: self.rdata,
        }
    }
}
