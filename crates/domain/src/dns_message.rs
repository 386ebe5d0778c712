use crate::rdata::RecordData;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DnsMessage {
    pub id: u16,
    pub opcode: String,
    pub flags: Vec<&'static str>,
    pub rcode: String,
    pub question_count: usize,
    pub answer_count: usize,
    pub authority_count: usize,
    pub additional_count: usize,
    pub questions: Vec<DnsQuestion>,
    pub answer_rrs: Vec<DnsResourceRecord>,
    pub authority_rrs: Vec<DnsResourceRecord>,
    pub additional_rrs: Vec<DnsResourceRecord>,
}

impl DnsMessage {
    /// Builds a message whose counts always mirror the section lengths.
    pub fn new(id: u16, opcode: String, flags: DnsFlags, rcode: String, sections: DnsSections) -> Self {
        let DnsSections {
            questions,
            answers,
            authority,
            additional,
        } = sections;

        Self {
            id,
            opcode,
            flags: flags.names(),
            rcode,
            question_count: questions.len(),
            answer_count: answers.len(),
            authority_count: authority.len(),
            additional_count: additional.len(),
            questions,
            answer_rrs: answers,
            authority_rrs: authority,
            additional_rrs: additional,
        }
    }
}

/// The four decoded sections of a message, in wire order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DnsSections {
    pub questions: Vec<DnsQuestion>,
    pub answers: Vec<DnsResourceRecord>,
    pub authority: Vec<DnsResourceRecord>,
    pub additional: Vec<DnsResourceRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsQuestion {
    pub name: String,
    #[serde(rename = "type")]
    pub qtype: String,
    #[serde(rename = "class")]
    pub qclass: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DnsResourceRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub rtype: String,
    pub class: String,
    pub ttl: u32,
    pub rdata_length: u16,
    pub rdata: RecordData,
}

/// Header flag bits as carried in octets 2 and 3 of a DNS message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DnsFlags {
    pub response: bool,
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub zero: bool,
    pub authentic_data: bool,
    pub checking_disabled: bool,
}

impl DnsFlags {
    pub fn from_header_bytes(high: u8, low: u8) -> Self {
        Self {
            response: high & 0x80 != 0,
            authoritative: high & 0x04 != 0,
            truncated: high & 0x02 != 0,
            recursion_desired: high & 0x01 != 0,
            recursion_available: low & 0x80 != 0,
            zero: low & 0x40 != 0,
            authentic_data: low & 0x20 != 0,
            checking_disabled: low & 0x10 != 0,
        }
    }

    /// Rendered in the fixed order QR, AA, TC, RD, RA, Z, AD, CD.
    /// `QR` marks a query: it is listed when the response bit is clear.
    pub fn names(&self) -> Vec<&'static str> {
        [
            (!self.response, "QR"),
            (self.authoritative, "AA"),
            (self.truncated, "TC"),
            (self.recursion_desired, "RD"),
            (self.recursion_available, "RA"),
            (self.zero, "Z"),
            (self.authentic_data, "AD"),
            (self.checking_disabled, "CD"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }
}
