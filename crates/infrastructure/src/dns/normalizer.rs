use super::edns::extended_rcode_bits;
use super::presentation::name_to_string;
use super::record_mapper::{map_rdata, RecordHeader};
use ferrous_sniffer_domain::dns_record::{class_name, opcode_name, rcode_name};
use ferrous_sniffer_domain::{
    DecodeError, DnsFlags, DnsMessage, DnsQuestion, DnsResourceRecord, DnsSections, RecordType,
};
use hickory_proto::rr::Name;
use hickory_proto::serialize::binary::{BinDecodable, BinDecoder};
use tracing::trace;

const HEADER_LEN: usize = 12;

fn malformed(reason: impl std::fmt::Display) -> DecodeError {
    DecodeError::MalformedMessage(reason.to_string())
}

/// Section counts as announced by the header. They bound the walk but are not
/// trusted: a section ends early when the buffer runs out on a record boundary.
#[derive(Debug, Clone, Copy)]
struct HeaderCounts {
    questions: u16,
    answers: u16,
    authority: u16,
    additional: u16,
}

/// Decodes a DNS payload into its normalized [`DnsMessage`].
///
/// Any structural defect (a truncated header, a name or fixed field cut off
/// mid-record, RDATA running past the buffer, or RDATA the wire library
/// rejects) fails the whole message.
#[derive(Debug, Clone, Copy, Default)]
pub struct DnsNormalizer;

impl DnsNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, payload: &[u8]) -> Result<DnsMessage, DecodeError> {
        if payload.len() < HEADER_LEN {
            return Err(malformed(format!(
                "header needs {} octets, got {}",
                HEADER_LEN,
                payload.len()
            )));
        }

        let id = u16::from_be_bytes([payload[0], payload[1]]);
        let flags = DnsFlags::from_header_bytes(payload[2], payload[3]);
        let opcode = (payload[2] >> 3) & 0x0F;
        let rcode_low = u16::from(payload[3] & 0x0F);
        let counts = HeaderCounts {
            questions: u16::from_be_bytes([payload[4], payload[5]]),
            answers: u16::from_be_bytes([payload[6], payload[7]]),
            authority: u16::from_be_bytes([payload[8], payload[9]]),
            additional: u16::from_be_bytes([payload[10], payload[11]]),
        };

        let mut decoder = BinDecoder::new(payload);
        decoder.read_slice(HEADER_LEN).map_err(malformed)?;

        let mut walker = SectionWalker {
            message: payload,
            decoder,
            extended_rcode: None,
        };

        let sections = DnsSections {
            questions: walker.questions(counts.questions)?,
            answers: walker.records(counts.answers)?,
            authority: walker.records(counts.authority)?,
            additional: walker.records(counts.additional)?,
        };

        let rcode = match walker.extended_rcode {
            Some(upper) => (upper << 4) | rcode_low,
            None => rcode_low,
        };

        trace!(
            id,
            questions = sections.questions.len(),
            answers = sections.answers.len(),
            authority = sections.authority.len(),
            additional = sections.additional.len(),
            "DNS message normalized"
        );

        Ok(DnsMessage::new(
            id,
            opcode_name(opcode),
            flags,
            rcode_name(rcode),
            sections,
        ))
    }
}

struct SectionWalker<'a> {
    message: &'a [u8],
    decoder: BinDecoder<'a>,
    extended_rcode: Option<u16>,
}

impl<'a> SectionWalker<'a> {
    fn questions(&mut self, count: u16) -> Result<Vec<DnsQuestion>, DecodeError> {
        let mut questions = Vec::with_capacity(usize::from(count).min(64));
        for _ in 0..count {
            if self.decoder.is_empty() {
                break;
            }
            let name = self.name()?;
            let qtype = self.u16("question type")?;
            let qclass = self.u16("question class")?;
            questions.push(DnsQuestion {
                name,
                qtype: RecordType::name_of(qtype),
                qclass: class_name(qclass),
            });
        }
        Ok(questions)
    }

    fn records(&mut self, count: u16) -> Result<Vec<DnsResourceRecord>, DecodeError> {
        let mut records = Vec::with_capacity(usize::from(count).min(64));
        for _ in 0..count {
            if self.decoder.is_empty() {
                break;
            }
            records.push(self.record()?);
        }
        Ok(records)
    }

    fn record(&mut self) -> Result<DnsResourceRecord, DecodeError> {
        let name = self.name()?;
        let rtype = self.u16("record type")?;
        let class = self.u16("record class")?;
        let ttl = self
            .decoder
            .read_u32()
            .map_err(|e| malformed(format!("record TTL: {}", e)))?
            .unverified();
        let rdlength = self.u16("RDATA length")?;
        let rdata_offset = self.decoder.index();
        self.decoder
            .read_slice(usize::from(rdlength))
            .map_err(|e| malformed(format!("RDATA of {}: {}", name, e)))?;

        let header = RecordHeader {
            name,
            rtype,
            class,
            ttl,
            rdlength,
            rdata_offset,
        };
        let rdata = map_rdata(self.message, &header)?;

        if rtype == RecordType::OPT.to_u16() && self.extended_rcode.is_none() {
            self.extended_rcode = Some(extended_rcode_bits(ttl));
        }

        Ok(DnsResourceRecord {
            name: header.name,
            rtype: RecordType::name_of(rtype),
            class: class_name(class),
            ttl,
            rdata_length: rdlength,
            rdata,
        })
    }

    fn name(&mut self) -> Result<String, DecodeError> {
        let name =
            Name::read(&mut self.decoder).map_err(|e| malformed(format!("name: {}", e)))?;
        Ok(name_to_string(&name))
    }

    fn u16(&mut self, field: &str) -> Result<u16, DecodeError> {
        self.decoder
            .read_u16()
            .map(|v| v.unverified())
            .map_err(|e| malformed(format!("{}: {}", field, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrous_sniffer_domain::RecordData;

    fn query(id: u16, qdcount: u16) -> Vec<u8> {
        let mut msg = id.to_be_bytes().to_vec();
        msg.extend_from_slice(&[0x01, 0x00]);
        msg.extend_from_slice(&qdcount.to_be_bytes());
        msg.extend_from_slice(&[0, 0, 0, 0, 0, 0]);
        msg
    }

    fn push_name(msg: &mut Vec<u8>, labels: &[&str]) {
        for label in labels {
            msg.push(label.len() as u8);
            msg.extend_from_slice(label.as_bytes());
        }
        msg.push(0);
    }

    #[test]
    fn test_short_header_is_malformed() {
        let err = DnsNormalizer::new().normalize(&[0u8; 11]).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedMessage(_)));
    }

    #[test]
    fn test_query_header_and_question() {
        let mut msg = query(0x1234, 1);
        push_name(&mut msg, &["example", "com"]);
        msg.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);

        let dns = DnsNormalizer::new().normalize(&msg).unwrap();
        assert_eq!(dns.id, 0x1234);
        assert_eq!(dns.opcode, "QUERY");
        assert_eq!(dns.rcode, "NOERROR");
        assert_eq!(dns.flags, vec!["QR", "RD"]);
        assert_eq!(dns.question_count, 1);
        assert_eq!(dns.questions[0].name, "example.com");
        assert_eq!(dns.questions[0].qtype, "A");
        assert_eq!(dns.questions[0].qclass, "IN");
    }

    #[test]
    fn test_overstated_counts_stop_at_end_of_buffer() {
        let mut msg = query(1, 3);
        push_name(&mut msg, &["example", "com"]);
        msg.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);

        let dns = DnsNormalizer::new().normalize(&msg).unwrap();
        assert_eq!(dns.question_count, 1);
        assert_eq!(dns.questions.len(), 1);
    }

    #[test]
    fn test_question_cut_mid_record_is_malformed() {
        let mut msg = query(1, 1);
        push_name(&mut msg, &["example", "com"]);
        msg.extend_from_slice(&[0x00, 0x01, 0x00]);
        assert!(DnsNormalizer::new().normalize(&msg).is_err());
    }

    #[test]
    fn test_extended_rcode_from_opt() {
        let mut msg = query(7, 0);
        msg[3] = 0x06;
        msg[11] = 1;
        msg.push(0); // root owner
        msg.extend_from_slice(&41u16.to_be_bytes());
        msg.extend_from_slice(&1232u16.to_be_bytes());
        msg.extend_from_slice(&0x0100_0000u32.to_be_bytes());
        msg.extend_from_slice(&0u16.to_be_bytes());

        let dns = DnsNormalizer::new().normalize(&msg).unwrap();
        // (1 << 4) | 6 = 22
        assert_eq!(dns.rcode, rcode_name(22));
        assert_eq!(dns.additional_rrs[0].name, ".");
        assert_eq!(dns.additional_rrs[0].rtype, "OPT");
        assert!(matches!(dns.additional_rrs[0].rdata, RecordData::OPT(_)));
    }
}
