//! Maps one resource record's RDATA to its [`RecordData`] projection.
//!
//! Dispatch order:
//! 1. OPT is handed to the EDNS extractor, whatever its length.
//! 2. Empty RDATA and type codes outside the catalogue map to the empty payload.
//! 3. Types hickory models are decoded by [`RData::read`].
//! 4. Everything else goes through the raw field decoders.
//!
//! RDATA bounds are checked by the section walker before this point, so a
//! payload that either decoder rejects degrades to the empty payload.

use super::edns;
use super::presentation::{
    base32hex, base64, character_string, hex_upper, name_to_string, signature_time,
};
use super::rdata_decoder::{self, RdataReader};
use ferrous_sniffer_domain::rdata::*;
use ferrous_sniffer_domain::{DecodeError, RecordData, RecordType};
use hickory_proto::dnssec::rdata::{DNSSECRData, SIG};
use hickory_proto::dnssec::PublicKey;
use hickory_proto::rr::{RData, RecordType as WireRecordType};
use hickory_proto::serialize::binary::{BinDecoder, Restrict};
use tracing::{debug, trace};

/// Fixed fields of a resource record plus where its RDATA begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordHeader {
    pub name: String,
    pub rtype: u16,
    pub class: u16,
    pub ttl: u32,
    pub rdlength: u16,
    pub rdata_offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodePath {
    Edns,
    Wire,
    Raw,
}

fn decode_path(record_type: RecordType) -> DecodePath {
    match record_type {
        RecordType::OPT => DecodePath::Edns,

        RecordType::A
        | RecordType::AAAA
        | RecordType::NS
        | RecordType::CNAME
        | RecordType::PTR
        | RecordType::ANAME
        | RecordType::MX
        | RecordType::SOA
        | RecordType::SRV
        | RecordType::NAPTR
        | RecordType::SVCB
        | RecordType::HTTPS
        | RecordType::TXT
        | RecordType::HINFO
        | RecordType::CAA
        | RecordType::CERT
        | RecordType::SSHFP
        | RecordType::TLSA
        | RecordType::OPENPGPKEY
        | RecordType::NULL
        | RecordType::DNSKEY
        | RecordType::CDNSKEY
        | RecordType::KEY
        | RecordType::DS
        | RecordType::CDS
        | RecordType::RRSIG
        | RecordType::SIG
        | RecordType::NSEC
        | RecordType::NSEC3
        | RecordType::NSEC3PARAM
        | RecordType::TSIG => DecodePath::Wire,

        RecordType::DNAME
        | RecordType::MB
        | RecordType::MD
        | RecordType::MF
        | RecordType::MG
        | RecordType::MR
        | RecordType::NSAPPTR
        | RecordType::KX
        | RecordType::RT
        | RecordType::AFSDB
        | RecordType::LP
        | RecordType::MINFO
        | RecordType::RP
        | RecordType::PX
        | RecordType::TALINK
        | RecordType::ZONEMD
        | RecordType::CSYNC
        | RecordType::URI
        | RecordType::LOC
        | RecordType::GPOS
        | RecordType::SPF
        | RecordType::AVC
        | RecordType::X25
        | RecordType::ISDN
        | RecordType::NINFO
        | RecordType::UINFO
        | RecordType::UID
        | RecordType::GID
        | RecordType::EUI48
        | RecordType::EUI64
        | RecordType::L32
        | RecordType::L64
        | RecordType::NID
        | RecordType::TA
        | RecordType::DLV
        | RecordType::SMIMEA
        | RecordType::DHCID => DecodePath::Raw,
    }
}

pub fn map_rdata(message: &[u8], header: &RecordHeader) -> Result<RecordData, DecodeError> {
    if header.rtype == RecordType::OPT.to_u16() {
        return edns_payload(message, header);
    }

    if header.rdlength == 0 {
        return Ok(RecordData::unknown());
    }

    let Some(record_type) = RecordType::from_u16(header.rtype) else {
        trace!(rtype = header.rtype, "Record type outside catalogue");
        return Ok(RecordData::unknown());
    };

    trace!(record_type = record_type.as_str(), "Mapping record data");

    let decoded = match decode_path(record_type) {
        DecodePath::Edns => return edns_payload(message, header),
        DecodePath::Wire => read_wire(message, header).map(|rdata| project_wire(&rdata)),
        DecodePath::Raw => RdataReader::new(message, header.rdata_offset, header.rdlength)
            .and_then(|reader| rdata_decoder::decode(record_type, reader)),
    };

    Ok(decoded.unwrap_or_else(|e| {
        debug!(
            record_type = record_type.as_str(),
            error = %e,
            "RDATA not decodable, emitting empty payload"
        );
        RecordData::unknown()
    }))
}

fn edns_payload(message: &[u8], header: &RecordHeader) -> Result<RecordData, DecodeError> {
    edns::extract(
        message,
        header.rdata_offset,
        header.class,
        header.ttl,
        header.rdlength,
    )
    .map(RecordData::OPT)
}

fn read_wire(message: &[u8], header: &RecordHeader) -> Result<RData, DecodeError> {
    let offset = u16::try_from(header.rdata_offset).map_err(|_| {
        DecodeError::MalformedMessage("RDATA offset beyond 64 KiB".to_string())
    })?;
    let mut decoder = BinDecoder::new(message).clone(offset);
    RData::read(
        &mut decoder,
        WireRecordType::from(header.rtype),
        Restrict::new(header.rdlength),
    )
    .map_err(|e| {
        DecodeError::MalformedMessage(format!(
            "{} record: {}",
            RecordType::name_of(header.rtype),
            e
        ))
    })
}

fn project_wire(rdata: &RData) -> RecordData {
    match rdata {
        RData::A(a) => RecordData::A(AddressData {
            address: a.0.to_string(),
        }),
        RData::AAAA(aaaa) => RecordData::AAAA(AddressData {
            address: aaaa.0.to_string(),
        }),
        RData::NS(ns) => RecordData::NS(TargetData {
            target: name_to_string(&ns.0),
        }),
        RData::CNAME(cname) => RecordData::CNAME(TargetData {
            target: name_to_string(&cname.0),
        }),
        RData::PTR(ptr) => RecordData::PTR(TargetData {
            target: name_to_string(&ptr.0),
        }),
        RData::ANAME(aname) => RecordData::ANAME(TargetData {
            target: name_to_string(&aname.0),
        }),
        RData::MX(mx) => RecordData::MX(ExchangeData {
            preference: mx.preference(),
            exchange: name_to_string(mx.exchange()),
        }),
        RData::SOA(soa) => RecordData::SOA(SoaData {
            mname: name_to_string(soa.mname()),
            rname: name_to_string(soa.rname()),
            serial: soa.serial(),
            refresh: soa.refresh() as u32,
            retry: soa.retry() as u32,
            expire: soa.expire() as u32,
            minimum: soa.minimum(),
        }),
        RData::SRV(srv) => RecordData::SRV(SrvData {
            priority: srv.priority(),
            weight: srv.weight(),
            port: srv.port(),
            target: name_to_string(srv.target()),
        }),
        RData::NAPTR(naptr) => RecordData::NAPTR(NaptrData {
            order: naptr.order(),
            preference: naptr.preference(),
            flags: character_string(naptr.flags()),
            service: character_string(naptr.services()),
            regexp: character_string(naptr.regexp()),
            replacement: name_to_string(naptr.replacement()),
        }),
        RData::SVCB(svcb) => RecordData::SVCB(service_binding(svcb)),
        RData::HTTPS(https) => RecordData::HTTPS(service_binding(&https.0)),
        RData::TXT(txt) => RecordData::TXT(TxtData {
            txt: txt
                .txt_data()
                .iter()
                .map(|s| character_string(s))
                .collect(),
        }),
        RData::HINFO(hinfo) => RecordData::HINFO(HinfoData {
            cpu: character_string(hinfo.cpu()),
            os: character_string(hinfo.os()),
        }),
        RData::CAA(caa) => RecordData::CAA(CaaData {
            flag: caa.flags(),
            tag: caa.tag().to_string(),
            value: String::from_utf8_lossy(caa.raw_value()).into_owned(),
        }),
        RData::CERT(cert) => RecordData::CERT(CertData {
            cert_type: u16::from(cert.cert_type()),
            key_tag: cert.key_tag(),
            algorithm: u8::from(cert.algorithm()),
            certificate: base64(&cert.cert_data()),
        }),
        RData::SSHFP(sshfp) => RecordData::SSHFP(SshfpData {
            algorithm: u8::from(sshfp.algorithm()),
            fingerprint_type: u8::from(sshfp.fingerprint_type()),
            fingerprint: hex_upper(sshfp.fingerprint()),
        }),
        RData::TLSA(tlsa) => RecordData::TLSA(TlsaData {
            usage: u8::from(tlsa.cert_usage()),
            selector: u8::from(tlsa.selector()),
            matching_type: u8::from(tlsa.matching()),
            certificate: hex_upper(tlsa.cert_data()),
        }),
        RData::OPENPGPKEY(key) => RecordData::OPENPGPKEY(OpenPgpKeyData {
            public_key: base64(key.public_key()),
        }),
        RData::NULL(null) => RecordData::NULL(NullData {
            data: hex_upper(null.anything()),
        }),
        RData::DNSSEC(dnssec) => project_dnssec(dnssec),
        other => {
            trace!(record_type = %other.record_type(), "No projection for decoded RDATA");
            RecordData::unknown()
        }
    }
}

fn project_dnssec(rdata: &DNSSECRData) -> RecordData {
    match rdata {
        DNSSECRData::DNSKEY(key) => RecordData::DNSKEY(KeyData {
            flags: key.flags(),
            protocol: 3,
            algorithm: u8::from(key.public_key().algorithm()),
            public_key: base64(key.public_key().public_bytes()),
        }),
        DNSSECRData::CDNSKEY(key) => {
            let public_key = key.public_key();
            RecordData::CDNSKEY(KeyData {
                flags: key.flags(),
                protocol: 3,
                algorithm: key.algorithm().map_or(0, u8::from),
                public_key: public_key
                    .as_ref()
                    .map(|k| base64(k.public_bytes()))
                    .unwrap_or_default(),
            })
        }
        DNSSECRData::KEY(key) => RecordData::KEY(KeyData {
            flags: key.flags(),
            protocol: u8::from(key.protocol()),
            algorithm: u8::from(key.algorithm()),
            public_key: base64(key.public_key()),
        }),
        DNSSECRData::DS(ds) => RecordData::DS(DsData {
            key_tag: ds.key_tag(),
            algorithm: u8::from(ds.algorithm()),
            digest_type: u8::from(ds.digest_type()),
            digest: hex_upper(ds.digest()),
        }),
        DNSSECRData::CDS(cds) => RecordData::CDS(DsData {
            key_tag: cds.key_tag(),
            algorithm: cds.algorithm().map_or(0, u8::from),
            digest_type: u8::from(cds.digest_type()),
            digest: hex_upper(cds.digest()),
        }),
        DNSSECRData::RRSIG(rrsig) => RecordData::RRSIG(signature(rrsig)),
        DNSSECRData::SIG(sig) => RecordData::SIG(signature(sig)),
        DNSSECRData::NSEC(nsec) => RecordData::NSEC(NsecData {
            next_domain: name_to_string(nsec.next_domain_name()),
            type_bit_map: nsec
                .type_bit_maps()
                .map(|rt| RecordType::name_of(u16::from(rt)))
                .collect(),
        }),
        DNSSECRData::NSEC3(nsec3) => RecordData::NSEC3(Nsec3Data {
            hash: u8::from(nsec3.hash_algorithm()),
            flags: nsec3.flags(),
            iterations: nsec3.iterations(),
            salt: salt(nsec3.salt()),
            next_domain: base32hex(nsec3.next_hashed_owner_name()),
            type_bit_map: nsec3
                .type_bit_maps()
                .map(|rt| RecordType::name_of(u16::from(rt)))
                .collect(),
        }),
        DNSSECRData::NSEC3PARAM(param) => RecordData::NSEC3PARAM(Nsec3ParamData {
            hash: u8::from(param.hash_algorithm()),
            flags: param.flags(),
            iterations: param.iterations(),
            salt: salt(param.salt()),
        }),
        DNSSECRData::TSIG(tsig) => RecordData::TSIG(TsigData {
            algorithm: name_to_string(&tsig.algorithm().to_name()),
            time_signed: tsig.time(),
            fudge: tsig.fudge(),
            mac: hex_upper(tsig.mac()),
        }),
        _ => RecordData::unknown(),
    }
}

fn signature(sig: &SIG) -> SigData {
    let input = sig.input();
    SigData {
        type_covered: RecordType::name_of(u16::from(input.type_covered)),
        algorithm: u8::from(input.algorithm),
        labels: input.num_labels,
        original_ttl: input.original_ttl,
        expiration: signature_time(input.sig_expiration.get()),
        inception: signature_time(input.sig_inception.get()),
        key_tag: input.key_tag,
        signer_name: name_to_string(&input.signer_name),
        signature: base64(sig.sig()),
    }
}

/// An empty salt is written as `-`.
fn salt(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        "-".to_string()
    } else {
        hex_upper(bytes)
    }
}

fn service_binding(svcb: &hickory_proto::rr::rdata::SVCB) -> SvcbData {
    SvcbData {
        priority: svcb.svc_priority(),
        target: name_to_string(svcb.target_name()),
        params: svcb
            .svc_params()
            .iter()
            .map(|(key, value)| {
                let value = value.to_string();
                let value = value.trim_end_matches(',');
                if value.is_empty() {
                    key.to_string()
                } else {
                    format!("{}={}", key, value)
                }
            })
            .collect(),
    }
}
