//! Field-level decoding for record types the wire library does not model.
//!
//! Each decoder reads from an [`RdataReader`] positioned at the start of the
//! RDATA inside the full message, so compressed names resolve against the
//! whole packet. A decoder that runs past the RDATA or finds trailing octets
//! reports an error; the mapper turns that into the empty payload.

use super::presentation::{
    base64, character_string, decode_type_bit_map, hex_upper, name_to_string, type_names,
};
use ferrous_sniffer_domain::rdata::*;
use ferrous_sniffer_domain::{DecodeError, RecordData, RecordType};
use hickory_proto::rr::Name;
use hickory_proto::serialize::binary::{BinDecodable, BinDecoder};
use std::net::Ipv4Addr;

/// Bounded cursor over one record's RDATA.
pub struct RdataReader<'a> {
    decoder: BinDecoder<'a>,
    end: usize,
}

impl<'a> RdataReader<'a> {
    pub fn new(message: &'a [u8], offset: usize, length: u16) -> Result<Self, DecodeError> {
        let end = offset + usize::from(length);
        if end > message.len() || offset > usize::from(u16::MAX) {
            return Err(invalid("RDATA extends past the end of the message"));
        }
        let decoder = BinDecoder::new(message).clone(offset as u16);
        Ok(Self { decoder, end })
    }

    fn remaining(&self) -> usize {
        self.end.saturating_sub(self.decoder.index())
    }

    fn ensure(&self, needed: usize) -> Result<(), DecodeError> {
        if self.remaining() < needed {
            return Err(invalid("RDATA field runs past the record"));
        }
        Ok(())
    }

    pub fn u8(&mut self) -> Result<u8, DecodeError> {
        self.ensure(1)?;
        self.decoder
            .read_u8()
            .map(|v| v.unverified())
            .map_err(invalid)
    }

    pub fn u16(&mut self) -> Result<u16, DecodeError> {
        self.ensure(2)?;
        self.decoder
            .read_u16()
            .map(|v| v.unverified())
            .map_err(invalid)
    }

    pub fn u32(&mut self) -> Result<u32, DecodeError> {
        self.ensure(4)?;
        self.decoder
            .read_u32()
            .map(|v| v.unverified())
            .map_err(invalid)
    }

    pub fn bytes(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        self.ensure(len)?;
        self.decoder
            .read_slice(len)
            .map(|v| v.unverified())
            .map_err(invalid)
    }

    pub fn rest(&mut self) -> Result<&'a [u8], DecodeError> {
        let len = self.remaining();
        self.bytes(len)
    }

    pub fn name(&mut self) -> Result<String, DecodeError> {
        let name = Name::read(&mut self.decoder).map_err(invalid)?;
        if self.decoder.index() > self.end {
            return Err(invalid("domain name runs past the record"));
        }
        Ok(name_to_string(&name))
    }

    pub fn character_string(&mut self) -> Result<String, DecodeError> {
        let len = usize::from(self.u8()?);
        Ok(character_string(self.bytes(len)?))
    }

    pub fn character_strings(&mut self) -> Result<Vec<String>, DecodeError> {
        let mut out = Vec::new();
        while !self.is_done() {
            out.push(self.character_string()?);
        }
        Ok(out)
    }

    pub fn is_done(&self) -> bool {
        self.remaining() == 0
    }

    fn finish(self, data: RecordData) -> Result<RecordData, DecodeError> {
        if !self.is_done() {
            return Err(invalid("trailing octets after RDATA fields"));
        }
        Ok(data)
    }
}

fn invalid(reason: impl std::fmt::Display) -> DecodeError {
    DecodeError::MalformedMessage(reason.to_string())
}

/// Decodes `record_type` from `reader`. Types handled elsewhere yield the
/// empty payload.
pub fn decode(record_type: RecordType, mut reader: RdataReader<'_>) -> Result<RecordData, DecodeError> {
    let data = match record_type {
        RecordType::DNAME => RecordData::DNAME(target(&mut reader)?),
        RecordType::MB => RecordData::MB(target(&mut reader)?),
        RecordType::MD => RecordData::MD(target(&mut reader)?),
        RecordType::MF => RecordData::MF(target(&mut reader)?),
        RecordType::MG => RecordData::MG(target(&mut reader)?),
        RecordType::MR => RecordData::MR(target(&mut reader)?),
        RecordType::NSAPPTR => RecordData::NSAPPTR(target(&mut reader)?),

        RecordType::KX => RecordData::KX(exchange(&mut reader)?),
        RecordType::RT => RecordData::RT(exchange(&mut reader)?),
        RecordType::AFSDB => RecordData::AFSDB(exchange(&mut reader)?),
        RecordType::LP => RecordData::LP(LpData {
            preference: reader.u16()?,
            fqdn: reader.name()?,
        }),
        RecordType::MINFO => RecordData::MINFO(MinfoData {
            rmailbx: reader.name()?,
            emailbx: reader.name()?,
        }),
        RecordType::RP => RecordData::RP(RpData {
            mbox: reader.name()?,
            txt: reader.name()?,
        }),
        RecordType::PX => RecordData::PX(PxData {
            preference: reader.u16()?,
            map822: reader.name()?,
            mapx400: reader.name()?,
        }),
        RecordType::TALINK => RecordData::TALINK(TalinkData {
            previous_name: reader.name()?,
            next_name: reader.name()?,
        }),

        RecordType::ZONEMD => RecordData::ZONEMD(ZonemdData {
            serial: reader.u32()?,
            scheme: reader.u8()?,
            hash_algorithm: reader.u8()?,
            digest: hex_upper(reader.rest()?),
        }),
        RecordType::CSYNC => {
            let serial = reader.u32()?;
            let flags = reader.u16()?;
            let codes = decode_type_bit_map(reader.rest()?)
                .ok_or_else(|| invalid("malformed type bit map"))?;
            RecordData::CSYNC(CsyncData {
                serial,
                flags,
                type_bit_map: type_names(codes),
            })
        }

        RecordType::URI => RecordData::URI(UriData {
            priority: reader.u16()?,
            weight: reader.u16()?,
            target: String::from_utf8_lossy(reader.rest()?).into_owned(),
        }),
        RecordType::LOC => RecordData::LOC(location(&mut reader)?),
        RecordType::GPOS => RecordData::GPOS(GposData {
            longitude: reader.character_string()?,
            latitude: reader.character_string()?,
            altitude: reader.character_string()?,
        }),

        RecordType::SPF => RecordData::SPF(TxtData {
            txt: reader.character_strings()?,
        }),
        RecordType::AVC => RecordData::AVC(TxtData {
            txt: reader.character_strings()?,
        }),
        RecordType::X25 => RecordData::X25(X25Data {
            psdn_address: reader.character_string()?,
        }),
        RecordType::ISDN => {
            let address = reader.character_string()?;
            let sub_address = if reader.is_done() {
                String::new()
            } else {
                reader.character_string()?
            };
            RecordData::ISDN(IsdnData {
                address,
                sub_address,
            })
        }
        RecordType::NINFO => RecordData::NINFO(NinfoData {
            zs_data: reader.character_strings()?,
        }),
        RecordType::UINFO => RecordData::UINFO(UinfoData {
            uinfo: character_string(reader.rest()?),
        }),
        RecordType::UID => RecordData::UID(IdData { id: reader.u32()? }),
        RecordType::GID => RecordData::GID(IdData { id: reader.u32()? }),

        RecordType::EUI48 => RecordData::EUI48(AddressData {
            address: dashed_hex(reader.bytes(6)?),
        }),
        RecordType::EUI64 => RecordData::EUI64(AddressData {
            address: dashed_hex(reader.bytes(8)?),
        }),
        RecordType::L32 => {
            let preference = reader.u16()?;
            let octets = reader.bytes(4)?;
            let locator = Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3]);
            RecordData::L32(L32Data {
                preference,
                locator32: locator.to_string(),
            })
        }
        RecordType::L64 => RecordData::L64(L64Data {
            preference: reader.u16()?,
            locator64: node_identifier(reader.bytes(8)?),
        }),
        RecordType::NID => RecordData::NID(NidData {
            preference: reader.u16()?,
            node_id: node_identifier(reader.bytes(8)?),
        }),

        RecordType::TA => RecordData::TA(delegation_signer(&mut reader)?),
        RecordType::DLV => RecordData::DLV(delegation_signer(&mut reader)?),
        RecordType::SMIMEA => RecordData::SMIMEA(TlsaData {
            usage: reader.u8()?,
            selector: reader.u8()?,
            matching_type: reader.u8()?,
            certificate: hex_upper(reader.rest()?),
        }),
        RecordType::DHCID => RecordData::DHCID(DhcidData {
            digest: base64(reader.rest()?),
        }),

        _ => return Ok(RecordData::unknown()),
    };

    reader.finish(data)
}

fn target(reader: &mut RdataReader<'_>) -> Result<TargetData, DecodeError> {
    Ok(TargetData {
        target: reader.name()?,
    })
}

fn exchange(reader: &mut RdataReader<'_>) -> Result<ExchangeData, DecodeError> {
    Ok(ExchangeData {
        preference: reader.u16()?,
        exchange: reader.name()?,
    })
}

fn delegation_signer(reader: &mut RdataReader<'_>) -> Result<DsData, DecodeError> {
    Ok(DsData {
        key_tag: reader.u16()?,
        algorithm: reader.u8()?,
        digest_type: reader.u8()?,
        digest: hex_upper(reader.rest()?),
    })
}

fn dashed_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join("-")
}

/// ILNP 64-bit identifiers are written as four colon-separated hex groups.
fn node_identifier(bytes: &[u8]) -> String {
    bytes
        .chunks(2)
        .map(|pair| format!("{:02x}{:02x}", pair[0], pair.get(1).copied().unwrap_or(0)))
        .collect::<Vec<_>>()
        .join(":")
}

const LOC_EQUATOR: i64 = 1 << 31;
const LOC_ALTITUDE_BASE: i64 = 10_000_000;

fn location(reader: &mut RdataReader<'_>) -> Result<LocData, DecodeError> {
    let version = reader.u8()?;
    if version != 0 {
        return Err(invalid(format!("unsupported LOC version {}", version)));
    }
    let size = reader.u8()?;
    let horiz_pre = reader.u8()?;
    let vert_pre = reader.u8()?;
    let latitude = reader.u32()?;
    let longitude = reader.u32()?;
    let altitude = reader.u32()?;

    Ok(LocData {
        version,
        size: precision(size),
        horiz_pre: precision(horiz_pre),
        vert_pre: precision(vert_pre),
        latitude: coordinate(latitude, 'N', 'S'),
        longitude: coordinate(longitude, 'E', 'W'),
        altitude: centimeters(i64::from(altitude) - LOC_ALTITUDE_BASE),
    })
}

/// RFC 1876 size/precision octet: mantissa in the high nibble, power of ten
/// in the low nibble, in centimeters.
fn precision(value: u8) -> String {
    let mantissa = i64::from(value >> 4);
    let exponent = u32::from(value & 0x0F).min(9);
    centimeters(mantissa * 10i64.pow(exponent))
}

fn centimeters(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let abs = value.abs();
    format!("{}{}.{:02}m", sign, abs / 100, abs % 100)
}

fn coordinate(raw: u32, positive: char, negative: char) -> String {
    let offset = i64::from(raw) - LOC_EQUATOR;
    let hemisphere = if offset < 0 { negative } else { positive };
    let mut rest = offset.abs();
    let degrees = rest / 3_600_000;
    rest %= 3_600_000;
    let minutes = rest / 60_000;
    rest %= 60_000;
    format!(
        "{} {} {}.{:03} {}",
        degrees,
        minutes,
        rest / 1000,
        rest % 1000,
        hemisphere
    )
}
