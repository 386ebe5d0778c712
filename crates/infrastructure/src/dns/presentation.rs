//! Text renderings shared by the record projections.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::DateTime;
use ferrous_sniffer_domain::RecordType;
use hickory_proto::rr::Name;

const BASE32HEX_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHIJKLMNOPQRSTUV";

/// Owner and target names drop the trailing dot; the root stays `.`.
pub fn name_to_string(name: &Name) -> String {
    if name.is_root() {
        return ".".to_string();
    }
    let ascii = name.to_ascii();
    match ascii.strip_suffix('.') {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => ascii,
    }
}

pub fn hex_upper(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}

pub fn base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Unpadded base32 with the extended hex alphabet (RFC 4648 section 7).
pub fn base32hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(5) * 8);
    for chunk in bytes.chunks(5) {
        let mut buf = [0u8; 5];
        buf[..chunk.len()].copy_from_slice(chunk);
        let bits = buf.iter().fold(0u64, |acc, b| (acc << 8) | u64::from(*b));
        let symbols = (chunk.len() * 8).div_ceil(5);
        for i in 0..symbols {
            let index = (bits >> (35 - i * 5)) & 0x1F;
            out.push(char::from(BASE32HEX_ALPHABET[index as usize]));
        }
    }
    out
}

/// Renders a `<character-string>`: printable ASCII as-is, `"` and `\`
/// escaped, everything else as `\DDD`.
pub fn character_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        match b {
            b'"' | b'\\' => {
                out.push('\\');
                out.push(char::from(b));
            }
            0x20..=0x7E => out.push(char::from(b)),
            _ => out.push_str(&format!("\\{:03}", b)),
        }
    }
    out
}

/// RRSIG validity timestamps in the `YYYYMMDDHHmmSS` form of RFC 4034.
pub fn signature_time(seconds: u32) -> String {
    match DateTime::from_timestamp(i64::from(seconds), 0) {
        Some(ts) => ts.format("%Y%m%d%H%M%S").to_string(),
        None => seconds.to_string(),
    }
}

pub fn type_names<I>(codes: I) -> Vec<String>
where
    I: IntoIterator<Item = u16>,
{
    codes.into_iter().map(RecordType::name_of).collect()
}

/// Decodes an RFC 4034 section 4.1.2 type bit map into type codes.
pub fn decode_type_bit_map(mut data: &[u8]) -> Option<Vec<u16>> {
    let mut codes = Vec::new();
    while !data.is_empty() {
        let window = *data.first()?;
        let length = usize::from(*data.get(1)?);
        if length == 0 || length > 32 {
            return None;
        }
        let bitmap = data.get(2..2 + length)?;
        for (octet_index, octet) in bitmap.iter().enumerate() {
            for bit in 0..8u16 {
                if octet & (0x80 >> bit) != 0 {
                    let code = u16::from(window) * 256 + octet_index as u16 * 8 + bit;
                    codes.push(code);
                }
            }
        }
        data = &data[2 + length..];
    }
    Some(codes)
}
