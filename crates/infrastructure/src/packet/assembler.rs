use super::captured::CapturedPacket;
use super::projectors::{
    project_ethernet, project_icmpv4, project_icmpv6, project_ipv4, project_ipv6, project_tcp,
    project_udp,
};
use crate::dns::DnsNormalizer;
use ferrous_sniffer_application::ports::PacketNormalizer;
use ferrous_sniffer_domain::{
    format_capture_time, DecodeError, DomainError, PacketDocument, RawFrame,
};
use tracing::trace;

/// Builds the document for one packet. A DNS payload that fails to normalise
/// fails the whole packet; no partial document is produced.
pub fn assemble(packet: &CapturedPacket) -> Result<PacketDocument, DecodeError> {
    let dns = match &packet.dns {
        Some(payload) => Some(DnsNormalizer::new().normalize(payload)?),
        None => None,
    };

    let mut document = PacketDocument::new(format_capture_time(&packet.timestamp));
    document.ethernet = packet
        .ethernet
        .as_ref()
        .map(|h| project_ethernet(h, packet.frame_len));
    document.ipv4 = packet.ipv4.as_ref().map(project_ipv4);
    document.ipv6 = packet.ipv6.as_ref().map(project_ipv6);
    document.icmpv4 = packet.icmpv4.as_ref().map(project_icmpv4);
    document.icmpv6 = packet.icmpv6.as_ref().map(project_icmpv6);
    document.udp = packet.udp.as_ref().map(project_udp);
    document.tcp = packet.tcp.as_ref().map(project_tcp);
    document.dns = dns;

    Ok(document)
}

/// [`PacketNormalizer`] over raw link-layer frames.
pub struct FrameNormalizer {
    dns_ports: Vec<u16>,
}

impl FrameNormalizer {
    pub fn new(dns_ports: Vec<u16>) -> Self {
        Self { dns_ports }
    }
}

impl PacketNormalizer for FrameNormalizer {
    fn normalize(&self, frame: &RawFrame) -> Result<PacketDocument, DomainError> {
        let packet = CapturedPacket::from_frame(frame, &self.dns_ports)?;
        let document = assemble(&packet)?;

        trace!(
            frame_len = packet.frame_len,
            has_dns = document.dns.is_some(),
            "Frame assembled"
        );

        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_packet_without_layers_has_only_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        let document = assemble(&CapturedPacket::new(ts, 0)).unwrap();
        assert_eq!(document.timestamp, "2024-05-01 08:30:00.000000000 +0000 UTC");
        assert_eq!(document.layer_names(), vec!["timestamp"]);
    }

    #[test]
    fn test_bad_dns_fails_whole_packet() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        let mut packet = CapturedPacket::new(ts, 0);
        packet.dns = Some(vec![0x00, 0x01, 0x02]);
        assert!(matches!(
            assemble(&packet),
            Err(DecodeError::MalformedMessage(_))
        ));
    }
}
