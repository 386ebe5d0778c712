use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ferrous_sniffer_application::ports::FrameSource;
use ferrous_sniffer_domain::{DomainError, LinkType, RawFrame};
use pcap_file::pcap::PcapReader;
use pcap_file::DataLink;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Reads frames from a classic libpcap capture, in file order.
pub struct PcapFileSource<R: Read = BufReader<File>> {
    reader: Mutex<PcapReader<R>>,
    link_type: LinkType,
    label: String,
}

impl PcapFileSource<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            DomainError::CaptureError(format!("Failed to open {}: {}", path.display(), e))
        })?;
        let source = Self::from_reader(BufReader::new(file), path.display().to_string())?;

        info!(
            path = %path.display(),
            link_type = %source.link_type,
            "Capture file opened"
        );

        Ok(source)
    }
}

impl<R: Read> PcapFileSource<R> {
    pub fn from_reader(reader: R, label: impl Into<String>) -> Result<Self, DomainError> {
        let label = label.into();
        let reader = PcapReader::new(reader)
            .map_err(|e| DomainError::CaptureError(format!("{}: {}", label, e)))?;
        let link_type = link_type_of(reader.header().datalink)?;

        Ok(Self {
            reader: Mutex::new(reader),
            link_type,
            label,
        })
    }

    pub fn link_type(&self) -> LinkType {
        self.link_type
    }
}

fn link_type_of(datalink: DataLink) -> Result<LinkType, DomainError> {
    match datalink {
        DataLink::ETHERNET => Ok(LinkType::Ethernet),
        DataLink::RAW | DataLink::IPV4 | DataLink::IPV6 => Ok(LinkType::RawIp),
        other => Err(DomainError::UnsupportedLinkType(format!("{:?}", other))),
    }
}

#[async_trait]
impl<R: Read + Send> FrameSource for PcapFileSource<R> {
    async fn next_frame(&self) -> Result<Option<RawFrame>, DomainError> {
        let mut reader = self.reader.lock().await;
        let packet = match reader.next_packet() {
            None => {
                debug!(source = %self.label, "Capture exhausted");
                return Ok(None);
            }
            Some(result) => {
                result.map_err(|e| DomainError::CaptureError(format!("{}: {}", self.label, e)))?
            }
        };

        let timestamp = DateTime::<Utc>::from_timestamp(
            packet.timestamp.as_secs() as i64,
            packet.timestamp.subsec_nanos(),
        )
        .ok_or_else(|| {
            DomainError::CaptureError(format!(
                "{}: timestamp out of range ({:?})",
                self.label, packet.timestamp
            ))
        })?;

        Ok(Some(RawFrame::new(
            timestamp,
            self.link_type,
            packet.data.into_owned(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcap_file::pcap::{PcapHeader, PcapPacket, PcapWriter};
    use std::io::Cursor;
    use std::time::Duration;

    fn capture(datalink: DataLink, frames: &[&[u8]]) -> Vec<u8> {
        let header = PcapHeader {
            datalink,
            ..Default::default()
        };
        let mut writer = PcapWriter::with_header(Vec::new(), header).unwrap();
        for (i, data) in frames.iter().enumerate() {
            let packet = PcapPacket::new(
                Duration::new(1_700_000_000 + i as u64, 500_000_000),
                data.len() as u32,
                data,
            );
            writer.write_packet(&packet).unwrap();
        }
        writer.into_writer()
    }

    #[tokio::test]
    async fn test_frames_in_file_order_then_exhausted() {
        let bytes = capture(DataLink::ETHERNET, &[&[1, 2, 3], &[4, 5]]);
        let source = PcapFileSource::from_reader(Cursor::new(bytes), "memory").unwrap();
        assert_eq!(source.link_type(), LinkType::Ethernet);

        let first = source.next_frame().await.unwrap().unwrap();
        assert_eq!(first.data, vec![1, 2, 3]);
        assert_eq!(first.timestamp.timestamp(), 1_700_000_000);
        assert_eq!(first.timestamp.timestamp_subsec_millis(), 500);

        let second = source.next_frame().await.unwrap().unwrap();
        assert_eq!(second.data, vec![4, 5]);

        assert!(source.next_frame().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_raw_ip_link_type() {
        let bytes = capture(DataLink::RAW, &[]);
        let source = PcapFileSource::from_reader(Cursor::new(bytes), "memory").unwrap();
        assert_eq!(source.link_type(), LinkType::RawIp);
    }

    #[test]
    fn test_unsupported_link_type() {
        let bytes = capture(DataLink::IEEE802_11, &[]);
        let result = PcapFileSource::from_reader(Cursor::new(bytes), "memory");
        assert!(matches!(result, Err(DomainError::UnsupportedLinkType(_))));
    }

    #[test]
    fn test_not_a_capture() {
        let result = PcapFileSource::from_reader(Cursor::new(vec![0u8; 8]), "memory");
        assert!(matches!(result, Err(DomainError::CaptureError(_))));
    }
}
