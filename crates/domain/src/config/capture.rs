use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CaptureConfig {
    /// pcap file to replay
    #[serde(default)]
    pub input: Option<String>,

    /// Transport ports whose payload is decoded as DNS
    #[serde(default = "default_dns_ports")]
    pub dns_ports: Vec<u16>,

    /// Stop after this many frames
    #[serde(default)]
    pub max_packets: Option<u64>,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            input: None,
            dns_ports: default_dns_ports(),
            max_packets: None,
        }
    }
}

fn default_dns_ports() -> Vec<u16> {
    vec![53, 5353]
}
