use clap::Parser;
use ferrous_sniffer_application::use_cases::NormalizeCaptureUseCase;
use ferrous_sniffer_domain::config::OutputFormat;
use ferrous_sniffer_domain::CliOverrides;
use ferrous_sniffer_infrastructure::capture::PcapFileSource;
use ferrous_sniffer_infrastructure::output::JsonConsoleSink;
use ferrous_sniffer_infrastructure::packet::FrameNormalizer;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

mod bootstrap;

#[derive(Parser)]
#[command(name = "ferrous-sniffer")]
#[command(version)]
#[command(about = "Ferrous Sniffer - Normalizes captured packets and DNS messages into JSON documents")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// pcap file to read
    #[arg(short = 'i', long, value_name = "FILE")]
    input: Option<String>,

    /// Output format (pretty, compact)
    #[arg(short = 'f', long)]
    format: Option<OutputFormat>,

    /// Output destination: `stdout` or a file path
    #[arg(short = 'o', long, value_name = "DEST")]
    output: Option<String>,

    /// Transport port carrying DNS (repeatable)
    #[arg(short = 'p', long = "dns-port", value_name = "PORT")]
    dns_ports: Vec<u16>,

    /// Stop after this many frames
    #[arg(short = 'n', long)]
    max_packets: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        input: cli.input,
        dns_ports: (!cli.dns_ports.is_empty()).then_some(cli.dns_ports),
        max_packets: cli.max_packets,
        output_format: cli.format,
        output_destination: cli.output,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config.logging);

    info!("Starting Ferrous Sniffer v{}", env!("CARGO_PKG_VERSION"));

    let input = config
        .capture
        .input
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("No capture input configured"))?;

    let source = PcapFileSource::open(input)?;
    let normalizer = FrameNormalizer::new(config.capture.dns_ports.clone());
    let sink = JsonConsoleSink::from_config(&config.output)?;

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, stopping after current packet");
            signal_token.cancel();
        }
    });

    let use_case = NormalizeCaptureUseCase::new(
        Arc::new(source),
        Arc::new(normalizer),
        Arc::new(sink),
    )
    .with_max_packets(config.capture.max_packets)
    .with_cancellation(shutdown);

    let stats = use_case.execute().await?;

    info!(
        frames = stats.frames,
        published = stats.published,
        dropped = stats.malformed + stats.skipped,
        "Ferrous Sniffer finished"
    );
    Ok(())
}
