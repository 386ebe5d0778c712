//! Ferrous Sniffer Infrastructure Layer
//!
//! Adapters behind the application ports: pcap capture input, layer slicing
//! and header projection, DNS normalisation, and JSON document output.
pub mod capture;
pub mod dns;
pub mod output;
pub mod packet;
