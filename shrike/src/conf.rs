use std::{
    net::{Ipv4Addr, Ipv6Addr},
    path::PathBuf,
};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use shrike_common::FilterRule;
use thiserror::Error;

use crate::cli::Cli;

/// Application configuration, layered from defaults, the optional YAML
/// file, `SHRIKE_`-prefixed environment variables, and CLI flags. Later
/// sources win.
#[derive(Debug, Deserialize, Serialize)]
pub struct Conf {
    /// Network interface the XDP program attaches to.
    pub interface: String,

    /// Path to the compiled eBPF object file.
    pub program: PathBuf,

    /// Log level filter for the agent and the eBPF program's logger.
    pub log_level: String,

    /// The match rule pushed into the filter's rule map.
    pub rule: RuleConf,
}

impl Default for Conf {
    fn default() -> Conf {
        Conf {
            interface: "lo".to_string(),
            program: PathBuf::from("target/bpfel-unknown-none/release/shrike"),
            log_level: "info".to_string(),
            rule: RuleConf::default(),
        }
    }
}

/// The match criteria in their configuration-facing form: canonical
/// textual addresses and optional ports.
#[derive(Debug, Deserialize, Serialize)]
pub struct RuleConf {
    /// IPv4 source address whose traffic the rule applies to.
    pub src_ipv4: Ipv4Addr,
    /// IPv6 source address whose traffic the rule applies to.
    pub src_ipv6: Ipv6Addr,
    /// Drop TCP segments to this destination port; absent disables TCP
    /// matching.
    pub tcp_port: Option<u16>,
    /// Drop UDP datagrams to this destination port; absent disables UDP
    /// matching.
    pub udp_port: Option<u16>,
    /// Drop ICMP/ICMPv6 messages from the matched source.
    pub icmp: bool,
}

impl Default for RuleConf {
    fn default() -> RuleConf {
        RuleConf {
            src_ipv4: Ipv4Addr::UNSPECIFIED,
            src_ipv6: Ipv6Addr::UNSPECIFIED,
            tcp_port: None,
            udp_port: None,
            icmp: false,
        }
    }
}

impl RuleConf {
    /// Converts to the `#[repr(C)]` form the eBPF program reads from its
    /// map. Addresses become network-order octets; a missing port clears
    /// the protocol's match flag.
    pub fn to_filter_rule(&self) -> FilterRule {
        FilterRule {
            src_ipv6: self.src_ipv6.octets(),
            src_ipv4: self.src_ipv4.octets(),
            tcp_dst_port: self.tcp_port.unwrap_or(0),
            udp_dst_port: self.udp_port.unwrap_or(0),
            match_tcp: self.tcp_port.is_some() as u8,
            match_udp: self.udp_port.is_some() as u8,
            match_icmp: self.icmp as u8,
            _pad: 0,
        }
    }
}

impl Conf {
    pub fn load(cli: &Cli) -> Result<Self, ConfError> {
        let mut figment = Figment::from(Serialized::defaults(Conf::default()));

        if let Some(path) = &cli.config {
            if !path.exists() {
                return Err(ConfError::MissingFile(path.clone()));
            }
            figment = figment.merge(Yaml::file(path));
        }

        // Nested keys use a double underscore: SHRIKE_RULE__TCP_PORT=8080.
        figment = figment.merge(Env::prefixed("SHRIKE_").split("__"));

        if let Some(interface) = &cli.interface {
            figment = figment.merge(Serialized::default("interface", interface));
        }
        if let Some(log_level) = &cli.log_level {
            figment = figment.merge(Serialized::default("log_level", log_level));
        }

        Ok(figment.extract()?)
    }
}

#[derive(Debug, Error)]
pub enum ConfError {
    #[error("config file not found: {0}")]
    MissingFile(PathBuf),

    #[error("configuration error: {0}")]
    Extraction(#[from] figment::Error),
}
