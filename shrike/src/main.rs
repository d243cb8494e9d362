mod cli;
mod conf;

use anyhow::{anyhow, Context as _};
use aya::maps::Array;
use aya::programs::{Xdp, XdpFlags};
use clap::Parser;
use log::{debug, info, warn};
use shrike_common::FilterRule;
use tokio::signal;

use crate::cli::Cli;
use crate::conf::Conf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let conf = Conf::load(&cli)?;

    env_logger::Builder::new()
        .parse_filters(&conf.log_level)
        .target(env_logger::Target::Stdout)
        .init();

    // Bump the memlock rlimit. This is needed for older kernels that don't use the
    // new memcg based accounting, see https://lwn.net/Articles/837122/
    let rlim = libc::rlimit {
        rlim_cur: libc::RLIM_INFINITY,
        rlim_max: libc::RLIM_INFINITY,
    };
    let ret = unsafe { libc::setrlimit(libc::RLIMIT_MEMLOCK, &rlim) };
    if ret != 0 {
        debug!("remove limit on locked memory failed, ret is: {ret}");
    }

    let mut ebpf = aya::Ebpf::load_file(&conf.program).with_context(|| {
        format!(
            "failed to load the eBPF object at {}",
            conf.program.display()
        )
    })?;
    if let Err(e) = aya_log::EbpfLogger::init(&mut ebpf) {
        // This can happen if you remove all log statements from the eBPF program.
        warn!("failed to initialize eBPF logger: {e}");
    }

    // The rule must be in place before the program sees its first frame;
    // an empty slot makes the program pass everything.
    let rule = conf.rule.to_filter_rule();
    let mut rules: Array<_, FilterRule> = Array::try_from(
        ebpf.map_mut("FILTER_RULE")
            .ok_or_else(|| anyhow!("FILTER_RULE map not present in the object"))?,
    )?;
    rules.set(0, rule, 0)?;

    let program: &mut Xdp = ebpf
        .program_mut("shrike")
        .ok_or_else(|| anyhow!("shrike program not present in the object"))?
        .try_into()?;
    program.load()?;
    program
        .attach(&conf.interface, XdpFlags::default())
        .context("failed to attach the XDP program with default flags; try SKB mode on drivers without native XDP")?;

    info!(
        "filter attached to {}: src {} / {}, tcp {:?}, udp {:?}, icmp {}",
        conf.interface,
        conf.rule.src_ipv4,
        conf.rule.src_ipv6,
        conf.rule.tcp_port,
        conf.rule.udp_port,
        conf.rule.icmp
    );
    info!("Waiting for Ctrl-C...");
    signal::ctrl_c().await?;
    info!("Exiting...");

    Ok(())
}
