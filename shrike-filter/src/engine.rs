//! Dispatch engine: walks the header chain and renders the verdict.
//!
//! The walk is an explicit state machine driven by a loop with a small
//! fixed bound, mirroring the layering of the frame itself: Ethernet, then
//! one network layer, then one transport or control layer, then a decision.
//! A reader failure from any state moves to `State::Failed`, which the
//! loop folds into a pass: the filter must never discard traffic it could
//! not parse.

use shrike_common::FilterRule;

use crate::cursor::Cursor;
use crate::eth::{self, EtherType};
use crate::ip::{ipv4, ipv6, IpProto};
use crate::{icmp, tcp, udp};

/// The outcome of evaluating one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Forward the frame.
    Pass,
    /// Discard the frame.
    Drop,
}

// The header-type to parse next at the cursor position.
#[derive(Debug, Clone, Copy)]
enum State {
    Ethernet,
    Ipv4,
    Ipv6,
    // Transport or control header under an IPv4 header whose source matched.
    TransportV4(u8),
    // Same, under a matched IPv6 header.
    TransportV6(u8),
    Decided(Verdict),
    Failed,
}

// Ethernet, one network layer, one transport layer, decision. The chain is
// acyclic, so the bound is only a backstop.
const MAX_PARSE_DEPTH: usize = 4;

/// Evaluates one frame against `rule` and returns the verdict.
///
/// The frame is borrowed for the duration of the call only; nothing is
/// copied, mutated, or retained. Evaluation is stateless: the same frame
/// and rule always produce the same verdict.
pub fn evaluate(frame: &[u8], rule: &FilterRule) -> Verdict {
    let mut cursor = Cursor::new(frame);
    let mut state = State::Ethernet;

    for _ in 0..MAX_PARSE_DEPTH {
        state = match state {
            State::Ethernet => match eth::parse(&mut cursor) {
                Ok(hdr) => match hdr.ether_type() {
                    Ok(EtherType::Ipv4) => State::Ipv4,
                    Ok(EtherType::Ipv6) => State::Ipv6,
                    _ => State::Decided(Verdict::Pass),
                },
                Err(_) => State::Failed,
            },
            State::Ipv4 => match ipv4::parse(&mut cursor) {
                Ok(hdr) if rule.matches_src_ipv4(hdr.src_addr) => State::TransportV4(hdr.proto),
                Ok(_) => State::Decided(Verdict::Pass),
                Err(_) => State::Failed,
            },
            State::Ipv6 => match ipv6::parse(&mut cursor) {
                Ok(hdr) if rule.matches_src_ipv6(hdr.src_addr) => State::TransportV6(hdr.next_hdr),
                Ok(_) => State::Decided(Verdict::Pass),
                Err(_) => State::Failed,
            },
            State::TransportV4(proto) => match IpProto::try_from(proto) {
                Ok(IpProto::Icmp) => match icmp::parse(&mut cursor) {
                    Ok(_) => State::Decided(icmp_verdict(rule)),
                    Err(_) => State::Failed,
                },
                Ok(IpProto::Tcp) => match tcp::parse(&mut cursor) {
                    Ok(hdr) => State::Decided(port_verdict(rule.tcp_dst_port(), hdr.dst_port)),
                    Err(_) => State::Failed,
                },
                Ok(IpProto::Udp) => match udp::parse(&mut cursor) {
                    Ok(hdr) => State::Decided(port_verdict(rule.udp_dst_port(), hdr.dst_port)),
                    Err(_) => State::Failed,
                },
                _ => State::Decided(Verdict::Pass),
            },
            State::TransportV6(proto) => match IpProto::try_from(proto) {
                Ok(IpProto::Ipv6Icmp) => match icmp::parse_v6(&mut cursor) {
                    Ok(_) => State::Decided(icmp_verdict(rule)),
                    Err(_) => State::Failed,
                },
                Ok(IpProto::Tcp) => match tcp::parse(&mut cursor) {
                    Ok(hdr) => State::Decided(port_verdict(rule.tcp_dst_port(), hdr.dst_port)),
                    Err(_) => State::Failed,
                },
                Ok(IpProto::Udp) => match udp::parse(&mut cursor) {
                    Ok(hdr) => State::Decided(port_verdict(rule.udp_dst_port(), hdr.dst_port)),
                    Err(_) => State::Failed,
                },
                _ => State::Decided(Verdict::Pass),
            },
            State::Decided(verdict) => return verdict,
            State::Failed => return Verdict::Pass,
        };
    }

    // Unreachable while MAX_PARSE_DEPTH covers the chain; fail open anyway.
    Verdict::Pass
}

#[inline]
fn icmp_verdict(rule: &FilterRule) -> Verdict {
    if rule.icmp_enabled() {
        Verdict::Drop
    } else {
        Verdict::Pass
    }
}

#[inline]
fn port_verdict(rule_port: Option<u16>, dst_port: u16) -> Verdict {
    if rule_port == Some(dst_port) {
        Verdict::Drop
    } else {
        Verdict::Pass
    }
}
