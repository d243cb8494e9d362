//! Types shared between the shrike userspace agent and its eBPF program.
//!
//! These types cross the kernel/userspace boundary through eBPF maps, so
//! they must be `#[repr(C)]` and both sides must agree on the exact byte
//! layout. Fields are ordered from largest alignment to smallest to avoid
//! implicit padding.

#![no_std]

/// The match criteria the filter engine evaluates every frame against.
///
/// Userspace writes one `FilterRule` into the single-slot `FILTER_RULE`
/// array map before the program attaches; updates are whole-value
/// replacements, so an in-flight evaluation never observes a partial rule.
///
/// A protocol whose `match_*` flag is zero never produces a drop, whatever
/// its port field holds. Addresses and ports that should never match can be
/// left at their zero defaults together with cleared flags.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterRule {
    /// IPv6 source address to match, network byte order.
    pub src_ipv6: [u8; 16],
    /// IPv4 source address to match, network byte order.
    pub src_ipv4: [u8; 4],
    /// TCP destination port to match, host byte order.
    pub tcp_dst_port: u16,
    /// UDP destination port to match, host byte order.
    pub udp_dst_port: u16,
    /// Non-zero if TCP frames to `tcp_dst_port` should be dropped.
    pub match_tcp: u8,
    /// Non-zero if UDP frames to `udp_dst_port` should be dropped.
    pub match_udp: u8,
    /// Non-zero if ICMP/ICMPv6 frames should be dropped.
    pub match_icmp: u8,
    /// Padding for alignment.
    pub _pad: u8,
}

impl FilterRule {
    /// Returns true if `addr` equals the configured IPv4 source address.
    #[inline]
    pub fn matches_src_ipv4(&self, addr: [u8; 4]) -> bool {
        self.src_ipv4 == addr
    }

    /// Returns true if `addr` equals the configured IPv6 source address.
    #[inline]
    pub fn matches_src_ipv6(&self, addr: [u8; 16]) -> bool {
        self.src_ipv6 == addr
    }

    /// The TCP destination port to match, if TCP matching is enabled.
    #[inline]
    pub fn tcp_dst_port(&self) -> Option<u16> {
        if self.match_tcp != 0 {
            Some(self.tcp_dst_port)
        } else {
            None
        }
    }

    /// The UDP destination port to match, if UDP matching is enabled.
    #[inline]
    pub fn udp_dst_port(&self) -> Option<u16> {
        if self.match_udp != 0 {
            Some(self.udp_dst_port)
        } else {
            None
        }
    }

    /// Whether ICMP/ICMPv6 frames from the matched source should be dropped.
    #[inline]
    pub fn icmp_enabled(&self) -> bool {
        self.match_icmp != 0
    }
}

// Compile-time layout check to catch kernel/userspace mismatches early.
// 16 + 4 + 2 + 2 + 4 = 28 bytes, 2-byte alignment, no implicit padding.
const _: () = assert!(core::mem::size_of::<FilterRule>() == 28);
const _: () = assert!(core::mem::align_of::<FilterRule>() == 2);

#[cfg(feature = "user")]
unsafe impl aya::Pod for FilterRule {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_protocols_never_report_a_port() {
        let rule = FilterRule {
            tcp_dst_port: 8080,
            udp_dst_port: 9000,
            ..Default::default()
        };
        assert_eq!(rule.tcp_dst_port(), None);
        assert_eq!(rule.udp_dst_port(), None);
        assert!(!rule.icmp_enabled());
    }

    #[test]
    fn enabled_protocols_report_their_port() {
        let rule = FilterRule {
            tcp_dst_port: 8080,
            udp_dst_port: 9000,
            match_tcp: 1,
            match_udp: 1,
            match_icmp: 1,
            ..Default::default()
        };
        assert_eq!(rule.tcp_dst_port(), Some(8080));
        assert_eq!(rule.udp_dst_port(), Some(9000));
        assert!(rule.icmp_enabled());
    }

    #[test]
    fn address_matching_is_exact() {
        let rule = FilterRule {
            src_ipv4: [192, 168, 122, 10],
            src_ipv6: [
                0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x01,
            ],
            ..Default::default()
        };
        assert!(rule.matches_src_ipv4([192, 168, 122, 10]));
        assert!(!rule.matches_src_ipv4([192, 168, 122, 11]));
        assert!(rule.matches_src_ipv6([
            0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x01,
        ]));
        assert!(!rule.matches_src_ipv6([0; 16]));
    }
}
