//! ICMP and ICMPv6 headers, which are present after the IP header.
//!
//!    0                   1                   2                   3
//!    0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//!   +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//!   |     Type      |     Code      |          Checksum             |
//!   +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//!   |                      Rest of Header                           |
//!   +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//!
//! Both protocols share the same 8-byte fixed header shape; only the type
//! namespaces differ. Nothing chains below this layer.

use crate::cursor::Cursor;
use crate::err::ParseError;

/// The length of the fixed ICMP header.
pub const ICMP_LEN: usize = 8;

/// The length of the fixed ICMPv6 header.
pub const ICMPV6_LEN: usize = 8;

/// ICMP message types the tests exercise; the filter drops on any type.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IcmpType {
    EchoReply = 0,
    DestinationUnreachable = 3,
    EchoRequest = 8,
    TimeExceeded = 11,
}

/// ICMPv6 message types the tests exercise.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Icmpv6Type {
    DestinationUnreachable = 1,
    TimeExceeded = 3,
    EchoRequest = 128,
    EchoReply = 129,
}

/// Parsed ICMP header fields.
#[derive(Debug, Copy, Clone)]
pub struct IcmpHdr {
    /// ICMP message type.
    pub icmp_type: u8,
    /// ICMP message code.
    pub code: u8,
}

/// Parsed ICMPv6 header fields.
#[derive(Debug, Copy, Clone)]
pub struct Icmpv6Hdr {
    /// ICMPv6 message type.
    pub icmp_type: u8,
    /// ICMPv6 message code.
    pub code: u8,
}

/// Reads the fixed 8-byte ICMP header and advances past it.
pub fn parse(cursor: &mut Cursor<'_>) -> Result<IcmpHdr, ParseError> {
    if !cursor.require(ICMP_LEN) {
        return Err(ParseError::OutOfBounds);
    }
    let hdr = IcmpHdr {
        icmp_type: cursor.peek_u8(0),
        code: cursor.peek_u8(1),
    };
    cursor.advance(ICMP_LEN);
    Ok(hdr)
}

/// Reads the fixed 8-byte ICMPv6 header and advances past it.
pub fn parse_v6(cursor: &mut Cursor<'_>) -> Result<Icmpv6Hdr, ParseError> {
    if !cursor.require(ICMPV6_LEN) {
        return Err(ParseError::OutOfBounds);
    }
    let hdr = Icmpv6Hdr {
        icmp_type: cursor.peek_u8(0),
        code: cursor.peek_u8(1),
    };
    cursor.advance(ICMPV6_LEN);
    Ok(hdr)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icmp_bytes(icmp_type: u8) -> [u8; 8] {
        // type, code, checksum, rest-of-header
        [icmp_type, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
    }

    #[test]
    fn parses_an_echo_request() {
        let packet = icmp_bytes(IcmpType::EchoRequest as u8);
        let mut cursor = Cursor::new(&packet);
        let hdr = parse(&mut cursor).unwrap();
        assert_eq!(hdr.icmp_type, 8);
        assert_eq!(hdr.code, 0);
        assert_eq!(cursor.position(), ICMP_LEN);
    }

    #[test]
    fn parses_a_v6_echo_request() {
        let packet = icmp_bytes(Icmpv6Type::EchoRequest as u8);
        let mut cursor = Cursor::new(&packet);
        let hdr = parse_v6(&mut cursor).unwrap();
        assert_eq!(hdr.icmp_type, 128);
        assert_eq!(cursor.position(), ICMPV6_LEN);
    }

    #[test]
    fn rejects_truncated_headers() {
        let packet = icmp_bytes(IcmpType::EchoReply as u8);
        for len in 0..ICMP_LEN {
            let mut cursor = Cursor::new(&packet[..len]);
            assert!(matches!(parse(&mut cursor), Err(ParseError::OutOfBounds)));
            let mut cursor = Cursor::new(&packet[..len]);
            assert!(matches!(
                parse_v6(&mut cursor),
                Err(ParseError::OutOfBounds)
            ));
        }
    }
}
