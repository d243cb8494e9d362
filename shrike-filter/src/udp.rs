//! UDP header, which is present after the IP header.
//!
//!   0                   1                   2                   3
//!   0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//!  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//!  |          Source Port          |       Destination Port        |
//!  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//!  |          PDU Length           |           Checksum            |
//!  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+

use crate::cursor::Cursor;
use crate::err::ParseError;

/// The length of the UDP header.
pub const UDP_LEN: usize = 8;

/// Parsed UDP header fields.
#[derive(Debug, Copy, Clone)]
pub struct UdpHdr {
    pub src_port: u16,
    pub dst_port: u16,
    /// Payload bytes the datagram declares beyond the 8-byte header.
    pub payload_len: u16,
}

/// Reads the fixed 8-byte UDP header and advances past it.
///
/// The declared total length covers the header itself; a value below 8
/// would mean a negative payload and rejects the datagram.
pub fn parse(cursor: &mut Cursor<'_>) -> Result<UdpHdr, ParseError> {
    if !cursor.require(UDP_LEN) {
        return Err(ParseError::OutOfBounds);
    }
    let declared_len = cursor.peek_u16(4);
    if (declared_len as usize) < UDP_LEN {
        return Err(ParseError::MalformedLength);
    }
    let hdr = UdpHdr {
        src_port: cursor.peek_u16(0),
        dst_port: cursor.peek_u16(2),
        payload_len: declared_len - UDP_LEN as u16,
    };
    cursor.advance(UDP_LEN);
    Ok(hdr)
}
