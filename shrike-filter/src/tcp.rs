//! TCP header, which is present after the IP header.
//!
//!    0                   1                   2                   3
//!    0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//!   +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//!   |          Source Port          |       Destination Port        |
//!   +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//!   |                        Sequence Number                        |
//!   +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//!   |                    Acknowledgment Number                      |
//!   +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//!   |  Data |     |N|C|E|U|A|P|R|S|F|                               |
//!   | Offset| Rsrv|S|R|C|R|C|S|S|Y|I|            Window             |
//!   |       |     | |W|E|G|K|H|T|N|N|                               |
//!   +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//!   |           Checksum            |         Urgent Pointer        |
//!   +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//!   |                            Options                            |
//!   /                              ...                              /
//!   +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+

use crate::cursor::Cursor;
use crate::err::ParseError;

/// The length of the TCP header without options.
pub const TCP_MIN_LEN: usize = 20;

/// Parsed TCP header fields.
#[derive(Debug, Copy, Clone)]
pub struct TcpHdr {
    /// Header length in bytes, derived from the data-offset field. Always
    /// at least [`TCP_MIN_LEN`]; larger when options are present.
    pub header_len: usize,
    pub src_port: u16,
    pub dst_port: u16,
}

/// Reads the variable-length TCP header and advances past it, options
/// included.
///
/// The data-offset field is validated against the protocol minimum before
/// it is allowed to extend the bounds check.
pub fn parse(cursor: &mut Cursor<'_>) -> Result<TcpHdr, ParseError> {
    if !cursor.require(TCP_MIN_LEN) {
        return Err(ParseError::OutOfBounds);
    }
    let header_len = ((cursor.peek_u8(12) >> 4) as usize) << 2;
    if header_len < TCP_MIN_LEN {
        return Err(ParseError::MalformedLength);
    }
    if !cursor.require(header_len) {
        return Err(ParseError::OutOfBounds);
    }
    let hdr = TcpHdr {
        header_len,
        src_port: cursor.peek_u16(0),
        dst_port: cursor.peek_u16(2),
    };
    cursor.advance(header_len);
    Ok(hdr)
}
