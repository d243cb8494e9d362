//! Ethernet header, which appears at the beginning of every frame.
//!
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//!  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//!  |                     destination_mac_addr                      |
//!  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//!  | destination_mac_addr (con't)  |        source_mac_addr        |
//!  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//!  |                    source_mac_addr (con't)                    |
//!  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//!  |           eth_type            |
//!  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+

use crate::cursor::Cursor;
use crate::err::ParseError;

/// The length of the Ethernet header.
pub const ETH_LEN: usize = 14;

/// Destination MAC address.
pub type DstMacAddr = [u8; 6];

/// Source MAC address.
pub type SrcMacAddr = [u8; 6];

/// Protocol which is encapsulated in the payload of the Ethernet frame.
/// These values are the IEEE assigned protocol numbers, in host byte order.
#[repr(u16)]
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum EtherType {
    Ipv4 = 0x0800,
    Arp = 0x0806,
    Ieee8021q = 0x8100,
    Ipv6 = 0x86DD,
    Ieee8021ad = 0x88A8,
}

impl TryFrom<u16> for EtherType {
    type Error = u16; // the unknown value itself

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0x0800 => Ok(EtherType::Ipv4),
            0x0806 => Ok(EtherType::Arp),
            0x8100 => Ok(EtherType::Ieee8021q),
            0x86DD => Ok(EtherType::Ipv6),
            0x88A8 => Ok(EtherType::Ieee8021ad),
            _ => Err(value),
        }
    }
}

/// Parsed Ethernet header fields.
#[derive(Debug, Copy, Clone)]
pub struct EthHdr {
    pub dst_addr: DstMacAddr,
    pub src_addr: SrcMacAddr,
    /// Encapsulated protocol identifier, decoded to host byte order.
    pub ether_type: u16,
}

impl EthHdr {
    /// The ether-type as a known protocol, or the raw value if unknown.
    #[inline]
    pub fn ether_type(&self) -> Result<EtherType, u16> {
        EtherType::try_from(self.ether_type)
    }
}

/// Reads the fixed 14-byte Ethernet header and advances past it.
pub fn parse(cursor: &mut Cursor<'_>) -> Result<EthHdr, ParseError> {
    if !cursor.require(ETH_LEN) {
        return Err(ParseError::OutOfBounds);
    }
    let hdr = EthHdr {
        dst_addr: cursor.peek_array::<6>(0),
        src_addr: cursor.peek_array::<6>(6),
        ether_type: cursor.peek_u16(12),
    };
    cursor.advance(ETH_LEN);
    Ok(hdr)
}
