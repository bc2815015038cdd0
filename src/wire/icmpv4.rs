use core::fmt;
use byteorder::{ByteOrder, NetworkEndian};

use crate::wire::{checksum, Error, Result};

enum_with_unknown! {
    /// ICMPv4 message type.
    pub enum Message(u8) {
        EchoReply   = 0,
        EchoRequest = 8,
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Message::EchoReply   => write!(f, "echo reply"),
            Message::EchoRequest => write!(f, "echo request"),
            Message::Unknown(id) => write!(f, "0x{:02x}", id),
        }
    }
}

byte_wrapper! {
    /// A byte sequence representing an ICMPv4 echo packet.
    #[derive(Debug, PartialEq, Eq)]
    pub struct icmpv4([u8]);
}

mod field {
    use crate::wire::field::*;

    pub(crate) const TYPE:       usize = 0;
    pub(crate) const CODE:       usize = 1;
    pub(crate) const CHECKSUM:   Field = 2..4;
    pub(crate) const ECHO_IDENT: Field = 4..6;
    pub(crate) const ECHO_SEQNO: Field = 6..8;
    pub(crate) const HEADER_END: usize = 8;
}

/// The length of an ICMP echo header.
pub const HEADER_LEN: usize = field::HEADER_END;

impl icmpv4 {
    /// Imbue a raw octet buffer with ICMPv4 packet structure.
    pub fn new_unchecked(buffer: &[u8]) -> &icmpv4 {
        Self::__from_macro_new_unchecked(buffer)
    }

    /// Imbue a mutable octet buffer with ICMPv4 packet structure.
    pub fn new_unchecked_mut(buffer: &mut [u8]) -> &mut icmpv4 {
        Self::__from_macro_new_unchecked_mut(buffer)
    }

    /// Shorthand for a combination of [new_unchecked] and [check_len].
    ///
    /// [new_unchecked]: #method.new_unchecked
    /// [check_len]: #method.check_len
    pub fn new_checked(data: &[u8]) -> Result<&icmpv4> {
        let packet = Self::new_unchecked(data);
        packet.check_len()?;
        Ok(packet)
    }

    /// Unwrap the packet as a raw byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Unwrap the packet as a mutable raw byte slice.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }

    /// Ensure that no accessor method will panic if called.
    /// Returns `Err(Error::Truncated)` if the buffer is too short.
    pub fn check_len(&self) -> Result<()> {
        if self.0.len() < field::HEADER_END {
            Err(Error::Truncated)
        } else {
            Ok(())
        }
    }

    /// Return the message type field.
    pub fn msg_type(&self) -> Message {
        Message::from(self.0[field::TYPE])
    }

    /// Return the message code field.
    pub fn msg_code(&self) -> u8 {
        self.0[field::CODE]
    }

    /// Return the checksum field.
    pub fn checksum(&self) -> u16 {
        NetworkEndian::read_u16(&self.0[field::CHECKSUM])
    }

    /// Return the echo identifier field.
    pub fn echo_ident(&self) -> u16 {
        NetworkEndian::read_u16(&self.0[field::ECHO_IDENT])
    }

    /// Return the echo sequence number field.
    pub fn echo_seq_no(&self) -> u16 {
        NetworkEndian::read_u16(&self.0[field::ECHO_SEQNO])
    }

    /// Verify the checksum over the whole message.
    pub fn verify_checksum(&self) -> bool {
        checksum::of_slice(&self.0) == 0
    }

    /// Set the message type field.
    pub fn set_msg_type(&mut self, value: Message) {
        self.0[field::TYPE] = value.into()
    }

    /// Set the message code field.
    pub fn set_msg_code(&mut self, value: u8) {
        self.0[field::CODE] = value
    }

    /// Set the checksum field.
    pub fn set_checksum(&mut self, value: u16) {
        NetworkEndian::write_u16(&mut self.0[field::CHECKSUM], value)
    }

    /// Set the echo identifier field.
    pub fn set_echo_ident(&mut self, value: u16) {
        NetworkEndian::write_u16(&mut self.0[field::ECHO_IDENT], value)
    }

    /// Set the echo sequence number field.
    pub fn set_echo_seq_no(&mut self, value: u16) {
        NetworkEndian::write_u16(&mut self.0[field::ECHO_SEQNO], value)
    }

    /// Recompute the checksum over the whole message.
    pub fn fill_checksum(&mut self) {
        self.set_checksum(0);
        let value = checksum::of_slice(&self.0);
        self.set_checksum(value);
    }

    /// Return the echo data as a byte slice.
    pub fn data_slice(&self) -> &[u8] {
        &self.0[field::HEADER_END..]
    }

    /// Return the echo data as a mutable byte slice.
    pub fn data_mut_slice(&mut self) -> &mut [u8] {
        &mut self.0[field::HEADER_END..]
    }
}

impl AsRef<[u8]> for icmpv4 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsMut<[u8]> for icmpv4 {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

/// A high-level representation of an ICMP echo header.
///
/// The echo data is not part of the representation; it is accessed through
/// the byte wrapper.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Repr {
    EchoRequest { ident: u16, seq_no: u16 },
    EchoReply { ident: u16, seq_no: u16 },
}

impl Repr {
    /// Parse an ICMP packet and return a high-level representation.
    ///
    /// Only echo messages with code zero are recognized.
    pub fn parse(packet: &icmpv4) -> Result<Repr> {
        packet.check_len()?;
        if packet.msg_code() != 0 {
            return Err(Error::Unrecognized);
        }
        match packet.msg_type() {
            Message::EchoRequest => Ok(Repr::EchoRequest {
                ident: packet.echo_ident(),
                seq_no: packet.echo_seq_no(),
            }),
            Message::EchoReply => Ok(Repr::EchoReply {
                ident: packet.echo_ident(),
                seq_no: packet.echo_seq_no(),
            }),
            _ => Err(Error::Unrecognized),
        }
    }

    /// Emit a high-level representation into an ICMP packet.
    ///
    /// The checksum is not filled since it covers the echo data as well; call
    /// [`icmpv4::fill_checksum`] once the data is in place.
    ///
    /// [`icmpv4::fill_checksum`]: struct.icmpv4.html#method.fill_checksum
    pub fn emit(&self, packet: &mut icmpv4) {
        match *self {
            Repr::EchoRequest { ident, seq_no } => {
                packet.set_msg_type(Message::EchoRequest);
                packet.set_msg_code(0);
                packet.set_echo_ident(ident);
                packet.set_echo_seq_no(seq_no);
            }
            Repr::EchoReply { ident, seq_no } => {
                packet.set_msg_type(Message::EchoReply);
                packet.set_msg_code(0);
                packet.set_echo_ident(ident);
                packet.set_echo_seq_no(seq_no);
            }
        }
    }
}

impl fmt::Display for Repr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Repr::EchoRequest { ident, seq_no } =>
                write!(f, "ICMP echo request ident={} seq={}", ident, seq_no),
            Repr::EchoReply { ident, seq_no } =>
                write!(f, "ICMP echo reply ident={} seq={}", ident, seq_no),
        }
    }
}
