//! The serial line discipline: framing, CRC and address filtering.
//!
//! The transceiver below this layer recovers octets and carrier from the
//! wire and is expected to strip the preamble on receive; everything from
//! the destination address through the FCS trailer flows through here. On
//! transmit the roles reverse and this layer emits the complete symbol
//! stream, preamble and inter-frame gap included.

pub mod crc;
pub mod filter;
pub mod rx;
pub mod tx;

/// One event on the receive side of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent {
    /// Carrier detected; a frame follows.
    Start,
    /// One recovered octet of frame data.
    Octet(u8),
    /// Carrier dropped; the frame is complete.
    End,
}

/// One symbol on the transmit side of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSymbol {
    /// The line is quiet for this step.
    Idle,
    /// One octet to put on the wire.
    Data(u8),
}

pub use self::crc::Crc32;
pub use self::filter::AddressFilter;
pub use self::rx::{Disposition, Receiver};
pub use self::tx::{Transmitter, MIN_DATA_LEN};
