//! The per-protocol processing logic.
//!
//! Field layout knowledge lives in `wire`; this module holds the walk over a
//! received frame. Each protocol layer is a function that consumes octets
//! through a [`Cursor`](cursor::Cursor) and conditionally produces the
//! corresponding reply octets behind the same cursor's write side. A layer is
//! handed the cursor positioned at its own header and leaves it positioned
//! after its trailer, so the layers nest by plain function calls: Ethernet
//! dispatches on the EtherType to ARP or IPv4, and IPv4 dispatches on the
//! protocol number to ICMP or UDP. Both variant sets are closed, so the
//! dispatch is an ordinary `match`.
//!
//! The first failed comparison anywhere in the walk aborts the whole frame
//! with an [`Error`]. Octets already written to the reply region are simply
//! abandoned; nothing is transmitted unless the outermost layer returns a
//! reply verdict.

use core::fmt;

use crate::stack::Peer;
use crate::wire::{EthernetAddress, Ipv4Address};

pub mod arp;
pub(crate) mod cursor;
pub mod eth;
pub mod icmp;
pub mod ipv4;
pub mod udp;

/// The result type for layer processing and the application interface.
pub type Result<T> = core::result::Result<T, Error>;

/// Why an operation produced nothing.
///
/// For the receive path every variant means the same externally visible
/// thing, a frame without a reply; they are distinguished for diagnostics.
/// The application-facing variants report why a transmit request was not
/// taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// A selector field named a protocol outside the supported set.
    Unrecognized,

    /// A fixed field did not hold the value the format requires.
    Malformed,

    /// A layer needed more octets than the frame carries.
    Truncated,

    /// The frame is valid but addressed to another station or port.
    Ignored,

    /// No datagram has been received yet, so there is no endpoint to
    /// address an outgoing datagram to.
    Unreachable,

    /// The supplied payload does not match the configured channel size.
    BadSize,

    /// A previous transmit request has not been serviced yet.
    Exhausted,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Unrecognized => write!(f, "unrecognized protocol"),
            Error::Malformed    => write!(f, "malformed packet"),
            Error::Truncated    => write!(f, "truncated packet"),
            Error::Ignored      => write!(f, "not addressed to this station"),
            Error::Unreachable  => write!(f, "no known endpoint"),
            Error::BadSize      => write!(f, "payload size mismatch"),
            Error::Exhausted    => write!(f, "transmit request pending"),
        }
    }
}

impl From<crate::wire::Error> for Error {
    fn from(err: crate::wire::Error) -> Self {
        match err {
            crate::wire::Error::Truncated    => Error::Truncated,
            crate::wire::Error::Unrecognized => Error::Unrecognized,
            crate::wire::Error::Malformed    => Error::Malformed,
            crate::wire::Error::Unsupported  => Error::Malformed,
        }
    }
}

/// What a completed walk asks the sequencer to do.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Verdict {
    /// A reply of this many octets was produced behind the write cursor.
    Reply(usize),
    /// A datagram was delivered to the application; remember its sender,
    /// send nothing.
    Delivered(Peer),
}

/// The station-side context a walk runs against.
pub(crate) struct Station<'a> {
    /// The immutable address configuration.
    pub config: &'a crate::stack::Config,
    /// Where a delivered datagram payload goes.
    pub sink: &'a mut [u8],
}

pub(crate) fn mac_bits(addr: EthernetAddress) -> u64 {
    let mut bits = 0u64;
    for &octet in addr.as_bytes() {
        bits = bits << 8 | u64::from(octet);
    }
    bits
}

pub(crate) fn mac_from_bits(bits: u64) -> EthernetAddress {
    let bytes = bits.to_be_bytes();
    EthernetAddress::from_bytes(&bytes[2..8])
}

pub(crate) fn ip_bits(addr: Ipv4Address) -> u64 {
    let mut bits = 0u64;
    for &octet in addr.as_bytes() {
        bits = bits << 8 | u64::from(octet);
    }
    bits
}

pub(crate) fn ip_from_bits(bits: u64) -> Ipv4Address {
    let bytes = (bits as u32).to_be_bytes();
    Ipv4Address::from_bytes(&bytes[..])
}
