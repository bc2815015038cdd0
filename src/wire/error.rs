use core::fmt;

/// The error type for parsing packet representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An incoming packet was shorter than its format requires.
    ///
    /// The buffer may be shorter than the fixed minimum header, or a length
    /// field may point past the end of the received data.
    Truncated,

    /// An incoming packet could not be recognized.
    ///
    /// E.g. an Ethernet frame with an EtherType outside the supported set, or
    /// an ARP packet for a hardware/protocol pairing other than Ethernet/IPv4.
    Unrecognized,

    /// An incoming packet was recognized but self-contradictory.
    ///
    /// Examples: an IPv4 total length smaller than the header, a UDP length
    /// field claiming fewer than 8 octets.
    Malformed,

    /// The packet uses a feature this engine deliberately does not implement.
    ///
    /// IPv4 options and fragmentation fall in this class: the format is valid
    /// but handling it is outside the fixed-function scope.
    Unsupported,
}

/// The result type for wire-level operations.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Truncated    => write!(f, "truncated packet"),
            Error::Unrecognized => write!(f, "unrecognized packet"),
            Error::Malformed    => write!(f, "malformed packet"),
            Error::Unsupported  => write!(f, "unsupported feature"),
        }
    }
}
