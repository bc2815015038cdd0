//! Destination address filtering.

use crate::wire::EthernetAddress;

/// A streaming destination-address matcher.
///
/// Fed the first six octets of an incoming frame, one at a time. Each octet
/// must equal the corresponding octet of the station address or be 0xff, so
/// both unicast frames for this station and broadcast frames pass. The
/// verdict latches once six octets have been seen and holds until `reset`.
#[derive(Debug, Clone, Copy)]
pub struct AddressFilter {
    addr: EthernetAddress,
    seen: u8,
    hit: bool,
}

impl AddressFilter {
    /// A filter for the given station address.
    pub fn new(addr: EthernetAddress) -> Self {
        AddressFilter { addr, seen: 0, hit: true }
    }

    /// Restart matching for a new frame.
    pub fn reset(&mut self) {
        self.seen = 0;
        self.hit = true;
    }

    /// Compare one destination octet; octets past the sixth are ignored.
    pub fn feed(&mut self, octet: u8) {
        if self.seen >= 6 {
            return;
        }
        let own = self.addr.as_bytes()[self.seen as usize];
        if octet != own && octet != 0xff {
            self.hit = false;
        }
        self.seen += 1;
    }

    /// True once all six octets have been seen and each one matched.
    pub fn matches(&self) -> bool {
        self.seen == 6 && self.hit
    }

    /// True once the whole destination address has been consumed.
    pub fn done(&self) -> bool {
        self.seen == 6
    }
}
