//! The Ethernet layer of the receive walk.

use crate::wire::{EtherType, ETHERNET_HEADER_LEN};

use super::cursor::Cursor;
use super::{arp, ipv4, mac_bits, Error, Result, Station, Verdict};

/// Walk one received frame, starting at its destination address.
///
/// The destination was already matched by the receive filter, so it is only
/// skipped here. The sender's address is mirrored into the reply destination
/// and the station's own address becomes the reply source, so by the time a
/// child layer decides to answer, the reply's Ethernet header is complete.
pub(crate) fn respond(cur: &mut Cursor, station: &mut Station) -> Result<Verdict> {
    cur.skip(6)?;
    let sender = cur.extract(6)?;
    cur.emit(6, sender);
    cur.emit(6, mac_bits(station.config.mac));
    let ethertype = cur.extract(2)?;
    cur.emit(2, ethertype);

    let verdict = match EtherType::from(ethertype as u16) {
        EtherType::Arp => arp::respond(cur, station)?,
        EtherType::Ipv4 => ipv4::respond(cur, station, sender)?,
        EtherType::Unknown(_) => return Err(Error::Unrecognized),
    };

    Ok(match verdict {
        Verdict::Reply(length) => Verdict::Reply(length + ETHERNET_HEADER_LEN),
        delivered => delivered,
    })
}
