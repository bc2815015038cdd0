//! The ARP layer of the receive walk.

use crate::wire::{ArpOperation, ARP_PACKET_LEN};

use super::cursor::Cursor;
use super::{ip_bits, mac_bits, Error, Result, Station, Verdict};

/// Answer an Ethernet/IPv4 ARP request for the station's address.
///
/// The hardware type is mirrored without inspection; a hardware type other
/// than Ethernet cannot have passed the receive filter with a six-octet
/// destination anyway. Requests for any other protocol address produce
/// nothing.
pub(crate) fn respond(cur: &mut Cursor, station: &Station) -> Result<Verdict> {
    let config = station.config;

    let htype = cur.extract(2)?;
    cur.emit(2, htype);
    let ptype = cur.extract(2)?;
    cur.emit(2, ptype);
    if ptype != 0x0800 {
        return Err(Error::Malformed);
    }
    let lens = cur.extract(2)?;
    cur.emit(2, lens);

    cur.check(2, u16::from(ArpOperation::Request) as u64, Error::Malformed)?;
    cur.emit(2, u16::from(ArpOperation::Reply) as u64);

    // We become the sender of the reply.
    cur.emit(6, mac_bits(config.mac));
    cur.emit(4, ip_bits(config.ip));

    // The requester becomes its target.
    let sender_hw = cur.extract(6)?;
    cur.emit(6, sender_hw);
    let sender_ip = cur.extract(4)?;
    cur.emit(4, sender_ip);

    // The target hardware address of a request carries nothing of interest.
    cur.skip(6)?;
    cur.check(4, ip_bits(config.ip), Error::Ignored)?;

    net_trace!("arp: answering request for {}", config.ip);
    Ok(Verdict::Reply(ARP_PACKET_LEN))
}
