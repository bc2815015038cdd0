//! The UDP layer of the receive walk.

use crate::stack::Peer;
use crate::wire::UDP_HEADER_LEN;

use super::cursor::Cursor;
use super::{ip_from_bits, mac_from_bits, Error, Result, Station, Verdict};

/// Deliver a datagram on the fixed-size application channel.
///
/// Only the configured destination port at exactly the configured length is
/// accepted; the UDP checksum is not inspected, since the channel runs with
/// checksumming disabled in both directions. Delivery copies the payload
/// into the application sink and reports the sender as the new remembered
/// endpoint. There is never a direct reply on this path.
pub(crate) fn respond(
    cur: &mut Cursor,
    station: &mut Station,
    sender_hw: u64,
    sender_ip: u64,
) -> Result<Verdict> {
    let config = station.config;

    let sender_port = cur.extract(2)? as u16;
    cur.check(2, config.udp_port as u64, Error::Ignored)?;
    cur.check(2, (config.payload_len + UDP_HEADER_LEN) as u64, Error::Malformed)?;
    cur.skip(2)?;
    cur.copy_out(station.sink)?;

    let peer = Peer {
        mac: mac_from_bits(sender_hw),
        ip: ip_from_bits(sender_ip),
        port: sender_port,
    };
    net_trace!("udp: datagram from {}:{}", peer.ip, peer.port);
    Ok(Verdict::Delivered(peer))
}
