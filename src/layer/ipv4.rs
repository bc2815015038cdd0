//! The IPv4 layer of the receive walk.

use crate::wire::{ipv4::VER_IHL_NO_OPTIONS, IpProtocol, IPV4_HEADER_LEN};

use super::cursor::Cursor;
use super::{icmp, ip_bits, udp, Error, Result, Station, Verdict};

/// Walk an IPv4 datagram addressed to the station.
///
/// Anything with options or a header longer than 20 octets fails the
/// version/IHL comparison. The incoming header checksum is not verified;
/// the frame FCS already covered these octets. The reply header is rebuilt
/// rather than copied (fresh identification, full TTL) and its checksum is
/// computed over the 20 octets actually produced, after the child layer has
/// fixed the length.
pub(crate) fn respond(cur: &mut Cursor, station: &mut Station, sender_hw: u64) -> Result<Verdict> {
    let own_ip = ip_bits(station.config.ip);
    let header_base = cur.write_pos();

    cur.check(1, VER_IHL_NO_OPTIONS as u64, Error::Malformed)?;
    cur.emit(1, VER_IHL_NO_OPTIONS as u64);
    cur.skip(1)?;
    cur.emit(1, 0);
    let total_len = cur.extract(2)? as usize;
    let len_at = cur.write_pos();
    cur.emit(2, 0);
    cur.skip(4)?;
    cur.emit(4, 0);
    cur.skip(1)?;
    cur.emit(1, 64);
    let protocol = cur.extract(1)?;
    cur.emit(1, protocol);
    cur.skip(2)?;
    let sum_at = cur.write_pos();
    cur.emit(2, 0);
    let sender_ip = cur.extract(4)?;
    cur.emit(4, own_ip);
    cur.check(4, own_ip, Error::Ignored)?;
    cur.emit(4, sender_ip);

    let verdict = match IpProtocol::from(protocol as u8) {
        IpProtocol::Icmp => icmp::respond(cur, total_len)?,
        IpProtocol::Udp => udp::respond(cur, station, sender_hw, sender_ip)?,
        IpProtocol::Unknown(_) => return Err(Error::Unrecognized),
    };

    Ok(match verdict {
        Verdict::Reply(payload) => {
            let reply_len = IPV4_HEADER_LEN + payload;
            cur.patch16(len_at, reply_len as u16);
            let sum = cur.checksum(header_base, IPV4_HEADER_LEN);
            cur.patch16(sum_at, sum);
            Verdict::Reply(reply_len)
        }
        delivered => delivered,
    })
}
