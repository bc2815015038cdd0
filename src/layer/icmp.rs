//! The ICMP layer of the receive walk.

use crate::wire::{Icmpv4Message, ICMP_HEADER_LEN, IPV4_HEADER_LEN};

use super::cursor::Cursor;
use super::{Error, Result, Verdict};

/// Answer an echo request; every valid request gets a reply.
///
/// `total_len` is the IPv4 total length of the request, which bounds the
/// echo data at `total_len - 28`. Identifier, sequence number and data are
/// mirrored verbatim; the reply checksum covers the produced header and the
/// mirrored data.
pub(crate) fn respond(cur: &mut Cursor, total_len: usize) -> Result<Verdict> {
    let reply_base = cur.write_pos();

    cur.check(1, u8::from(Icmpv4Message::EchoRequest) as u64, Error::Malformed)?;
    cur.emit(1, u8::from(Icmpv4Message::EchoReply) as u64);
    cur.check(1, 0, Error::Malformed)?;
    cur.emit(1, 0);
    cur.skip(2)?;
    let sum_at = cur.write_pos();
    cur.emit(2, 0);
    cur.copy(4)?;

    let data_len = total_len
        .checked_sub(IPV4_HEADER_LEN + ICMP_HEADER_LEN)
        .ok_or(Error::Malformed)?;
    cur.copy(data_len)?;

    let reply_len = total_len - IPV4_HEADER_LEN;
    let sum = cur.checksum(reply_base, reply_len);
    cur.patch16(sum_at, sum);

    net_trace!("icmp: echoing {} octets", data_len);
    Ok(Verdict::Reply(reply_len))
}
