/*! Low-level packet access and construction.

The `wire` module deals with packet *representation* on two levels.

 * Field extraction and insertion over raw octet sequences happens in the
   lowercase slice wrappers, e.g. [`ethernet_frame`] or [`udp_packet`]. Their
   accessors never allocate and only panic when the length precondition
   documented on `check_len` is violated.
 * A compact high-level representation of the header data of each format can
   be parsed from and emitted into such a wrapper. This happens through the
   `Repr` family of structs and enums, e.g. [`ArpRepr`] or [`Ipv4Repr`].

The engine's own receive path does not go through `Repr` parsing — it walks
frames a byte at a time in `layer` — but the wrappers define the field layout
both sides agree on, build outgoing datagrams, and back the test suite.

[`ethernet_frame`]: struct.ethernet_frame.html
[`udp_packet`]: struct.udp_packet.html
[`ArpRepr`]: struct.ArpRepr.html
[`Ipv4Repr`]: struct.Ipv4Repr.html
*/

#![allow(missing_docs)]

mod field {
    pub(crate) type Field = ::core::ops::Range<usize>;
    pub(crate) type Rest  = ::core::ops::RangeFrom<usize>;
}

pub mod arp;
pub mod checksum;
mod error;
pub mod ethernet;
pub mod icmpv4;
pub mod ipv4;
pub mod udp;

pub use self::error::{Error, Result};

pub use self::ethernet::{
    ethernet as ethernet_frame,
    EtherType,
    Address as EthernetAddress,
    Repr as EthernetRepr,
    HEADER_LEN as ETHERNET_HEADER_LEN,
    FCS_LEN as ETHERNET_FCS_LEN};

pub use self::arp::{
    arp as arp_packet,
    Hardware as ArpHardware,
    Operation as ArpOperation,
    Repr as ArpRepr,
    PACKET_LEN as ARP_PACKET_LEN};

pub use self::ipv4::{
    ipv4 as ipv4_packet,
    Address as Ipv4Address,
    Protocol as IpProtocol,
    Repr as Ipv4Repr,
    HEADER_LEN as IPV4_HEADER_LEN};

pub use self::icmpv4::{
    icmpv4 as icmpv4_packet,
    Message as Icmpv4Message,
    Repr as Icmpv4Repr,
    HEADER_LEN as ICMP_HEADER_LEN};

pub use self::udp::{
    udp as udp_packet,
    Repr as UdpRepr,
    HEADER_LEN as UDP_HEADER_LEN};
