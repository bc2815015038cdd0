//! A deterministic, allocation-free protocol engine for a fixed-function
//! Ethernet link.
//!
//! `picostack` terminates Ethernet, ARP, IPv4/ICMP and one fixed-size UDP
//! application channel directly above a raw octet-stream transceiver. It is
//! not a general-purpose network stack: there is no routing, no
//! fragmentation, no IP options and no TCP. In exchange, every code path is
//! bounded, nothing allocates, and the whole engine fits in one `static`.
//!
//! The crate is organized the way the data flows:
//!
//! * [`phy`] recovers frames from the line and puts replies back on it:
//!   CRC-32 engine, destination filter, and the receive/transmit state
//!   machines with preamble, padding, FCS and inter-frame gap handling.
//! * [`wire`] knows the byte layout of every supported format and offers
//!   the usual accessor/`Repr` pairs for parsing and construction.
//! * [`layer`] walks an accepted frame one octet at a time and produces the
//!   reply in place: Ethernet dispatches to ARP or IPv4, IPv4 to ICMP or
//!   UDP, and the first failed field comparison silently abandons the frame.
//! * [`ram`] is the shared packet arena, owned a range at a time through
//!   descriptor tokens.
//! * [`stack`] sequences it all and exposes the application-side interface:
//!   a fixed-size payload in each direction, a send request, and a received
//!   notification.
//!
//! Driving the engine is the caller's loop: feed [`phy::LineEvent`]s in,
//! call [`Stack::poll`], pull [`phy::LineSymbol`]s out.
//!
//! ```
//! use picostack::{Config, Stack};
//! use picostack::phy::{LineEvent, LineSymbol};
//!
//! let mut stack = Stack::new(Config {
//!     mac: "02:00:00:00:00:01".parse().unwrap(),
//!     ip: "10.0.0.5".parse().unwrap(),
//!     udp_port: 5000,
//!     payload_len: 64,
//! });
//!
//! // One iteration of the caller's line loop.
//! stack.line_in(LineEvent::Start);
//! stack.line_in(LineEvent::Octet(0x00));
//! stack.line_in(LineEvent::End);
//! stack.poll();
//! match stack.line_out() {
//!     LineSymbol::Idle => {}
//!     LineSymbol::Data(_octet) => { /* hand to the transceiver */ }
//! }
//! ```
//!
//! Nothing in this crate ever dynamically allocates and there is no
//! recursion of unbounded depth. All buffers are sized up front: the packet
//! arena, the application payload regions, the CRC table. Where a resource
//! could be contended, the design removes the contention instead of locking,
//! by letting exactly one component hold each frame descriptor at a time.

#![warn(missing_docs)]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[macro_use]
mod macros;

pub mod layer;
pub mod phy;
pub mod ram;
pub mod stack;
pub mod wire;

pub use self::stack::{Config, Counters, Peer, Stack, MAX_APP_PAYLOAD};
