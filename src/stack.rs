//! The top-level sequencer binding the engine together.
//!
//! [`Stack`] owns the packet arena and the two line-side state machines and
//! arbitrates the single transmit path between answering received frames and
//! sending application datagrams. It is driven from outside by three calls:
//! [`line_in`] with each receive-side event, [`line_out`] for each
//! transmit-side symbol, and [`poll`] whenever the caller wants pending work
//! advanced. Every call does a bounded amount of work; nothing inside blocks
//! or allocates.
//!
//! [`Stack`]: struct.Stack.html
//! [`line_in`]: struct.Stack.html#method.line_in
//! [`line_out`]: struct.Stack.html#method.line_out
//! [`poll`]: struct.Stack.html#method.poll

use crate::layer::{self, cursor::Cursor, Station, Verdict};
use crate::phy::{Disposition, LineEvent, LineSymbol, Receiver, Transmitter};
use crate::ram::{FrameDescriptor, PacketRam, RX_BASE, TX_BASE, WINDOW};
use crate::wire::{
    ethernet_frame, ipv4_packet, udp_packet, EtherType, EthernetAddress, EthernetRepr,
    Ipv4Address, Ipv4Repr, IpProtocol, UdpRepr, ETHERNET_FCS_LEN, ETHERNET_HEADER_LEN,
    IPV4_HEADER_LEN, UDP_HEADER_LEN,
};

/// Upper bound on the configurable application payload length.
pub const MAX_APP_PAYLOAD: usize = 1024;

/// The engine's immutable address configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// The station's hardware address.
    pub mac: EthernetAddress,
    /// The station's IPv4 address.
    pub ip: Ipv4Address,
    /// The UDP port the application channel listens and sends on.
    pub udp_port: u16,
    /// The fixed payload length of the application channel, in octets.
    pub payload_len: usize,
}

/// The most recently heard correspondent on the application channel.
///
/// Written by every delivered datagram, never cleared; unsolicited transmits
/// go to whoever spoke last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Peer {
    /// The peer's hardware address.
    pub mac: EthernetAddress,
    /// The peer's IPv4 address.
    pub ip: Ipv4Address,
    /// The peer's UDP source port.
    pub port: u16,
}

/// Diagnostic event counts. Purely informational.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    /// Frames that passed address filtering and the FCS check.
    pub frames_accepted: u32,
    /// Frames abandoned on the line: bad FCS, foreign address, overrun.
    pub frames_dropped: u32,
    /// Accepted frames the dispatcher produced nothing for.
    pub frames_ignored: u32,
    /// Replies handed to the transmitter.
    pub replies_sent: u32,
    /// Datagrams delivered to the application.
    pub datagrams_received: u32,
    /// Datagrams handed to the transmitter.
    pub datagrams_sent: u32,
}

/// The protocol engine.
///
/// Single-threaded and step-driven: each method call performs a bounded
/// number of steps and returns. Exactly one received frame and one transmit
/// frame are in flight at any time, each owned through its descriptor, and a
/// received frame is only collected from the receiver once the transmitter
/// is free to take a possible reply. From frame acceptance to reply-ready is
/// therefore at most one `poll` plus one walk over the frame and its reply.
pub struct Stack {
    config: Config,
    ram: PacketRam,
    rx: Receiver,
    tx: Transmitter,
    peer: Option<Peer>,
    app_rx: [u8; MAX_APP_PAYLOAD],
    app_tx: [u8; MAX_APP_PAYLOAD],
    send_pending: bool,
    received: bool,
    link_up: bool,
    counters: Counters,
}

impl Stack {
    /// An engine for the given address configuration.
    ///
    /// # Panics
    /// Panics if the configured payload length is zero or larger than
    /// [`MAX_APP_PAYLOAD`].
    ///
    /// [`MAX_APP_PAYLOAD`]: constant.MAX_APP_PAYLOAD.html
    pub fn new(config: Config) -> Self {
        assert!(
            config.payload_len > 0 && config.payload_len <= MAX_APP_PAYLOAD,
            "application payload length out of range"
        );
        Stack {
            rx: Receiver::new(config.mac, RX_BASE, WINDOW),
            tx: Transmitter::new(),
            config,
            ram: PacketRam::new(),
            peer: None,
            app_rx: [0; MAX_APP_PAYLOAD],
            app_tx: [0; MAX_APP_PAYLOAD],
            send_pending: false,
            received: false,
            link_up: false,
            counters: Counters::default(),
        }
    }

    /// The address configuration the engine was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Feed one event from the receive side of the line.
    pub fn line_in(&mut self, event: LineEvent) {
        match self.rx.advance(event, &mut self.ram) {
            Some(Disposition::Accepted) => self.counters.frames_accepted += 1,
            Some(Disposition::Dropped) => self.counters.frames_dropped += 1,
            None => {}
        }
    }

    /// Produce the next symbol for the transmit side of the line.
    pub fn line_out(&mut self) -> LineSymbol {
        self.tx.step(&self.ram)
    }

    /// Advance pending work by one unit.
    ///
    /// If the transmitter is free and a received frame awaits, the frame is
    /// walked and its reply, if any, handed over. Otherwise a pending
    /// application transmit is built and handed over. Replies always win the
    /// arbitration.
    pub fn poll(&mut self) {
        if !self.tx.ready() {
            return;
        }
        if let Some(frame) = self.rx.take_frame() {
            self.dispatch(frame);
            return;
        }
        if self.send_pending {
            if let Some(peer) = self.peer {
                self.transmit_datagram(peer);
                self.send_pending = false;
            }
        }
    }

    fn dispatch(&mut self, frame: FrameDescriptor) {
        let data_end = frame.offset() + frame.length().saturating_sub(ETHERNET_FCS_LEN);
        let payload_len = self.config.payload_len;
        let mut cursor = Cursor::new(&mut self.ram, frame.offset(), data_end, TX_BASE);
        let mut station = Station {
            config: &self.config,
            sink: &mut self.app_rx[..payload_len],
        };

        match layer::eth::respond(&mut cursor, &mut station) {
            Ok(Verdict::Reply(length)) => {
                self.counters.replies_sent += 1;
                self.tx.start(FrameDescriptor::new(TX_BASE, length));
            }
            Ok(Verdict::Delivered(peer)) => {
                self.peer = Some(peer);
                self.received = true;
                self.counters.datagrams_received += 1;
            }
            Err(err) => {
                self.counters.frames_ignored += 1;
                net_debug!("dispatch: no reply ({})", err);
            }
        }
    }

    fn transmit_datagram(&mut self, peer: Peer) {
        let Config { mac, ip, udp_port, payload_len } = self.config;
        let frame_len = ETHERNET_HEADER_LEN + IPV4_HEADER_LEN + UDP_HEADER_LEN + payload_len;

        let buffer = self.ram.window_mut(TX_BASE, frame_len);
        let frame = ethernet_frame::new_unchecked_mut(buffer);
        EthernetRepr {
            src_addr: mac,
            dst_addr: peer.mac,
            ethertype: EtherType::Ipv4,
        }
        .emit(frame);

        let packet = ipv4_packet::new_unchecked_mut(frame.payload_mut_slice());
        Ipv4Repr {
            src_addr: ip,
            dst_addr: peer.ip,
            protocol: IpProtocol::Udp,
            payload_len: UDP_HEADER_LEN + payload_len,
            ttl: 64,
        }
        .emit(packet);

        let datagram = udp_packet::new_unchecked_mut(packet.payload_mut_slice());
        UdpRepr {
            src_port: udp_port,
            dst_port: peer.port,
            payload_len,
        }
        .emit(datagram);
        datagram
            .payload_mut_slice()
            .copy_from_slice(&self.app_tx[..payload_len]);

        net_trace!("udp: sending {} octets to {}:{}", payload_len, peer.ip, peer.port);
        self.counters.datagrams_sent += 1;
        self.tx.start(FrameDescriptor::new(TX_BASE, frame_len));
    }

    /// Request transmission of one application datagram.
    ///
    /// The payload is copied out immediately; the frame goes on the wire at
    /// the next [`poll`] with a free transmitter, addressed to the most
    /// recently heard peer.
    ///
    /// [`poll`]: #method.poll
    pub fn send(&mut self, payload: &[u8]) -> layer::Result<()> {
        if payload.len() != self.config.payload_len {
            return Err(layer::Error::BadSize);
        }
        if self.peer.is_none() {
            return Err(layer::Error::Unreachable);
        }
        if self.send_pending {
            return Err(layer::Error::Exhausted);
        }
        self.app_tx[..payload.len()].copy_from_slice(payload);
        self.send_pending = true;
        Ok(())
    }

    /// Collect the most recently delivered datagram payload, if one arrived
    /// since the last call.
    pub fn recv(&mut self) -> Option<&[u8]> {
        if self.received {
            self.received = false;
            Some(&self.app_rx[..self.config.payload_len])
        } else {
            None
        }
    }

    /// The remembered correspondent, if any datagram has been delivered yet.
    pub fn peer(&self) -> Option<Peer> {
        self.peer
    }

    /// Record the link status reported by the transceiver's management side.
    ///
    /// Stored for inspection only; the engine takes no action on it.
    pub fn set_link_up(&mut self, up: bool) {
        self.link_up = up;
    }

    /// The last recorded link status.
    pub fn link_up(&self) -> bool {
        self.link_up
    }

    /// The diagnostic counters.
    pub fn counters(&self) -> Counters {
        self.counters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phy::Crc32;
    use crate::wire::{arp_packet, icmpv4_packet, ArpOperation, ArpRepr, Icmpv4Message, Icmpv4Repr};

    const STATION_MAC: EthernetAddress =
        EthernetAddress([0x01, 0x23, 0x45, 0x67, 0x89, 0xab]);
    const STATION_IP: Ipv4Address = Ipv4Address([10, 0, 0, 5]);
    const OTHER_MAC: EthernetAddress =
        EthernetAddress([0x00, 0x01, 0x02, 0x03, 0x04, 0x05]);
    const OTHER_IP: Ipv4Address = Ipv4Address([10, 0, 0, 1]);
    const APP_PORT: u16 = 5000;
    const APP_LEN: usize = 16;

    const PREAMBLE: [u8; 8] = [0x55, 0x55, 0x55, 0x55, 0x55, 0x55, 0x55, 0xd5];

    fn station() -> Stack {
        Stack::new(Config {
            mac: STATION_MAC,
            ip: STATION_IP,
            udp_port: APP_PORT,
            payload_len: APP_LEN,
        })
    }

    /// Clock a complete frame into the engine, appending a correct FCS.
    fn deliver(stack: &mut Stack, data: &[u8]) {
        let mut crc = Crc32::new();
        stack.line_in(LineEvent::Start);
        for &octet in data {
            crc.feed(octet);
            stack.line_in(LineEvent::Octet(octet));
        }
        for &octet in crc.value().to_le_bytes().iter() {
            stack.line_in(LineEvent::Octet(octet));
        }
        stack.line_in(LineEvent::End);
    }

    /// Poll once, then pull the transmit side until quiet. Returns the data
    /// octets that went on the wire, preamble and FCS included.
    fn pump(stack: &mut Stack) -> Vec<u8> {
        stack.poll();
        let mut out = vec![];
        for _ in 0..4096 {
            if let LineSymbol::Data(octet) = stack.line_out() {
                out.push(octet);
            }
        }
        out
    }

    /// Strip preamble and FCS from a pumped symbol stream, verifying both.
    fn unframe(out: &[u8]) -> Vec<u8> {
        assert_eq!(&out[..8], &PREAMBLE[..], "preamble and start delimiter");
        let data = &out[8..];
        let mut crc = Crc32::new();
        for &octet in data {
            crc.feed(octet);
        }
        assert!(crc.matches_residual(), "emitted frame carries a valid FCS");
        data[..data.len() - 4].to_vec()
    }

    #[rustfmt::skip]
    fn arp_request() -> Vec<u8> {
        vec![
            0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05,
            0x08, 0x06,
            0x00, 0x01,
            0x08, 0x00,
            0x06,
            0x04,
            0x00, 0x01,
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05,
            0x0a, 0x00, 0x00, 0x01,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x0a, 0x00, 0x00, 0x05,
        ]
    }

    #[rustfmt::skip]
    static ARP_REPLY: [u8; 42] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x01, 0x23, 0x45, 0x67, 0x89, 0xab,
        0x08, 0x06,
        0x00, 0x01,
        0x08, 0x00,
        0x06,
        0x04,
        0x00, 0x02,
        0x01, 0x23, 0x45, 0x67, 0x89, 0xab,
        0x0a, 0x00, 0x00, 0x05,
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05,
        0x0a, 0x00, 0x00, 0x01,
    ];

    #[test]
    fn arp_request_is_answered() {
        let mut stack = station();
        deliver(&mut stack, &arp_request());
        assert_eq!(stack.counters().frames_accepted, 1);

        let out = pump(&mut stack);
        let frame = unframe(&out);
        assert_eq!(frame.len(), 60, "reply padded to the line minimum");
        assert_eq!(&frame[..42], &ARP_REPLY[..]);
        assert!(frame[42..].iter().all(|&b| b == 0));
        assert_eq!(stack.counters().replies_sent, 1);

        let reply = arp_packet::new_checked(&frame[14..42]).unwrap();
        let repr = ArpRepr::parse(reply).unwrap();
        assert_eq!(repr.operation, ArpOperation::Reply);
        assert_eq!(repr.source_hardware_addr, STATION_MAC);
        assert_eq!(repr.target_protocol_addr, OTHER_IP);
    }

    #[test]
    fn arp_request_for_other_address_is_ignored() {
        let mut stack = station();
        let mut request = arp_request();
        request[41] = 0x09;
        deliver(&mut stack, &request);
        assert!(pump(&mut stack).is_empty());
        assert_eq!(stack.counters().frames_ignored, 1);
    }

    fn echo_request(dst_ip: Ipv4Address, data: &[u8]) -> Vec<u8> {
        let mut bytes =
            vec![0u8; ETHERNET_HEADER_LEN + IPV4_HEADER_LEN + 8 + data.len()];
        let frame = ethernet_frame::new_unchecked_mut(&mut bytes);
        EthernetRepr {
            src_addr: OTHER_MAC,
            dst_addr: STATION_MAC,
            ethertype: EtherType::Ipv4,
        }
        .emit(frame);
        let packet = ipv4_packet::new_unchecked_mut(frame.payload_mut_slice());
        Ipv4Repr {
            src_addr: OTHER_IP,
            dst_addr: dst_ip,
            protocol: IpProtocol::Icmp,
            payload_len: 8 + data.len(),
            ttl: 64,
        }
        .emit(packet);
        let echo = icmpv4_packet::new_unchecked_mut(packet.payload_mut_slice());
        Icmpv4Repr::EchoRequest { ident: 0x1234, seq_no: 7 }.emit(echo);
        echo.data_mut_slice().copy_from_slice(data);
        echo.fill_checksum();
        bytes
    }

    #[test]
    fn echo_request_is_answered() {
        let data = *b"0123456789abcdef";
        let mut stack = station();
        deliver(&mut stack, &echo_request(STATION_IP, &data[..]));

        let out = pump(&mut stack);
        let frame = unframe(&out);
        assert_eq!(frame.len(), 60);

        let reply = ethernet_frame::new_checked(&frame[..58]).unwrap();
        assert_eq!(reply.dst_addr(), OTHER_MAC);
        assert_eq!(reply.src_addr(), STATION_MAC);
        assert_eq!(reply.ethertype(), EtherType::Ipv4);

        let packet = ipv4_packet::new_checked(reply.payload_slice()).unwrap();
        assert!(packet.verify_checksum());
        assert_eq!(packet.src_addr(), STATION_IP);
        assert_eq!(packet.dst_addr(), OTHER_IP);
        assert_eq!(packet.ttl(), 64);
        assert_eq!(packet.protocol(), IpProtocol::Icmp);
        assert_eq!(packet.total_len(), 44);

        let echo = icmpv4_packet::new_checked(packet.payload_slice()).unwrap();
        assert!(echo.verify_checksum());
        assert_eq!(echo.msg_type(), Icmpv4Message::EchoReply);
        assert_eq!(echo.echo_ident(), 0x1234);
        assert_eq!(echo.echo_seq_no(), 7);
        assert_eq!(echo.data_slice(), &data[..]);
    }

    #[test]
    fn echo_request_for_other_address_is_ignored() {
        let mut stack = station();
        deliver(&mut stack, &echo_request(Ipv4Address([10, 0, 0, 9]), &[0u8; 16]));
        assert!(pump(&mut stack).is_empty());
        assert_eq!(stack.counters().frames_ignored, 1);
    }

    fn app_datagram(dst_port: u16, payload: &[u8]) -> Vec<u8> {
        let mut bytes = vec![
            0u8;
            ETHERNET_HEADER_LEN + IPV4_HEADER_LEN + UDP_HEADER_LEN + payload.len()
        ];
        let frame = ethernet_frame::new_unchecked_mut(&mut bytes);
        EthernetRepr {
            src_addr: OTHER_MAC,
            dst_addr: STATION_MAC,
            ethertype: EtherType::Ipv4,
        }
        .emit(frame);
        let packet = ipv4_packet::new_unchecked_mut(frame.payload_mut_slice());
        Ipv4Repr {
            src_addr: OTHER_IP,
            dst_addr: STATION_IP,
            protocol: IpProtocol::Udp,
            payload_len: UDP_HEADER_LEN + payload.len(),
            ttl: 64,
        }
        .emit(packet);
        let datagram = udp_packet::new_unchecked_mut(packet.payload_mut_slice());
        UdpRepr {
            src_port: 7777,
            dst_port,
            payload_len: payload.len(),
        }
        .emit(datagram);
        datagram.payload_mut_slice().copy_from_slice(payload);
        bytes
    }

    #[test]
    fn datagram_is_delivered_without_reply() {
        let payload = *b"fixed-size-data!";
        let mut stack = station();
        deliver(&mut stack, &app_datagram(APP_PORT, &payload[..]));

        assert!(pump(&mut stack).is_empty(), "delivery never replies");
        assert_eq!(stack.recv(), Some(&payload[..]));
        assert_eq!(stack.recv(), None, "notification reads once");
        assert_eq!(
            stack.peer(),
            Some(Peer { mac: OTHER_MAC, ip: OTHER_IP, port: 7777 })
        );
        assert_eq!(stack.counters().datagrams_received, 1);
    }

    #[test]
    fn datagram_for_other_port_is_ignored() {
        let mut stack = station();
        deliver(&mut stack, &app_datagram(APP_PORT + 1, &[0u8; APP_LEN]));
        assert!(pump(&mut stack).is_empty());
        assert_eq!(stack.recv(), None);
        assert_eq!(stack.peer(), None);
        assert_eq!(stack.counters().frames_ignored, 1);
    }

    #[test]
    fn datagram_of_wrong_length_is_ignored() {
        let mut stack = station();
        deliver(&mut stack, &app_datagram(APP_PORT, &[0u8; APP_LEN + 1]));
        assert!(pump(&mut stack).is_empty());
        assert_eq!(stack.recv(), None);
        assert_eq!(stack.counters().frames_ignored, 1);
    }

    #[test]
    fn transmit_reaches_the_remembered_peer() {
        let mut stack = station();
        deliver(&mut stack, &app_datagram(APP_PORT, &[0u8; APP_LEN]));
        assert!(pump(&mut stack).is_empty());

        let payload = *b"hello-from-here!";
        stack.send(&payload[..]).unwrap();
        let out = pump(&mut stack);
        let frame = unframe(&out);
        assert_eq!(frame.len(), 60, "58 data octets padded to the minimum");

        let sent = ethernet_frame::new_checked(&frame[..58]).unwrap();
        assert_eq!(sent.dst_addr(), OTHER_MAC);
        assert_eq!(sent.src_addr(), STATION_MAC);

        let packet = ipv4_packet::new_checked(sent.payload_slice()).unwrap();
        assert!(packet.verify_checksum());
        assert_eq!(packet.src_addr(), STATION_IP);
        assert_eq!(packet.dst_addr(), OTHER_IP);
        assert_eq!(packet.protocol(), IpProtocol::Udp);

        let datagram = udp_packet::new_checked(packet.payload_slice()).unwrap();
        assert_eq!(datagram.src_port(), APP_PORT);
        assert_eq!(datagram.dst_port(), 7777);
        assert_eq!(datagram.checksum(), 0, "channel runs without UDP checksums");
        assert_eq!(datagram.payload_slice(), &payload[..]);
        assert_eq!(stack.counters().datagrams_sent, 1);
    }

    #[test]
    fn transmit_requests_are_validated() {
        let mut stack = station();
        assert_eq!(stack.send(&[0u8; APP_LEN - 1]), Err(layer::Error::BadSize));
        assert_eq!(stack.send(&[0u8; APP_LEN]), Err(layer::Error::Unreachable));

        deliver(&mut stack, &app_datagram(APP_PORT, &[0u8; APP_LEN]));
        assert!(pump(&mut stack).is_empty());

        assert_eq!(stack.send(&[0u8; APP_LEN]), Ok(()));
        assert_eq!(stack.send(&[0u8; APP_LEN]), Err(layer::Error::Exhausted));
    }

    #[test]
    fn replies_win_the_transmit_arbitration() {
        let mut stack = station();
        deliver(&mut stack, &app_datagram(APP_PORT, &[0u8; APP_LEN]));
        assert!(pump(&mut stack).is_empty());
        stack.send(&[0u8; APP_LEN]).unwrap();

        // An echo request arrives before the datagram went out.
        deliver(&mut stack, &echo_request(STATION_IP, &[0u8; 16]));

        let first = unframe(&pump(&mut stack));
        let packet = ipv4_packet::new_unchecked(&first[14..]);
        assert_eq!(packet.protocol(), IpProtocol::Icmp, "the reply goes first");

        let second = unframe(&pump(&mut stack));
        let packet = ipv4_packet::new_unchecked(&second[14..]);
        assert_eq!(packet.protocol(), IpProtocol::Udp);
    }

    #[test]
    fn corrupted_frame_is_dropped_silently() {
        let mut stack = station();
        let request = arp_request();
        let mut crc = Crc32::new();
        stack.line_in(LineEvent::Start);
        for &octet in &request {
            crc.feed(octet);
            stack.line_in(LineEvent::Octet(octet));
        }
        let mut trailer = crc.value().to_le_bytes();
        trailer[2] ^= 0x40;
        for &octet in &trailer {
            stack.line_in(LineEvent::Octet(octet));
        }
        stack.line_in(LineEvent::End);

        assert!(pump(&mut stack).is_empty());
        assert_eq!(stack.counters().frames_dropped, 1);
        assert_eq!(stack.counters().frames_accepted, 0);
    }

    #[test]
    fn foreign_destination_is_dropped() {
        let mut stack = station();
        let mut request = arp_request();
        request[..6].copy_from_slice(&[0x66, 0x66, 0x66, 0x66, 0x66, 0x66]);
        deliver(&mut stack, &request);
        assert!(pump(&mut stack).is_empty());
        assert_eq!(stack.counters().frames_dropped, 1);
    }

    #[test]
    fn broadcast_arp_request_is_answered() {
        let mut stack = station();
        let mut request = arp_request();
        request[..6].copy_from_slice(&[0xff; 6]);
        deliver(&mut stack, &request);
        let frame = unframe(&pump(&mut stack));
        assert_eq!(&frame[..42], &ARP_REPLY[..]);
    }

    #[test]
    fn unknown_ethertype_is_ignored() {
        let mut stack = station();
        let mut frame = vec![0u8; 60];
        frame[..6].copy_from_slice(STATION_MAC.as_bytes());
        frame[6..12].copy_from_slice(OTHER_MAC.as_bytes());
        frame[12] = 0x86;
        frame[13] = 0xdd;
        deliver(&mut stack, &frame);
        assert!(pump(&mut stack).is_empty());
        assert_eq!(stack.counters().frames_ignored, 1);
    }

    #[test]
    fn link_status_is_stored_only() {
        let mut stack = station();
        assert!(!stack.link_up());
        stack.set_link_up(true);
        assert!(stack.link_up());
        deliver(&mut stack, &arp_request());
        stack.set_link_up(false);
        assert!(!stack.link_up());
        assert_eq!(stack.counters().frames_accepted, 1);
    }
}
