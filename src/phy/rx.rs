//! Frame reception from the line side.

use crate::ram::{FrameDescriptor, PacketRam};
use crate::wire::EthernetAddress;

use super::crc::Crc32;
use super::filter::AddressFilter;
use super::LineEvent;

/// Outcome of a line event that concluded a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// A frame passed the address and FCS checks and is ready for dispatch.
    Accepted,
    /// A frame was abandoned: bad FCS, foreign destination, or overrun.
    Dropped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Waiting for carrier.
    Idle,
    /// Carrier present, octets flowing into the receive window.
    Stream,
    /// Carrier present but the frame is already condemned; consume silently.
    Drop,
}

/// The frame receiver.
///
/// Recovers one frame at a time from the carrier-delimited octet stream.
/// While streaming, every octet runs through the CRC engine; the first six
/// are staged and compared against the station address, and nothing touches
/// the packet memory until that comparison passes. A foreign frame therefore
/// leaves no trace in the arena at all.
///
/// An accepted frame is held as a [`FrameDescriptor`] until the consumer
/// collects it with [`take_frame`]; carrier events arriving in between are
/// ignored, which is what pushes back on the line during dispatch. The
/// descriptor length counts every octet that streamed in, the four FCS
/// octets included.
///
/// [`take_frame`]: #method.take_frame
pub struct Receiver {
    state: State,
    crc: Crc32,
    filter: AddressFilter,
    stage: [u8; 6],
    length: usize,
    base: usize,
    window: usize,
    ready: Option<FrameDescriptor>,
}

impl Receiver {
    /// A receiver writing into `window` octets of the arena at `base`,
    /// filtering for `addr`.
    pub fn new(addr: EthernetAddress, base: usize, window: usize) -> Self {
        Receiver {
            state: State::Idle,
            crc: Crc32::new(),
            filter: AddressFilter::new(addr),
            stage: [0; 6],
            length: 0,
            base,
            window,
            ready: None,
        }
    }

    /// Advance the state machine by one line event.
    ///
    /// Returns a [`Disposition`] on the event that concludes a frame, `None`
    /// otherwise.
    pub fn advance(&mut self, event: LineEvent, ram: &mut PacketRam) -> Option<Disposition> {
        match (self.state, event) {
            (State::Idle, LineEvent::Start) => {
                if self.ready.is_some() {
                    // Previous frame not collected yet; hold the line off.
                    return Some(Disposition::Dropped);
                }
                self.crc.reset();
                self.filter.reset();
                self.length = 0;
                self.state = State::Stream;
                None
            }
            (State::Idle, _) => None,

            (State::Stream, LineEvent::Octet(octet)) => self.stream_octet(octet, ram),
            (State::Stream, LineEvent::End) => {
                self.state = State::Idle;
                if self.filter.matches() && self.crc.matches_residual() {
                    let desc = FrameDescriptor::new(self.base, self.length);
                    net_trace!("rx: accepted frame of {} octets", self.length);
                    self.ready = Some(desc);
                    Some(Disposition::Accepted)
                } else {
                    net_trace!("rx: dropped frame of {} octets", self.length);
                    Some(Disposition::Dropped)
                }
            }
            (State::Stream, LineEvent::Start) => {
                // Carrier glitch; start over with the new frame.
                self.crc.reset();
                self.filter.reset();
                self.length = 0;
                None
            }

            (State::Drop, LineEvent::End) => {
                self.state = State::Idle;
                None
            }
            (State::Drop, _) => None,
        }
    }

    fn stream_octet(&mut self, octet: u8, ram: &mut PacketRam) -> Option<Disposition> {
        if self.length == self.window {
            self.state = State::Drop;
            net_debug!("rx: frame overruns the receive window");
            return Some(Disposition::Dropped);
        }

        self.crc.feed(octet);

        if !self.filter.done() {
            self.stage[self.length] = octet;
            self.filter.feed(octet);
            self.length += 1;
            if self.filter.done() {
                if !self.filter.matches() {
                    self.state = State::Drop;
                    return Some(Disposition::Dropped);
                }
                // Ours: commit the staged destination octets.
                for (idx, &staged) in self.stage.iter().enumerate() {
                    ram.set(self.base + idx, staged);
                }
            }
            return None;
        }

        ram.set(self.base + self.length, octet);
        self.length += 1;
        None
    }

    /// Collect the accepted frame, acknowledging the receiver.
    pub fn take_frame(&mut self) -> Option<FrameDescriptor> {
        self.ready.take()
    }

    /// True while an accepted frame awaits collection.
    pub fn has_frame(&self) -> bool {
        self.ready.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phy::LineEvent;
    use crate::ram::{PacketRam, RX_BASE, WINDOW};

    const STATION: EthernetAddress =
        EthernetAddress([0x01, 0x23, 0x45, 0x67, 0x89, 0xab]);

    fn fcs(data: &[u8]) -> [u8; 4] {
        let mut crc = Crc32::new();
        for &octet in data {
            crc.feed(octet);
        }
        crc.value().to_le_bytes()
    }

    fn run_frame(rx: &mut Receiver, ram: &mut PacketRam, data: &[u8], trailer: &[u8; 4])
        -> Option<Disposition>
    {
        let mut last = rx.advance(LineEvent::Start, ram);
        for &octet in data.iter().chain(trailer) {
            last = rx.advance(LineEvent::Octet(octet), ram).or(last);
        }
        rx.advance(LineEvent::End, ram).or(last)
    }

    fn sample_frame() -> Vec<u8> {
        let mut frame = vec![];
        frame.extend_from_slice(&STATION.0);
        frame.extend_from_slice(&[0x00, 0x01, 0x02, 0x03, 0x04, 0x05]);
        frame.extend_from_slice(&[0x08, 0x06]);
        frame.extend_from_slice(&[0u8; 46]);
        frame
    }

    #[test]
    fn accepts_own_frame() {
        let mut ram = PacketRam::new();
        let mut rx = Receiver::new(STATION, RX_BASE, WINDOW);
        let frame = sample_frame();
        let disp = run_frame(&mut rx, &mut ram, &frame, &fcs(&frame));
        assert_eq!(disp, Some(Disposition::Accepted));

        let desc = rx.take_frame().unwrap();
        assert_eq!(desc.offset(), RX_BASE);
        assert_eq!(desc.length(), frame.len() + 4);
        assert_eq!(ram.window(RX_BASE, frame.len()), &frame[..]);
    }

    #[test]
    fn accepts_broadcast() {
        let mut ram = PacketRam::new();
        let mut rx = Receiver::new(STATION, RX_BASE, WINDOW);
        let mut frame = sample_frame();
        frame[..6].copy_from_slice(&[0xff; 6]);
        let disp = run_frame(&mut rx, &mut ram, &frame, &fcs(&frame));
        assert_eq!(disp, Some(Disposition::Accepted));
    }

    #[test]
    fn drops_bad_fcs() {
        let mut ram = PacketRam::new();
        let mut rx = Receiver::new(STATION, RX_BASE, WINDOW);
        let frame = sample_frame();
        let mut trailer = fcs(&frame);
        trailer[0] ^= 0xff;
        let disp = run_frame(&mut rx, &mut ram, &frame, &trailer);
        assert_eq!(disp, Some(Disposition::Dropped));
        assert!(rx.take_frame().is_none());
    }

    #[test]
    fn foreign_frame_leaves_no_trace() {
        let mut ram = PacketRam::new();
        let mut rx = Receiver::new(STATION, RX_BASE, WINDOW);
        let mut frame = sample_frame();
        frame[..6].copy_from_slice(&[0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f]);
        frame[14..].iter_mut().for_each(|b| *b = 0x5a);
        let disp = run_frame(&mut rx, &mut ram, &frame, &fcs(&frame));
        assert_eq!(disp, Some(Disposition::Dropped));
        assert!(ram.window(RX_BASE, WINDOW).iter().all(|&b| b == 0));
    }

    #[test]
    fn backpressure_while_uncollected() {
        let mut ram = PacketRam::new();
        let mut rx = Receiver::new(STATION, RX_BASE, WINDOW);
        let frame = sample_frame();
        let trailer = fcs(&frame);
        assert_eq!(run_frame(&mut rx, &mut ram, &frame, &trailer),
                   Some(Disposition::Accepted));
        // Second frame arrives before the first was collected.
        assert_eq!(rx.advance(LineEvent::Start, &mut ram),
                   Some(Disposition::Dropped));
        assert!(rx.has_frame());
    }

    #[test]
    fn overrun_is_dropped() {
        let mut ram = PacketRam::new();
        let mut rx = Receiver::new(STATION, RX_BASE, WINDOW);
        rx.advance(LineEvent::Start, &mut ram);
        let mut disp = None;
        for idx in 0..WINDOW + 1 {
            let octet = if idx < 6 { 0xff } else { 0x00 };
            disp = rx.advance(LineEvent::Octet(octet), &mut ram);
        }
        assert_eq!(disp, Some(Disposition::Dropped));
        assert_eq!(rx.advance(LineEvent::End, &mut ram), None);
        assert!(rx.take_frame().is_none());
    }
}
