//! Frame transmission to the line side.

use crate::ram::{FrameDescriptor, PacketRam};

use super::crc::Crc32;
use super::LineSymbol;

/// Minimum number of data octets on the wire, padding included, FCS excluded.
pub const MIN_DATA_LEN: usize = 60;

/// Octets of preamble before the start-of-frame delimiter.
const PREAMBLE_LEN: u8 = 7;

/// Idle symbols between frames.
const GAP_LEN: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Preamble(u8),
    Data(usize),
    Pad(usize),
    Fcs(u8),
    Gap(u8),
}

/// The frame transmitter.
///
/// Streams a framed descriptor out one symbol per [`step`]: 7 preamble octets
/// and the start delimiter, the frame data, zero padding up to the 60-octet
/// minimum, the four FCS octets least-significant first, and 12 idle symbols
/// of inter-frame gap. The CRC engine accumulates over data and padding only.
///
/// [`step`]: #method.step
pub struct Transmitter {
    state: State,
    crc: Crc32,
    frame: Option<FrameDescriptor>,
}

impl Transmitter {
    /// A transmitter with nothing to send.
    pub fn new() -> Self {
        Transmitter {
            state: State::Idle,
            crc: Crc32::new(),
            frame: None,
        }
    }

    /// True when a new frame can be loaded.
    pub fn ready(&self) -> bool {
        self.state == State::Idle
    }

    /// Load a frame and leave idle. The next [`step`] emits the preamble.
    ///
    /// # Panics
    /// Panics if the transmitter is not [`ready`]; the sequencer checks
    /// before handing over a descriptor.
    ///
    /// [`step`]: #method.step
    /// [`ready`]: #method.ready
    pub fn start(&mut self, frame: FrameDescriptor) {
        assert!(self.ready(), "frame loaded into a busy transmitter");
        net_trace!("tx: starting frame of {} octets", frame.length());
        self.frame = Some(frame);
        self.state = State::Preamble(0);
    }

    /// Produce the next line symbol.
    pub fn step(&mut self, ram: &PacketRam) -> LineSymbol {
        let frame = match &self.frame {
            Some(frame) => frame,
            None => return LineSymbol::Idle,
        };

        match self.state {
            State::Idle => LineSymbol::Idle,

            State::Preamble(count) => {
                if count < PREAMBLE_LEN {
                    self.state = State::Preamble(count + 1);
                    LineSymbol::Data(0x55)
                } else {
                    self.crc.reset();
                    self.state = State::Data(0);
                    LineSymbol::Data(0xd5)
                }
            }

            State::Data(index) => {
                let octet = ram.get(frame.offset() + index);
                self.crc.feed(octet);
                let next = index + 1;
                self.state = if next < frame.length() {
                    State::Data(next)
                } else if next < MIN_DATA_LEN {
                    State::Pad(next)
                } else {
                    State::Fcs(0)
                };
                LineSymbol::Data(octet)
            }

            State::Pad(index) => {
                self.crc.feed(0x00);
                let next = index + 1;
                self.state = if next < MIN_DATA_LEN {
                    State::Pad(next)
                } else {
                    State::Fcs(0)
                };
                LineSymbol::Data(0x00)
            }

            State::Fcs(index) => {
                let octet = (self.crc.value() >> (8 * index as u32)) as u8;
                self.state = if index < 3 {
                    State::Fcs(index + 1)
                } else {
                    State::Gap(0)
                };
                LineSymbol::Data(octet)
            }

            State::Gap(count) => {
                if count + 1 < GAP_LEN {
                    self.state = State::Gap(count + 1);
                } else {
                    self.state = State::Idle;
                    self.frame = None;
                }
                LineSymbol::Idle
            }
        }
    }
}

impl Default for Transmitter {
    fn default() -> Self {
        Transmitter::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ram::{PacketRam, TX_BASE};

    fn drain(tx: &mut Transmitter, ram: &PacketRam) -> (Vec<u8>, usize) {
        let mut octets = vec![];
        let mut idles = 0;
        while !tx.ready() {
            match tx.step(ram) {
                LineSymbol::Data(octet) => octets.push(octet),
                LineSymbol::Idle => idles += 1,
            }
        }
        (octets, idles)
    }

    fn load(ram: &mut PacketRam, data: &[u8]) -> FrameDescriptor {
        ram.window_mut(TX_BASE, data.len()).copy_from_slice(data);
        FrameDescriptor::new(TX_BASE, data.len())
    }

    #[test]
    fn idle_when_empty() {
        let ram = PacketRam::new();
        let mut tx = Transmitter::new();
        assert!(tx.ready());
        assert_eq!(tx.step(&ram), LineSymbol::Idle);
    }

    #[test]
    fn frame_layout_and_padding() {
        let mut ram = PacketRam::new();
        let mut tx = Transmitter::new();
        let data = [0x5a; 42];
        let desc = load(&mut ram, &data);
        tx.start(desc);

        let (octets, idles) = drain(&mut tx, &ram);
        // preamble + SFD + padded data + FCS
        assert_eq!(octets.len(), 8 + MIN_DATA_LEN + 4);
        assert_eq!(&octets[..8], &[0x55, 0x55, 0x55, 0x55, 0x55, 0x55, 0x55, 0xd5]);
        assert_eq!(&octets[8..50], &data[..]);
        assert!(octets[50..68].iter().all(|&b| b == 0));
        assert_eq!(idles, GAP_LEN as usize);

        // The emitted stream must carry its own valid FCS.
        let mut crc = Crc32::new();
        for &octet in &octets[8..] {
            crc.feed(octet);
        }
        assert!(crc.matches_residual());
        assert!(tx.ready());
    }

    #[test]
    fn long_frame_is_not_padded() {
        let mut ram = PacketRam::new();
        let mut tx = Transmitter::new();
        let data = [0xc3; 100];
        let desc = load(&mut ram, &data);
        tx.start(desc);

        let (octets, _) = drain(&mut tx, &ram);
        assert_eq!(octets.len(), 8 + 100 + 4);
        let mut crc = Crc32::new();
        for &octet in &octets[8..] {
            crc.feed(octet);
        }
        assert!(crc.matches_residual());
    }

    #[test]
    #[should_panic]
    fn start_while_busy_panics() {
        let mut ram = PacketRam::new();
        let mut tx = Transmitter::new();
        let desc = load(&mut ram, &[0u8; 20]);
        tx.start(desc);
        tx.start(FrameDescriptor::new(TX_BASE, 20));
    }
}
