//! The byte-walk primitives shared by all layers.

use crate::ram::PacketRam;
use crate::wire::checksum;

use super::{Error, Result};

/// A pair of monotonically advancing positions over the packet arena.
///
/// The read side walks the received frame, bounded by the end of the frame
/// data (FCS excluded); the write side walks the reply region. Every
/// primitive moves each side by exactly the number of octets it names, one
/// octet per step, and multi-octet values are big-endian throughout. Reads
/// past the frame end fail with [`Error::Truncated`]; write addressing wraps
/// with the arena, so the write side never fails.
pub(crate) struct Cursor<'a> {
    ram: &'a mut PacketRam,
    read: usize,
    end: usize,
    write: usize,
}

impl<'a> Cursor<'a> {
    /// A cursor reading `read..end` and writing from `write` on.
    pub fn new(ram: &'a mut PacketRam, read: usize, end: usize, write: usize) -> Self {
        Cursor { ram, read, end, write }
    }

    /// The next octet the read side would consume.
    pub fn read_pos(&self) -> usize {
        self.read
    }

    /// The next octet the write side would produce.
    pub fn write_pos(&self) -> usize {
        self.write
    }

    fn claim(&mut self, count: usize) -> Result<usize> {
        if count > self.end.saturating_sub(self.read) {
            return Err(Error::Truncated);
        }
        let start = self.read;
        self.read += count;
        Ok(start)
    }

    /// Consume `count` input octets without looking at them.
    pub fn skip(&mut self, count: usize) -> Result<()> {
        self.claim(count).map(|_| ())
    }

    /// Consume `count` input octets into a big-endian register.
    pub fn extract(&mut self, count: usize) -> Result<u64> {
        let start = self.claim(count)?;
        let mut value = 0u64;
        for idx in 0..count {
            value = value << 8 | u64::from(self.ram.get(start + idx));
        }
        Ok(value)
    }

    /// Consume `count` input octets and require them to equal `expect`.
    ///
    /// The first mismatch aborts with `or`; the reply region keeps whatever
    /// was already written, which the sequencer discards along with the
    /// frame.
    pub fn check(&mut self, count: usize, expect: u64, or: Error) -> Result<()> {
        if self.extract(count)? == expect {
            Ok(())
        } else {
            Err(or)
        }
    }

    /// Produce `count` octets of a big-endian register.
    pub fn emit(&mut self, count: usize, value: u64) {
        for idx in 0..count {
            let shift = 8 * (count - 1 - idx) as u32;
            self.ram.set(self.write + idx, (value >> shift) as u8);
        }
        self.write += count;
    }

    /// Consume `count` input octets and produce them verbatim.
    pub fn copy(&mut self, count: usize) -> Result<()> {
        let start = self.claim(count)?;
        for idx in 0..count {
            let octet = self.ram.get(start + idx);
            self.ram.set(self.write + idx, octet);
        }
        self.write += count;
        Ok(())
    }

    /// Consume input octets into `sink` instead of the reply region.
    pub fn copy_out(&mut self, sink: &mut [u8]) -> Result<()> {
        let start = self.claim(sink.len())?;
        for (idx, slot) in sink.iter_mut().enumerate() {
            *slot = self.ram.get(start + idx);
        }
        Ok(())
    }

    /// Overwrite a 16-bit field written earlier, without moving either side.
    ///
    /// Used for the checksum and length fields whose values are only known
    /// once the octets they cover have been produced.
    pub fn patch16(&mut self, addr: usize, value: u16) {
        self.ram.set(addr, (value >> 8) as u8);
        self.ram.set(addr + 1, value as u8);
    }

    /// The Internet checksum over `len` octets of produced reply at `base`.
    pub fn checksum(&self, base: usize, len: usize) -> u16 {
        let mut sum = checksum::Accumulator::new();
        for idx in 0..len {
            sum.feed(self.ram.get(base + idx), idx % 2 == 1);
        }
        sum.value()
    }
}
