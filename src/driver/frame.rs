//! CEC frame buffer
//!
//! A CEC frame is at most 16 bytes. Byte 0 is the header block: initiator in
//! the high nibble, destination in the low nibble. A header-only frame is a
//! poll. Opcode and operands are opaque to the driver.

use super::error::{FrameError, FrameResult};
use crate::internal::constants::{BROADCAST_ADDR, MAX_FRAME_LEN};

/// Fixed-capacity CEC frame.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CecFrame {
    data: [u8; MAX_FRAME_LEN],
    len: u8,
}

impl CecFrame {
    /// Empty frame
    pub const fn new() -> Self {
        Self {
            data: [0; MAX_FRAME_LEN],
            len: 0,
        }
    }

    /// Build an outgoing frame from raw bytes (header first).
    pub fn from_slice(bytes: &[u8]) -> FrameResult<Self> {
        if bytes.is_empty() {
            return Err(FrameError::Empty);
        }
        if bytes.len() > MAX_FRAME_LEN {
            return Err(FrameError::TooLong);
        }

        let mut frame = Self::new();
        frame.data[..bytes.len()].copy_from_slice(bytes);
        frame.len = bytes.len() as u8;
        Ok(frame)
    }

    /// Build a poll frame (header only) from `initiator` to `destination`.
    pub const fn poll(initiator: u8, destination: u8) -> Self {
        let mut frame = Self::new();
        frame.data[0] = header(initiator, destination);
        frame.len = 1;
        frame
    }

    /// Copy of received bytes; anything past 16 bytes is dropped.
    pub(crate) fn truncated(bytes: &[u8]) -> Self {
        let len = bytes.len().min(MAX_FRAME_LEN);
        let mut frame = Self::new();
        frame.data[..len].copy_from_slice(&bytes[..len]);
        frame.len = len as u8;
        frame
    }

    /// Frame bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len as usize]
    }

    /// Number of valid bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether the frame has no bytes
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Header byte
    pub const fn header(&self) -> Option<u8> {
        if self.len == 0 {
            None
        } else {
            Some(self.data[0])
        }
    }

    /// Initiator logical address (high nibble of the header)
    pub const fn initiator(&self) -> Option<u8> {
        match self.header() {
            Some(h) => Some(h >> 4),
            None => None,
        }
    }

    /// Destination logical address (low nibble of the header)
    pub const fn destination(&self) -> Option<u8> {
        match self.header() {
            Some(h) => Some(h & 0x0F),
            None => None,
        }
    }

    /// Opcode, if any
    pub const fn opcode(&self) -> Option<u8> {
        if self.len < 2 {
            None
        } else {
            Some(self.data[1])
        }
    }

    /// Operands following the opcode
    pub fn operands(&self) -> &[u8] {
        if self.len < 2 {
            &[]
        } else {
            &self.data[2..self.len as usize]
        }
    }

    /// Header-only frame
    pub const fn is_poll(&self) -> bool {
        self.len == 1
    }

    /// Addressed to every device
    pub const fn is_broadcast(&self) -> bool {
        matches!(self.destination(), Some(BROADCAST_ADDR))
    }
}

impl Default for CecFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for CecFrame {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("CecFrame").field(&self.as_bytes()).finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CecFrame {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "CecFrame({=[u8]:x})", self.as_bytes());
    }
}

impl TryFrom<&[u8]> for CecFrame {
    type Error = FrameError;

    fn try_from(bytes: &[u8]) -> FrameResult<Self> {
        Self::from_slice(bytes)
    }
}

/// Pack initiator and destination into a header byte
pub const fn header(initiator: u8, destination: u8) -> u8 {
    ((initiator & 0x0F) << 4) | (destination & 0x0F)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_copies_bytes() {
        let frame = CecFrame::from_slice(&[0x40, 0x04]).unwrap();

        assert_eq!(frame.as_bytes(), &[0x40, 0x04]);
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.initiator(), Some(4));
        assert_eq!(frame.destination(), Some(0));
        assert_eq!(frame.opcode(), Some(0x04));
        assert!(frame.operands().is_empty());
    }

    #[test]
    fn from_slice_rejects_empty_and_long() {
        assert_eq!(CecFrame::from_slice(&[]), Err(FrameError::Empty));
        assert_eq!(CecFrame::from_slice(&[0u8; 17]), Err(FrameError::TooLong));
        assert!(CecFrame::from_slice(&[0u8; 16]).is_ok());
    }

    #[test]
    fn poll_frame_is_header_only() {
        let frame = CecFrame::poll(1, 0);

        assert!(frame.is_poll());
        assert_eq!(frame.as_bytes(), &[0x10]);
        assert_eq!(frame.opcode(), None);
    }

    #[test]
    fn broadcast_destination() {
        let frame = CecFrame::from_slice(&[0x4F, 0x82, 0x10, 0x00]).unwrap();

        assert!(frame.is_broadcast());
        assert_eq!(frame.operands(), &[0x10, 0x00]);
    }

    #[test]
    fn truncated_clamps_to_capacity() {
        let frame = CecFrame::truncated(&[0xAA; 20]);
        assert_eq!(frame.len(), 16);

        let empty = CecFrame::truncated(&[]);
        assert!(empty.is_empty());
        assert_eq!(empty.header(), None);
        assert_eq!(empty.initiator(), None);
    }

    #[test]
    fn header_packs_nibbles() {
        assert_eq!(header(0xF, 0x0), 0xF0);
        assert_eq!(header(4, 15), 0x4F);
    }
}
