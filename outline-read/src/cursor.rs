//! raw outline bytes

use crate::read::ReadError;

/// A bounds-checked reader over a borrowed range of outline bytes.
///
/// The cursor never owns memory; it borrows a (sub-)range of a longer lived
/// font buffer. The position always satisfies `0 <= position <= len`.
///
/// All reads are tolerant: reading at the end of the range returns zero
/// without advancing, and seeking outside the range clamps. Either event
/// sets a sticky *truncated* flag which can be inspected with
/// [`is_truncated`](Self::is_truncated) or turned into an error with
/// [`finish`](Self::finish).
#[derive(Debug, Default, Clone, Copy)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
    truncated: bool,
}

impl<'a> ByteCursor<'a> {
    /// Create a new cursor positioned at the start of `bytes`.
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: 0,
            truncated: false,
        }
    }

    /// The size of the addressed range, in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if the cursor addresses zero bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The current read position, relative to the start of the range.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The number of bytes between the current position and the end.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    /// `true` if any read or seek on this cursor ran outside of its range.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// All bytes addressed by this cursor, regardless of position.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The bytes from the current position to the end of the range.
    pub fn remaining_bytes(&self) -> &'a [u8] {
        self.bytes.get(self.pos..).unwrap_or_default()
    }

    /// Move to `offset` bytes from the start of the range.
    ///
    /// Offsets past the end clamp to the end; negative offsets clamp to
    /// zero. Both cases mark the cursor as truncated.
    pub fn seek(&mut self, offset: i32) {
        self.set_pos(offset as i64);
    }

    /// Move `delta` bytes relative to the current position, clamping to the
    /// range like [`seek`](Self::seek).
    pub fn skip(&mut self, delta: i32) {
        self.set_pos(self.pos as i64 + delta as i64);
    }

    fn set_pos(&mut self, pos: i64) {
        if pos < 0 {
            self.truncated = true;
            self.pos = 0;
        } else if pos as u64 > self.bytes.len() as u64 {
            self.truncated = true;
            self.pos = self.bytes.len();
        } else {
            self.pos = pos as usize;
        }
    }

    /// Return the next byte without advancing, or zero at the end.
    pub fn peek8(&self) -> u8 {
        self.bytes.get(self.pos).copied().unwrap_or_default()
    }

    /// Return the next byte and advance past it, or zero at the end.
    pub fn get8(&mut self) -> u8 {
        match self.bytes.get(self.pos) {
            Some(byte) => {
                self.pos += 1;
                *byte
            }
            None => {
                self.truncated = true;
                0
            }
        }
    }

    /// Read an `n` byte big-endian unsigned integer, for `n` in `1..=4`.
    ///
    /// Bytes beyond the end of the range read as zero.
    pub fn get(&mut self, n: usize) -> u32 {
        debug_assert!((1..=4).contains(&n), "invalid read width {n}");
        (0..n.min(4)).fold(0u32, |acc, _| (acc << 8) | self.get8() as u32)
    }

    /// Read a big-endian `u16`.
    pub fn get16(&mut self) -> u16 {
        self.get(2) as u16
    }

    /// Read a big-endian `u32`.
    pub fn get32(&mut self) -> u32 {
        self.get(4)
    }

    /// Returns a new cursor addressing `offset..offset + length` of this
    /// cursor's range.
    ///
    /// This is the single point at which sub-ranges are bounds checked: if
    /// either argument is negative or the range does not fit, the result is
    /// an empty cursor. Callers must check the size of the result before
    /// trusting anything decoded from it.
    pub fn range(&self, offset: i32, length: i32) -> ByteCursor<'a> {
        self.checked_range(offset, length).unwrap_or_default()
    }

    /// Like [`range`](Self::range), but reports an invalid request as an
    /// error instead of producing an empty cursor.
    pub fn checked_range(&self, offset: i32, length: i32) -> Result<ByteCursor<'a>, ReadError> {
        if offset < 0 || length < 0 {
            return Err(ReadError::OutOfBounds);
        }
        let start = offset as usize;
        let end = start
            .checked_add(length as usize)
            .ok_or(ReadError::OutOfBounds)?;
        self.slice(start, end).ok_or(ReadError::OutOfBounds)
    }

    pub(crate) fn slice(&self, start: usize, end: usize) -> Option<ByteCursor<'a>> {
        self.bytes.get(start..end).map(ByteCursor::new)
    }

    /// Consume the cursor, returning an error if any read was truncated.
    pub fn finish(self) -> Result<(), ReadError> {
        if self.truncated {
            Err(ReadError::Truncated)
        } else {
            Ok(())
        }
    }
}

impl AsRef<[u8]> for ByteCursor<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [u8; 8] = [0x00, 0x01, 0x02, 0x03, 0xFF, 0xFE, 0xFD, 0xFC];

    #[test]
    fn big_endian_reads() {
        let mut cursor = ByteCursor::new(&DATA);
        assert_eq!(cursor.get8(), 0x00);
        assert_eq!(cursor.get16(), 0x0102);
        assert_eq!(cursor.peek8(), 0x03);
        assert_eq!(cursor.get32(), 0x03FF_FEFD);
        assert_eq!(cursor.get(1), 0xFC);
        assert!(!cursor.is_truncated());
        assert!(cursor.finish().is_ok());
    }

    #[test]
    fn three_byte_read() {
        let mut cursor = ByteCursor::new(&DATA);
        cursor.skip(1);
        assert_eq!(cursor.get(3), 0x01_0203);
    }

    #[test]
    fn reads_at_end_return_zero() {
        let mut cursor = ByteCursor::new(&DATA);
        cursor.seek(DATA.len() as i32);
        assert_eq!(cursor.position(), DATA.len());
        assert!(!cursor.is_truncated());
        assert_eq!(cursor.peek8(), 0);
        assert_eq!(cursor.get8(), 0);
        assert_eq!(cursor.get16(), 0);
        assert_eq!(cursor.get32(), 0);
        assert_eq!(cursor.position(), DATA.len());
        assert!(cursor.is_truncated());
        assert_eq!(cursor.finish(), Err(ReadError::Truncated));
    }

    #[test]
    fn partial_read_at_end() {
        let mut cursor = ByteCursor::new(&DATA);
        cursor.seek(7);
        // the single remaining byte is shifted up like any other
        assert_eq!(cursor.get16(), 0xFC00);
        assert_eq!(cursor.remaining(), 0);
        assert!(cursor.is_truncated());
    }

    #[test]
    fn seek_clamps() {
        let mut cursor = ByteCursor::new(&DATA);
        cursor.seek(100);
        assert_eq!(cursor.position(), DATA.len());
        assert!(cursor.is_truncated());
        let mut cursor = ByteCursor::new(&DATA);
        cursor.seek(-5);
        assert_eq!(cursor.position(), 0);
        assert!(cursor.is_truncated());
        let mut cursor = ByteCursor::new(&DATA);
        cursor.seek(4);
        cursor.skip(-2);
        assert_eq!(cursor.position(), 2);
        cursor.skip(i32::MAX);
        assert_eq!(cursor.position(), DATA.len());
        cursor.skip(i32::MIN);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn valid_ranges() {
        let cursor = ByteCursor::new(&DATA);
        let size = DATA.len() as i32;
        for offset in 0..=size {
            for length in 0..=(size - offset) {
                let range = cursor.range(offset, length);
                assert_eq!(range.len(), length as usize, "range({offset}, {length})");
                assert_eq!(range.position(), 0);
                assert_eq!(
                    range.as_bytes(),
                    &DATA[offset as usize..(offset + length) as usize]
                );
            }
        }
    }

    #[test]
    fn invalid_ranges_are_empty() {
        let cursor = ByteCursor::new(&DATA);
        let size = DATA.len() as i32;
        let cases = [
            (0, size + 1),
            (1, size),
            (size, 1),
            (size + 1, 0),
            (-1, 2),
            (2, -1),
            (-1, -1),
            (i32::MAX, i32::MAX),
            (4, i32::MAX),
        ];
        for (offset, length) in cases {
            assert_eq!(cursor.range(offset, length).len(), 0, "range({offset}, {length})");
            assert_eq!(
                cursor.checked_range(offset, length).map(|r| r.len()),
                Err(ReadError::OutOfBounds)
            );
        }
    }

    #[test]
    fn nested_ranges() {
        let cursor = ByteCursor::new(&DATA);
        let outer = cursor.range(2, 4);
        let inner = outer.range(1, 2);
        assert_eq!(inner.as_bytes(), &[0x03, 0xFF]);
        // sub-ranges are relative to their parent, not the original buffer
        assert!(outer.range(2, 4).is_empty());
    }

    #[test]
    fn empty_cursor() {
        let mut cursor = ByteCursor::default();
        assert!(cursor.is_empty());
        assert_eq!(cursor.get32(), 0);
        assert_eq!(cursor.position(), 0);
        assert!(cursor.range(0, 0).is_empty());
    }
}
