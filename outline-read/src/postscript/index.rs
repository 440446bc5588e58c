//! Parsing for compact INDEX objects.
//!
//! See <https://adobe-type-tools.github.io/font-tech-notes/pdfs/5176.CFF.pdf>
//! section 5, "INDEX Data".

use super::Error;
use crate::ByteCursor;

/// An INDEX: a 2-byte count, an offset size, `count + 1` offsets of that
/// size and the object data they point into.
///
/// The index holds a cursor spanning exactly the bytes of the structure.
/// Entries are located on demand; nothing is decoded up front.
#[derive(Clone, Copy, Debug, Default)]
pub struct Index<'a> {
    data: ByteCursor<'a>,
}

impl<'a> Index<'a> {
    /// Creates an index from data that begins with an INDEX structure.
    pub fn new(data: &'a [u8]) -> Result<Self, Error> {
        Self::read(&mut ByteCursor::new(data))
    }

    /// Reads the INDEX starting at the current position of `cursor`,
    /// leaving the cursor positioned just past its last object.
    ///
    /// Only the header and the final offset are examined, which makes this
    /// the cheap way to skip over an INDEX whose contents are not needed.
    pub fn read(cursor: &mut ByteCursor<'a>) -> Result<Self, Error> {
        let start = cursor.position();
        let count = cursor.get16();
        if count != 0 {
            let off_size = cursor.get8();
            check_off_size(off_size)?;
            cursor.skip(off_size as i32 * count as i32);
            // Offsets are relative to the byte preceding the object data,
            // so the final offset is one more than the data length.
            let last = cursor.get(off_size as usize);
            if last == 0 {
                return Err(Error::ZeroOffsetInIndex);
            }
            cursor.skip(i32::try_from(last - 1).unwrap_or(i32::MAX));
        }
        let data = cursor
            .slice(start, cursor.position())
            .unwrap_or_default();
        Ok(Self { data })
    }

    /// Returns the number of objects in the index.
    pub fn count(&self) -> u32 {
        let mut cursor = self.data;
        cursor.seek(0);
        cursor.get16() as u32
    }

    /// Returns a cursor over the raw bytes of the whole INDEX structure.
    pub fn as_cursor(&self) -> ByteCursor<'a> {
        self.data
    }

    /// Returns the total size in bytes of the index structure.
    pub fn size_in_bytes(&self) -> usize {
        self.data.len()
    }

    /// Returns the data for the object at the given index.
    ///
    /// The header is re-read on every call, so access is O(1) in the number
    /// of objects. An `index` outside of `0..count` produces an empty
    /// cursor.
    pub fn get(&self, index: i32) -> Result<ByteCursor<'a>, Error> {
        let mut cursor = self.data;
        cursor.seek(0);
        let count = cursor.get16() as i64;
        if count == 0 {
            return Ok(ByteCursor::default());
        }
        let off_size = cursor.get8();
        check_off_size(off_size)?;
        if index < 0 || index as i64 >= count {
            return Ok(ByteCursor::default());
        }
        cursor.skip(index * off_size as i32);
        let start = cursor.get(off_size as usize) as i64;
        let end = cursor.get(off_size as usize) as i64;
        if start == 0 {
            return Err(Error::ZeroOffsetInIndex);
        }
        // 2 byte count, 1 byte off_size and the offset array, minus one
        // for the 1-based offsets
        let offset = 2 + (count + 1) * off_size as i64 + start;
        let length = end - start;
        Ok(match (i32::try_from(offset), i32::try_from(length)) {
            (Ok(offset), Ok(length)) => self.data.range(offset, length),
            _ => ByteCursor::default(),
        })
    }

    /// Computes the bias that is added to subroutine operands in
    /// charstrings that call into this index.
    pub fn subr_bias(&self) -> i32 {
        subr_bias(self.count())
    }

    /// Returns the subroutine selected by the (unbiased) charstring operand
    /// `operand`.
    ///
    /// If the biased index falls outside of the index, or the index itself
    /// is malformed, the result is an empty cursor: "no subroutine".
    pub fn get_subr(&self, operand: i32) -> ByteCursor<'a> {
        let count = self.count() as i32;
        let index = operand.saturating_add(self.subr_bias());
        if index < 0 || index >= count {
            log::debug!("subroutine {operand} resolves to {index}, outside of 0..{count}");
            return ByteCursor::default();
        }
        self.get(index).unwrap_or_else(|e| {
            log::debug!("failed to read subroutine {index}: {e}");
            ByteCursor::default()
        })
    }
}

/// Computes the bias for a subroutine INDEX holding `count` entries.
///
/// See <https://adobe-type-tools.github.io/font-tech-notes/pdfs/5177.Type2.pdf>
/// section 4.7, "Subroutine Operators".
pub fn subr_bias(count: u32) -> i32 {
    if count < 1240 {
        107
    } else if count < 33900 {
        1131
    } else {
        32768
    }
}

fn check_off_size(off_size: u8) -> Result<(), Error> {
    if (1..=4).contains(&off_size) {
        Ok(())
    } else {
        log::debug!("INDEX has invalid offset size {off_size}");
        Err(Error::InvalidIndexOffsetSize(off_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raster_test_data::bebuffer::BeBuffer;

    fn objects(count: usize) -> Vec<Vec<u8>> {
        (0..count)
            .map(|i| (0..(i % 7) as u8 + 1).map(|b| b ^ i as u8).collect())
            .collect()
    }

    fn check_index(off_size: u8, count: usize) {
        let objects = objects(count);
        let refs = objects.iter().map(Vec::as_slice).collect::<Vec<_>>();
        let buf = BeBuffer::new().push_index(off_size, &refs).push(0xAAu8);
        let mut cursor = ByteCursor::new(buf.as_slice());
        let index = Index::read(&mut cursor).unwrap();
        // we should be positioned at the trailing byte
        assert_eq!(cursor.get8(), 0xAA);
        assert_eq!(index.size_in_bytes(), buf.len() - 1);
        assert_eq!(index.count(), count as u32);
        for (i, object) in objects.iter().enumerate() {
            assert_eq!(index.get(i as i32).unwrap().as_bytes(), object.as_slice());
        }
    }

    #[test]
    fn index_offsize1_count4() {
        check_index(1, 4);
    }

    #[test]
    fn index_offsize2_count64() {
        check_index(2, 64);
    }

    #[test]
    fn index_offsize3_count128() {
        check_index(3, 128);
    }

    #[test]
    fn index_offsize4_count256() {
        check_index(4, 256);
    }

    #[test]
    fn empty_index() {
        let buf = BeBuffer::new().push(0u16).push(0x55u8);
        let mut cursor = ByteCursor::new(buf.as_slice());
        let index = Index::read(&mut cursor).unwrap();
        assert_eq!(index.size_in_bytes(), 2);
        assert_eq!(index.count(), 0);
        assert!(index.get(0).unwrap().is_empty());
        assert_eq!(cursor.get8(), 0x55);
    }

    #[test]
    fn out_of_range_entries_are_empty() {
        let buf = BeBuffer::new().push_index(1, &[b"abc", b"de"]);
        let index = Index::new(buf.as_slice()).unwrap();
        assert!(index.get(2).unwrap().is_empty());
        assert!(index.get(-1).unwrap().is_empty());
        assert_eq!(index.get(1).unwrap().as_bytes(), b"de");
    }

    #[test]
    fn invalid_offset_size() {
        let buf = BeBuffer::new().push(1u16).push(5u8).extend([0u8; 12]);
        assert!(matches!(
            Index::new(buf.as_slice()),
            Err(Error::InvalidIndexOffsetSize(5))
        ));
        let buf = BeBuffer::new().push(1u16).push(0u8);
        assert!(matches!(
            Index::new(buf.as_slice()),
            Err(Error::InvalidIndexOffsetSize(0))
        ));
    }

    #[test]
    fn zero_offset() {
        let buf = BeBuffer::new().push(1u16).push(1u8).extend([1u8, 0]);
        assert_eq!(
            Index::new(buf.as_slice()).unwrap_err(),
            Error::ZeroOffsetInIndex
        );
    }

    #[test]
    fn truncated_index_yields_empty_entries() {
        // claims 10 bytes of object data but only has 2
        let buf = BeBuffer::new()
            .push(1u16)
            .push(1u8)
            .extend([1u8, 11])
            .extend([7u8, 8]);
        let mut cursor = ByteCursor::new(buf.as_slice());
        let index = Index::read(&mut cursor).unwrap();
        assert!(cursor.is_truncated());
        assert!(index.get(0).unwrap().is_empty());
    }

    #[test]
    fn bias_thresholds() {
        let expected = [(0, 107), (1239, 107), (1240, 1131), (33899, 1131), (33900, 32768)];
        for (count, bias) in expected {
            assert_eq!(subr_bias(count), bias, "count {count}");
        }
    }

    fn subr_index(count: usize) -> BeBuffer {
        let objects = (0..count)
            .map(|i| [(i >> 8) as u8, i as u8])
            .collect::<Vec<_>>();
        let refs = objects.iter().map(|o| o.as_slice()).collect::<Vec<_>>();
        BeBuffer::new().push_index(4, &refs)
    }

    #[test]
    fn biased_subr_lookup() {
        for count in [3usize, 1240] {
            let buf = subr_index(count);
            let index = Index::new(buf.as_slice()).unwrap();
            let bias = index.subr_bias();
            assert_eq!(index.get_subr(-bias).as_bytes(), &[0, 0]);
            let last = count as i32 - 1;
            assert_eq!(
                index.get_subr(last - bias).as_bytes(),
                &[(last >> 8) as u8, last as u8]
            );
            assert!(index.get_subr(-bias - 1).is_empty());
            assert!(index.get_subr(count as i32 - bias).is_empty());
            assert!(index.get_subr(i32::MAX).is_empty());
        }
    }

    #[test]
    fn subr_lookup_in_empty_index() {
        let index = Index::default();
        assert_eq!(index.subr_bias(), 107);
        assert!(index.get_subr(-107).is_empty());
    }
}
