//! Parsing for compact DICTs.
//!
//! A DICT is a sequence of entries, each a run of operands followed by an
//! operator. Operators are single bytes `0..=21`, or two bytes where the
//! first is the escape byte `12`. Escaped operators are identified here by
//! `0x100 | second_byte`.
//!
//! Lookups are linear scans from the start of the DICT. DICTs are small and
//! queried rarely, so no index is built.

use super::Error;
use crate::ByteCursor;

/// Escape opcode for accessing extended operators.
const ESCAPE: u8 = 12;

/// Operator keys used when locating outline data.
pub mod keys {
    /// Offset to the CharStrings INDEX (top DICT).
    pub const CHARSTRINGS: u16 = 17;
    /// Size and offset of the Private DICT (top and font DICTs).
    pub const PRIVATE: u16 = 18;
    /// Offset to the local subroutines, relative to the Private DICT.
    pub const SUBRS: u16 = 19;
    /// Charstring format (top DICT, escaped).
    pub const CHARSTRING_TYPE: u16 = 0x100 | 6;
    /// Registry-Ordering-Supplement, present only in CID fonts.
    pub const ROS: u16 = 0x100 | 30;
    /// Offset to the font DICT INDEX of a CID font (escaped).
    pub const FD_ARRAY: u16 = 0x100 | 36;
    /// Offset to the glyph to font DICT mapping of a CID font (escaped).
    pub const FD_SELECT: u16 = 0x100 | 37;
}

/// Decodes one variable length integer operand.
///
/// ```text
/// Size   b0 range     Value range              Value calculation
/// 1      32 to 246    -107 to +107             b0 - 139
/// 2      247 to 250   +108 to +1131            (b0 - 247) * 256 + b1 + 108
/// 2      251 to 254   -1131 to -108            -(b0 - 251) * 256 - b1 - 108
/// 3      28           -32768 to +32767         b1 << 8 | b2
/// 5      29           -(2^31) to +(2^31 - 1)   b1 << 24 | b2 << 16 | b3 << 8 | b4
/// ```
///
/// Any other first byte is consumed and reported as
/// [`Error::InvalidNumber`].
pub fn parse_int(cursor: &mut ByteCursor) -> Result<i32, Error> {
    let b0 = cursor.get8();
    Ok(match b0 {
        32..=246 => b0 as i32 - 139,
        247..=250 => (b0 as i32 - 247) * 256 + cursor.get8() as i32 + 108,
        251..=254 => -(b0 as i32 - 251) * 256 - cursor.get8() as i32 - 108,
        28 => cursor.get16() as i16 as i32,
        29 => cursor.get32() as i32,
        _ => return Err(Error::InvalidNumber(b0)),
    })
}

/// Advances past one operand without materializing its value.
///
/// Real numbers (prefix `30`) are nibble encoded and terminated by a nibble
/// of `0xF`; they are skipped rather than decoded.
pub fn skip_operand(cursor: &mut ByteCursor) -> Result<(), Error> {
    if cursor.peek8() == 30 {
        cursor.skip(1);
        while cursor.remaining() > 0 {
            let v = cursor.get8();
            if v & 0xF == 0xF || v >> 4 == 0xF {
                break;
            }
        }
        Ok(())
    } else {
        parse_int(cursor).map(|_| ())
    }
}

/// Returns the operands of the first entry in `dict` whose operator is
/// `key`.
///
/// The result is an empty cursor if no such entry exists.
pub fn get<'a>(dict: ByteCursor<'a>, key: u16) -> Result<ByteCursor<'a>, Error> {
    let mut cursor = dict;
    cursor.seek(0);
    while cursor.remaining() > 0 {
        let start = cursor.position();
        // operators are < 28 (escape included); everything else is an
        // operand
        while cursor.peek8() >= 28 {
            skip_operand(&mut cursor)?;
        }
        let end = cursor.position();
        let mut op = cursor.get8() as u16;
        if op == ESCAPE as u16 {
            op = cursor.get8() as u16 | 0x100;
        }
        if op == key {
            return Ok(dict.slice(start, end).unwrap_or_default());
        }
    }
    Ok(ByteCursor::default())
}

/// Decodes up to `out.len()` integer operands of the entry for `key` into
/// `out`, returning the number of values written.
///
/// Slots beyond the number of operands present are left untouched, so
/// callers can pre-fill defaults.
pub fn get_ints(dict: ByteCursor, key: u16, out: &mut [i32]) -> Result<usize, Error> {
    let mut operands = get(dict, key)?;
    let mut count = 0;
    for slot in out.iter_mut() {
        if operands.remaining() == 0 {
            break;
        }
        *slot = parse_int(&mut operands)?;
        count += 1;
    }
    Ok(count)
}

/// Decodes the first integer operand of the entry for `key`, if present.
pub fn get_int(dict: ByteCursor, key: u16) -> Result<Option<i32>, Error> {
    let mut value = [0];
    Ok((get_ints(dict, key, &mut value)? == 1).then_some(value[0]))
}
