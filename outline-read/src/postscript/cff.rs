//! Locating outline data within a CFF table.

use super::{
    dict::{self, keys},
    Error, Index,
};
use crate::{ByteCursor, ReadError};

/// The parts of a CFF table that a charstring evaluator needs.
///
/// Parsing follows the table layout: header, Name INDEX, Top DICT INDEX,
/// String INDEX and Global Subr INDEX, after which the top DICT supplies
/// offsets to the CharStrings INDEX and the Private DICT (and, for CID
/// keyed fonts, the FDArray and FDSelect structures).
///
/// Parsing is tolerant: a structure that runs past the end of the table is
/// cut short rather than rejected, and [`is_truncated`](Self::is_truncated)
/// reports that this happened. Use [`new_strict`](Self::new_strict) to
/// reject such tables instead.
///
/// See <https://adobe-type-tools.github.io/font-tech-notes/pdfs/5176.CFF.pdf>
#[derive(Clone, Debug, Default)]
pub struct CffTables<'a> {
    data: ByteCursor<'a>,
    top_dict: ByteCursor<'a>,
    global_subrs: Index<'a>,
    charstrings: Index<'a>,
    local_subrs: Index<'a>,
    font_dicts: Index<'a>,
    fd_select: ByteCursor<'a>,
    truncated: bool,
}

impl<'a> CffTables<'a> {
    /// Parses the CFF table in `data`.
    pub fn new(data: &'a [u8]) -> Result<Self, Error> {
        let mut truncated = false;
        let base = ByteCursor::new(data);
        let mut cursor = base;
        // major and minor version, then the header size
        cursor.skip(2);
        let header_size = cursor.get8();
        cursor.seek(header_size as i32);
        let _names = Index::read(&mut cursor)?;
        let top_dicts = Index::read(&mut cursor)?;
        let top_dict = top_dicts.get(0)?;
        let _strings = Index::read(&mut cursor)?;
        let global_subrs = Index::read(&mut cursor)?;
        truncated |= cursor.is_truncated();
        let charstrings_offset = dict::get_int(top_dict, keys::CHARSTRINGS)?.unwrap_or(0);
        let charstring_type = dict::get_int(top_dict, keys::CHARSTRING_TYPE)?.unwrap_or(2);
        let fd_array_offset = dict::get_int(top_dict, keys::FD_ARRAY)?.unwrap_or(0);
        let fd_select_offset = dict::get_int(top_dict, keys::FD_SELECT)?.unwrap_or(0);
        if charstring_type != 2 {
            return Err(Error::UnsupportedCharstringType(charstring_type));
        }
        if charstrings_offset == 0 {
            return Err(Error::Missing("CharStrings INDEX"));
        }
        let local_subrs = private_subrs(base, top_dict, &mut truncated)?;
        let (font_dicts, fd_select) = if fd_array_offset != 0 {
            if fd_select_offset == 0 {
                return Err(Error::Missing("FDSelect"));
            }
            let font_dicts = read_index_at(base, fd_array_offset, &mut truncated)?;
            let len = i32::try_from(base.len()).unwrap_or(i32::MAX);
            let fd_select = base
                .checked_range(fd_select_offset, len.saturating_sub(fd_select_offset))
                .unwrap_or_else(|_| {
                    truncated = true;
                    ByteCursor::default()
                });
            (font_dicts, fd_select)
        } else {
            Default::default()
        };
        let charstrings = read_index_at(base, charstrings_offset, &mut truncated)?;
        if truncated {
            log::debug!("CFF table of {} bytes is truncated", base.len());
        }
        Ok(Self {
            data: base,
            top_dict,
            global_subrs,
            charstrings,
            local_subrs,
            font_dicts,
            fd_select,
            truncated,
        })
    }

    /// Parses the CFF table in `data`, failing if any of the structures it
    /// locates extend past the end of the table.
    pub fn new_strict(data: &'a [u8]) -> Result<Self, Error> {
        let cff = Self::new(data)?;
        if cff.truncated {
            return Err(ReadError::Truncated.into());
        }
        Ok(cff)
    }

    /// Returns `true` if parsing ran off the end of the table.
    ///
    /// Anything located after that point reads as empty.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Returns the operands region of the top DICT.
    pub fn top_dict(&self) -> ByteCursor<'a> {
        self.top_dict
    }

    /// Returns the global subroutine INDEX.
    pub fn global_subrs(&self) -> &Index<'a> {
        &self.global_subrs
    }

    /// Returns the CharStrings INDEX.
    pub fn charstrings(&self) -> &Index<'a> {
        &self.charstrings
    }

    /// Returns the number of glyphs, which is the size of the CharStrings
    /// INDEX.
    pub fn num_glyphs(&self) -> u32 {
        self.charstrings.count()
    }

    /// Returns `true` if this is a CID keyed font, where each glyph selects
    /// one of several font DICTs.
    pub fn is_cid(&self) -> bool {
        !self.fd_select.is_empty()
    }

    /// Returns the charstring for the given glyph, or an empty cursor if the
    /// glyph does not exist.
    pub fn charstring(&self, glyph_id: u32) -> Result<ByteCursor<'a>, Error> {
        self.charstrings
            .get(i32::try_from(glyph_id).unwrap_or(i32::MAX))
    }

    /// Returns the local subroutines available to the given glyph.
    ///
    /// For CID keyed fonts this resolves the glyph's font DICT through
    /// FDSelect; a glyph not covered by FDSelect has no local subroutines.
    pub fn glyph_subrs(&self, glyph_id: u32) -> Result<Index<'a>, Error> {
        if !self.is_cid() {
            return Ok(self.local_subrs);
        }
        let Some(selector) = self.font_dict_index(glyph_id) else {
            log::debug!("glyph {glyph_id} is not mapped by FDSelect");
            return Ok(Index::default());
        };
        let font_dict = self.font_dicts.get(selector as i32)?;
        private_subrs(self.data, font_dict, &mut false)
    }

    /// Maps a glyph to a font DICT index using FDSelect formats 0 and 3.
    fn font_dict_index(&self, glyph_id: u32) -> Option<u8> {
        let mut cursor = self.fd_select;
        cursor.seek(0);
        match cursor.get8() {
            0 => {
                cursor.skip(i32::try_from(glyph_id).unwrap_or(i32::MAX));
                (cursor.remaining() > 0).then(|| cursor.get8())
            }
            3 => {
                let range_count = cursor.get16();
                let mut start = cursor.get16() as u32;
                for _ in 0..range_count {
                    let selector = cursor.get8();
                    let end = cursor.get16() as u32;
                    if glyph_id >= start && glyph_id < end {
                        return Some(selector);
                    }
                    start = end;
                }
                None
            }
            _ => None,
        }
    }
}

/// Reads the INDEX at `offset` from the start of the table, noting whether
/// it was cut short.
fn read_index_at<'a>(
    cff: ByteCursor<'a>,
    offset: i32,
    truncated: &mut bool,
) -> Result<Index<'a>, Error> {
    let mut cursor = cff;
    cursor.seek(offset);
    let index = Index::read(&mut cursor)?;
    *truncated |= cursor.is_truncated();
    Ok(index)
}

/// Returns the local subroutine INDEX referenced by the Private DICT of the
/// given top or font DICT.
fn private_subrs<'a>(
    cff: ByteCursor<'a>,
    font_dict: ByteCursor<'a>,
    truncated: &mut bool,
) -> Result<Index<'a>, Error> {
    // operands are size, then offset
    let mut private = [0; 2];
    dict::get_ints(font_dict, keys::PRIVATE, &mut private)?;
    let [size, offset] = private;
    if size == 0 || offset == 0 {
        return Ok(Index::default());
    }
    let Ok(private_dict) = cff.checked_range(offset, size) else {
        *truncated = true;
        return Ok(Index::default());
    };
    let subrs_offset = dict::get_int(private_dict, keys::SUBRS)?.unwrap_or(0);
    if subrs_offset == 0 {
        return Ok(Index::default());
    }
    read_index_at(cff, offset.saturating_add(subrs_offset), truncated)
}
