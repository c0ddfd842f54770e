//! Conversion between byte offsets and LSP positions.
//!
//! The parser works in UTF-8 byte offsets; clients count `Position.character` in the
//! negotiated [`OffsetEncoding`]. Line breaks are `\n`, `\r\n` and `\r`, as in LSP.

use lsp_types::{Position, PositionEncodingKind, Range};
use ropey::{Rope, RopeSlice};
use sysy_syntax::TextRange;

use crate::{Error, Result};

/// Unit in which `Position.character` is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OffsetEncoding {
    /// UTF-8 bytes.
    Utf8,
    /// UTF-16 code units (LSP default).
    #[default]
    Utf16,
    /// Unicode scalar values.
    Utf32,
}

impl OffsetEncoding {
    pub fn from_lsp(kind: &PositionEncodingKind) -> Option<Self> {
        match kind.as_str() {
            "utf-8" => Some(Self::Utf8),
            "utf-16" => Some(Self::Utf16),
            "utf-32" => Some(Self::Utf32),
            _ => None,
        }
    }

    pub fn to_lsp(self) -> PositionEncodingKind {
        match self {
            Self::Utf8 => PositionEncodingKind::UTF8,
            Self::Utf16 => PositionEncodingKind::UTF16,
            Self::Utf32 => PositionEncodingKind::UTF32,
        }
    }

    /// Picks the first encoding the client offers that we support, else UTF-16.
    pub fn negotiate(offered: &[PositionEncodingKind]) -> Self {
        offered
            .iter()
            .find_map(Self::from_lsp)
            .unwrap_or_default()
    }
}

/// Byte offset to position. Offsets inside a multi-byte character snap to its start.
pub fn offset_to_position(rope: &Rope, offset: usize, encoding: OffsetEncoding) -> Result<Position> {
    if offset > rope.len_bytes() {
        return Err(Error::OffsetOutOfBounds {
            offset,
            len: rope.len_bytes(),
        });
    }
    let line = rope.byte_to_line(offset);
    let char_idx = rope.byte_to_char(offset);
    let line_char = rope.line_to_char(line);
    let character = match encoding {
        OffsetEncoding::Utf8 => rope.char_to_byte(char_idx) - rope.line_to_byte(line),
        OffsetEncoding::Utf16 => rope.char_to_utf16_cu(char_idx) - rope.char_to_utf16_cu(line_char),
        OffsetEncoding::Utf32 => char_idx - line_char,
    };
    Ok(Position::new(line as u32, character as u32))
}

/// Position to byte offset. A `character` past the end of its line clamps to the line end.
pub fn position_to_offset(rope: &Rope, position: Position, encoding: OffsetEncoding) -> Result<usize> {
    let line = position.line as usize;
    if line >= rope.len_lines() {
        return Err(Error::PositionOutOfBounds {
            line: position.line,
            character: position.character,
        });
    }
    let content = line_content(rope.line(line));
    let character = position.character as usize;
    let char_in_line = match encoding {
        OffsetEncoding::Utf8 => {
            let byte = character.min(content.len_bytes());
            content.byte_to_char(byte)
        }
        OffsetEncoding::Utf16 => {
            let unit = character.min(content.len_utf16_cu());
            content.utf16_cu_to_char(unit)
        }
        OffsetEncoding::Utf32 => character.min(content.len_chars()),
    };
    Ok(rope.char_to_byte(rope.line_to_char(line) + char_in_line))
}

pub fn range_to_lsp(rope: &Rope, range: TextRange, encoding: OffsetEncoding) -> Result<Range> {
    Ok(Range::new(
        offset_to_position(rope, range.start().into(), encoding)?,
        offset_to_position(rope, range.end().into(), encoding)?,
    ))
}

pub fn lsp_to_range(rope: &Rope, range: Range, encoding: OffsetEncoding) -> Result<TextRange> {
    let start = position_to_offset(rope, range.start, encoding)?;
    let end = position_to_offset(rope, range.end, encoding)?;
    if start > end {
        return Err(Error::InvalidRange { start, end });
    }
    Ok(TextRange::new((start as u32).into(), (end as u32).into()))
}

/// The line without its terminator.
fn line_content(line: RopeSlice<'_>) -> RopeSlice<'_> {
    let mut end = line.len_chars();
    while end > 0 && matches!(line.char(end - 1), '\n' | '\r') {
        end -= 1;
    }
    line.slice(..end)
}
