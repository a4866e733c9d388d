use log::warn;

use crate::color::{Color, RECORD_WIDTH};
use crate::error::BmcError;

pub const FILE_MAGIC: &[u8; 8] = b"MGCLbmc1";
pub const TABLE_MAGIC: &[u8; 4] = b"CLT1";
pub const SECTION_COUNT: u32 = 1;
const PAD_LEN: usize = 16;

/// Ordered color table; the index is the message/state identifier the console
/// uses, so order is semantically meaningful.
pub type ColorTable = Vec<Color>;

/// A parsed BMC container. The header fields (file size, table size, entry
/// count) are not kept: they are derived from the table on every write, never
/// reused from a previous parse.
#[derive(Debug, PartialEq, Eq)]
pub struct BmcFile {
    pub color_table: ColorTable,
}

// It's easy to run off the end of a hand-edited or corrupt file, so all reads
// go through bounds-checked helpers that report the failing offset.
struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Reader { data, pos: 0 }
    }

    fn read_n(&mut self, n: usize) -> Result<&'a [u8], BmcError> {
        if self.pos + n > self.data.len() {
            return Err(BmcError::TruncatedInput {
                offset: self.pos,
                needed: self.pos + n - self.data.len(),
            });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn read_u16(&mut self) -> Result<u16, BmcError> {
        let b = self.read_n(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    fn read_u32(&mut self) -> Result<u32, BmcError> {
        let b = self.read_n(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }
}

/// Parses a complete BMC byte stream. Count-driven: the record run length
/// comes from the entry count field; a stream that ends before the declared
/// number of records fails with `TruncatedInput`.
pub fn parse(data: &[u8]) -> Result<BmcFile, BmcError> {
    let mut r = Reader::new(data);

    let offset = r.pos;
    let magic = r.read_n(FILE_MAGIC.len())?;
    if magic != FILE_MAGIC {
        return Err(BmcError::UnsupportedLayout {
            offset,
            reason: format!("bad file magic {:02X?}", magic),
        });
    }

    let declared_file_size = r.read_u32()? as usize;
    if declared_file_size != data.len() {
        warn!(
            "Header file size {} disagrees with actual length {}; ignoring it.",
            declared_file_size,
            data.len()
        );
    }

    let offset = r.pos;
    let section_count = r.read_u32()?;
    if section_count != SECTION_COUNT {
        return Err(BmcError::UnsupportedLayout {
            offset,
            reason: format!("unexpected section count {}", section_count),
        });
    }
    r.read_n(PAD_LEN)?;

    let table_offset = r.pos;
    let table_magic = r.read_n(TABLE_MAGIC.len())?;
    if table_magic != TABLE_MAGIC {
        return Err(BmcError::UnsupportedLayout {
            offset: table_offset,
            reason: format!("bad color table magic {:02X?}", table_magic),
        });
    }

    let declared_table_size = r.read_u32()? as usize;
    let entry_count = r.read_u16()? as usize;
    r.read_u16()?; // reserved

    let expected_table_size =
        TABLE_MAGIC.len() + 4 + 4 + entry_count * RECORD_WIDTH + PAD_LEN;
    if declared_table_size != expected_table_size {
        warn!(
            "Color table size {} disagrees with {} entries; ignoring it.",
            declared_table_size, entry_count
        );
    }

    let mut color_table = Vec::with_capacity(entry_count);
    for _ in 0..entry_count {
        let record = r.read_n(RECORD_WIDTH)?;
        color_table.push(Color::decode(record)?);
    }

    Ok(BmcFile { color_table })
}

/// Serializes a color table into a complete BMC byte stream. Every header
/// field (file size, table size, entry count) is recomputed from the actual
/// table length; a count read from some earlier parse is never reused. Handles
/// any length including zero, which still yields a structurally valid file.
pub fn serialize(color_table: &[Color]) -> Vec<u8> {
    // The count field is a u16 in the container format.
    assert!(
        color_table.len() <= u16::MAX as usize,
        "color table too large for BMC entry count field"
    );

    let mut out = Vec::with_capacity(60 + color_table.len() * RECORD_WIDTH);
    out.extend_from_slice(FILE_MAGIC);
    out.extend_from_slice(&0u32.to_le_bytes()); // file size, patched below
    out.extend_from_slice(&SECTION_COUNT.to_le_bytes());
    out.extend_from_slice(&[0u8; PAD_LEN]);

    let table_start = out.len();
    out.extend_from_slice(TABLE_MAGIC);
    out.extend_from_slice(&0u32.to_le_bytes()); // table size, patched below
    out.extend_from_slice(&(color_table.len() as u16).to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes()); // reserved

    for color in color_table {
        out.extend_from_slice(&color.encode());
    }
    out.extend_from_slice(&[0u8; PAD_LEN]);

    let file_size = out.len() as u32;
    out[8..12].copy_from_slice(&file_size.to_le_bytes());
    let table_size = (out.len() - table_start) as u32;
    out[table_start + 4..table_start + 8].copy_from_slice(&table_size.to_le_bytes());

    out
}
