use itertools::Itertools;

use crate::color::Color;
use crate::error::BmcError;
use crate::layout::ColorTable;

/// A color table arranged for the JSON side. `Flat` is the `group_size = 1`
/// shape (one hex string per entry); `Grouped` keeps consecutive runs of
/// colors together, which is how multi-state message colors (e.g. one group
/// per message kind) are edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupedColorTable {
    Flat(Vec<Color>),
    Grouped(Vec<Vec<Color>>),
}

/// Splits `table` into consecutive chunks of `group_size`. The final group
/// may be shorter when the table length is not an exact multiple.
pub fn group(table: ColorTable, group_size: usize) -> Result<GroupedColorTable, BmcError> {
    match group_size {
        0 => Err(BmcError::InvalidGroupSize),
        1 => Ok(GroupedColorTable::Flat(table)),
        _ => Ok(GroupedColorTable::Grouped(
            table
                .chunks(group_size)
                .map(|chunk| chunk.to_vec())
                .collect_vec(),
        )),
    }
}

/// Concatenates groups back into one ordered table. Irregular group sizes are
/// expected after hand edits, so this never checks regularity.
pub fn flatten(table: GroupedColorTable) -> ColorTable {
    match table {
        GroupedColorTable::Flat(colors) => colors,
        GroupedColorTable::Grouped(groups) => groups.into_iter().flatten().collect_vec(),
    }
}
