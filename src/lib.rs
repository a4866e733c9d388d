pub mod color;
pub mod error;
pub mod grouping;
pub mod json;
pub mod layout;

pub use color::Color;
pub use error::BmcError;
pub use grouping::GroupedColorTable;
pub use layout::BmcFile;

/// Converts a complete BMC byte stream into its editable JSON text form.
/// `group_size = 1` gives a flat array; larger sizes give an array of arrays.
pub fn bmc_to_json(data: &[u8], group_size: usize) -> Result<String, BmcError> {
    let file = layout::parse(data)?;
    let grouped = grouping::group(file.color_table, group_size)?;
    Ok(json::to_json(&grouped))
}

/// Converts edited JSON text back into a complete BMC byte stream. The entry
/// count and size fields are recomputed from however many entries the JSON
/// holds, so entries may have been added or removed since the original dump.
pub fn json_to_bmc(text: &str) -> Result<Vec<u8>, BmcError> {
    let grouped = json::from_json(text)?;
    let color_table = grouping::flatten(grouped);
    Ok(layout::serialize(&color_table))
}
