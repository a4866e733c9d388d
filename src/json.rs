use itertools::Itertools;
use json_pretty_compact::PrettyCompactFormatter;
use serde::Serialize;
use serde_json::{Serializer, Value};

use crate::color::Color;
use crate::error::BmcError;
use crate::grouping::GroupedColorTable;

fn emit<T: Serialize>(data: &T) -> String {
    let formatter = PrettyCompactFormatter::new();
    let mut data_bytes = vec![];
    let mut ser = Serializer::with_formatter(&mut data_bytes, formatter);
    data.serialize(&mut ser).unwrap();
    String::from_utf8(data_bytes).unwrap()
}

/// Emits the editable JSON form: a flat array of hex strings, or an array of
/// arrays when the table is grouped. Order is preserved exactly.
pub fn to_json(table: &GroupedColorTable) -> String {
    let value = match table {
        GroupedColorTable::Flat(colors) => {
            Value::from(colors.iter().map(Color::to_hex).collect_vec())
        }
        GroupedColorTable::Grouped(groups) => Value::from(
            groups
                .iter()
                .map(|g| g.iter().map(Color::to_hex).collect_vec())
                .collect_vec(),
        ),
    };
    emit(&value)
}

fn shape_error(path: &str, reason: &str) -> BmcError {
    BmcError::InvalidJsonShape {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}

/// Parses the editable JSON form back. The nesting depth present in the text
/// decides the shape: strings parse as `Flat`, arrays of strings as
/// `Grouped`. Mixing the two in one array is rejected, as is any element that
/// is neither.
pub fn from_json(text: &str) -> Result<GroupedColorTable, BmcError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| shape_error("$", &e.to_string()))?;
    let Value::Array(items) = value else {
        return Err(shape_error("$", "expected an array"));
    };

    let mut nested: Option<bool> = None;
    let mut flat: Vec<Color> = vec![];
    let mut groups: Vec<Vec<Color>> = vec![];
    for (i, item) in items.iter().enumerate() {
        let path = format!("$[{}]", i);
        match item {
            Value::String(s) => {
                if nested == Some(true) {
                    return Err(shape_error(&path, "hex string mixed into an array of groups"));
                }
                nested = Some(false);
                flat.push(Color::from_hex(s)?);
            }
            Value::Array(inner) => {
                if nested == Some(false) {
                    return Err(shape_error(&path, "group mixed into an array of hex strings"));
                }
                nested = Some(true);
                let mut group = Vec::with_capacity(inner.len());
                for (j, element) in inner.iter().enumerate() {
                    let Value::String(s) = element else {
                        return Err(shape_error(
                            &format!("$[{}][{}]", i, j),
                            "expected a hex string",
                        ));
                    };
                    group.push(Color::from_hex(s)?);
                }
                groups.push(group);
            }
            _ => {
                return Err(shape_error(
                    &path,
                    "expected a hex string or an array of hex strings",
                ));
            }
        }
    }

    Ok(match nested {
        Some(true) => GroupedColorTable::Grouped(groups),
        // An empty document has no elements to decide the shape; flat is the
        // default, and both shapes flatten to the same empty table anyway.
        _ => GroupedColorTable::Flat(flat),
    })
}
