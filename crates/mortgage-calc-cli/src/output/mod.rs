pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::{Map, Value};

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Turn an object of equal-length arrays (`{"labels": [..], "values": [..]}`)
/// into one object per index, so parallel-array results print as rows.
pub fn transpose_columns(map: &Map<String, Value>) -> Option<Vec<Value>> {
    let mut len = None;
    for value in map.values() {
        let arr = value.as_array()?;
        match len {
            None => len = Some(arr.len()),
            Some(l) if l != arr.len() => return None,
            _ => {}
        }
    }
    let len = len.filter(|l| *l > 0)?;

    let rows = (0..len)
        .map(|i| {
            let row: Map<String, Value> = map
                .iter()
                .map(|(key, col)| (key.clone(), col[i].clone()))
                .collect();
            Value::Object(row)
        })
        .collect();
    Some(rows)
}
