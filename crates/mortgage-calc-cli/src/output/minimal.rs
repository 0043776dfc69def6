use serde_json::Value;

/// Result fields worth printing on their own, most important first.
const PRIORITY_KEYS: [&str; 4] = ["total_monthly_payment", "down_payment", "principal_interest", "labels"];

/// Row label the display view treats as its headline.
const HEADLINE_LABEL: &str = "Total Monthly Payment";

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_text(value));
}

fn minimal_text(value: &Value) -> String {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match result_obj {
        Value::Object(map) => {
            for key in PRIORITY_KEYS {
                if let Some(val) = map.get(key).filter(|v| !v.is_null()) {
                    return format_minimal(val);
                }
            }
            match map.iter().next() {
                Some((key, val)) => format!("{}: {}", key, format_minimal(val)),
                None => String::new(),
            }
        }
        // Display rows: the headline row, else the first one.
        Value::Array(rows) => rows
            .iter()
            .find(|r| r.get("label").and_then(Value::as_str) == Some(HEADLINE_LABEL))
            .or_else(|| rows.first())
            .map(|r| r.get("value").map(format_minimal).unwrap_or_else(|| format_minimal(r)))
            .unwrap_or_default(),
        other => format_minimal(other),
    }
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => arr.iter().map(format_minimal).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_breakdown_prints_total() {
        let v = json!({"result": {"loan_amount": "400000", "total_monthly_payment": "3023.20"}});
        assert_eq!(minimal_text(&v), "3023.20");
    }

    #[test]
    fn test_display_rows_print_headline() {
        let v = json!({"result": [
            {"label": "Loan Amount", "value": "$400,000"},
            {"label": "Total Monthly Payment", "value": "$3,023"}
        ]});
        assert_eq!(minimal_text(&v), "$3,023");
    }

    #[test]
    fn test_sync_prints_down_payment() {
        let v = json!({"result": {"down_payment": "48000", "home_price": "320000"}});
        assert_eq!(minimal_text(&v), "48000");
    }
}
