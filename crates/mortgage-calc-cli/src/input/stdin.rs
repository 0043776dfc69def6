use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Deserialise piped JSON from stdin.
/// Returns None when stdin is a TTY or the pipe is empty.
pub fn read_stdin<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    parse_piped(&buffer)
}

fn parse_piped<T: DeserializeOwned>(buffer: &str) -> Result<Option<T>, Box<dyn std::error::Error>> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: T = serde_json::from_str(trimmed)
        .map_err(|e| format!("Failed to parse JSON from stdin: {}", e))?;
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mortgage_calc_core::payment::{LoanField, RawFormValues};

    #[test]
    fn test_blank_pipe_is_none() {
        assert!(parse_piped::<RawFormValues>("  \n").unwrap().is_none());
    }

    #[test]
    fn test_piped_form_values() {
        let raw: RawFormValues = parse_piped(r#"{"hoa-fees": "125"}"#).unwrap().unwrap();
        assert!(raw.get(LoanField::HoaFees).is_some());
    }

    #[test]
    fn test_bad_json_reports_source() {
        let err = parse_piped::<RawFormValues>("{nope").unwrap_err();
        assert!(err.to_string().contains("stdin"));
    }
}
