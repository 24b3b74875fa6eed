use serde_json::Value;

/// Why model text could not be turned into a list of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionError(pub String);

impl std::fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pulls a JSON array of strings out of free-form model output.
///
/// The whole text is tried first; failing that, the span from the first `[`
/// to the last `]` inclusive. Every element must be a string.
pub(crate) fn extract_questions(output: &str) -> Result<Vec<String>, ExtractionError> {
    let items = parse_array(output)
        .or_else(|| bracketed_span(output).and_then(parse_array))
        .ok_or_else(|| ExtractionError("Output is not a JSON array".to_string()))?;

    items
        .into_iter()
        .map(|item| match item {
            Value::String(question) => Ok(question),
            other => Err(ExtractionError(format!(
                "Output array contains a non-string element: {}",
                other
            ))),
        })
        .collect()
}

fn parse_array(text: &str) -> Option<Vec<Value>> {
    match serde_json::from_str::<Value>(text).ok()? {
        Value::Array(items) => Some(items),
        _ => None,
    }
}

fn bracketed_span(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}
