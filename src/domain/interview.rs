use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors};

/// Inbound body of `POST /api/generate-interview`.
///
/// Fields stay loosely typed: callers send whatever their form produced and
/// validation only checks that the required ones are present and non-empty.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct GenerateInterviewRequest {
    #[serde(rename = "type", default)]
    pub interview_type: Option<Value>,
    #[serde(default)]
    pub role: Option<Value>,
    #[serde(default)]
    pub level: Option<Value>,
    #[serde(default)]
    pub techstack: Option<Value>,
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(rename = "userid", alias = "userId", default)]
    pub user_id: Option<Value>,
}

impl Validate for GenerateInterviewRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if !is_truthy(self.role.as_ref()) {
            errors.add("role", ValidationError::new("required"));
        }
        if !is_truthy(self.amount.as_ref()) {
            errors.add("amount", ValidationError::new("required"));
        }
        if !is_truthy(self.user_id.as_ref()) {
            errors.add("userid", ValidationError::new("required"));
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Document written to the `interviews` collection once per successful request.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRecord {
    pub role: String,
    #[serde(rename = "type")]
    pub interview_type: Option<String>,
    pub level: Option<String>,
    pub techstack: Vec<String>,
    pub questions: Vec<String>,
    pub user_id: String,
    #[validate(custom(function = "validate_finalized"))]
    pub finalized: bool,
    pub cover_image: String,
    pub created_at: String,
}

fn validate_finalized(finalized: &bool) -> Result<(), ValidationError> {
    if *finalized {
        Ok(())
    } else {
        Err(ValidationError::new("finalized"))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateInterviewResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_output: Option<String>,
}

impl GenerateInterviewResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
            ai_output: None,
        }
    }

    pub fn failure(error: impl Into<String>, ai_output: Option<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ai_output,
        }
    }
}

/// `null`, `false`, `0`, and `""` count as missing.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Text form of a request field as it appears inside the prompt.
/// Absent fields render as `undefined`, arrays are comma-joined.
pub fn render_value(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => render_value(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
        Some(other) => other.to_string(),
    }
}

/// Optional descriptive field as stored on the record.
pub fn optional_text(value: Option<&Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        other => Some(render_value(other)),
    }
}

/// Comma-joined string splits, arrays pass through, anything else is empty.
pub fn normalize_techstack(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(s)) => s.split(',').map(str::to_string).collect(),
        Some(Value::Array(items)) => items.iter().map(|item| render_value(Some(item))).collect(),
        _ => Vec::new(),
    }
}
