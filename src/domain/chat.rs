//! Wire types for the OpenAI-compatible chat completions API.

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    /// Provider-specific reasoning state. Forwarded verbatim, never inspected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning_details: Option<Value>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
            reasoning_details: None,
        }
    }

    pub fn assistant(content: impl Into<String>, reasoning_details: Option<Value>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
            reasoning_details,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ReasoningOptions {
    pub enabled: bool,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<ReasoningOptions>,
    pub temperature: f32,
}

/// Completion body as far as this service reads it.
///
/// Decoding never fails on shape: a `choices`, choice, `message` or `content`
/// of the wrong type reads as absent.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ChatCompletion {
    #[serde(default, deserialize_with = "lenient_choices")]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ChatChoice {
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<AssistantMessage>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AssistantMessage {
    #[serde(default, deserialize_with = "lenient")]
    pub content: Option<String>,
    #[serde(default)]
    pub reasoning_details: Option<Value>,
}

impl ChatCompletion {
    /// Any JSON document; non-objects decode to no choices.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// `choices[0].message`, if the provider returned one.
    pub fn into_first_message(self) -> Option<AssistantMessage> {
        self.choices.into_iter().next().and_then(|choice| choice.message)
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_choices<'de, D>(deserializer: D) -> Result<Vec<ChatChoice>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    })
}
