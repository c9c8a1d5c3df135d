use serde::{Deserialize, Deserializer, Serialize};

use super::error::ClientError;

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Rental details attached to a structured reply. All fields are required:
/// a reply with partial details fails to decode rather than rendering an
/// incomplete card.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CarDetails {
    pub brand: String,
    pub model: String,
    pub year: u16,
    pub color: String,
    // The live service formats price as a decimal string ("45.00").
    #[serde(deserialize_with = "price_from_string_or_number")]
    pub price: f64,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ChatReply {
    Plain(String),
    Structured {
        message: String,
        #[serde(default)]
        car_details: Option<CarDetails>,
    },
}

impl ChatReply {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Plain(message) | Self::Structured { message, .. } => message,
        }
    }

    #[must_use]
    pub const fn car_details(&self) -> Option<&CarDetails> {
        match self {
            Self::Plain(_) => None,
            Self::Structured { car_details, .. } => car_details.as_ref(),
        }
    }
}

// Envelope siblings like the service's `preferences` debugging field are
// ignored; only `response` matters.
#[derive(Debug, Deserialize)]
struct ChatEnvelope {
    response: Option<serde_json::Value>,
}

pub fn decode_reply(body: &str) -> Result<ChatReply, ClientError> {
    let envelope: ChatEnvelope =
        serde_json::from_str(body).map_err(|e| ClientError::Parse(e.to_string()))?;

    let response = envelope.response.ok_or(ClientError::EmptyReply)?;

    serde_json::from_value(response).map_err(|e| ClientError::Decode(e.to_string()))
}

fn price_from_string_or_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(n) => Ok(n),
        RawPrice::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid price: {s:?}"))),
    }
}
