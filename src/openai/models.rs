//! Wire types for the OpenAI chat-completions vision request.
//!
//! Only the request side is modeled: success responses are relayed back to the
//! caller verbatim, so no response schema is deserialized here.

use serde::{Deserialize, Serialize};

/// Scheme header prepended to the inbound base64 payload. Frames are captured
/// as JPEG on the browser side, so the media type is fixed.
pub const DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

/// Fixed instructional prompt sent with every image. Asks the model to tag
/// recognized items with `<b>` markup and finish with an itemized object list,
/// which the web frontend renders directly.
pub const DESCRIBE_PROMPT: &str = "Whats in this image? Be descriptive. For each significant item recognized, wrap this word in <b> tags. Example: The image shows a <b>man</b> in front of a neutral-colored <b>wall</b>. He has short hair, wears <b>glasses</b>, and is donning a pair of over-ear <b>headphones</b>. ... Also output an itemized list of objects recognized, wrapped in <br> and <b> tags with label <br><b>Objects:.";

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
}

/// A single chat message with multimodal content parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: Vec<ContentPart>,
}

/// One part of a multimodal message: either text or an image reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

impl ChatCompletionRequest {
    /// Build the fixed describe-this-image request around an inbound base64
    /// payload. The payload is embedded verbatim as a data URL; no validation
    /// or transcoding is performed.
    pub fn describe_image(model: &str, max_tokens: u32, base64_image: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: vec![
                    ContentPart::Text {
                        text: DESCRIBE_PROMPT.to_string(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: format!("{}{}", DATA_URL_PREFIX, base64_image),
                        },
                    },
                ],
            }],
            max_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_request_wire_shape() {
        let request = ChatCompletionRequest::describe_image("gpt-4-vision-preview", 300, "AAAA");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "gpt-4-vision-preview");
        assert_eq!(json["max_tokens"], 300);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"][0]["type"], "text");
        assert_eq!(json["messages"][0]["content"][0]["text"], DESCRIBE_PROMPT);
        assert_eq!(json["messages"][0]["content"][1]["type"], "image_url");
        assert_eq!(
            json["messages"][0]["content"][1]["image_url"]["url"],
            "data:image/jpeg;base64,AAAA"
        );
    }

    #[test]
    fn test_image_embedded_verbatim() {
        // Input validity as JPEG data is irrelevant; bytes pass through as-is.
        let request = ChatCompletionRequest::describe_image("m", 300, "not!valid!base64");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["messages"][0]["content"][1]["image_url"]["url"],
            "data:image/jpeg;base64,not!valid!base64"
        );
    }
}
