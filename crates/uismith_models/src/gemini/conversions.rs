//! Type conversions between uismith core types and the Gemini wire format.

use crate::gemini::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
use uismith_core::{GenerateRequest, GenerateResponse, Input, Output, Role};

/// Converts a core GenerateRequest to the Gemini wire format.
///
/// The wire API only accepts `user` and `model` roles, so system messages
/// are sent as user turns.
pub fn to_content_request(req: &GenerateRequest) -> GenerateContentRequest {
    let contents = req
        .messages()
        .iter()
        .map(|msg| {
            let role = match msg.role() {
                Role::User | Role::System => "user",
                Role::Assistant => "model",
            };

            let parts = msg
                .content()
                .iter()
                .map(|input| match input {
                    Input::Text(text) => Part { text: text.clone() },
                })
                .collect();

            Content {
                role: Some(role.to_string()),
                parts,
            }
        })
        .collect();

    let generation_config = match (req.max_tokens(), req.temperature()) {
        (None, None) => None,
        (max_tokens, temperature) => Some(GenerationConfig {
            max_output_tokens: *max_tokens,
            temperature: *temperature,
        }),
    };

    GenerateContentRequest {
        contents,
        generation_config,
    }
}

/// Converts a Gemini response envelope to a core GenerateResponse.
///
/// Each candidate contributes the concatenation of its text parts; empty
/// candidates are dropped. An envelope with no usable text yields an empty
/// output vector, which the endpoint reports as a distinct no-output error.
pub fn from_content_response(response: &GenerateContentResponse) -> GenerateResponse {
    let outputs = response
        .candidates
        .iter()
        .filter_map(candidate_text)
        .map(Output::Text)
        .collect::<Vec<_>>();

    GenerateResponse::builder()
        .outputs(outputs)
        .build()
        .unwrap_or_default()
}

fn candidate_text(candidate: &Candidate) -> Option<String> {
    let content = candidate.content.as_ref()?;
    let text = content
        .parts
        .iter()
        .map(|part| part.text.as_str())
        .collect::<String>();

    if text.is_empty() { None } else { Some(text) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uismith_core::Message;

    #[test]
    fn role_mapping() {
        let request = GenerateRequest::builder()
            .messages(vec![
                Message::new(Role::System, vec![Input::Text("be brief".to_string())]),
                Message::new(Role::User, vec![Input::Text("a red button".to_string())]),
                Message::new(Role::Assistant, vec![Input::Text("<html/>".to_string())]),
            ])
            .build()
            .unwrap();

        let wire = to_content_request(&request);
        let roles: Vec<_> = wire
            .contents
            .iter()
            .map(|c| c.role.as_deref().unwrap())
            .collect();
        assert_eq!(roles, vec!["user", "user", "model"]);
    }

    #[test]
    fn empty_candidates_yield_empty_outputs() {
        let response = GenerateContentResponse { candidates: vec![] };
        let converted = from_content_response(&response);
        assert!(converted.outputs().is_empty());
    }

    #[test]
    fn candidate_with_empty_text_is_dropped() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    role: Some("model".to_string()),
                    parts: vec![Part {
                        text: String::new(),
                    }],
                }),
            }],
        };

        let converted = from_content_response(&response);
        assert!(converted.first_text().is_none());
    }
}
