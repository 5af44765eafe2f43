//! Advisor prompt construction and strict response validation.

use serde::Deserialize;
use vigil_core::{BaseThreat, SystemDetails, VigilError};

const SYSTEM_PROMPT: &str = "\
You are a cybersecurity expert specializing in threat modeling. Analyze the \
system description you are given and identify potential security threats and \
vulnerabilities. Be specific and consider common attack vectors relevant to \
the described components and technologies.

Respond with a JSON object containing a key \"threats\", which is an array of \
objects. Each object must have ONLY a \"name\" (string) and a \"description\" \
(string) property. Focus on the most relevant and impactful threats. Do not \
include status or assignee fields.";

/// Build the system prompt for the threat-suggestion LLM.
///
/// # Examples
///
/// ```
/// use vigil_suggest::prompt::build_system_prompt;
///
/// let prompt = build_system_prompt();
/// assert!(prompt.contains("threat modeling"));
/// assert!(prompt.contains("\"threats\""));
/// ```
pub fn build_system_prompt() -> String {
    SYSTEM_PROMPT.to_string()
}

/// Build the user prompt containing the system description to analyze.
///
/// # Examples
///
/// ```
/// use vigil_core::SystemDetails;
/// use vigil_suggest::prompt::build_suggest_prompt;
///
/// let details = SystemDetails::new("A payments API with Redis cache").unwrap();
/// let prompt = build_suggest_prompt(&details);
/// assert!(prompt.contains("Redis"));
/// ```
pub fn build_suggest_prompt(details: &SystemDetails) -> String {
    format!(
        "Identify security threats for the following system:\n\n```\n{}\n```\n",
        details.description
    )
}

#[derive(Deserialize)]
struct SuggestionPayload {
    threats: Vec<SuggestedThreat>,
}

#[derive(Deserialize)]
struct SuggestedThreat {
    name: String,
    description: String,
}

/// Parse and validate the advisor's JSON response.
///
/// The response must strictly match `{"threats": [{"name", "description"}]}`
/// with both fields non-empty on every entry. Unlike a curated source, a
/// response that fails validation is a hard failure, not an empty result.
/// Markdown code fences around the JSON are tolerated.
///
/// # Errors
///
/// Returns [`VigilError::Generation`] if the response is not valid JSON for
/// the threat list schema, or any entry has an empty field.
///
/// # Examples
///
/// ```
/// use vigil_suggest::prompt::parse_suggestion_response;
///
/// let json = r#"{"threats":[{"name":"DoS","description":"Flooding."}]}"#;
/// let threats = parse_suggestion_response(json).unwrap();
/// assert_eq!(threats.len(), 1);
///
/// assert!(parse_suggestion_response("not json").is_err());
/// ```
pub fn parse_suggestion_response(response: &str) -> Result<Vec<BaseThreat>, VigilError> {
    let cleaned = strip_code_fences(response);

    let payload: SuggestionPayload = serde_json::from_str(cleaned)
        .map_err(|e| VigilError::Generation(format!("response failed schema validation: {e}")))?;

    let mut threats = Vec::with_capacity(payload.threats.len());
    for t in payload.threats {
        if t.name.trim().is_empty() || t.description.trim().is_empty() {
            return Err(VigilError::Generation(
                "response contained a threat with an empty name or description".into(),
            ));
        }
        threats.push(BaseThreat {
            name: t.name,
            description: t.description,
        });
    }

    Ok(threats)
}

fn strip_code_fences(s: &str) -> &str {
    let trimmed = s.trim();
    if let Some(rest) = trimmed.strip_prefix("```json") {
        if let Some(inner) = rest.strip_suffix("```") {
            return inner.trim();
        }
    }
    if let Some(rest) = trimmed.strip_prefix("```") {
        if let Some(inner) = rest.strip_suffix("```") {
            return inner.trim();
        }
    }
    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_pins_the_output_shape() {
        let prompt = build_system_prompt();
        assert!(prompt.contains("\"threats\""));
        assert!(prompt.contains("\"name\""));
        assert!(prompt.contains("\"description\""));
        assert!(prompt.contains("status or assignee"));
    }

    #[test]
    fn suggest_prompt_includes_description() {
        let details = SystemDetails::new("A GraphQL gateway over gRPC").unwrap();
        let prompt = build_suggest_prompt(&details);
        assert!(prompt.contains("GraphQL gateway"));
    }

    #[test]
    fn parse_valid_response() {
        let json = r#"{
            "threats": [
                {"name": "DoS", "description": "Flooding the service."},
                {"name": "Phishing", "description": "Credential harvesting."}
            ]
        }"#;
        let threats = parse_suggestion_response(json).unwrap();
        assert_eq!(threats.len(), 2);
        assert_eq!(threats[0].name, "DoS");
        assert_eq!(threats[1].name, "Phishing");
    }

    #[test]
    fn parse_empty_list_is_valid_schema() {
        let threats = parse_suggestion_response(r#"{"threats":[]}"#).unwrap();
        assert!(threats.is_empty());
    }

    #[test]
    fn parse_with_code_fences() {
        let fenced = "```json\n{\"threats\":[{\"name\":\"DoS\",\"description\":\"x\"}]}\n```";
        let threats = parse_suggestion_response(fenced).unwrap();
        assert_eq!(threats.len(), 1);
    }

    #[test]
    fn parse_malformed_is_an_error() {
        let err = parse_suggestion_response("this is not json").unwrap_err();
        assert!(matches!(err, VigilError::Generation(_)));
    }

    #[test]
    fn parse_missing_threats_key_is_an_error() {
        let err = parse_suggestion_response(r#"{"findings":[]}"#).unwrap_err();
        assert!(matches!(err, VigilError::Generation(_)));
    }

    #[test]
    fn parse_empty_field_is_an_error() {
        let json = r#"{"threats":[{"name":"", "description":"x"}]}"#;
        let err = parse_suggestion_response(json).unwrap_err();
        assert!(err.to_string().contains("empty name or description"));
    }
}
