use thiserror::Error;
use tracing::warn;

const CODE_FENCE: &str = "```";

/// Why a model response produced no ingredient names
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SanitizeError {
    #[error("model response was empty")]
    Empty,

    #[error("no JSON array found in model response")]
    NoArray,

    #[error("invalid JSON array in model response: {0}")]
    InvalidJson(String),
}

/// Extract ingredient names from free-text model output.
///
/// Malformed output degrades to an empty list; the reason is logged.
pub fn extract_ingredient_names(raw: &str) -> Vec<String> {
    match try_extract_ingredient_names(raw) {
        Ok(names) => names,
        Err(SanitizeError::Empty) => Vec::new(),
        Err(e) => {
            warn!(error = %e, "Discarding unparseable model response");
            Vec::new()
        }
    }
}

pub fn try_extract_ingredient_names(raw: &str) -> Result<Vec<String>, SanitizeError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(SanitizeError::Empty);
    }

    let text = strip_code_fence(text);
    let (candidate, has_brackets) = match narrow_to_array(text) {
        Some(array) => (array, true),
        None => (text.trim(), false),
    };

    serde_json::from_str::<Vec<String>>(candidate).map_err(|e| {
        if has_brackets {
            SanitizeError::InvalidJson(e.to_string())
        } else {
            SanitizeError::NoArray
        }
    })
}

/// Removes a surrounding ``` fence and its language tag line
fn strip_code_fence(text: &str) -> &str {
    if !text.starts_with(CODE_FENCE) {
        return text;
    }

    let unfenced = text.trim_matches('`');
    match unfenced.split_once('\n') {
        Some((_language_tag, body)) => body,
        None => unfenced,
    }
}

fn narrow_to_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (start < end).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_array() {
        assert_eq!(
            extract_ingredient_names(r#"["Water","Glycerin"]"#),
            vec!["Water", "Glycerin"]
        );
    }

    #[test]
    fn test_fenced_array() {
        assert_eq!(
            extract_ingredient_names("```json\n[\"Water\", \"Glycerin\"]\n```"),
            vec!["Water", "Glycerin"]
        );
    }

    #[test]
    fn test_fence_without_language_tag() {
        assert_eq!(
            extract_ingredient_names("```\n[\"Niacinamide\"]\n```"),
            vec!["Niacinamide"]
        );
    }

    #[test]
    fn test_array_wrapped_in_prose() {
        let raw = "Here are the ingredients I found: [\"Aqua\", \"Dimethicone\"]. Let me know!";
        assert_eq!(extract_ingredient_names(raw), vec!["Aqua", "Dimethicone"]);
    }

    #[test]
    fn test_refusal_yields_empty() {
        assert!(extract_ingredient_names("Sorry, I cannot analyze this.").is_empty());
        assert_eq!(
            try_extract_ingredient_names("Sorry, I cannot analyze this."),
            Err(SanitizeError::NoArray)
        );
    }

    #[test]
    fn test_empty_input_yields_empty() {
        assert!(extract_ingredient_names("").is_empty());
        assert!(extract_ingredient_names("   \n").is_empty());
        assert_eq!(try_extract_ingredient_names(""), Err(SanitizeError::Empty));
    }

    #[test]
    fn test_invalid_json_inside_brackets() {
        assert!(matches!(
            try_extract_ingredient_names("[Water, Glycerin]"),
            Err(SanitizeError::InvalidJson(_))
        ));
        assert!(extract_ingredient_names("[\"Water\", 3]").is_empty());
    }

    #[test]
    fn test_sanitizing_own_output_is_stable() {
        let first = extract_ingredient_names("```json\n[\"Water\",\"Glycerin\"]\n```");
        let reencoded = serde_json::to_string(&first).unwrap();
        assert_eq!(extract_ingredient_names(&reencoded), first);
    }
}
