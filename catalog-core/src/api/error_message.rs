//! Error message extraction for non-2xx responses

use serde::Deserialize;

/// Shown instead of raw HTML error pages
pub const HTML_ERROR_MESSAGE: &str = "The server returned an invalid response.";
/// Shown when the body carries nothing useful
pub const EMPTY_ERROR_MESSAGE: &str = "Unexpected error in the response.";

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// JSON `message`, then JSON `error`, then the body text.
/// HTML pages are never surfaced verbatim, nor are JSON bodies without
/// either field.
pub fn extract_error_message(content_type: &str, body: &str) -> String {
    if content_type.contains("application/json") {
        if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
            return [parsed.message, parsed.error]
                .into_iter()
                .flatten()
                .find(|m| !m.is_empty())
                .unwrap_or_else(|| EMPTY_ERROR_MESSAGE.to_string());
        }
    }

    if body.contains("<!DOCTYPE") || body.contains("<html") {
        return HTML_ERROR_MESSAGE.to_string();
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        EMPTY_ERROR_MESSAGE.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = "application/json; charset=utf-8";

    #[test]
    fn test_prefers_message_then_error() {
        assert_eq!(extract_error_message(JSON, r#"{"message":"Bad price","error":"x"}"#), "Bad price");
        assert_eq!(extract_error_message(JSON, r#"{"error":"Forbidden"}"#), "Forbidden");
        assert_eq!(extract_error_message(JSON, r#"{"message":"","error":"Fallback"}"#), "Fallback");
    }

    #[test]
    fn test_html_pages_are_replaced() {
        let page = "<!DOCTYPE html><html><body>502</body></html>";
        assert_eq!(extract_error_message("text/html", page), HTML_ERROR_MESSAGE);
        assert_eq!(extract_error_message("text/plain", "<html>oops"), HTML_ERROR_MESSAGE);
    }

    #[test]
    fn test_plain_text_and_empty_body() {
        assert_eq!(extract_error_message("text/plain", " Item not found \n"), "Item not found");
        assert_eq!(extract_error_message("", ""), EMPTY_ERROR_MESSAGE);
        assert_eq!(extract_error_message(JSON, "{}"), EMPTY_ERROR_MESSAGE);
        assert_eq!(extract_error_message(JSON, r#"{"message":"","status":500}"#), EMPTY_ERROR_MESSAGE);
        assert_eq!(extract_error_message(JSON, "Gateway timeout"), "Gateway timeout");
    }
}
