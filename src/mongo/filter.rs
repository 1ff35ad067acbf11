//! Builds the default filter text and parses user-supplied filter text into
//! a BSON document.

use mongodb::bson::{self, Document};
use serde_json::Value;

/// JSON text for a single-field equality filter, shown as the editable
/// default in the filter input. Either input blank means match-all.
pub fn default_filter_text(field: &str, value: &str) -> String {
    let field = field.trim();
    let value = value.trim();
    if field.is_empty() || value.is_empty() {
        return String::from("{}");
    }

    let mut object = serde_json::Map::with_capacity(1);
    object.insert(field.to_string(), Value::String(value.to_string()));
    Value::Object(object).to_string()
}

/// Parses filter text into a `Document`. Blank text is the empty filter;
/// unquoted shell-style keys are normalized first. The caller substitutes
/// the empty filter when this fails, so a bad filter never blocks the run.
pub fn parse_filter(text: &str) -> Result<Document, String> {
    let cleaned = text.trim().trim_end_matches(';').trim();
    if cleaned.is_empty() {
        return Ok(Document::new());
    }

    let normalized = quote_unquoted_keys(cleaned);
    let value: Value =
        serde_json::from_str(&normalized).map_err(|error| format!("Invalid filter: {error}"))?;

    if !value.is_object() {
        return Err(String::from("The filter must be a JSON object"));
    }

    bson::to_document(&value).map_err(|error| format!("Filter conversion error: {error}"))
}

fn is_key_start_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || matches!(ch, '_' | '$')
}

fn is_key_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '$' | '.')
}

fn starts_key(prev: Option<char>) -> bool {
    matches!(prev, None | Some('{') | Some('[') | Some(','))
}

/// Wraps unquoted object keys (`_id`, `$or`, ...) in double quotes so the
/// input becomes valid JSON, leaving quoted strings untouched. Bare words in
/// value position pass through unchanged and fail JSON parsing later, which
/// is the error the user should see.
fn quote_unquoted_keys(input: &str) -> String {
    let mut output = String::with_capacity(input.len() + 16);
    let mut chars = input.chars().peekable();
    let mut prev_non_ws: Option<char> = None;
    let mut in_string = false;
    let mut escaped = false;

    while let Some(ch) = chars.next() {
        if in_string {
            output.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
                prev_non_ws = Some('"');
            }
            continue;
        }

        match ch {
            '"' => {
                output.push(ch);
                in_string = true;
                escaped = false;
            }
            c if c.is_whitespace() => output.push(c),
            c if is_key_start_char(c) && starts_key(prev_non_ws) => {
                let mut word = String::new();
                word.push(c);
                while let Some(&next) = chars.peek() {
                    if is_key_char(next) {
                        word.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }

                let mut gap = String::new();
                while let Some(&next) = chars.peek() {
                    if next.is_whitespace() {
                        gap.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }

                if chars.peek() == Some(&':') {
                    output.push('"');
                    output.push_str(&word);
                    output.push('"');
                    prev_non_ws = Some('"');
                } else {
                    output.push_str(&word);
                    prev_non_ws = word.chars().next_back();
                }
                output.push_str(&gap);
            }
            c => {
                output.push(c);
                prev_non_ws = Some(c);
            }
        }
    }

    output
}
