//! JSON re-indentation.
//!
//! Only whitespace between tokens changes. Number text, key order, duplicate
//! keys and string escapes are copied through as written.

use serde::de::IgnoredAny;
use std::iter::Peekable;
use std::str::Chars;

const INDENT: char = '\t';

/// Re-indent a JSON document with tabs.
///
/// Input that does not parse as JSON is returned unchanged.
///
/// # Examples
/// ```
/// use trafficutils::utils::json::pretty_print;
///
/// assert_eq!(pretty_print(r#"{"a":1}"#), "{\n\t\"a\": 1\n}");
/// assert_eq!(pretty_print("not json"), "not json");
/// ```
pub fn pretty_print(input: &str) -> String {
    if let Err(e) = serde_json::from_str::<IgnoredAny>(input) {
        log::debug!("Leaving input unformatted: {}", e);
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len() * 2);
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    let mut chars = input.trim().chars().peekable();

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '{' | '[' => {
                out.push(c);
                skip_whitespace(&mut chars);
                // Empty containers stay on one line
                match chars.peek() {
                    Some('}') | Some(']') => {
                        if let Some(close) = chars.next() {
                            out.push(close);
                        }
                    }
                    _ => {
                        depth += 1;
                        newline(&mut out, depth);
                    }
                }
            }
            '}' | ']' => {
                depth = depth.saturating_sub(1);
                newline(&mut out, depth);
                out.push(c);
            }
            ',' => {
                out.push(c);
                newline(&mut out, depth);
            }
            ':' => out.push_str(": "),
            c if c.is_ascii_whitespace() => {}
            _ => out.push(c),
        }
    }

    out
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(|c| c.is_ascii_whitespace()).is_some() {}
}

fn newline(out: &mut String, depth: usize) {
    out.push('\n');
    out.extend(std::iter::repeat(INDENT).take(depth));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_print_object() {
        let pretty = pretty_print(r#"{"name":"Noy","tags":["a","b"]}"#);
        assert_eq!(
            pretty,
            "{\n\t\"name\": \"Noy\",\n\t\"tags\": [\n\t\t\"a\",\n\t\t\"b\"\n\t]\n}"
        );
    }

    #[test]
    fn test_pretty_print_keeps_key_order() {
        let pretty = pretty_print(r#"{"z":1,"a":2}"#);
        assert_eq!(pretty, "{\n\t\"z\": 1,\n\t\"a\": 2\n}");
    }

    #[test]
    fn test_pretty_print_keeps_number_text() {
        assert_eq!(pretty_print(r#"{"n":1e2}"#), "{\n\t\"n\": 1e2\n}");
        assert_eq!(pretty_print(r#"[1.50,-0.0]"#), "[\n\t1.50,\n\t-0.0\n]");

        let pretty = pretty_print(r#"{"id":123456789012345678901234567890}"#);
        assert_eq!(pretty, "{\n\t\"id\": 123456789012345678901234567890\n}");
    }

    #[test]
    fn test_pretty_print_keeps_duplicate_keys() {
        let pretty = pretty_print(r#"{"a":1,"a":2}"#);
        assert_eq!(pretty, "{\n\t\"a\": 1,\n\t\"a\": 2\n}");
    }

    #[test]
    fn test_pretty_print_strings_untouched() {
        let pretty = pretty_print(r#"{"s":"a, {\"b\": [1]}\\"}"#);
        assert_eq!(pretty, "{\n\t\"s\": \"a, {\\\"b\\\": [1]}\\\\\"\n}");
    }

    #[test]
    fn test_pretty_print_reindents_existing_layout() {
        let pretty = pretty_print("{\n    \"a\" :  [ 1 ,2 ],\r\n  \"b\": {}\n}");
        assert_eq!(pretty, "{\n\t\"a\": [\n\t\t1,\n\t\t2\n\t],\n\t\"b\": {}\n}");
    }

    #[test]
    fn test_pretty_print_empty_containers() {
        assert_eq!(pretty_print("{ }"), "{}");
        assert_eq!(pretty_print("[\n]"), "[]");
        assert_eq!(pretty_print(r#"{"a":[]}"#), "{\n\t\"a\": []\n}");
    }

    #[test]
    fn test_pretty_print_scalar() {
        assert_eq!(pretty_print("42"), "42");
        assert_eq!(pretty_print("  true "), "true");
    }

    #[test]
    fn test_pretty_print_invalid_returns_input() {
        assert_eq!(pretty_print("{\"a\":"), "{\"a\":");
        assert_eq!(pretty_print(""), "");
    }
}
