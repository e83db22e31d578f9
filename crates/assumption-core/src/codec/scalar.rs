//! YAML scalar emission.
//!
//! Text is written in the least noisy style that a YAML parser reads back as
//! the identical string, both at block level and inside a flow mapping:
//!
//! 1. plain (`Item A`)
//! 2. single-quoted (`'345'`, `'a, b'`), with `'` doubled
//! 3. double-quoted with escapes, only when the text holds control or
//!    line-break characters that single quotes would fold

use serde_yaml::Value;

/// Characters that may not start a plain scalar.
const INDICATORS: &[char] = &[
    '-', '?', ':', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>', '\'', '"', '%', '@',
    '`',
];

/// Characters that end or confuse a plain scalar inside a flow mapping.
const FLOW_UNSAFE: &[char] = &[',', '[', ']', '{', '}', ':', '#'];

/// Append `text` to `out` as a YAML scalar.
pub(crate) fn write_text(out: &mut String, text: &str) {
    if needs_escapes(text) {
        write_double_quoted(out, text);
    } else if is_plain_safe(text) {
        out.push_str(text);
    } else {
        write_single_quoted(out, text);
    }
}

/// Append an integer as an unquoted decimal scalar.
pub(crate) fn write_integer(out: &mut String, value: i64) {
    out.push_str(&value.to_string());
}

fn needs_escapes(text: &str) -> bool {
    text.chars().any(is_escaped)
}

/// Control characters, line separators, and code points outside the YAML
/// printable set.
fn is_escaped(c: char) -> bool {
    c.is_control()
        || matches!(
            c,
            '\u{2028}' | '\u{2029}' | '\u{feff}' | '\u{fffe}' | '\u{ffff}'
        )
}

fn is_plain_safe(text: &str) -> bool {
    let Some(first) = text.chars().next() else {
        return false;
    };
    if INDICATORS.contains(&first) || text.contains(FLOW_UNSAFE) {
        return false;
    }
    if text.starts_with(char::is_whitespace) || text.ends_with(char::is_whitespace) {
        return false;
    }
    // Anything the parser would resolve to null, bool or a number must be quoted.
    matches!(
        serde_yaml::from_str::<Value>(text),
        Ok(Value::String(parsed)) if parsed == text
    )
}

fn write_single_quoted(out: &mut String, text: &str) {
    out.push('\'');
    out.push_str(&text.replace('\'', "''"));
    out.push('\'');
}

fn write_double_quoted(out: &mut String, text: &str) {
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            c if u32::from(c) <= 0xff && c.is_control() => {
                out.push_str(&format!("\\x{:02x}", u32::from(c)));
            }
            c if is_escaped(c) => {
                out.push_str(&format!("\\u{:04x}", u32::from(c)));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> String {
        let mut out = String::new();
        write_text(&mut out, value);
        out
    }

    #[test]
    fn test_plain_words_stay_plain() {
        assert_eq!(text("A"), "A");
        assert_eq!(text("Item A"), "Item A");
        assert_eq!(text("héllo wörld"), "héllo wörld");
    }

    #[test]
    fn test_resolvable_scalars_are_single_quoted() {
        let cases = [
            ("345", "'345'"),
            ("-7", "'-7'"),
            ("1.5", "'1.5'"),
            ("true", "'true'"),
            ("null", "'null'"),
            ("~", "'~'"),
            ("", "''"),
        ];
        for (input, expected) in cases {
            assert_eq!(text(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_flow_indicators_are_quoted() {
        assert_eq!(text("a, b"), "'a, b'");
        assert_eq!(text("{x}"), "'{x}'");
        assert_eq!(text("key: value"), "'key: value'");
        assert_eq!(text("a #comment"), "'a #comment'");
    }

    #[test]
    fn test_single_quotes_are_doubled() {
        assert_eq!(text("it's"), "it's");
        assert_eq!(text("'quoted'"), "'''quoted'''");
    }

    #[test]
    fn test_surrounding_whitespace_is_quoted() {
        assert_eq!(text(" padded "), "' padded '");
    }

    #[test]
    fn test_control_characters_use_double_quotes() {
        assert_eq!(text("line\nbreak"), "\"line\\nbreak\"");
        assert_eq!(text("tab\there"), "\"tab\\there\"");
        assert_eq!(text("bell\u{7}"), "\"bell\\x07\"");
        assert_eq!(text("say \"hi\"\n"), "\"say \\\"hi\\\"\\n\"");
        assert_eq!(text("odd\u{ffff}"), "\"odd\\uffff\"");
    }

    #[test]
    fn test_integers_are_unquoted() {
        let mut out = String::new();
        write_integer(&mut out, -93);
        assert_eq!(out, "-93");
    }

    #[test]
    fn test_every_style_parses_back() -> Result<(), serde_yaml::Error> {
        for input in ["plain", "345", "a, b", "it's", "x\ny", "\\", " ", "#", "- a"] {
            let doc = format!("{{v: {}}}", text(input));
            let parsed: std::collections::BTreeMap<String, String> = serde_yaml::from_str(&doc)?;
            assert_eq!(parsed.get("v").map(String::as_str), Some(input), "doc {doc}");
        }
        Ok(())
    }
}
