use serde::{Deserialize, Serialize};

/// Accepted translations for one vocabulary item.
///
/// The backend transports this field in several shapes: a JSON array, a
/// `"||"`-delimited string, a `"|"`-delimited string, a comma-delimited
/// string, or one bare string. The shape is resolved once at ingestion;
/// downstream code only ever sees the parsed entries (answer matching) and
/// the raw surface form (list search).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "RawTranslation", into = "String")]
pub struct TranslationSet {
    raw: String,
    entries: Vec<String>,
}

/// Transport shape as it appears on the wire.
#[derive(Clone, Deserialize)]
#[serde(untagged)]
enum RawTranslation {
    Many(Vec<serde_json::Value>),
    One(String),
}

impl From<RawTranslation> for TranslationSet {
    fn from(raw: RawTranslation) -> Self {
        match raw {
            RawTranslation::Many(values) => {
                let entries: Vec<String> =
                    values.iter().filter_map(stringify_element).collect();
                TranslationSet { raw: entries.join(", "), entries }
            }
            RawTranslation::One(s) => TranslationSet::parse(&s),
        }
    }
}

impl From<TranslationSet> for String {
    fn from(set: TranslationSet) -> Self {
        set.raw
    }
}

impl TranslationSet {
    /// Parse a raw string field into a normalized set.
    pub fn parse(raw: &str) -> Self {
        Self { raw: raw.to_string(), entries: parse_translation_set(raw) }
    }

    /// The transport surface form, used for substring search.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Trimmed, non-empty accepted translations in transport order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Display form: entries joined by `" / "`.
    pub fn display(&self) -> String {
        self.entries.join(" / ")
    }
}

/// Split a raw translation field into trimmed, non-empty entries.
///
/// Resolution order: JSON array, `"||"`, `"|"`, then `","` — the comma
/// split only applies when it yields more than one non-empty segment, so a
/// single translation containing no delimiter survives whole. Any string
/// with a comma and several segments is treated as multiple alternatives;
/// this is the documented transport convention, not language-aware
/// splitting.
pub fn parse_translation_set(raw: &str) -> Vec<String> {
    if let Ok(values) = serde_json::from_str::<Vec<serde_json::Value>>(raw) {
        return values.iter().filter_map(stringify_element).collect();
    }
    if raw.contains("||") {
        let parts = split_non_empty(raw, "||");
        if !parts.is_empty() {
            return parts;
        }
    }
    if raw.contains('|') {
        let parts = split_non_empty(raw, "|");
        if !parts.is_empty() {
            return parts;
        }
    }
    let parts = split_non_empty(raw, ",");
    if parts.len() > 1 {
        return parts;
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() { Vec::new() } else { vec![trimmed.to_string()] }
}

fn stringify_element(value: &serde_json::Value) -> Option<String> {
    let text = match value {
        serde_json::Value::String(s) => s.trim().to_string(),
        other => other.to_string(),
    };
    if text.is_empty() { None } else { Some(text) }
}

fn split_non_empty(raw: &str, delimiter: &str) -> Vec<String> {
    raw.split(delimiter)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Comparison form: trimmed and lowercased.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// True iff the answer equals some accepted translation after
/// normalization.
pub fn matches(answer: &str, set: &TranslationSet) -> bool {
    let want = normalize(answer);
    set.entries().iter().any(|entry| normalize(entry) == want)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_string_is_single_entry() {
        assert_eq!(parse_translation_set("แอปเปิ้ล"), vec!["แอปเปิ้ล"]);
    }

    #[test]
    fn empty_and_blank_input_yield_empty_set() {
        assert!(parse_translation_set("").is_empty());
        assert!(parse_translation_set("   ").is_empty());
    }

    #[test]
    fn double_pipe_splits_and_trims() {
        assert_eq!(parse_translation_set("cat || gato"), vec!["cat", "gato"]);
        assert_eq!(parse_translation_set("a||||b"), vec!["a", "b"]);
    }

    #[test]
    fn double_pipe_takes_precedence_over_single() {
        // "a||b|c" contains "||", so the single-pipe rule never applies.
        assert_eq!(parse_translation_set("a||b|c"), vec!["a", "b|c"]);
    }

    #[test]
    fn single_pipe_splits() {
        assert_eq!(parse_translation_set("cat|gato"), vec!["cat", "gato"]);
    }

    #[test]
    fn json_array_input_is_parsed() {
        assert_eq!(
            parse_translation_set(r#"["หมี", "แบร์"]"#),
            vec!["หมี", "แบร์"]
        );
        assert_eq!(parse_translation_set("[]"), Vec::<String>::new());
    }

    #[test]
    fn json_array_non_string_elements_are_stringified() {
        assert_eq!(parse_translation_set(r#"[1, "two", ""]"#), vec!["1", "two"]);
    }

    #[test]
    fn malformed_json_falls_through_to_delimiters() {
        assert_eq!(parse_translation_set("[a, b"), vec!["[a", "b"]);
    }

    #[test]
    fn comma_splits_only_on_multiple_segments() {
        assert_eq!(parse_translation_set("red, blue"), vec!["red", "blue"]);
        assert_eq!(parse_translation_set("a, b, c"), vec!["a", "b", "c"]);
        // One non-empty segment: the whole string stays a single entry,
        // trailing comma and all.
        assert_eq!(parse_translation_set("alone,"), vec!["alone,"]);
    }

    #[test]
    fn comma_heuristic_splits_multiword_segments() {
        // Documented transport convention: ">1 segment" wins even when the
        // second segment is a phrase.
        assert_eq!(
            parse_translation_set("hello, world problem"),
            vec!["hello", "world problem"]
        );
    }

    #[test]
    fn display_joins_with_slash() {
        let set = TranslationSet::parse("หมี||แบร์");
        assert_eq!(set.display(), "หมี / แบร์");
    }

    #[test]
    fn display_roundtrip_is_stable_for_single_entry() {
        let set = TranslationSet::parse("  cat  ");
        let again = TranslationSet::parse(&set.display());
        assert_eq!(set.entries(), again.entries());
    }

    #[test]
    fn matches_is_case_and_whitespace_insensitive() {
        let set = TranslationSet::parse("cat");
        assert!(matches(" Cat ", &set));
        assert!(matches("CAT", &set));
    }

    #[test]
    fn matches_multi_value_sets() {
        let set = TranslationSet::parse("cat||gato");
        assert!(matches("gato", &set));
        assert!(!matches("dog", &set));
    }

    #[test]
    fn matches_rejects_empty_answer_against_empty_set() {
        let set = TranslationSet::parse("");
        assert!(!matches("", &set));
    }

    #[test]
    fn deserializes_from_array_and_string_transport() {
        let from_array: TranslationSet =
            serde_json::from_str(r#"["หมี", "แบร์"]"#).unwrap();
        assert_eq!(from_array.entries(), ["หมี", "แบร์"]);
        assert_eq!(from_array.raw(), "หมี, แบร์");

        let from_string: TranslationSet =
            serde_json::from_str(r#""cat||gato""#).unwrap();
        assert_eq!(from_string.entries(), ["cat", "gato"]);
        assert_eq!(from_string.raw(), "cat||gato");
    }
}
