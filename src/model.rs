//! Typed view of the Collegiate Dictionary JSON.
//!
//! The API mixes arrays used as tuples (`["sense", {...}]`, `["text", "..."]`)
//! with objects, and the shapes vary between entries. Every nesting level below
//! is decoded from a [`serde_json::Value`] so an unexpected shape turns into an
//! empty or `Skip` value instead of failing the whole response.

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Decoded top-level response.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// The word is unknown; the API offers spellings it does know.
    Suggestions(Vec<String>),
    Entries(Vec<Entry>),
}

impl Response {
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        Response::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(Error::UnexpectedResponse(format!(
                    "expected a JSON array, got {}",
                    kind_of(&other)
                )))
            }
        };

        if let Some(Value::String(_)) = items.first() {
            let suggestions = items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect();
            return Ok(Response::Suggestions(suggestions));
        }

        let mut entries = Vec::with_capacity(items.len());
        for (idx, item) in items.into_iter().enumerate() {
            if !item.is_object() {
                debug!("skipping non-object entry #{}", idx);
                continue;
            }
            entries.push(Entry::from(item));
        }
        Ok(Response::Entries(entries))
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// One headword record.
///
/// A field with an unexpected shape decodes to its empty value, so one odd
/// field never hides an entry whose senses are fine.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Value")]
pub struct Entry {
    pub meta: Meta,
    /// Functional label, i.e. the part of speech.
    pub fl: Option<String>,
    pub def: Vec<DefinitionSection>,
    pub et: Option<Etymology>,
    pub shortdef: Option<Vec<String>>,
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        let mut map = match value {
            Value::Object(map) => map,
            _ => return Entry::default(),
        };
        Entry {
            meta: map.remove("meta").map(Meta::from).unwrap_or_default(),
            fl: match map.remove("fl") {
                Some(Value::String(fl)) => Some(fl),
                _ => None,
            },
            def: match map.remove("def") {
                Some(Value::Array(sections)) => {
                    sections.into_iter().map(DefinitionSection::from).collect()
                }
                _ => Vec::new(),
            },
            et: match map.remove("et") {
                None | Some(Value::Null) => None,
                Some(et) => Some(Etymology::from(et)),
            },
            shortdef: match map.remove("shortdef") {
                Some(Value::Array(items)) => Some(
                    items
                        .into_iter()
                        .filter_map(|item| match item {
                            Value::String(s) => Some(s),
                            _ => None,
                        })
                        .collect(),
                ),
                _ => None,
            },
        }
    }
}

impl Entry {
    /// The identifier without its homograph index: `"battle:2"` -> `"battle"`.
    pub fn headword(&self) -> &str {
        self.meta.id.split(':').next().unwrap_or_default()
    }

    pub fn matches(&self, word: &str) -> bool {
        self.headword().to_lowercase() == word.to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Value")]
pub struct Meta {
    pub id: String,
}

impl From<Value> for Meta {
    fn from(value: Value) -> Self {
        let id = match value {
            Value::Object(mut map) => match map.remove("id") {
                Some(Value::String(id)) => id,
                _ => String::new(),
            },
            _ => String::new(),
        };
        Meta { id }
    }
}

/// One element of `def`. Only its `sseq` is of interest.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Value")]
pub struct DefinitionSection {
    pub sseq: Vec<SenseGroup>,
}

impl From<Value> for DefinitionSection {
    fn from(value: Value) -> Self {
        let sseq = match value {
            Value::Object(mut map) => match map.remove("sseq") {
                Some(Value::Array(groups)) => groups.into_iter().map(SenseGroup::from).collect(),
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };
        DefinitionSection { sseq }
    }
}

/// An ordered group of sense items inside an `sseq`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Value")]
pub struct SenseGroup(pub Vec<SenseItem>);

impl From<Value> for SenseGroup {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => SenseGroup(items.into_iter().map(SenseItem::from).collect()),
            _ => SenseGroup::default(),
        }
    }
}

/// A `[kind, data]` pair such as `["sense", {"dt": [...]}]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum SenseItem {
    Sense { kind: String, dt: Vec<Content> },
    /// Anything else: `bs`, `pseq`, or a shape the API never documented.
    Skip,
}

impl From<Value> for SenseItem {
    fn from(value: Value) -> Self {
        let mut pair = match value {
            Value::Array(pair) if pair.len() >= 2 => pair,
            _ => return SenseItem::Skip,
        };
        let data = pair.swap_remove(1);
        let kind = match &pair[0] {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        match data {
            Value::Object(mut map) => match map.remove("dt") {
                Some(dt) => SenseItem::Sense {
                    kind,
                    dt: content_list(dt),
                },
                None => SenseItem::Skip,
            },
            _ => SenseItem::Skip,
        }
    }
}

/// A `[tag, content]` pair from `dt` or `et`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum Content {
    Text(String),
    /// A pair with another tag (`vis`, `uns`, `snote`, ...), kept by tag only.
    Other(String),
    Skip,
}

impl From<Value> for Content {
    fn from(value: Value) -> Self {
        let mut pair = match value {
            Value::Array(pair) if pair.len() >= 2 => pair,
            _ => return Content::Skip,
        };
        let content = pair.swap_remove(1);
        match (&pair[0], content) {
            (Value::String(tag), Value::String(text)) if tag == "text" => Content::Text(text),
            (Value::String(tag), _) if tag == "text" => Content::Skip,
            (Value::String(tag), _) => Content::Other(tag.clone()),
            _ => Content::Skip,
        }
    }
}

fn content_list(value: Value) -> Vec<Content> {
    match value {
        Value::Array(items) => items.into_iter().map(Content::from).collect(),
        _ => Vec::new(),
    }
}

/// The `et` field of an entry.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Value")]
pub struct Etymology(pub Vec<Content>);

impl From<Value> for Etymology {
    fn from(value: Value) -> Self {
        Etymology(content_list(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_first_means_suggestions() {
        let response = Response::from_value(json!(["runn", "ruin", "rune"])).unwrap();
        assert_eq!(
            response,
            Response::Suggestions(vec!["runn".into(), "ruin".into(), "rune".into()])
        );
    }

    #[test]
    fn empty_array_has_no_entries() {
        let response = Response::from_json("[]").unwrap();
        assert_eq!(response, Response::Entries(vec![]));
    }

    #[test]
    fn non_array_is_rejected() {
        let err = Response::from_value(json!({"error": "bad key"})).unwrap_err();
        assert!(matches!(err, Error::UnexpectedResponse(_)));
    }

    #[test]
    fn non_object_entries_are_dropped() {
        let response = Response::from_value(json!([{"meta": {"id": "run"}}, 7, null])).unwrap();
        match response {
            Response::Entries(entries) => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].meta.id, "run");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn missing_meta_decodes_to_empty_id() {
        let entry: Entry = serde_json::from_value(json!({"fl": "verb"})).unwrap();
        assert_eq!(entry.meta.id, "");
        assert_eq!(entry.fl.as_deref(), Some("verb"));
        assert!(entry.et.is_none());
    }

    #[test]
    fn headword_strips_homograph_index() {
        let entry: Entry = serde_json::from_value(json!({"meta": {"id": "Battle:2"}})).unwrap();
        assert_eq!(entry.headword(), "Battle");
        assert!(entry.matches("battle"));
        assert!(!entry.matches("battles"));
    }

    #[test]
    fn sense_items_decode_by_shape() {
        let group = SenseGroup::from(json!([
            ["sense", {"sn": "1", "dt": [["text", "{bc}a fight"], ["vis", []]]}],
            ["bs", {"sense": {"dt": [["text", "ignored"]]}}],
            ["pseq", [["sense", {}]]],
            "stray",
            ["sense"]
        ]));
        assert_eq!(
            group.0,
            vec![
                SenseItem::Sense {
                    kind: "sense".into(),
                    dt: vec![
                        Content::Text("{bc}a fight".into()),
                        Content::Other("vis".into())
                    ],
                },
                SenseItem::Skip,
                SenseItem::Skip,
                SenseItem::Skip,
                SenseItem::Skip,
            ]
        );
    }

    #[test]
    fn malformed_sections_become_empty() {
        let entry: Entry = serde_json::from_value(json!({
            "meta": {"id": "odd"},
            "def": ["not a section", {"vd": "verb"}, {"sseq": "nope"}, {"sseq": [42]}],
            "et": "not a list"
        }))
        .unwrap();
        assert_eq!(entry.def.len(), 4);
        assert!(entry.def[..3].iter().all(|s| s.sseq.is_empty()));
        assert_eq!(entry.def[3].sseq, vec![SenseGroup::default()]);
        assert_eq!(entry.et, Some(Etymology::default()));
    }

    #[test]
    fn wrong_typed_fields_fall_back_to_empty() {
        let entry: Entry = serde_json::from_value(json!({
            "meta": {"id": 12},
            "fl": 1,
            "def": {"sseq": []},
            "shortdef": ["to go", 5, null, "to run"]
        }))
        .unwrap();
        assert_eq!(entry.meta.id, "");
        assert_eq!(entry.fl, None);
        assert!(entry.def.is_empty());
        assert_eq!(entry.shortdef, Some(vec!["to go".to_string(), "to run".to_string()]));
    }

    #[test]
    fn bad_field_keeps_valid_senses() {
        let response = Response::from_value(json!([{
            "meta": {"id": "run"},
            "fl": ["verb"],
            "shortdef": "to go",
            "def": [{"sseq": [[["sense", {"dt": [["text", "{bc}to move fast"]]}]]]}]
        }]))
        .unwrap();
        match response {
            Response::Entries(entries) => {
                assert_eq!(entries.len(), 1);
                assert!(entries[0].matches("run"));
                assert_eq!(entries[0].shortdef, None);
                assert_eq!(entries[0].def[0].sseq.len(), 1);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn meta_that_is_not_an_object() {
        let entry: Entry = serde_json::from_value(json!({"meta": "run", "et": null})).unwrap();
        assert_eq!(entry.meta.id, "");
        assert!(entry.et.is_none());
    }

    #[test]
    fn text_with_non_string_content_is_skipped() {
        assert_eq!(Content::from(json!(["text", 5])), Content::Skip);
        assert_eq!(Content::from(json!([1, "x"])), Content::Skip);
    }
}
