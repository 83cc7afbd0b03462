use crate::markup::render_tokens;
use crate::model::{Content, Entry, SenseGroup, SenseItem};

/// Collects the rendered definitions of a sense sequence, in traversal order
/// and without duplicates.
pub fn extract_definitions(sseq: &[SenseGroup]) -> Vec<String> {
    let mut definitions: Vec<String> = Vec::new();

    let texts = sseq
        .iter()
        .flat_map(|group| group.0.iter())
        .filter_map(|item| match item {
            SenseItem::Sense { dt, .. } => Some(dt),
            SenseItem::Skip => None,
        })
        .flatten()
        .filter_map(|content| match content {
            Content::Text(text) => Some(text),
            _ => None,
        });

    for text in texts {
        let rendered = render_tokens(text);
        // dt text conventionally opens with {bc}, which renders as ": "
        let clean = match rendered.strip_prefix(':') {
            Some(rest) => rest.trim_start().to_string(),
            None => rendered,
        };
        if !clean.is_empty() && !definitions.contains(&clean) {
            definitions.push(clean);
        }
    }
    definitions
}

/// Definitions of every `def` section, falling back to `shortdef` when the
/// full sense sequences yield nothing.
pub fn entry_definitions(entry: &Entry) -> Vec<String> {
    let definitions: Vec<String> = entry
        .def
        .iter()
        .flat_map(|section| extract_definitions(&section.sseq))
        .collect();

    if definitions.is_empty() {
        if let Some(shortdef) = &entry.shortdef {
            return shortdef.clone();
        }
    }
    definitions
}

/// The rendered etymology, or `None` when the entry has none worth showing.
pub fn extract_etymology(entry: &Entry) -> Option<String> {
    let et = entry.et.as_ref()?;
    let parts: Vec<String> = et
        .0
        .iter()
        .filter_map(|content| match content {
            Content::Text(text) => Some(render_tokens(text)),
            _ => None,
        })
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}
