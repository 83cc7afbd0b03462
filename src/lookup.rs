//! Looks a word up and prints what the dictionary knows about it.

use std::io::Write;

use console::style;
use log::debug;

use crate::error::Result;
use crate::extract::{entry_definitions, extract_etymology};
use crate::model::{Entry, Response};
use crate::mwdict::DictionarySource;

const DIVIDER_WIDTH: usize = 60;
const MAX_SUGGESTIONS: usize = 5;

/// What a lookup ended with. Only `Found` printed definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Number of entries printed.
    Found(usize),
    Suggestions(Vec<String>),
    NotFound,
}

pub fn lookup<S, W>(word: &str, show_etymology: bool, source: &S, out: &mut W) -> Result<Outcome>
where
    S: DictionarySource + ?Sized,
    W: Write,
{
    let entries = match source.fetch(word)? {
        Response::Suggestions(suggestions) => {
            let shown: Vec<String> = suggestions.into_iter().take(MAX_SUGGESTIONS).collect();
            writeln!(
                out,
                "No definition found for '{}'. Did you mean: {}?",
                word,
                shown.join(", ")
            )?;
            return Ok(Outcome::Suggestions(shown));
        }
        Response::Entries(entries) => entries,
    };

    let total = entries.len();
    let matching: Vec<&Entry> = entries.iter().filter(|e| e.matches(word)).collect();
    debug!("{} of {} entries match '{}'", matching.len(), total, word);

    if matching.is_empty() {
        writeln!(out, "No definition found for '{}'.", word)?;
        return Ok(Outcome::NotFound);
    }

    let divider = "=".repeat(DIVIDER_WIDTH);
    writeln!(out, "\n{}\n", divider)?;

    let several = matching.len() > 1;
    for (idx, entry) in matching.iter().enumerate() {
        let id = if entry.meta.id.is_empty() { word } else { entry.meta.id.as_str() };
        let title = if several {
            format!("Entry {}: {}", idx + 1, id)
        } else {
            format!("Word: {}", id)
        };
        print_entry_header(out, &title)?;
        print_entry_body(out, entry, show_etymology)?;
    }

    writeln!(out, "{}", divider)?;
    Ok(Outcome::Found(matching.len()))
}

// +-----------+
// | Word: run |
// +-----------+
fn print_entry_header<W: Write>(out: &mut W, title: &str) -> Result<()> {
    let width = title.chars().count() + 4;
    let frame = format!("+{}+", "-".repeat(width - 2));
    writeln!(out, "{}", frame)?;
    writeln!(out, "| {} |", style(title).bold().green())?;
    writeln!(out, "{}", frame)?;
    writeln!(out)?;
    Ok(())
}

fn print_entry_body<W: Write>(out: &mut W, entry: &Entry, show_etymology: bool) -> Result<()> {
    writeln!(
        out,
        "Part of Speech: {}",
        entry.fl.as_deref().unwrap_or("N/A")
    )?;
    writeln!(out)?;

    let definitions = entry_definitions(entry);
    if definitions.is_empty() {
        writeln!(out, "No definitions available.")?;
    } else {
        print_section_title(out, &format!("Meanings ({}):", definitions.len()))?;
        for (i, definition) in definitions.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, definition)?;
        }
    }
    writeln!(out)?;

    if show_etymology {
        if let Some(etymology) = extract_etymology(entry) {
            print_section_title(out, "Etymology:")?;
            writeln!(out, "  {}", etymology)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn print_section_title<W: Write>(out: &mut W, title: &str) -> Result<()> {
    writeln!(out, "{}", style(title).magenta())?;
    Ok(())
}
