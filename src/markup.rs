//! Rendering of Merriam-Webster inline formatting tokens.
//!
//! Definition and etymology strings arrive with markup such as
//! `{bc}a {sx|contest||} between {it}armies{/it}`. [`render_tokens`] resolves
//! the tokens it knows and strips everything else.

use console::style;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{b\}(.*?)\{/b\}").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{it\}(.*?)\{/it\}").unwrap());
static SMALL_CAPS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{sc\}(.*?)\{/sc\}").unwrap());
static SUPERSCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{sup\}(.*?)\{/sup\}").unwrap());
static INFERIOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{inf\}(.*?)\{/inf\}").unwrap());
// {sx|word||}, {a_link|word}, {d_link|word|word:1}, ...
static PIPED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([a-z_]+)\|([^}|]+)(?:\|[^}]*)?\}").unwrap());
static ANY_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[^}]+\}").unwrap());

const LEFT_QUOTE: &str = "\u{201C}";
const RIGHT_QUOTE: &str = "\u{201D}";

/// Resolves every formatting token in `text` for terminal display.
///
/// Paired tags go first, then the single tokens, then pipe-delimited
/// cross-references; whatever is still inside braces afterwards is dropped.
/// The result is trimmed, except that empty input comes back untouched.
pub fn render_tokens(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = BOLD.replace_all(text, |caps: &Captures| {
        style(&caps[1]).bold().force_styling(true).to_string()
    });
    let text = ITALIC.replace_all(&text, |caps: &Captures| {
        style(&caps[1]).italic().force_styling(true).to_string()
    });
    let text = SMALL_CAPS.replace_all(&text, |caps: &Captures| caps[1].to_uppercase());
    let text = SUPERSCRIPT.replace_all(&text, |caps: &Captures| superscript(&caps[1]));
    let text = INFERIOR.replace_all(&text, "${1}");

    let text = text
        .replace("{bc}", ": ")
        .replace("{ldquo}", LEFT_QUOTE)
        .replace("{rdquo}", RIGHT_QUOTE)
        .replace("{p_br}", "");

    let text = PIPED.replace_all(&text, "${2}");
    let text = ANY_TOKEN.replace_all(&text, "");

    text.trim().to_string()
}

/// Maps ASCII digits to their superscript forms; anything else passes through.
pub fn superscript(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '0' => '\u{2070}',
            '1' => '\u{00B9}',
            '2' => '\u{00B2}',
            '3' => '\u{00B3}',
            '4' => '\u{2074}',
            '5' => '\u{2075}',
            '6' => '\u{2076}',
            '7' => '\u{2077}',
            '8' => '\u{2078}',
            '9' => '\u{2079}',
            other => other,
        })
        .collect()
}
