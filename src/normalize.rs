use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::accents::strip_accents;
use crate::escape::decode_escapes;
use crate::replace::{collapse_spaces, trim};
use crate::tables::SEARCH;

/// Surname particles that are always written in lowercase.
pub const PARTICLES: [&str; 9] = ["van", "von", "den", "der", "des", "de", "du", "la", "le"];

static PARTICLE_RE: Lazy<Regex> = Lazy::new(|| {
    let alts = PARTICLES.join("|");
    Regex::new(&format!(r"(?i)\b(?:{})\b", alts)).unwrap()
});

static KEY_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([^\p{L}\-])(mac|mc)(\p{L})").unwrap()
});

/// Characters after which `capitalize_words` starts a new word.
const WORD_BREAKS: &str = " \t\r\n\x0C\x0B";

/// Converts a surname into its conventional written form.
///
/// Returns `None` only when given `None`. See `fix_name`.
pub fn normalize_name(s: Option<&str>) -> Option<String>
{
    s.map(fix_name)
}

/// Converts a surname into its conventional written form.
///
/// Escapes are decoded, accents stripped and spacing tidied. A `mc` or `mac`
/// that is not already followed by a space marks every occurrence of that
/// prefix, so the letter after it is capitalized (`mcdonald` becomes
/// `McDonald`, and so does the `mac` in `machine`). Each hyphen separated part
/// has its words capitalized, and particles such as `van` or `de` are put in
/// lowercase wherever they stand as whole words.
///
/// Case changes only touch ASCII letters, so other scripts pass through as
/// they are.
pub fn fix_name(s: &str) -> String
{
    let s = strip_accents(&decode_escapes(s));
    let mut name = collapse_spaces(trim(&s, None));

    let mc_fix = has_open_prefix(&name.to_ascii_lowercase(), "mc");
    if mc_fix {
        name = name.to_ascii_lowercase().replace("mc", "mc ");
    }
    let mac_fix = has_open_prefix(&name.to_ascii_lowercase(), "mac");
    if mac_fix {
        name = name.to_ascii_lowercase().replace("mac", "mac ");
    }

    let lower = name.to_ascii_lowercase();
    let name = lower.split('-')
        .map(capitalize_words)
        .collect::<Vec<_>>()
        .join("-");

    let mut name = PARTICLE_RE
        .replace_all(&name, |caps: &Captures| caps[0].to_ascii_lowercase())
        .into_owned();

    if mc_fix {
        name = name.replace("Mc ", "Mc");
    }
    if mac_fix {
        name = name.replace("Mac ", "Mac");
    }
    name
}

/// True if `prefix` occurs somewhere in `s` without a space right after it.
fn has_open_prefix(s: &str, prefix: &str) -> bool
{
    s.match_indices(prefix)
        .any(|(i, _)| s.as_bytes().get(i + prefix.len()) != Some(&b' '))
}

/// Uppercases the first letter of the string and of every word after a
/// whitespace break. Only ASCII letters change.
fn capitalize_words(s: &str) -> String
{
    let mut out = String::with_capacity(s.len());
    let mut at_start = true;
    for c in s.chars() {
        if at_start {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        at_start = WORD_BREAKS.contains(c);
    }
    out
}

/// Produces a lowercase key for fuzzy text matching.
///
/// Returns `None` only when given `None`. See `key`.
pub fn search_key(s: Option<&str>) -> Option<String>
{
    s.map(key)
}

/// Produces a lowercase key for fuzzy text matching.
///
/// Escapes are decoded and a space is put before any `mc`/`mac` that follows
/// punctuation. Separators (`{ } ( ) / \ @ : " ? , . _`) become spaces,
/// accents are stripped and everything is lowercased. Finally runs of spaces
/// are collapsed and the ends trimmed.
pub fn key(s: &str) -> String
{
    let s = decode_escapes(s);
    let s = KEY_PREFIX_RE.replace_all(&s, "$1 $2$3");
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match SEARCH.get(c) {
            Some(rep) => out.push_str(rep),
            None => out.extend(c.to_lowercase())
        }
    }
    trim(&collapse_spaces(&out), None).to_string()
}
