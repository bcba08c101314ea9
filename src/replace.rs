use std::collections::HashMap;
use std::collections::hash_map::Entry::{Occupied,Vacant};

/// Characters stripped by `trim` when no explicit set is given.
pub const DEFAULT_TRIM_CHARS: &str = " \t\n\r\0\x0B";

/// A one-to-many character substitution table.
///
/// Every lookup is a single hash probe, so applying the map to a string is
/// linear in its length. Characters that have no entry are copied unchanged.
#[derive(Clone, Debug, Default)]
pub struct CharMap
{
    map: HashMap<char,String>
}

impl CharMap
{
    pub fn new() -> Self { Self { map: HashMap::new() } }

    /// Builds a map from two parallel sequences.
    ///
    /// # Panics
    ///
    /// Panics if the sequences differ in length or a source character is
    /// listed twice. Both can only come from malformed static data.
    pub fn from_parallel<S: AsRef<str>>(from: &[char], to: &[S]) -> Self
    {
        assert_eq!(from.len(), to.len(),
            "replacement table is misaligned: {} sources, {} replacements",
            from.len(), to.len());
        let mut cm = Self::new();
        for (&c, r) in from.iter().zip(to) {
            cm.insert_unique(c, r.as_ref());
        }
        cm
    }

    fn insert_unique(&mut self, c: char, rep: &str)
    {
        match self.map.entry(c) {
            Occupied(_) => panic!("duplicate source character {:?} in replacement table", c),
            Vacant(ent) => { ent.insert(rep.to_string()); }
        }
    }

    /// Adds or overrides a single entry.
    pub fn set(&mut self, c: char, rep: &str)
    {
        self.map.insert(c, rep.to_string());
    }

    pub fn get(&self, c: char) -> Option<&str>
    {
        self.map.get(&c).map(String::as_str)
    }

    pub fn len(&self) -> usize { self.map.len() }

    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item=(char,&str)>
    {
        self.map.iter().map(|(&c,r)| (c, r.as_str()))
    }

    /// Replaces every mapped character of `s` in a single pass.
    pub fn apply(&self, s: &str) -> String
    {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match self.map.get(&c) {
                Some(rep) => out.push_str(rep),
                None => out.push(c)
            }
        }
        out
    }
}

/// Replaces each needle with the replacement at the same index.
///
/// When every needle is a single character the substitution is done in one
/// pass through a `CharMap`, so a replacement is never itself rescanned.
/// Otherwise the needles are applied one after another, each one replacing
/// all non-overlapping occurrences in the output of the previous step.
/// Needles without a replacement at their index are deleted, and empty
/// needles are ignored.
pub fn replace_each<N: AsRef<str>, R: AsRef<str>>(search: &[N], replace: &[R], subject: &str) -> String
{
    let rep_at = |i: usize| replace.get(i).map_or("", |r| r.as_ref());
    let single: Option<Vec<char>> = search.iter()
        .map(|n| single_char(n.as_ref()))
        .collect();
    match single {
        Some(chars) => {
            let mut cm = CharMap::new();
            // the first occurrence of a needle wins, like the sequential path
            for (i, &c) in chars.iter().enumerate().rev() {
                cm.set(c, rep_at(i));
            }
            cm.apply(subject)
        }
        None => {
            let mut out = subject.to_string();
            for (i, n) in search.iter().enumerate() {
                let n = n.as_ref();
                if n.is_empty() || !out.contains(n) { continue; }
                out = out.replace(n, rep_at(i));
            }
            out
        }
    }
}

/// Replaces every needle with the same replacement string.
pub fn replace_with<N: AsRef<str>>(search: &[N], replacement: &str, subject: &str) -> String
{
    let reps = vec![replacement; search.len()];
    replace_each(search, &reps[..], subject)
}

fn single_char(s: &str) -> Option<char>
{
    let mut it = s.chars();
    match (it.next(), it.next()) {
        (Some(c), None) => Some(c),
        _ => None
    }
}

/// Strips characters contained in `chars` from both ends of `s`.
///
/// With `None` the set is `DEFAULT_TRIM_CHARS`. An empty set leaves the
/// string untouched. `a..z` in the set stands for every character from `a`
/// to `z` inclusive; a range whose ends are out of order is read literally.
pub fn trim<'a>(s: &'a str, chars: Option<&str>) -> &'a str
{
    let set = trim_set(chars.unwrap_or(DEFAULT_TRIM_CHARS));
    s.trim_matches(|c: char| set.iter().any(|&(lo, hi)| lo <= c && c <= hi))
}

/// Expands a trim character list into inclusive ranges.
fn trim_set(chars: &str) -> Vec<(char,char)>
{
    let cs: Vec<char> = chars.chars().collect();
    let mut set = Vec::with_capacity(cs.len());
    let mut i = 0;
    while i < cs.len() {
        match cs.get(i..i + 4) {
            Some(&[lo, '.', '.', hi]) if lo <= hi => {
                set.push((lo, hi));
                i += 4;
            }
            _ => {
                set.push((cs[i], cs[i]));
                i += 1;
            }
        }
    }
    set
}

/// Collapses every run of two or more ASCII spaces into one.
pub fn collapse_spaces(s: &str) -> String
{
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for c in s.chars() {
        if c == ' ' {
            if prev_space { continue; }
            prev_space = true;
        } else {
            prev_space = false;
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_char_needles() {
        assert_eq!(replace_each(&["a"], &["b"], "a"), "b");
        assert_eq!(replace_each(&["H", "W"], &["h", "w"], "Helloworld"), "helloworld");
        assert_eq!(replace_each(&["H", "e", "W"], &["h", "x", "w"], "Hello World"), "hxllo world");
        // one pass: the output of a substitution is not substituted again
        assert_eq!(replace_each(&["a", "b"], &["b", "c"], "ab"), "bc");
    }

    #[test]
    fn multi_char_needles_apply_in_order() {
        assert_eq!(replace_each(&["apple"], &["banana"], "I love apple."), "I love banana.");
        assert_eq!(replace_each(&["pineapple"], &["banana"], "I love apple."), "I love apple.");
        assert_eq!(replace_each(&["ab", "bc"], &["bc", "x"], "ab"), "x");
        assert_eq!(replace_each(&["mc", "x"], &["mc "], "mcxmc"), "mc mc ");
        assert_eq!(replace_each(&["", "lo"], &["z", "LO"], "hello"), "helLO");
    }

    #[test]
    fn shared_replacement() {
        assert_eq!(replace_with(&["{", "}", "/"], " ", "{a/b}"), " a b ");
        assert_eq!(replace_with(&["  "], " ", "a   b"), "a  b");
    }

    #[test]
    fn trim_sets() {
        assert_eq!(trim(" \t\n\rhello \t\n\r", None), "hello");
        assert_eq!(trim("[hello]", Some("[]")), "hello");
        assert_eq!(trim("abcXYZabc", Some("abc")), "XYZ");
        assert_eq!(trim("   hello world   ", Some("")), "   hello world   ");
        assert_eq!(trim("\u{00A0}\u{2000}content\u{2000}\u{00A0}", Some("\u{00A0}\u{2000}")), "content");
        assert_eq!(trim(".*+hello+*.", Some(".*+")), "hello");
        assert_eq!(trim("xyz middle content abc", Some("abcdefghijklmnopqrstuvwxyz")), " middle content ");
        assert_eq!(trim(" \t\n\r\0\x0B", None), "");
    }

    #[test]
    fn trim_ranges() {
        assert_eq!(trim("0123hello4567", Some("0..9")), "hello");
        assert_eq!(trim("abcHELLOxyz", Some("a..z")), "HELLO");
        assert_eq!(trim("[0a]b9", Some("[]0..9a")), "b");
        assert_eq!(trim("..hello..", Some(".")), "hello");
        assert_eq!(trim("..hello..", Some("..")), "hello");
        // out of order ends are plain characters
        assert_eq!(trim("z.b", Some("z..a")), "b");
        assert_eq!(trim("a..", Some("a..")), "");
        assert_eq!(trim("hello", Some("a..z")), "");
    }

    #[test]
    fn collapse() {
        assert_eq!(collapse_spaces("a    b  c d"), "a b c d");
        assert_eq!(collapse_spaces("a\t\tb"), "a\t\tb");
    }

    #[test]
    #[should_panic(expected = "misaligned")]
    fn misaligned_table_panics() {
        CharMap::from_parallel(&['a', 'b'], &["x"]);
    }

    #[test]
    #[should_panic(expected = "duplicate")]
    fn duplicate_source_panics() {
        CharMap::from_parallel(&['a', 'a'], &["x", "y"]);
    }
}
