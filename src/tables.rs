//! Static character data shared by the accent stripper, the escape decoder
//! and the search-key normalizer.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::replace::CharMap;

/// Accented and special characters replaced by `strip_accents`.
///
/// Parallel to `ACCENTS_TO`: the character at index `i` is replaced by the
/// string at the same index. Upper and lower case forms have separate entries
/// so the replacement keeps the case of the source.
pub static ACCENTS_FROM: &[char] = &[
    '*', '?', '’', '.', ',', '“', '”', 'À', 'Á', 'Â', 'Ã', 'Ä',
    'Å', 'Æ', 'Ç', 'È', 'É', 'Ê', 'Ë', 'Ì', 'Í', 'Î', 'Ï', 'Ð',
    'Ñ', 'Ò', 'Ó', 'Ô', 'Õ', 'Ö', 'Ø', 'Ù', 'Ú', 'Û', 'Ü', 'Ý',
    'ß', 'à', 'á', 'â', 'ã', 'ä', 'å', 'æ', 'ç', 'è', 'é', 'ê',
    'ë', 'ì', 'í', 'î', 'ï', 'ñ', 'ò', 'ó', 'ô', 'õ', 'ö', 'ø',
    'ù', 'ú', 'û', 'ü', 'ý', 'ÿ', 'Ā', 'ā', 'Ă', 'ă', 'Ą', 'ą',
    'Ć', 'ć', 'Ĉ', 'ĉ', 'Ċ', 'ċ', 'Č', 'č', 'Ď', 'ď', 'Đ', 'đ',
    'Ē', 'ē', 'Ĕ', 'ĕ', 'Ė', 'ė', 'Ę', 'ę', 'Ě', 'ě', 'Ĝ', 'ĝ',
    'Ğ', 'ğ', 'Ġ', 'ġ', 'Ģ', 'ģ', 'Ĥ', 'ĥ', 'Ħ', 'ħ', 'Ĩ', 'ĩ',
    'Ī', 'ī', 'Ĭ', 'ĭ', 'Į', 'į', 'İ', 'ı', 'Ĳ', 'ĳ', 'Ĵ', 'ĵ',
    'Ķ', 'ķ', 'Ĺ', 'ĺ', 'Ļ', 'ļ', 'Ľ', 'ľ', 'Ŀ', 'ŀ', 'Ł', 'ł',
    'Ń', 'ń', 'Ņ', 'ņ', 'Ň', 'ň', 'ŉ', 'Ō', 'ō', 'Ŏ', 'ŏ', 'Ő',
    'ő', 'Œ', 'œ', 'Ŕ', 'ŕ', 'Ŗ', 'ŗ', 'Ř', 'ř', 'Ś', 'ś', 'Ŝ',
    'ŝ', 'Ş', 'ş', 'Š', 'š', 'Ţ', 'ţ', 'Ť', 'ť', 'Ŧ', 'ŧ', 'Ũ',
    'ũ', 'Ū', 'ū', 'Ŭ', 'ŭ', 'Ů', 'ů', 'Ű', 'ű', 'Ų', 'ų', 'Ŵ',
    'ŵ', 'Ŷ', 'ŷ', 'Ÿ', 'Ź', 'ź', 'Ż', 'ż', 'Ž', 'ž', 'ſ', 'ƒ',
    'Ơ', 'ơ', 'Ư', 'ư', 'Ǎ', 'ǎ', 'Ǐ', 'ǐ', 'Ǒ', 'ǒ', 'Ǔ', 'ǔ',
    'Ǖ', 'ǖ', 'Ǘ', 'ǘ', 'Ǚ', 'ǚ', 'Ǜ', 'ǜ', 'Ǻ', 'ǻ', 'Ǽ', 'ǽ',
    'Ǿ', 'ǿ', 'Ά', 'ά', 'Έ', 'έ', 'Ό', 'ό', 'Ώ', 'ώ', 'Ί', 'ί',
    'ϊ', 'ΐ', 'Ύ', 'ύ', 'ϋ', 'ΰ', 'Ή', 'ή',
];

/// Replacements for `ACCENTS_FROM`, index for index.
pub static ACCENTS_TO: &[&str] = &[
    " ", " ", "'", " ", ", ", "", "", "A", "A", "A", "A", "A",
    "A", "AE", "C", "E", "E", "E", "E", "I", "I", "I", "I", "D",
    "N", "O", "O", "O", "O", "O", "O", "U", "U", "U", "U", "Y",
    "s", "a", "a", "a", "a", "a", "a", "ae", "c", "e", "e", "e",
    "e", "i", "i", "i", "i", "n", "o", "o", "o", "o", "o", "o",
    "u", "u", "u", "u", "y", "y", "A", "a", "A", "a", "A", "a",
    "C", "c", "C", "c", "C", "c", "C", "c", "D", "d", "D", "d",
    "E", "e", "E", "e", "E", "e", "E", "e", "E", "e", "G", "g",
    "G", "g", "G", "g", "G", "g", "H", "h", "H", "h", "I", "i",
    "I", "i", "I", "i", "I", "i", "I", "i", "IJ", "ij", "J", "j",
    "K", "k", "L", "l", "L", "l", "L", "l", "L", "l", "l", "l",
    "N", "n", "N", "n", "N", "n", "n", "O", "o", "O", "o", "O",
    "o", "OE", "oe", "R", "r", "R", "r", "R", "r", "S", "s", "S",
    "s", "S", "s", "S", "s", "T", "t", "T", "t", "T", "t", "U",
    "u", "U", "u", "U", "u", "U", "u", "U", "u", "U", "u", "W",
    "w", "Y", "y", "Y", "Z", "z", "Z", "z", "Z", "z", "s", "f",
    "O", "o", "U", "u", "A", "a", "I", "i", "O", "o", "U", "u",
    "U", "u", "U", "u", "U", "u", "U", "u", "A", "a", "AE", "ae",
    "O", "o", "Α", "α", "Ε", "ε", "Ο", "ο", "Ω", "ω", "Ι", "ι",
    "ι", "ι", "Υ", "υ", "υ", "υ", "Η", "η",
];

/// Characters the search-key normalizer turns into a space.
pub static SEARCH_SEPARATORS: &[char] = &[
    '{', '}', '(', ')', '/', '\\', '@', ':', '"', '?', ',', '.', '_',
];

/// Six character `\u00XX` escape tokens and the character each one stands for.
///
/// Only lowercase hex digits are recognised.
pub static ESCAPES: &[(&str, char)] = &[
    ("\\u00c0", 'À'), ("\\u00c1", 'Á'), ("\\u00c2", 'Â'), ("\\u00c3", 'Ã'),
    ("\\u00c4", 'Ä'), ("\\u00c5", 'Å'), ("\\u00c6", 'Æ'), ("\\u00c7", 'Ç'),
    ("\\u00c8", 'È'), ("\\u00c9", 'É'), ("\\u00ca", 'Ê'), ("\\u00cb", 'Ë'),
    ("\\u00cc", 'Ì'), ("\\u00cd", 'Í'), ("\\u00ce", 'Î'), ("\\u00cf", 'Ï'),
    ("\\u00d1", 'Ñ'), ("\\u00d2", 'Ò'), ("\\u00d3", 'Ó'), ("\\u00d4", 'Ô'),
    ("\\u00d5", 'Õ'), ("\\u00d6", 'Ö'), ("\\u00d8", 'Ø'), ("\\u00d9", 'Ù'),
    ("\\u00da", 'Ú'), ("\\u00db", 'Û'), ("\\u00dc", 'Ü'), ("\\u00dd", 'Ý'),
    ("\\u00df", 'ß'), ("\\u00e0", 'à'), ("\\u00e1", 'á'), ("\\u00e2", 'â'),
    ("\\u00e3", 'ã'), ("\\u00e4", 'ä'), ("\\u00e5", 'å'), ("\\u00e6", 'æ'),
    ("\\u00e7", 'ç'), ("\\u00e8", 'è'), ("\\u00e9", 'é'), ("\\u00ea", 'ê'),
    ("\\u00eb", 'ë'), ("\\u00ec", 'ì'), ("\\u00ed", 'í'), ("\\u00ee", 'î'),
    ("\\u00ef", 'ï'), ("\\u00f0", 'ð'), ("\\u00f1", 'ñ'), ("\\u00f2", 'ò'),
    ("\\u00f3", 'ó'), ("\\u00f4", 'ô'), ("\\u00f5", 'õ'), ("\\u00f6", 'ö'),
    ("\\u00f8", 'ø'), ("\\u00f9", 'ù'), ("\\u00fa", 'ú'), ("\\u00fb", 'û'),
    ("\\u00fc", 'ü'), ("\\u00fd", 'ý'), ("\\u00ff", 'ÿ'),
];

/// Decomposition table used by `strip_accents`.
pub static ACCENTS: Lazy<CharMap> = Lazy::new(|| CharMap::from_parallel(ACCENTS_FROM, ACCENTS_TO));

/// Search-key table: the decomposition table with lowercase replacements,
/// overlaid with the separator characters.
pub static SEARCH: Lazy<CharMap> = Lazy::new(|| {
    let lowered: Vec<String> = ACCENTS_TO.iter().map(|r| r.to_lowercase()).collect();
    let mut cm = CharMap::from_parallel(ACCENTS_FROM, &lowered[..]);
    for &c in SEARCH_SEPARATORS {
        cm.set(c, " ");
    }
    cm
});

/// Escape tokens keyed by their literal text.
pub static ESCAPE_MAP: Lazy<HashMap<&'static str, char>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(ESCAPES.len());
    for &(token, c) in ESCAPES {
        let prev = map.insert(token, c);
        assert!(prev.is_none(), "duplicate escape token {}", token);
    }
    map
});
