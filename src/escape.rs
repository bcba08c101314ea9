use crate::tables::ESCAPE_MAP;

const TOKEN_LEN: usize = 6;

/// Decodes literal `\u00XX` escape tokens into the characters they name.
///
/// Tokens that are not in the escape table (uppercase hex, other code points,
/// truncated tokens) are left exactly as they were.
pub fn decode_escapes(s: &str) -> String
{
    if !s.contains("\\u") {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find("\\u") {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match tail.get(..TOKEN_LEN).and_then(|tok| ESCAPE_MAP.get(tok)) {
            Some(&c) => {
                out.push(c);
                rest = &tail[TOKEN_LEN..];
            }
            None => {
                out.push_str("\\u");
                rest = &tail[2..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Like `decode_escapes`, but a missing input decodes to the empty string.
pub fn decode_escapes_opt(s: Option<&str>) -> String
{
    s.map(decode_escapes).unwrap_or_default()
}
