use crate::replace::collapse_spaces;
use crate::tables::ACCENTS;

/// Replaces accented and special characters with plain equivalents.
///
/// Every character found in the decomposition table is swapped for its
/// replacement, which keeps the case of the source (`É` gives `E`, `é` gives
/// `e`). A few punctuation marks become spaces or disappear, so runs of
/// spaces are collapsed afterwards. Anything else is copied as is.
pub fn strip_accents(s: &str) -> String
{
    collapse_spaces(&ACCENTS.apply(s))
}
