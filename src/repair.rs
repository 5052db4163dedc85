//! Post-processing for known translation-model quirks.
//!
//! The one quirk observed in practice: the `{year}` placeholder inside the
//! footer copyright gets translated away or replaced with a literal year.
//! The repair is a heuristic, not a guarantee of grammatical correctness;
//! it restores the placeholder, nothing more.

use regex::Regex;
use std::sync::OnceLock;

use crate::content::YEAR_TOKEN;
use crate::extract::TranslatableContent;

static FOUR_DIGIT_REGEX: OnceLock<Regex> = OnceLock::new();

/// Restore the `{year}` placeholder in the translated copyright string.
///
/// Pure and total. In order:
/// 1. Token already present: return the view unchanged.
/// 2. A 4-digit numeral is present (the model substituted a literal year):
///    replace its first occurrence with the token.
/// 3. Otherwise append `" {year}"`.
/// 4. Safety net: if the token is somehow still absent, fall back to the
///    original untranslated copyright string.
pub fn repair_copyright_placeholder(
    mut view: TranslatableContent,
    original_copyright: &str,
) -> TranslatableContent {
    let copyright = &view.footer.copyright;
    if copyright.contains(YEAR_TOKEN) {
        return view;
    }

    let regex = FOUR_DIGIT_REGEX.get_or_init(|| Regex::new(r"\d{4}").unwrap());
    let repaired = if regex.is_match(copyright) {
        regex.replace(copyright, YEAR_TOKEN).into_owned()
    } else {
        format!("{} {}", copyright, YEAR_TOKEN)
    };

    view.footer.copyright = if repaired.contains(YEAR_TOKEN) {
        repaired
    } else {
        original_copyright.to_string()
    };
    view
}
