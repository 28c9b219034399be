//! The shared cleaning pass both branches start from.
//!
//! §4.1 of the specification: strip a leading `Erudite` token, lowercase,
//! drop emoji, replace URLs, drop digits and currency symbols, preserve
//! other punctuation, then replace the bare token `erudite` with `система`.

use crate::config::{CURRENCY_SYMBOLS, DIGIT_RE, ERUDITE_REPLACEMENT, LEADING_TOKEN, URL_REPLACEMENT, URL_RE};

/// Run the shared cleaning chain. Pure; empty input yields empty output.
pub(crate) fn clean(input: &str) -> String {
    let stripped = strip_leading_token(input, LEADING_TOKEN);
    let lowered = stripped.to_lowercase();
    let no_emoji = strip_emoji(&lowered);
    let no_urls = URL_RE.replace_all(&no_emoji, URL_REPLACEMENT).into_owned();
    let no_digits_currency = strip_digits_and_currency(&no_urls);
    replace_erudite(&no_digits_currency)
}

/// Remove `token` from the start of `text`, anchored — a mid-string
/// occurrence is left untouched.
fn strip_leading_token(text: &str, token: &str) -> &str {
    text.strip_prefix(token).unwrap_or(text)
}

fn strip_emoji(text: &str) -> String {
    text.chars()
        .filter(|ch| emojis::get(&ch.to_string()).is_none())
        .collect()
}

fn strip_digits_and_currency(text: &str) -> String {
    let without_digits = DIGIT_RE.replace_all(text, "");
    without_digits
        .chars()
        .filter(|ch| !CURRENCY_SYMBOLS.contains(ch))
        .collect()
}

/// Replace the now-lowercased bare token `erudite` with `система`, wherever
/// it appears (not just at the start — the leading-token strip above only
/// handles the capitalized, anchored form).
fn replace_erudite(text: &str) -> String {
    text.replace("erudite", ERUDITE_REPLACEMENT)
}
