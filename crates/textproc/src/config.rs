//! Fixed constants for the two text-normalization branches.
//!
//! Everything here is a compile-time constant or a lazily-built static —
//! there is no runtime configuration object for this crate, because the
//! pipeline itself is specified as fixed and versionless: same input,
//! same output, forever.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Leading token stripped at the very start of input, anchored.
pub const LEADING_TOKEN: &str = "Erudite";

/// Replacement text for the literal token `erudite` after cleaning.
pub const ERUDITE_REPLACEMENT: &str = "система";

/// Replacement text for any detected URL.
pub const URL_REPLACEMENT: &str = "веб-интерфейс";

/// Minimum length of a Latin run considered noise and dropped in both branches.
pub const LATIN_NOISE_MIN_LEN: usize = 8;

/// Currency symbols stripped alongside digits.
pub const CURRENCY_SYMBOLS: &[char] = &['₽', '$', '€', '£', '¥'];

/// Canonical Russian stopword list, extended per the specification with a
/// handful of greetings and connector words. `не` is explicitly kept: it is
/// a negation particle and dropping it would invert the meaning of a ticket
/// body ("не отвечает" vs "отвечает").
const BASE_STOPWORDS: &[&str] = &[
    "и", "в", "во", "не", "что", "он", "на", "я", "с", "со", "как", "а", "то", "все", "она",
    "так", "его", "но", "да", "ты", "к", "у", "же", "вы", "за", "бы", "по", "только", "ее", "мне",
    "было", "вот", "от", "меня", "еще", "нет", "о", "из", "ему", "теперь", "когда", "даже", "ну",
    "вдруг", "ли", "если", "уже", "или", "ни", "быть", "был", "него", "до", "вас", "нибудь",
    "опять", "уж", "вам", "сказал", "ведь", "там", "потом", "себя", "ничего", "ей", "может",
    "они", "тут", "где", "есть", "надо", "ней", "для", "мы", "тебя", "их", "чем", "была", "сам",
    "чтоб", "без", "будто", "чего", "раз", "тоже", "себе", "под", "будет", "ж", "тогда", "кто",
    "этот", "того", "потому", "этого", "какой", "совсем", "ним", "здесь", "этом", "один", "почти",
    "мой", "тем", "чтобы", "нее", "этой", "перед", "иногда", "лучше", "чуть", "том", "нельзя",
    "такой", "им", "более", "всегда", "конечно", "всю", "между",
];

/// Greeting and connector words appended per §6 of the specification, on top
/// of the canonical list above.
const EXTRA_STOPWORDS: &[&str] = &[
    "добрый", "день", "вечер", "привет", "здравствуйте", "запрос", "оригинальный",
];

/// The final stopword set used by the BM25 branch. Built once, shared across
/// calls; `не` is present in neither list's removal semantics since callers
/// only ever call [`is_stopword`], which is wired to always return `false`
/// for it (see module docs).
pub static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut set: HashSet<&'static str> = BASE_STOPWORDS.iter().copied().collect();
    set.extend(EXTRA_STOPWORDS.iter().copied());
    set.remove("не");
    set
});

/// True if `token` should be dropped by the BM25 branch's stopword pass.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

pub static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bhttps?://\S+|\bwww\.\S+").expect("static URL regex is valid")
});

pub static DIGIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]").expect("static digit regex is valid"));

pub static NON_CANONICAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^а-яА-Я a-zA-Z0-9\s-]").expect("static canonical-charset regex is valid")
});

pub static LATIN_NOISE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"[A-Za-z]{{{LATIN_NOISE_MIN_LEN},}}"))
        .expect("static latin-noise regex is valid")
});

pub static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("static whitespace regex is valid"));
