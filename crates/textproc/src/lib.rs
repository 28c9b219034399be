//! Deterministic text normalization for the ticket search pipeline.
//!
//! Raw ticket text feeds two independent, pure branches:
//!
//! - [`to_bm25_tokens`] — a restricted-charset, stemmed, stopword-filtered
//!   token stream for the lexical (BM25) side of the hybrid search.
//! - [`to_bert_text`] — a lighter-touch cleaned string, close to natural
//!   language, for the embedding model.
//!
//! Both branches share a common cleaning pass (see [`normalize`]): strip a
//! leading `Erudite` token, lowercase, drop emoji, replace URLs, strip
//! digits and currency symbols, then replace the bare token `erudite` with
//! `система`.
//!
//! # Core guarantee
//!
//! Same input text → identical output, forever. Neither branch performs
//! I/O, touches wall-clock time, or depends on locale.

mod bert;
mod bm25;
mod config;
mod normalize;

pub use bert::to_bert_text;
pub use bm25::to_bm25_tokens;
