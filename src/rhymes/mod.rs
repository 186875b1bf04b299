//! Rhyme lookups over a cmudict-style pronunciation dictionary.
//!
//! The pieces stack leaf-first: `arpabet` classifies symbols, `phoneme` pairs a symbol with its
//! stress, `pronunciation` holds one transcription and decides rhymes, `word` groups the
//! transcriptions of one spelling, and `dictionary` parses lines and answers queries.

pub mod arpabet;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod phoneme;
pub mod prompt;
pub mod pronunciation;
pub mod server;
pub mod word;

pub use error::{Error, Result};
