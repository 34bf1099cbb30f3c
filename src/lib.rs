//! `combos` - generate every combination of two words from a word list.
//!
//! The pipeline is [`read_words`] → [`generate`] → [`write_words`], driven by
//! a [`config::Config`] parsed from the command line.

pub mod combine;
pub mod config;
pub mod error;
pub mod output;
pub mod wordlist;

pub use combine::{generate, Options};
pub use output::write_words;
pub use wordlist::read_words;
