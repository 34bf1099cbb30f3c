//! Two-word combination generation.
//!
//! The output of [`generate`] is the (optionally deduplicated) input words in
//! their original order, followed by every ordered pair `first + second`.
//! Pairs are enumerated outer word first, both loops in input order, so
//! `["a", "b"]` yields `a b aa ab ba bb`.

use std::borrow::Cow;
use std::collections::HashSet;

/// Knobs for [`generate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Skip pairs whose two words are equal.
    pub no_self: bool,
    /// Keep only the first occurrence of each input word.
    pub no_duplicate: bool,
    /// Maximum number of combinations to emit. The original words are not
    /// counted against it.
    pub limit: Option<usize>,
}

/// Build the full output list for `words`.
pub fn generate(words: &[String], options: &Options) -> Vec<String> {
    let words: Cow<'_, [String]> = if options.no_duplicate {
        Cow::Owned(dedupe(words))
    } else {
        Cow::Borrowed(words)
    };

    let pairs = words.len().saturating_mul(words.len());
    let expected = options.limit.map_or(pairs, |limit| limit.min(pairs));

    let mut output = Vec::with_capacity(words.len().saturating_add(expected));
    output.extend_from_slice(&words);

    let combos = combinations(&words, options.no_self);
    match options.limit {
        Some(limit) => output.extend(combos.take(limit)),
        None => output.extend(combos),
    }

    tracing::debug!(
        "Generated {} combinations from {} words",
        output.len() - words.len(),
        words.len()
    );

    output
}

/// Remove repeated words, keeping the first occurrence of each.
pub fn dedupe(words: &[String]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(words.len());
    words
        .iter()
        .filter(|word| seen.insert(word.as_str()))
        .cloned()
        .collect()
}

/// Lazily enumerate every ordered pair of `words` as a concatenation.
///
/// With `no_self`, pairs of equal words are skipped. Equality is by value, so
/// a repeated word is also never paired with its other copies.
pub fn combinations(words: &[String], no_self: bool) -> impl Iterator<Item = String> + '_ {
    words.iter().flat_map(move |first| {
        words
            .iter()
            .filter(move |&second| !(no_self && first == second))
            .map(move |second| [first.as_str(), second.as_str()].concat())
    })
}
