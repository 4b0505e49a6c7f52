// SPDX-FileCopyrightText: 2026 Nivaran Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic complaint-text quality validation.
//!
//! Rejects text that is too short, gibberish, spam-like, or degenerate
//! before any paid classification call is made. Zero cost, zero network,
//! zero latency: classification spend is only incurred for plausible
//! real complaints.

use nivaran_core::Language;

/// Exact spam strings (whole normalized text, case-insensitive).
const SPAM_EXACT: &[&str] = &["test", "testing"];

/// Minimum normalized length in characters.
const MIN_LENGTH: usize = 10;

/// Minimum whitespace-separated word count.
const MIN_WORDS: usize = 3;

/// A run of the same character this long marks the text as gibberish.
const MAX_CHAR_RUN: usize = 5;

/// Validate complaint text before classification.
///
/// Checks run in order and short-circuit on the first failure. Returns the
/// rejection reason shown verbatim to the submitter. Never panics, performs
/// no I/O.
pub fn validate(text: &str, language: Language) -> Result<(), &'static str> {
    let normalized = text.trim().to_lowercase();

    // 1. Length.
    if normalized.chars().count() < MIN_LENGTH {
        return Err("complaint text is too short (minimum 10 characters)");
    }

    // 2. Word count.
    let words: Vec<&str> = normalized.split_whitespace().collect();
    if words.len() < MIN_WORDS {
        return Err("complaint must contain at least 3 words");
    }

    // 3. Character-repetition gibberish.
    if has_char_run(&normalized, MAX_CHAR_RUN) {
        return Err("complaint contains invalid text");
    }

    // 4. Alphabetic-content ratio: Latin letters plus the Malayalam block
    // must make up at least half of the non-whitespace characters.
    let non_ws: Vec<char> = normalized.chars().filter(|c| !c.is_whitespace()).collect();
    let alphabetic = non_ws
        .iter()
        .filter(|c| c.is_ascii_alphabetic() || is_malayalam(**c))
        .count();
    if alphabetic * 2 < non_ws.len() {
        return Err("complaint must contain meaningful text");
    }

    // 5. Vowel-bearing word ratio. Malayalam text carries no Latin vowels,
    // so this check only applies to Latin-script submissions.
    if language != Language::Ml {
        let candidates: Vec<&&str> = words.iter().filter(|w| w.chars().count() >= 2).collect();
        if !candidates.is_empty() {
            let with_vowel = candidates
                .iter()
                .filter(|w| w.chars().any(|c| "aeiou".contains(c)))
                .count();
            if with_vowel * 2 < candidates.len() {
                return Err("complaint text does not appear meaningful");
            }
        }
    }

    // 6. Word-frequency dominance: one token carrying >40% of the text.
    if dominant_token_share_exceeded(&words) {
        return Err("complaint contains too many repeated words");
    }

    // 7. Consecutive repetition.
    if words.windows(2).any(|pair| pair[0] == pair[1]) {
        return Err("complaint contains repeated words");
    }

    // 8. Exact-match spam patterns.
    let condensed: String = normalized.split_whitespace().collect();
    if SPAM_EXACT.contains(&normalized.as_str())
        || is_repeated_unit(&condensed, 1)
        || is_repeated_unit(&condensed, 2)
    {
        return Err("complaint text has an invalid format");
    }

    Ok(())
}

fn is_malayalam(c: char) -> bool {
    ('\u{0D00}'..='\u{0D7F}').contains(&c)
}

/// True if any character repeats `run` or more times consecutively.
fn has_char_run(text: &str, run: usize) -> bool {
    let mut count = 0;
    let mut prev = None;
    for c in text.chars() {
        if Some(c) == prev {
            count += 1;
            if count >= run {
                return true;
            }
        } else {
            prev = Some(c);
            count = 1;
        }
    }
    false
}

/// True if any single token (longer than one char) accounts for more than
/// 40% of all tokens. Only meaningful for texts of three or more tokens.
fn dominant_token_share_exceeded(words: &[&str]) -> bool {
    if words.len() < MIN_WORDS {
        return false;
    }
    for word in words {
        if word.chars().count() <= 1 {
            continue;
        }
        let occurrences = words.iter().filter(|w| *w == word).count();
        // strictly greater than 40%
        if occurrences * 5 > words.len() * 2 {
            return true;
        }
    }
    false
}

/// True if `text` is a unit of `unit_len` characters repeated two or more
/// times, e.g. "ababab" for unit length 2.
fn is_repeated_unit(text: &str, unit_len: usize) -> bool {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() < unit_len * 2 || chars.len() % unit_len != 0 {
        return false;
    }
    let unit = &chars[..unit_len];
    chars.chunks(unit_len).all(|chunk| chunk == unit)
}
