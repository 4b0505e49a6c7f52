// SPDX-FileCopyrightText: 2026 Nivaran Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic keyword fallback classification.
//!
//! An ordered rule table scanned top to bottom; the first rule with any
//! matching keyword wins. Used whenever the model provider is unavailable,
//! times out, or returns output that cannot be parsed. Pure and offline,
//! so a dead provider never blocks intake.

use nivaran_core::{Department, Priority};

/// One fallback rule: substring keywords and the verdict they produce.
struct FallbackRule {
    keywords: &'static [&'static str],
    priority: Priority,
    department: Department,
}

/// Rules in precedence order. Earlier rules win: an accident report that
/// also mentions a hospital routes to Transport, not Health.
const FALLBACK_RULES: &[FallbackRule] = &[
    FallbackRule {
        keywords: &[
            "accident",
            "injured",
            "emergency",
            "അപകടം",
            "പരിക്കേറ്റ",
            "അടിയന്തിരം",
        ],
        priority: Priority::High,
        department: Department::Transport,
    },
    FallbackRule {
        keywords: &["electricity", "വൈദ്യുതി", "കറന്റ്"],
        priority: Priority::Medium,
        department: Department::Electricity,
    },
    FallbackRule {
        keywords: &["water", "വെള്ളം", "ജലം"],
        priority: Priority::Medium,
        department: Department::Water,
    },
    FallbackRule {
        keywords: &["traffic", "road", "ഗതാഗതം", "റോഡ്"],
        priority: Priority::Medium,
        department: Department::Transport,
    },
    FallbackRule {
        keywords: &["crime", "theft", "violence", "കുറ്റകൃത്യം", "മോഷണം", "അക്രമം"],
        priority: Priority::High,
        department: Department::Police,
    },
    FallbackRule {
        keywords: &["hospital", "injury", "ambulance", "ആശുപത്രി", "മുറിവ്", "ആംബുലൻസ്"],
        priority: Priority::High,
        department: Department::Health,
    },
];

/// Classify complaint text by keyword matching alone.
///
/// Case-insensitive substring match against the rule table. Text matching
/// no rule gets the conservative default: low priority, Municipality.
pub fn classify(text: &str) -> (Priority, Department) {
    let lower = text.to_lowercase();
    for rule in FALLBACK_RULES {
        if rule.keywords.iter().any(|kw| lower.contains(kw)) {
            return (rule.priority, rule.department);
        }
    }
    (Priority::Low, Department::Municipality)
}
