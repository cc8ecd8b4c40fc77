//! Suggested answers for the context and reflection steps.
//!
//! Answers are stored as free text; these lists are what the wizard offers
//! and what the insight rules recognize.

pub const LOCATIONS: [&str; 7] = [
    "work",
    "home",
    "school",
    "public place",
    "social gathering",
    "nature",
    "other",
];

pub const MISTAKE_MINE: &str = "my mistake";
pub const MISTAKE_OTHERS: &str = "someone else's mistake";
pub const MISTAKES: [&str; 4] = [MISTAKE_MINE, MISTAKE_OTHERS, "no mistake", "not sure"];

pub const SYSTEMIC_DEFINITE: &str = "yes, definitely";
pub const SYSTEMIC_PARTIAL: &str = "partially";
pub const SYSTEMIC_ISSUES: [&str; 4] = [
    SYSTEMIC_DEFINITE,
    SYSTEMIC_PARTIAL,
    "no systemic issue",
    "not applicable",
];

pub const RESPONSIBILITY_MINE: &str = "mostly mine";
pub const RESPONSIBILITIES: [&str; 4] = [
    RESPONSIBILITY_MINE,
    "mostly others",
    "shared equally",
    "external factors",
];

/// Canonical spelling of a suggested answer, matching case-insensitively.
/// Unrecognized text is returned trimmed but otherwise untouched.
pub fn canonical(options: &[&'static str], input: &str) -> String {
    let trimmed = input.trim();
    options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(trimmed))
        .map(|option| option.to_string())
        .unwrap_or_else(|| trimmed.to_string())
}
