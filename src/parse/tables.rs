//! Lookup tables for duration names and spelled-out counts

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::models::Beats;

/// Spelled-out multipliers accepted in "seven sixteenth"-style durations
pub const NUMBER_WORDS: [&str; 10] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

const WHOLE: Beats = Beats::new_raw(4, 1);
const HALF: Beats = Beats::new_raw(2, 1);
const QUARTER: Beats = Beats::new_raw(1, 1);
const EIGHTH: Beats = Beats::new_raw(1, 2);
const SIXTEENTH: Beats = Beats::new_raw(1, 4);
const THIRTY_SECOND: Beats = Beats::new_raw(1, 8);
const ZERO: Beats = Beats::new_raw(0, 1);

/// Note names to quarter-note beats. Dotted values are 1.5x the plain value.
static DURATION_TABLE: Lazy<HashMap<&'static str, Beats>> = Lazy::new(|| {
    let plain = [
        ("whole", WHOLE),
        ("half", HALF),
        ("quarter", QUARTER),
        ("eighth", EIGHTH),
        ("sixteenth", SIXTEENTH),
        ("thirty-second", THIRTY_SECOND),
        ("thirty_second", THIRTY_SECOND),
        ("thirty second", THIRTY_SECOND),
    ];
    let dotted = [
        ("dotted whole", WHOLE),
        ("dotted half", HALF),
        ("dotted quarter", QUARTER),
        ("dotted eighth", EIGHTH),
        ("dotted sixteenth", SIXTEENTH),
        ("dotted thirty-second", THIRTY_SECOND),
        ("dotted thirty_second", THIRTY_SECOND),
        ("dotted thirty second", THIRTY_SECOND),
    ];

    let mut table: HashMap<&'static str, Beats> = plain.into_iter().collect();
    table.extend(
        dotted
            .into_iter()
            .map(|(name, base)| (name, base * Beats::new(3, 2))),
    );
    table.insert("rest", ZERO);
    table
});

/// Value of a spelled-out number word ("seven" -> 7)
pub fn number_word(word: &str) -> Option<u32> {
    NUMBER_WORDS
        .iter()
        .position(|w| *w == word)
        .map(|idx| idx as u32 + 1)
}

/// Map known misspellings and plurals onto table names
pub fn normalize_unit(unit: &str) -> &str {
    match unit {
        "eigth" | "eigths" | "eighths" => "eighth",
        "sixteenths" => "sixteenth",
        "quarters" => "quarter",
        "halves" => "half",
        other => other,
    }
}

/// Look up an already lower-cased name
pub fn lookup(name: &str) -> Option<Beats> {
    DURATION_TABLE.get(normalize_unit(name.trim())).copied()
}
