//! Input parsing and validation for interactive commands.
//!
//! Hold selections arrive as free text from stdin and are turned into the
//! five-bit hold mask the engine expects. Card lists arrive as comma-separated
//! command-line values.

use videopoker_engine::hand::HAND_SIZE;
use videopoker_engine::round::HOLD_ALL;

/// Result of parsing one line of hold input.
#[derive(Debug, PartialEq)]
pub enum HoldInput {
    /// Positions to keep, bit i = position i + 1
    Hold(u8),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse a hold selection.
///
/// Accepts the following input formats (case-insensitive):
/// - 1-based positions separated by spaces or commas: "1 3 5", "2,4"
/// - "all" → hold every card
/// - "none", "-" or an empty line → draw five new cards
/// - "q" or "quit" → Quit command
///
/// # Example
///
/// ```rust
/// # use videopoker_cli::validation::{parse_hold_input, HoldInput};
/// assert_eq!(parse_hold_input("1 3 5"), HoldInput::Hold(0b10101));
/// assert_eq!(parse_hold_input("all"), HoldInput::Hold(0b11111));
/// assert_eq!(parse_hold_input(""), HoldInput::Hold(0));
/// assert_eq!(parse_hold_input("q"), HoldInput::Quit);
///
/// match parse_hold_input("6") {
///     HoldInput::Invalid(msg) => assert!(msg.contains("1-5")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_hold_input(input: &str) -> HoldInput {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "q" | "quit" => return HoldInput::Quit,
        "all" => return HoldInput::Hold(HOLD_ALL),
        "" | "none" | "-" => return HoldInput::Hold(0),
        _ => {}
    }

    let mut mask = 0u8;
    for part in input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
    {
        match part.parse::<usize>() {
            Ok(pos) if (1..=HAND_SIZE).contains(&pos) => {
                let bit = 1u8 << (pos - 1);
                if mask & bit != 0 {
                    return HoldInput::Invalid(format!("Position {} listed twice", pos));
                }
                mask |= bit;
            }
            _ => {
                return HoldInput::Invalid(format!(
                    "Unrecognized position '{}'. Enter positions 1-5 (e.g. '1 3 5'), all, none or q",
                    part
                ));
            }
        }
    }
    HoldInput::Hold(mask)
}

/// Split a comma-separated list of card symbols, trimming each entry.
///
/// Empty entries are kept so that the hand validator reports the exact length.
///
/// ```rust
/// # use videopoker_cli::validation::parse_symbol_list;
/// assert_eq!(parse_symbol_list("S, H,C"), vec!["S", "H", "C"]);
/// assert_eq!(parse_symbol_list("10,J,,K"), vec!["10", "J", "", "K"]);
/// assert!(parse_symbol_list("").is_empty());
/// ```
pub fn parse_symbol_list(input: &str) -> Vec<String> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    input.split(',').map(|s| s.trim().to_string()).collect()
}

/// Validate the number of rounds or hands requested.
pub fn validate_count(name: &str, count: u64) -> Result<(), String> {
    if count == 0 {
        return Err(format!("{} must be >= 1", name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_accept_commas_and_spaces() {
        assert_eq!(parse_hold_input("2,4"), HoldInput::Hold(0b01010));
        assert_eq!(parse_hold_input(" 5  1 "), HoldInput::Hold(0b10001));
        assert_eq!(parse_hold_input("1, 2,3"), HoldInput::Hold(0b00111));
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(parse_hold_input("ALL"), HoldInput::Hold(HOLD_ALL));
        assert_eq!(parse_hold_input("None"), HoldInput::Hold(0));
        assert_eq!(parse_hold_input("QUIT"), HoldInput::Quit);
    }

    #[test]
    fn out_of_range_and_garbage_are_invalid() {
        for bad in ["0", "6", "x", "1 2 hold", "-1"] {
            assert!(
                matches!(parse_hold_input(bad), HoldInput::Invalid(_)),
                "{} should be invalid",
                bad
            );
        }
    }

    #[test]
    fn repeated_position_is_invalid() {
        match parse_hold_input("3 3") {
            HoldInput::Invalid(msg) => assert!(msg.contains("twice")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn zero_count_is_rejected() {
        assert!(validate_count("hands", 0).is_err());
        assert!(validate_count("rounds", 3).is_ok());
    }
}
