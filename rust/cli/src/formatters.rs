//! Card, hand and result formatters for terminal display.
//!
//! Cards are shown with Unicode suit symbols where the terminal supports them
//! and with the input symbols (`S`, `C`, `H`, `D`) otherwise.
//!
//! ## Example
//!
//! ```rust
//! use videopoker_engine::cards::{Card, Rank, Suit};
//! use videopoker_cli::formatters::{format_card, format_result};
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "AS");
//! assert_eq!(format_result(None), "no win");
//! ```

use videopoker_engine::cards::{Card, Suit};
use videopoker_engine::evaluators::Category;
use videopoker_engine::hand::Hand;
use videopoker_engine::round::is_held;

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        suit.glyph().to_string()
    } else {
        suit.symbol().to_string()
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(&card.suit))
}

/// Hand as `[K♠ 9♥ ...]`.
pub fn format_hand(hand: &Hand) -> String {
    let cards: Vec<String> = hand.cards().iter().map(format_card).collect();
    format!("[{}]", cards.join(" "))
}

/// Hand with 1-based positions, held cards marked with `*`.
pub fn format_positions(hand: &Hand, held: u8) -> String {
    hand.cards()
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let mark = if is_held(held, i) { "*" } else { "" };
            format!("{}:{}{}", i + 1, format_card(c), mark)
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Category name, or `no win` for a losing hand.
pub fn format_result(category: Option<Category>) -> &'static str {
    category.map(Category::name).unwrap_or("no win")
}
