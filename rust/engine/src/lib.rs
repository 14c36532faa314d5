//! # videopoker-engine: Five-Card Draw Video Poker Core
//!
//! Classifies five-card hands for Jacks or Better, Tens or Better and Deuces
//! Wild, and plays deterministic draw rounds on top of that classification.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and the straight windows
//! - [`hand`] - Validated five-card hands built from suit and rank symbols
//! - [`wild`] - Extraction of wild cards into a count
//! - [`evaluators`] - One predicate per winning category
//! - [`variant`] - Variant configuration, priority resolution and payout tables
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`round`] - Bet, deal, hold and draw state machine
//! - [`logger`] - RoundRecord serialization to JSONL
//! - [`errors`] - Error types for validation and play
//!
//! ## Quick Start
//!
//! ```rust
//! use videopoker_engine::evaluators::category_name;
//! use videopoker_engine::variant::Variant;
//!
//! let variant = Variant::tens_or_better();
//! let result = variant
//!     .classify(&["S", "H", "C", "D", "S"], &["10", "10", "3", "7", "K"])
//!     .unwrap();
//! assert_eq!(category_name(result), "Tens or Better");
//!
//! // Malformed input is an error, never a losing hand
//! assert!(variant.classify(&["S", "H", "C", "D"], &["10", "10", "3", "7", "K"]).is_err());
//! ```
//!
//! ## Deterministic Play
//!
//! ```rust
//! use videopoker_engine::round::Machine;
//! use videopoker_engine::variant::Variant;
//!
//! let mut a = Machine::new(Variant::deuces_wild(), 42, 100);
//! let mut b = Machine::new(Variant::deuces_wild(), 42, 100);
//! assert_eq!(a.deal(1).unwrap(), b.deal(1).unwrap());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod evaluators;
pub mod hand;
pub mod logger;
pub mod round;
pub mod variant;
pub mod wild;
