//! poker-combos: playing-card deck model and poker combination evaluator
//!
//! Goals:
//! - Decks, piles and hands that move cards without ever duplicating them
//! - Enumerate every poker combination in a card set of any size
//! - Deterministic ordering of combos, kickers included
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: best combo of a seven-card set
//! ```
//! use poker_combos::cards::parse_cards;
//! use poker_combos::evaluator::{evaluate_best, Category};
//!
//! let cards = parse_cards("2c 2d 2h 5s 5c 9h Kd").unwrap();
//! let best = evaluate_best(&cards).unwrap();
//! assert_eq!(best.category(), Category::FullHouse);
//! assert_eq!(best.to_string(), "Full House: 2♥, 2♦, 2♣, 5♠, 5♣");
//! ```
//!
//! ## Showdown demo
//! Deal a round and print every hand's best combo with:
//! ```sh
//! cargo run --bin poker-combos -- --players 4
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod table;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
