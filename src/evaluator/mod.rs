pub(crate) mod combo;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

pub use combo::{Combo, HAND_SIZE};

use crate::cards::{Card, Rank};
use core::cmp::Ordering;
use log::{debug, trace};

/// Compact, comparable hand strength. Higher is better.
/// Encodes category and ranked tiebreakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub struct HandValue(u64);

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    FiveOfAKind = 9,
}

impl Category {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::FiveOfAKind => "Five of a Kind",
        }
    }
}

impl HandValue {
    /// Return the packed comparable value.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Pack a category and up to five rank tiebreakers, most significant
    /// first, into a comparable value. Missing tiebreakers pack as zero,
    /// below every real rank.
    /// Uses 6 bits per rank to be generous (supports up to 63).
    pub fn from_parts(category: Category, ranks: &[Rank]) -> Self {
        // Layout (most significant -> least):
        // [ category (8 bits) | r0 (6) | r1 (6) | r2 (6) | r3 (6) | r4 (6) | 18 zero bits ]
        const CAT_SHIFT: u32 = 48;
        const RANK_STRIDE: u32 = 6;
        debug_assert!(ranks.len() <= HAND_SIZE);
        let mut v: u64 = (category as u64) << CAT_SHIFT;
        for (i, r) in ranks.iter().take(HAND_SIZE).enumerate() {
            let offset = CAT_SHIFT - RANK_STRIDE * (i as u32 + 1);
            v |= (r.value() as u64) << offset;
        }
        HandValue(v)
    }

    pub const fn category_ordinal(self) -> u8 {
        (self.0 >> 48) as u8
    }
}

/// Enumerate every combo present in `cards`.
///
/// A non-empty set always yields at least its High Card; an empty set
/// yields nothing. The input is not modified and duplicates are not
/// removed, so pass a set (e.g. [`Table::full`](crate::table::Table::full)).
///
/// ```
/// use poker_combos::cards::parse_cards;
/// use poker_combos::evaluator::{evaluate, Category};
///
/// let cards = parse_cards("2c 2d 2h 5s 5c 9h Kd").unwrap();
/// let combos = evaluate(&cards);
/// assert!(combos.iter().any(|c| c.category() == Category::HighCard));
/// assert!(combos.iter().any(|c| c.category() == Category::FullHouse));
/// ```
pub fn evaluate(cards: &[Card]) -> Vec<Combo> {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    if cards.is_empty() {
        return Vec::new();
    }

    // Build analysis once (sorted cards, rank groups, straights, flushes)
    let analysis = HandAnalysis::new(cards);

    let mut combos = Vec::new();
    for detector in DETECTORS.iter() {
        detector.detect(&analysis, &mut combos);
    }
    for c in &combos {
        trace!("candidate {}", c.describe());
    }
    combos
}

/// The strongest combo in `cards`, `None` for an empty set.
///
/// ```
/// use poker_combos::cards::parse_cards;
/// use poker_combos::evaluator::{evaluate_best, Category};
///
/// let cards = parse_cards("As Ks Qs Js Ts 2h 3h").unwrap();
/// let best = evaluate_best(&cards).unwrap();
/// assert_eq!(best.category(), Category::StraightFlush);
/// assert_eq!(best.term(), "Royal Flush");
/// ```
pub fn evaluate_best(cards: &[Card]) -> Option<Combo> {
    let best = evaluate(cards).into_iter().max();
    if let Some(b) = &best {
        debug!("best of {} cards: {}", cards.len(), b.describe());
    }
    best
}

/// Compare the best combos of two card sets. An empty set loses to any
/// non-empty one.
///
/// ```
/// use poker_combos::cards::parse_cards;
/// use poker_combos::evaluator::compare_best;
/// use std::cmp::Ordering;
///
/// let board = "Qc Jd 9h 3s 2c";
/// let a = parse_cards(&format!("As Ah {board}")).unwrap();
/// let b = parse_cards(&format!("Ks Kh {board}")).unwrap();
/// assert_eq!(compare_best(&a, &b), Ordering::Greater);
/// ```
pub fn compare_best(a: &[Card], b: &[Card]) -> Ordering {
    evaluate_best(a).cmp(&evaluate_best(b))
}

/// Indices of every combo sharing the highest value; more than one means a tie.
///
/// ```
/// use poker_combos::cards::parse_cards;
/// use poker_combos::evaluator::{evaluate_best, winners};
///
/// let board = "Ac Kd Qh Js 2c";
/// let hands = ["Td 3c", "Th 4d", "9c 9d"];
/// let combos: Vec<_> = hands
///     .iter()
///     .map(|h| evaluate_best(&parse_cards(&format!("{h} {board}")).unwrap()).unwrap())
///     .collect();
/// assert_eq!(winners(&combos), vec![0, 1]);
/// ```
pub fn winners(combos: &[Combo]) -> Vec<usize> {
    let Some(top) = combos.iter().max() else {
        return Vec::new();
    };
    combos.iter().enumerate().filter(|(_, c)| *c == top).map(|(i, _)| i).collect()
}
