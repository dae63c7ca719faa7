use crate::cards::{Card, Rank};
use crate::evaluator::{Category, HandValue};
use core::cmp::Ordering;
use std::fmt;

/// Most cards that count toward a combo's value.
pub const HAND_SIZE: usize = 5;

/// One classified pattern found in a card set.
///
/// `main` holds the cards that make the category, in significance order
/// (triple before pair in a full house, otherwise highest first). `kickers`
/// are the highest remaining cards of the set, capped so that main plus
/// kickers never exceeds five cards. Ordering and equality follow
/// [`Combo::value`] only.
#[derive(Debug, Clone)]
pub struct Combo {
    category: Category,
    main: Vec<Card>,
    kickers: Vec<Card>,
    value: HandValue,
}

impl Combo {
    pub(crate) fn new(category: Category, main: Vec<Card>, full: &[Card]) -> Self {
        let mut rest = full.to_vec();
        for card in &main {
            if let Some(pos) = rest.iter().position(|c| c == card) {
                rest.swap_remove(pos);
            }
        }
        rest.sort_by(|a, b| b.cmp(a));
        rest.truncate(HAND_SIZE.saturating_sub(main.len()));
        let kickers = rest;

        let ranks: Vec<Rank> = main.iter().chain(kickers.iter()).map(|c| c.rank()).collect();
        let value = HandValue::from_parts(category, &ranks);
        Self { category, main, kickers, value }
    }

    pub const fn category(&self) -> Category {
        self.category
    }

    pub fn main(&self) -> &[Card] {
        &self.main
    }

    pub fn kickers(&self) -> &[Card] {
        &self.kickers
    }

    /// Return the packed comparable value for ordering/caching.
    pub const fn value(&self) -> HandValue {
        self.value
    }

    fn top_rank(&self) -> Option<Rank> {
        self.main.iter().map(|c| c.rank()).max()
    }

    /// A straight flush topped by the high Ace.
    pub fn is_royal(&self) -> bool {
        self.category == Category::StraightFlush && self.top_rank() == Some(Rank::Ace)
    }

    /// Human name of the combo, e.g. `"King High"`, `"Royal Flush"`.
    pub fn term(&self) -> String {
        let top = self.top_rank();
        match (self.category, top) {
            (Category::HighCard, Some(r)) => format!("{} High", r.name()),
            (Category::StraightFlush, Some(Rank::Ace)) => "Royal Flush".to_string(),
            (Category::Straight, Some(Rank::Ace)) => "Broadway Straight".to_string(),
            (Category::StraightFlush, Some(Rank::Five)) => "Steel Wheel".to_string(),
            (Category::Straight, Some(Rank::Five)) => "Baby Straight".to_string(),
            (category, _) => category.name().to_string(),
        }
    }

    /// Long form: the term, main cards and kickers.
    pub fn describe(&self) -> String {
        let mut s = self.to_string();
        if !self.kickers.is_empty() {
            s.push_str(" (+");
            s.push_str(&join(&self.kickers));
            s.push(')');
        }
        s
    }
}

fn join(cards: &[Card]) -> String {
    cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(", ")
}

impl fmt::Display for Combo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.term(), join(&self.main))
    }
}

impl Ord for Combo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Combo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Combo {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Combo {}
