use crate::cards::{Card, Suit};

/// All cards of one suit when that suit holds at least five.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitInfo {
    pub suit: Suit,
    /// Cards of `suit`, highest first.
    pub cards: Vec<Card>,
}

impl SuitInfo {
    /// The five highest cards of the suit.
    pub fn best_five(&self) -> &[Card] {
        &self.cards[..FLUSH_LEN]
    }
}

pub const FLUSH_LEN: usize = 5;

/// Every suit holding at least five cards, in suit order.
pub fn detect(sorted_desc: &[Card]) -> Vec<SuitInfo> {
    Suit::ALL
        .into_iter()
        .filter_map(|suit| {
            let cards: Vec<Card> = sorted_desc.iter().copied().filter(|c| c.matches_suit(suit)).collect();
            (cards.len() >= FLUSH_LEN).then_some(SuitInfo { suit, cards })
        })
        .collect()
}
