use super::rank_groups::RankGroups;
use crate::cards::Rank;

/// A run of five consecutive rank values present in a card set.
///
/// An Ace only wraps low when the card really is a [`Rank::LowAce`]:
/// `A♠ 2 3 4 5` from a standard deck is not a straight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightWindow {
    /// Ranks of the window, highest first.
    pub ranks: [Rank; 5],
}

impl StraightWindow {
    pub fn top_rank(&self) -> Rank {
        self.ranks[0]
    }
}

/// Lowest value a window may start at (the lowball Ace).
const LOWEST_START: u8 = 1;
/// Highest value a window may start at (Ten, topping out at Ace).
const HIGHEST_START: u8 = 10;

/// Every straight window whose ranks are all present, lowest window first.
pub fn detect(groups: &RankGroups) -> Vec<StraightWindow> {
    (LOWEST_START..=HIGHEST_START).filter_map(|start| window_at(groups, start)).collect()
}

fn window_at(groups: &RankGroups, start: u8) -> Option<StraightWindow> {
    let mut ranks = [Rank::Two; 5];
    for (i, slot) in ranks.iter_mut().enumerate() {
        let rank = Rank::from_value(start + 4 - i as u8)?;
        if !groups.contains(rank) {
            return None;
        }
        *slot = rank;
    }
    Some(StraightWindow { ranks })
}
