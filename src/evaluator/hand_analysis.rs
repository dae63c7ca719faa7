use super::rank_groups::RankGroups;
use super::straight_info::{self, StraightWindow};
use super::suit_info::{self, SuitInfo};
use crate::cards::Card;
use crate::evaluator::{Category, Combo};

/// Pre-computed analysis of a full card set.
/// Built once and shared by all combo finders.
#[derive(Debug, Clone)]
pub struct HandAnalysis<'a> {
    /// The input, untouched.
    pub cards: &'a [Card],
    /// Input sorted by rank descending, then suit descending.
    pub sorted_cards: Vec<Card>,
    pub rank_groups: RankGroups,
    pub straights: Vec<StraightWindow>,
    pub flushes: Vec<SuitInfo>,
}

impl<'a> HandAnalysis<'a> {
    pub fn new(cards: &'a [Card]) -> Self {
        let mut sorted_cards = cards.to_vec();
        sorted_cards.sort_by(|a, b| b.cmp(a));

        let rank_groups = RankGroups::from_sorted(&sorted_cards);
        let straights = straight_info::detect(&rank_groups);
        let flushes = suit_info::detect(&sorted_cards);

        Self { cards, sorted_cards, rank_groups, straights, flushes }
    }

    /// The single highest card, if any.
    pub fn high_card(&self) -> Option<Card> {
        self.sorted_cards.first().copied()
    }

    /// One card per rank of `window`, highest rank first, picking the
    /// highest suit available for each rank.
    pub fn straight_cards(&self, window: &StraightWindow) -> Vec<Card> {
        window
            .ranks
            .iter()
            .filter_map(|&r| self.rank_groups.cards_of(r).first().copied())
            .collect()
    }

    /// Build a Combo over this card set with `main` in significance order.
    pub fn build_combo(&self, category: Category, main: Vec<Card>) -> Combo {
        Combo::new(category, main, self.cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Rank, Suit};

    #[test]
    fn test_royal_flush_analysis() {
        let cards = parse_cards("As Ks Qs Js Ts 2h 3h").unwrap();
        let analysis = HandAnalysis::new(&cards);

        assert_eq!(analysis.flushes.len(), 1);
        assert_eq!(analysis.flushes[0].suit, Suit::Spades);
        assert_eq!(analysis.straights.len(), 1);
        assert_eq!(analysis.straights[0].top_rank(), Rank::Ace);
        assert!(analysis.rank_groups.pairs().is_empty());
    }

    #[test]
    fn test_full_house_analysis() {
        let cards = parse_cards("Ks Kh Kd Qc Qs Qd 2c").unwrap();
        let analysis = HandAnalysis::new(&cards);

        assert_eq!(analysis.rank_groups.ranks_with_at_least(3), vec![Rank::King, Rank::Queen]);
        assert!(analysis.flushes.is_empty());
        assert!(analysis.straights.is_empty());
    }

    #[test]
    fn test_straight_cards_pick_one_per_rank() {
        let cards = parse_cards("9s 9h 8d 7c 6s 5h").unwrap();
        let analysis = HandAnalysis::new(&cards);
        let picked = analysis.straight_cards(&analysis.straights[0]);
        assert_eq!(
            picked,
            vec![
                Card::new(Rank::Nine, Suit::Spades),
                Card::new(Rank::Eight, Suit::Diamonds),
                Card::new(Rank::Seven, Suit::Clubs),
                Card::new(Rank::Six, Suit::Spades),
                Card::new(Rank::Five, Suit::Hearts),
            ]
        );
    }

    #[test]
    fn test_cards_sorted_descending() {
        let cards = parse_cards("3s Ah 5d Kc 9s").unwrap();
        let analysis = HandAnalysis::new(&cards);

        let ranks: Vec<Rank> = analysis.sorted_cards.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![Rank::Ace, Rank::King, Rank::Nine, Rank::Five, Rank::Three]);
        assert_eq!(analysis.high_card(), Some(Card::new(Rank::Ace, Suit::Hearts)));
        assert_eq!(analysis.cards, cards.as_slice());
    }

    #[test]
    fn test_empty_analysis() {
        let analysis = HandAnalysis::new(&[]);
        assert_eq!(analysis.high_card(), None);
        assert!(analysis.straights.is_empty());
        assert!(analysis.flushes.is_empty());
    }
}
