use crate::cards::{Card, Rank};

/// Cards partitioned by rank, highest rank first.
///
/// Each group holds its cards highest suit first.
/// Example: A♠ A♥ A♦ K♣ Q♠ groups as [(Ace, 3 cards), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, Vec<Card>)>,
}

impl RankGroups {
    /// Build groups from cards already sorted in descending order.
    pub fn from_sorted(sorted_desc: &[Card]) -> Self {
        let mut groups: Vec<(Rank, Vec<Card>)> = Vec::new();
        for &card in sorted_desc {
            match groups.last_mut() {
                Some((rank, cards)) if *rank == card.rank() => cards.push(card),
                _ => groups.push((card.rank(), vec![card])),
            }
        }
        Self { groups }
    }

    /// Every group, highest rank first.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, &[Card])> + '_ {
        self.groups.iter().map(|(r, cs)| (*r, cs.as_slice()))
    }

    /// Cards of `rank`, highest suit first; empty if absent.
    pub fn cards_of(&self, rank: Rank) -> &[Card] {
        self.groups
            .iter()
            .find(|(r, _)| *r == rank)
            .map(|(_, cs)| cs.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, rank: Rank) -> bool {
        self.groups.iter().any(|(r, _)| *r == rank)
    }

    /// Groups of exactly two cards, highest rank first.
    pub fn pairs(&self) -> Vec<&[Card]> {
        self.groups.iter().filter(|(_, cs)| cs.len() == 2).map(|(_, cs)| cs.as_slice()).collect()
    }

    /// Ranks holding at least `n` cards, highest first.
    pub fn ranks_with_at_least(&self, n: usize) -> Vec<Rank> {
        self.groups.iter().filter(|(_, cs)| cs.len() >= n).map(|(r, _)| *r).collect()
    }
}
