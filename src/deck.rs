use crate::cards::{Card, Rank, Suit};
use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Which end of a pile an operation works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum End {
    #[default]
    Top,
    Bottom,
}

/// Rank set used to populate a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Variant {
    /// Two through Ace, Ace high.
    #[default]
    Standard,
    /// Ace through King, Ace valued 1.
    Lowball,
}

impl Variant {
    pub const fn ranks(self) -> &'static [Rank; 13] {
        match self {
            Variant::Standard => &Rank::ALL,
            Variant::Lowball => &Rank::LOWBALL,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck exhausted")]
    Exhausted,
}

/// An ordered pile of cards used as a stack.
///
/// Cards are stored bottom to top: the last card added to the top is the
/// next one drawn from the top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// An empty pile.
    pub fn new() -> Self {
        Self::default()
    }

    /// ```
    /// use poker_combos::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut deck = Self::new();
        deck.populate(Variant::Standard);
        deck
    }

    /// Append the full suit x rank cross product of `variant`.
    ///
    /// Nothing is deduplicated: populating twice yields a double deck.
    pub fn populate(&mut self, variant: Variant) {
        self.cards.reserve(Suit::ALL.len() * 13);
        for &s in &Suit::ALL {
            for &r in variant.ranks() {
                self.cards.push_back(Card::new(r, s));
            }
        }
        debug!("populated {:?} deck, {} cards", variant, self.cards.len());
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Shuffle `passes` times with the thread-local cryptographically secure RNG.
    pub fn shuffle(&mut self, passes: usize) {
        let mut rng = rand::rng();
        for _ in 0..passes {
            self.cards.make_contiguous().shuffle(&mut rng);
        }
        debug!("shuffled {} cards, {} passes", self.cards.len(), passes);
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Look at the card at `end` without removing it.
    pub fn peek(&self, end: End) -> Option<&Card> {
        match end {
            End::Top => self.cards.back(),
            End::Bottom => self.cards.front(),
        }
    }

    /// Remove and return the card at `end`.
    ///
    /// ```
    /// use poker_combos::deck::{Deck, DeckError, End};
    ///
    /// let mut deck = Deck::new();
    /// assert_eq!(deck.draw(End::Top), Err(DeckError::Exhausted));
    /// ```
    pub fn draw(&mut self, end: End) -> Result<Card, DeckError> {
        let card = match end {
            End::Top => self.cards.pop_back(),
            End::Bottom => self.cards.pop_front(),
        };
        match card {
            Some(c) => {
                trace!("drew {} from {:?}", c, end);
                Ok(c)
            }
            None => {
                debug!("draw from {:?} of an empty deck", end);
                Err(DeckError::Exhausted)
            }
        }
    }

    /// Draw `n` cards from `end`. Leaves the pile untouched when it holds
    /// fewer than `n`.
    pub fn draw_n(&mut self, n: usize, end: End) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            debug!("draw of {} from a pile of {}", n, self.cards.len());
            return Err(DeckError::Exhausted);
        }
        (0..n).map(|_| self.draw(end)).collect()
    }

    /// Put `cards` on `end`, keeping their order.
    ///
    /// On top the last input card becomes the new top card; on the bottom
    /// the first input card becomes the new bottom card.
    pub fn add<I>(&mut self, cards: I, end: End)
    where
        I: IntoIterator<Item = Card>,
    {
        match end {
            End::Top => self.cards.extend(cards),
            End::Bottom => {
                let block: Vec<Card> = cards.into_iter().collect();
                for c in block.into_iter().rev() {
                    self.cards.push_front(c);
                }
            }
        }
    }

    /// Move every card of `other` onto `end` of this pile, bottom card first.
    pub fn append(&mut self, other: &mut Deck, end: End) {
        let moved = std::mem::take(&mut other.cards);
        debug!("moving {} cards between piles", moved.len());
        self.add(moved, end);
    }
}
