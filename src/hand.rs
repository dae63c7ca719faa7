use crate::cards::Card;
use crate::deck::{Deck, DeckError, End};
use crate::table::{HandId, PileId};
use log::debug;
use std::collections::BTreeSet;
use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("{} is not in this hand", .0.name())]
    CardNotInHand(Card),
    #[error("nowhere to draw cards from")]
    NoSourceConfigured,
    #[error("nowhere to discard to")]
    NoDestinationConfigured,
    #[error(transparent)]
    DeckExhausted(#[from] DeckError),
    #[error("unknown pile {0:?}")]
    UnknownPile(PileId),
    #[error("unknown hand {0:?}")]
    UnknownHand(HandId),
}

/// A player's private cards plus the piles and community hand it is wired to.
///
/// The links are handles into a [`Table`](crate::table::Table); the hand
/// owns nothing but its own cards. Without a table the pile-moving methods
/// take an explicit [`Deck`].
///
/// ```
/// use poker_combos::deck::{Deck, End};
/// use poker_combos::hand::Hand;
///
/// let mut deck = Deck::standard();
/// let mut hand = Hand::new();
/// hand.draw_from(&mut deck, 2, End::Top).unwrap();
/// assert_eq!(hand.len(), 2);
/// assert_eq!(deck.len(), 50);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    pub(crate) community: Option<HandId>,
    pub(crate) draw_pile: Option<PileId>,
    pub(crate) discard_pile: Option<PileId>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn wired(
        community: Option<HandId>,
        draw_pile: Option<PileId>,
        discard_pile: Option<PileId>,
    ) -> Self {
        Self { cards: Vec::new(), community, draw_pile, discard_pile }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn community(&self) -> Option<HandId> {
        self.community
    }

    pub fn draw_pile(&self) -> Option<PileId> {
        self.draw_pile
    }

    pub fn discard_pile(&self) -> Option<PileId> {
        self.discard_pile
    }

    /// Move `n` cards from `pile` into this hand.
    ///
    /// Not atomic: if the pile runs out, the cards drawn so far stay here.
    pub fn draw_from(&mut self, pile: &mut Deck, n: usize, end: End) -> Result<(), HandError> {
        for _ in 0..n {
            let card = pile.draw(end)?;
            self.cards.push(card);
        }
        Ok(())
    }

    /// Move the named cards from this hand onto `pile`.
    ///
    /// Stops at the first card the hand does not hold; cards before it are
    /// already on the pile.
    pub fn discard_to(&mut self, pile: &mut Deck, cards: &[Card], end: End) -> Result<(), HandError> {
        for card in cards {
            let Some(pos) = self.cards.iter().position(|c| c == card) else {
                debug!("discard of {} which is not held", card);
                return Err(HandError::CardNotInHand(*card));
            };
            let card = self.cards.remove(pos);
            pile.add([card], end);
        }
        Ok(())
    }

    /// Move every private card onto the top of `pile`.
    pub fn dump_to(&mut self, pile: &mut Deck) {
        pile.add(self.cards.drain(..), End::Top);
    }

    /// Order private cards by rank (suit breaks ties).
    pub fn sort(&mut self, descending: bool) {
        if descending {
            self.cards.sort_by(|a, b| b.cmp(a));
        } else {
            self.cards.sort();
        }
    }

    /// Private cards as a set, without any community cards.
    pub fn private_set(&self) -> BTreeSet<Card> {
        self.cards.iter().copied().collect()
    }

    /// Long form listing every card by name.
    pub fn describe(&self) -> String {
        if self.cards.is_empty() {
            return "Empty Hand".to_string();
        }
        let names: Vec<String> = self.cards.iter().map(|c| c.name()).collect();
        format!("Hand of {}", names.join(", "))
    }

    pub(crate) fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return write!(f, "Empty Hand");
        }
        write!(f, "Hand of ")?;
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
