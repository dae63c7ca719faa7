//! Arena for one game session.
//!
//! A [`Table`] owns every pile and hand of a session. Hands refer to their
//! community hand and default piles through [`HandId`] and [`PileId`]
//! handles, so several hands can share a draw pile or a community hand
//! without aliasing mutable references.
//!
//! ```
//! use poker_combos::deck::{End, Variant};
//! use poker_combos::table::Table;
//!
//! let mut table = Table::new();
//! let deck = table.add_pile();
//! let discard = table.add_pile();
//! table.pile_mut(deck).unwrap().populate(Variant::Standard);
//! table.pile_mut(deck).unwrap().shuffle(1);
//!
//! let board = table.add_hand(None, Some(deck), Some(discard));
//! let player = table.add_hand(Some(board), Some(deck), Some(discard));
//!
//! table.draw(board, 5, None, End::Top).unwrap();
//! table.draw(player, 2, None, End::Top).unwrap();
//! assert_eq!(table.full(player).unwrap().len(), 7);
//!
//! let best = table.evaluate_best(player).unwrap().unwrap();
//! println!("{best}");
//!
//! table.scrap(player).unwrap();
//! table.scrap(board).unwrap();
//! assert_eq!(table.pile(discard).unwrap().len(), 7);
//! ```
use crate::cards::Card;
use crate::deck::{Deck, End};
use crate::evaluator::{self, Combo};
use crate::hand::{Hand, HandError};
use log::debug;
use std::collections::{BTreeSet, HashSet};

/// Handle to a pile owned by a [`Table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PileId(usize);

/// Handle to a hand owned by a [`Table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandId(usize);

#[derive(Debug, Clone, Default)]
pub struct Table {
    piles: Vec<Deck>,
    hands: Vec<Hand>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new empty pile.
    pub fn add_pile(&mut self) -> PileId {
        self.piles.push(Deck::new());
        PileId(self.piles.len() - 1)
    }

    /// Register a new empty hand wired to an optional community hand and
    /// default draw/discard piles.
    pub fn add_hand(
        &mut self,
        community: Option<HandId>,
        draw_pile: Option<PileId>,
        discard_pile: Option<PileId>,
    ) -> HandId {
        self.hands.push(Hand::wired(community, draw_pile, discard_pile));
        HandId(self.hands.len() - 1)
    }

    pub fn pile(&self, id: PileId) -> Result<&Deck, HandError> {
        self.piles.get(id.0).ok_or(HandError::UnknownPile(id))
    }

    pub fn pile_mut(&mut self, id: PileId) -> Result<&mut Deck, HandError> {
        self.piles.get_mut(id.0).ok_or(HandError::UnknownPile(id))
    }

    pub fn hand(&self, id: HandId) -> Result<&Hand, HandError> {
        self.hands.get(id.0).ok_or(HandError::UnknownHand(id))
    }

    pub fn hand_mut(&mut self, id: HandId) -> Result<&mut Hand, HandError> {
        self.hands.get_mut(id.0).ok_or(HandError::UnknownHand(id))
    }

    pub fn link_community(&mut self, hand: HandId, community: Option<HandId>) -> Result<(), HandError> {
        if let Some(c) = community {
            self.hand(c)?;
        }
        self.hand_mut(hand)?.community = community;
        Ok(())
    }

    pub fn set_draw_pile(&mut self, hand: HandId, pile: Option<PileId>) -> Result<(), HandError> {
        if let Some(p) = pile {
            self.pile(p)?;
        }
        self.hand_mut(hand)?.draw_pile = pile;
        Ok(())
    }

    pub fn set_discard_pile(&mut self, hand: HandId, pile: Option<PileId>) -> Result<(), HandError> {
        if let Some(p) = pile {
            self.pile(p)?;
        }
        self.hand_mut(hand)?.discard_pile = pile;
        Ok(())
    }

    /// Borrow a hand and a pile mutably at the same time.
    fn hand_and_pile(&mut self, hand: HandId, pile: PileId) -> Result<(&mut Hand, &mut Deck), HandError> {
        let h = self.hands.get_mut(hand.0).ok_or(HandError::UnknownHand(hand))?;
        let p = self.piles.get_mut(pile.0).ok_or(HandError::UnknownPile(pile))?;
        Ok((h, p))
    }

    /// Move `n` cards into `hand` from `pile`, or from its draw pile.
    ///
    /// Cards drawn before an exhausted pile stops the draw stay in the hand.
    pub fn draw(&mut self, hand: HandId, n: usize, pile: Option<PileId>, end: End) -> Result<(), HandError> {
        let src = pile.or(self.hand(hand)?.draw_pile).ok_or(HandError::NoSourceConfigured)?;
        let (h, p) = self.hand_and_pile(hand, src)?;
        debug!("{:?} draws {} from {:?}", hand, n, src);
        h.draw_from(p, n, end)
    }

    /// Move the named cards from `hand` onto `pile`, or onto its discard pile.
    ///
    /// Fails with [`HandError::CardNotInHand`] at the first card not held;
    /// cards before it have already moved.
    pub fn discard(
        &mut self,
        hand: HandId,
        cards: &[Card],
        pile: Option<PileId>,
        end: End,
    ) -> Result<(), HandError> {
        let dst = pile.or(self.hand(hand)?.discard_pile).ok_or(HandError::NoDestinationConfigured)?;
        let (h, p) = self.hand_and_pile(hand, dst)?;
        debug!("{:?} discards {} cards to {:?}", hand, cards.len(), dst);
        h.discard_to(p, cards, end)
    }

    /// Move every private card of `hand` onto `pile`, or onto its discard pile.
    pub fn dump(&mut self, hand: HandId, pile: Option<PileId>) -> Result<(), HandError> {
        let dst = pile.or(self.hand(hand)?.discard_pile).ok_or(HandError::NoDestinationConfigured)?;
        let (h, p) = self.hand_and_pile(hand, dst)?;
        debug!("{:?} dumps {} cards to {:?}", hand, h.len(), dst);
        h.dump_to(p);
        Ok(())
    }

    /// Dump `hand` onto its configured discard pile.
    pub fn scrap(&mut self, hand: HandId) -> Result<(), HandError> {
        self.dump(hand, None)
    }

    pub fn sort(&mut self, hand: HandId, descending: bool) -> Result<(), HandError> {
        self.hand_mut(hand)?.sort(descending);
        Ok(())
    }

    /// Move every card of `from` onto the bottom of `into`, e.g. the discard
    /// pile back under the deck before the next deal.
    pub fn recycle(&mut self, from: PileId, into: PileId) -> Result<(), HandError> {
        self.pile(into)?;
        if from == into {
            return Ok(());
        }
        let mut moved = std::mem::take(self.pile_mut(from)?);
        self.pile_mut(into)?.append(&mut moved, End::Bottom);
        Ok(())
    }

    /// Private cards of `hand` together with everything visible through its
    /// community link.
    pub fn full(&self, hand: HandId) -> Result<BTreeSet<Card>, HandError> {
        let mut out = BTreeSet::new();
        let mut seen = HashSet::new();
        let mut next = Some(hand);
        while let Some(id) = next {
            if !seen.insert(id) {
                break;
            }
            let h = self.hand(id)?;
            out.extend(h.as_slice().iter().copied());
            next = h.community;
        }
        Ok(out)
    }

    /// Strongest combination of the full card set of `hand`, `None` when
    /// the hand sees no cards at all.
    pub fn evaluate_best(&self, hand: HandId) -> Result<Option<Combo>, HandError> {
        let cards: Vec<Card> = self.full(hand)?.into_iter().collect();
        let best = evaluator::evaluate_best(&cards);
        if let Some(b) = &best {
            debug!("{:?} best combo {}", hand, b);
        }
        Ok(best)
    }

    /// Return every card held by `hands` to their discard piles.
    pub fn scrap_all(&mut self, hands: &[HandId]) -> Result<(), HandError> {
        for &h in hands {
            self.scrap(h)?;
        }
        Ok(())
    }

    /// Empty every hand at the table into `pile`, regardless of wiring.
    pub fn collect_into(&mut self, pile: PileId) -> Result<(), HandError> {
        let mut gathered = Vec::new();
        for h in &mut self.hands {
            gathered.extend(h.take_all());
        }
        self.pile_mut(pile)?.add(gathered, End::Top);
        Ok(())
    }
}
