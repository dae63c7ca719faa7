use super::hand_analysis::HandAnalysis;
use crate::cards::Card;
use crate::evaluator::{Category, Combo};

/// Strategy pattern: each detector finds every combo of its kind in a card set.
pub trait ComboDetector {
    fn detect(&self, analysis: &HandAnalysis<'_>, out: &mut Vec<Combo>);
}

// ============================================================================
// Detector Implementations (in enumeration order)
// ============================================================================

/// High Card: the single highest card, always present for a non-empty set
pub struct HighCardDetector;

impl ComboDetector for HighCardDetector {
    fn detect(&self, analysis: &HandAnalysis<'_>, out: &mut Vec<Combo>) {
        if let Some(card) = analysis.high_card() {
            out.push(analysis.build_combo(Category::HighCard, vec![card]));
        }
    }
}

/// Of a Kind: every rank group of two to five cards
pub struct OfAKindDetector;

impl ComboDetector for OfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis<'_>, out: &mut Vec<Combo>) {
        for (_, cards) in analysis.rank_groups.iter() {
            let category = match cards.len() {
                2 => Category::Pair,
                3 => Category::ThreeOfAKind,
                4 => Category::FourOfAKind,
                5 => Category::FiveOfAKind,
                _ => continue,
            };
            out.push(analysis.build_combo(category, cards.to_vec()));
        }
    }
}

/// Two Pair: the two highest pairs
pub struct TwoPairDetector;

impl ComboDetector for TwoPairDetector {
    fn detect(&self, analysis: &HandAnalysis<'_>, out: &mut Vec<Combo>) {
        let pairs = analysis.rank_groups.pairs();
        if let [high, low, ..] = pairs.as_slice() {
            let main: Vec<Card> = high.iter().chain(low.iter()).copied().collect();
            out.push(analysis.build_combo(Category::TwoPair, main));
        }
    }
}

/// Straight: one combo per window of five consecutive ranks
pub struct StraightDetector;

impl ComboDetector for StraightDetector {
    fn detect(&self, analysis: &HandAnalysis<'_>, out: &mut Vec<Combo>) {
        for window in &analysis.straights {
            out.push(analysis.build_combo(Category::Straight, analysis.straight_cards(window)));
        }
    }
}

/// Full House: highest triple plus the highest other rank holding two or more.
///
/// A second triple is usable as the pair: K K K Q Q Q 2 is kings full of queens.
pub struct FullHouseDetector;

impl ComboDetector for FullHouseDetector {
    fn detect(&self, analysis: &HandAnalysis<'_>, out: &mut Vec<Combo>) {
        let groups = &analysis.rank_groups;
        let trips = groups.ranks_with_at_least(3);
        let pairs = groups.ranks_with_at_least(2);
        let Some(&trip) = trips.first() else {
            return;
        };
        let Some(&pair) = pairs.iter().find(|&&r| r != trip) else {
            return;
        };

        let main: Vec<Card> =
            groups.cards_of(trip).iter().take(3).chain(groups.cards_of(pair).iter().take(2)).copied().collect();
        out.push(analysis.build_combo(Category::FullHouse, main));
    }
}

/// Flush: the five highest cards of each suit holding five or more
pub struct FlushDetector;

impl ComboDetector for FlushDetector {
    fn detect(&self, analysis: &HandAnalysis<'_>, out: &mut Vec<Combo>) {
        for flush in &analysis.flushes {
            out.push(analysis.build_combo(Category::Flush, flush.best_five().to_vec()));
        }
    }
}

/// Straight Flush: a straight window fully covered by one flush suit
pub struct StraightFlushDetector;

impl ComboDetector for StraightFlushDetector {
    fn detect(&self, analysis: &HandAnalysis<'_>, out: &mut Vec<Combo>) {
        for flush in &analysis.flushes {
            for window in &analysis.straights {
                let main: Vec<Card> = window
                    .ranks
                    .iter()
                    .filter_map(|&r| flush.cards.iter().copied().find(|c| c.matches_rank(r)))
                    .collect();
                if main.len() == window.ranks.len() {
                    out.push(analysis.build_combo(Category::StraightFlush, main));
                }
            }
        }
    }
}

// ============================================================================
// Static detector list (in enumeration order)
// ============================================================================

pub const DETECTORS: [&dyn ComboDetector; 7] = [
    &HighCardDetector,
    &OfAKindDetector,
    &TwoPairDetector,
    &StraightDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightFlushDetector,
];
