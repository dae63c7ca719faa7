use poker_combos::cards::{Card, Rank, Suit};
use poker_combos::evaluator::{evaluate, evaluate_best, Category, Combo};

fn best(xs: &[Card]) -> Combo {
    evaluate_best(xs).expect("non-empty card set")
}

fn categories(xs: &[Card]) -> Vec<Category> {
    let mut cats: Vec<Category> = evaluate(xs).iter().map(|c| c.category()).collect();
    cats.sort();
    cats.dedup();
    cats
}

#[test]
fn category_five_of_a_kind() {
    // Only reachable with duplicate cards, e.g. from a double deck.
    let xs = [
        Card::new(Rank::Six, Suit::Clubs),
        Card::new(Rank::Six, Suit::Diamonds),
        Card::new(Rank::Six, Suit::Hearts),
        Card::new(Rank::Six, Suit::Spades),
        Card::new(Rank::Six, Suit::Clubs),
    ];
    let e = best(&xs);
    assert!(matches!(e.category(), Category::FiveOfAKind));
    assert_eq!(e.main().len(), 5);
}

#[test]
fn category_straight_flush() {
    let sf = [
        Card::new(Rank::Nine, Suit::Spades),
        Card::new(Rank::King, Suit::Spades),
        Card::new(Rank::Queen, Suit::Spades),
        Card::new(Rank::Jack, Suit::Spades),
        Card::new(Rank::Ten, Suit::Spades),
    ];
    let e = best(&sf);
    assert!(matches!(e.category(), Category::StraightFlush));
    assert!(!e.is_royal());
    assert_eq!(e.term(), "Straight Flush");
}

#[test]
fn category_royal_flush() {
    let sf = [
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::King, Suit::Spades),
        Card::new(Rank::Queen, Suit::Spades),
        Card::new(Rank::Jack, Suit::Spades),
        Card::new(Rank::Ten, Suit::Spades),
    ];
    let e = best(&sf);
    assert_eq!(e.category().ordinal(), 8);
    assert!(e.is_royal());
    assert_eq!(e.term(), "Royal Flush");
}

#[test]
fn category_four_of_a_kind() {
    let xs = [
        Card::new(Rank::Nine, Suit::Clubs),
        Card::new(Rank::Nine, Suit::Diamonds),
        Card::new(Rank::Nine, Suit::Hearts),
        Card::new(Rank::Nine, Suit::Spades),
        Card::new(Rank::Ace, Suit::Clubs),
    ];
    let e = best(&xs);
    assert!(matches!(e.category(), Category::FourOfAKind));
    assert_eq!(e.kickers(), &[Card::new(Rank::Ace, Suit::Clubs)]);
}

#[test]
fn category_full_house() {
    let xs = [
        Card::new(Rank::Three, Suit::Clubs),
        Card::new(Rank::Three, Suit::Diamonds),
        Card::new(Rank::Three, Suit::Hearts),
        Card::new(Rank::Jack, Suit::Spades),
        Card::new(Rank::Jack, Suit::Clubs),
    ];
    let e = best(&xs);
    assert!(matches!(e.category(), Category::FullHouse));
    assert_eq!(e.main()[0].rank(), Rank::Three);
    assert_eq!(e.main()[4].rank(), Rank::Jack);
    assert!(e.kickers().is_empty());
}

#[test]
fn category_flush() {
    let xs = [
        Card::new(Rank::King, Suit::Hearts),
        Card::new(Rank::Ten, Suit::Hearts),
        Card::new(Rank::Eight, Suit::Hearts),
        Card::new(Rank::Six, Suit::Hearts),
        Card::new(Rank::Three, Suit::Hearts),
    ];
    let e = best(&xs);
    assert!(matches!(e.category(), Category::Flush));
}

#[test]
fn category_straight() {
    let xs = [
        Card::new(Rank::Six, Suit::Clubs),
        Card::new(Rank::Five, Suit::Clubs),
        Card::new(Rank::Four, Suit::Diamonds),
        Card::new(Rank::Three, Suit::Hearts),
        Card::new(Rank::Two, Suit::Spades),
    ];
    let e = best(&xs);
    assert!(matches!(e.category(), Category::Straight));
    assert_eq!(e.term(), "Straight");
}

#[test]
fn category_broadway_straight() {
    let xs = [
        Card::new(Rank::Ace, Suit::Clubs),
        Card::new(Rank::King, Suit::Diamonds),
        Card::new(Rank::Queen, Suit::Diamonds),
        Card::new(Rank::Jack, Suit::Hearts),
        Card::new(Rank::Ten, Suit::Spades),
    ];
    let e = best(&xs);
    assert!(matches!(e.category(), Category::Straight));
    assert_eq!(e.term(), "Broadway Straight");
}

#[test]
fn category_three_of_a_kind() {
    let xs = [
        Card::new(Rank::Seven, Suit::Clubs),
        Card::new(Rank::Seven, Suit::Diamonds),
        Card::new(Rank::Seven, Suit::Hearts),
        Card::new(Rank::King, Suit::Spades),
        Card::new(Rank::Two, Suit::Clubs),
    ];
    let e = best(&xs);
    assert!(matches!(e.category(), Category::ThreeOfAKind));
    assert_eq!(e.kickers().len(), 2);
}

#[test]
fn category_two_pair() {
    let xs = [
        Card::new(Rank::Queen, Suit::Clubs),
        Card::new(Rank::Queen, Suit::Diamonds),
        Card::new(Rank::Four, Suit::Hearts),
        Card::new(Rank::Four, Suit::Spades),
        Card::new(Rank::Nine, Suit::Clubs),
    ];
    let e = best(&xs);
    assert!(matches!(e.category(), Category::TwoPair));
    assert_eq!(e.kickers(), &[Card::new(Rank::Nine, Suit::Clubs)]);
}

#[test]
fn category_pair() {
    let xs = [
        Card::new(Rank::Ace, Suit::Clubs),
        Card::new(Rank::Ace, Suit::Diamonds),
        Card::new(Rank::Four, Suit::Hearts),
        Card::new(Rank::Seven, Suit::Spades),
        Card::new(Rank::Nine, Suit::Clubs),
    ];
    let e = best(&xs);
    assert!(matches!(e.category(), Category::Pair));
    assert_eq!(e.term(), "One Pair");
}

#[test]
fn category_high_card() {
    let xs = [
        Card::new(Rank::King, Suit::Clubs),
        Card::new(Rank::Queen, Suit::Diamonds),
        Card::new(Rank::Four, Suit::Hearts),
        Card::new(Rank::Seven, Suit::Spades),
        Card::new(Rank::Nine, Suit::Clubs),
    ];
    let e = best(&xs);
    assert!(matches!(e.category(), Category::HighCard));
    assert_eq!(e.term(), "King High");
    assert_eq!(e.kickers().len(), 4);
}

#[test]
fn evaluate_lists_every_pattern_present() {
    // Trips, a pair, the full house they make, and the high card.
    let xs = [
        Card::new(Rank::Two, Suit::Clubs),
        Card::new(Rank::Two, Suit::Diamonds),
        Card::new(Rank::Two, Suit::Hearts),
        Card::new(Rank::Five, Suit::Spades),
        Card::new(Rank::Five, Suit::Clubs),
        Card::new(Rank::Nine, Suit::Hearts),
        Card::new(Rank::King, Suit::Diamonds),
    ];
    assert_eq!(
        categories(&xs),
        vec![Category::HighCard, Category::Pair, Category::ThreeOfAKind, Category::FullHouse]
    );
}

#[test]
fn a_flush_and_a_straight_both_show_up() {
    let xs = [
        Card::new(Rank::Nine, Suit::Hearts),
        Card::new(Rank::Eight, Suit::Clubs),
        Card::new(Rank::Seven, Suit::Hearts),
        Card::new(Rank::Six, Suit::Hearts),
        Card::new(Rank::Five, Suit::Diamonds),
        Card::new(Rank::Two, Suit::Hearts),
        Card::new(Rank::King, Suit::Hearts),
    ];
    let cats = categories(&xs);
    assert!(cats.contains(&Category::Straight));
    assert!(cats.contains(&Category::Flush));
    assert!(!cats.contains(&Category::StraightFlush));
    assert_eq!(best(&xs).category(), Category::Flush);
}
