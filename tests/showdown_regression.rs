use poker_combos::cards::{parse_cards, Card, Rank::*, Suit::*};
use poker_combos::evaluator::{compare_best, evaluate_best, winners, Category, Combo};

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).expect("valid card list")
}

fn best(s: &str) -> Combo {
    evaluate_best(&cards(s)).expect("non-empty card set")
}

fn with_board(hole: &str, board: &str) -> Vec<Card> {
    cards(&format!("{hole} {board}"))
}

#[test]
fn twos_full_of_fives() {
    let e = best("2c 2d 2h 5s 5c 9h Kd");
    assert_eq!(e.category(), Category::FullHouse);
    assert_eq!(
        e.main(),
        &[
            Card::new(Two, Hearts),
            Card::new(Two, Diamonds),
            Card::new(Two, Clubs),
            Card::new(Five, Spades),
            Card::new(Five, Clubs),
        ]
    );
}

#[test]
fn two_triples_make_kings_full_of_queens() {
    let e = best("Kc Kd Kh Qc Qd Qh 3s");
    assert_eq!(e.category(), Category::FullHouse);
    let ranks: Vec<_> = e.main().iter().map(|c| c.rank()).collect();
    assert_eq!(ranks, vec![King, King, King, Queen, Queen]);
}

#[test]
fn royal_flush_on_a_seven_card_set() {
    let e = best("Ah Kh Qh Jh Th 2c 3d");
    assert_eq!(e.category().ordinal(), 8);
    assert_eq!(e.to_string(), "Royal Flush: A\u{2665}, K\u{2665}, Q\u{2665}, J\u{2665}, T\u{2665}");
}

#[test]
fn pair_beats_lower_pair() {
    let board = "Ac 9d 4s 2h 6c";
    let ord = compare_best(&with_board("Ks Kh", board), &with_board("Qc Qh", board));
    assert!(ord.is_gt(), "Higher pair should beat lower pair");
}

#[test]
fn pair_kicker_breaks_ties() {
    let board = "Kc 9d 4s 2h 6c";
    // both pairs of Kings; A kicker beats Q kicker
    let ord = compare_best(&with_board("Ks Ad", board), &with_board("Kh Qd", board));
    assert!(ord.is_gt(), "Pair with higher kicker should win");
}

#[test]
fn two_pair_ordering_high_then_low_then_kicker() {
    let board = "Kc 9d 4s Ah Ac";
    // Aces and Kings beat Aces and Nines
    assert!(compare_best(&with_board("Ks 3d", board), &with_board("9s 3h", board)).is_gt());
    // Same two pair, kicker decides
    let a = best("Ah Ad 8c 8d Qs");
    let b = best("As Ac 8h 8s Js");
    assert!(a > b);
}

#[test]
fn identical_strength_ties() {
    let board = "Ac Kd Qh Js 2c";
    let hands = ["Td 3c", "Th 4d", "9c 9d"];
    let combos: Vec<Combo> = hands.iter().map(|h| evaluate_best(&with_board(h, board)).expect("non-empty")).collect();
    assert_eq!(combos[0].term(), "Broadway Straight");
    assert_eq!(combos[0], combos[1]);
    assert_eq!(winners(&combos), vec![0, 1]);
}

#[test]
fn board_plays_for_everyone() {
    let board = "9h 8h 7h 6h 5h";
    let a = with_board("2c 3d", board);
    let b = with_board("Kc Qd", board);
    assert!(compare_best(&a, &b).is_eq());
}

#[test]
fn flush_beats_straight() {
    let flush = best("Kh Th 8h 6h 3h");
    let straight = best("Ac Kd Qd Jh Ts");
    assert!(flush > straight);
}

#[test]
fn full_house_beats_flush_in_one_set() {
    let e = best("Ah Kh 8h 6h 3h 8c 8d 3c");
    assert_eq!(e.category(), Category::FullHouse);
}

#[test]
fn five_of_a_kind_tops_a_straight_flush() {
    let five = best("4c 4d 4h 4s 4c");
    let sf = best("Ah Kh Qh Jh Th");
    assert!(five > sf);
}

#[test]
fn standard_ace_does_not_wrap() {
    let e = best("Ac 2d 3h 4s 5c");
    assert_eq!(e.category(), Category::HighCard);
    assert_eq!(e.term(), "Ace High");
}

#[test]
fn lowball_ace_makes_a_wheel() {
    let mut xs = cards("2d 3h 4s 5c");
    xs.push(Card::new(LowAce, Clubs));
    let e = evaluate_best(&xs).expect("non-empty");
    assert_eq!(e.category(), Category::Straight);
    assert_eq!(e.term(), "Baby Straight");

    let mut steel = cards("2c 3c 4c 5c");
    steel.push(Card::new(LowAce, Clubs));
    assert_eq!(evaluate_best(&steel).expect("non-empty").term(), "Steel Wheel");
}

#[test]
fn kickers_are_reported() {
    let e = best("Jh Jc 2d 9s Ac 4h Kd");
    assert_eq!(e.category(), Category::Pair);
    assert_eq!(e.kickers(), &[Card::new(Ace, Clubs), Card::new(King, Diamonds), Card::new(Nine, Spades)]);
    assert_eq!(
        e.describe(),
        "One Pair: J\u{2665}, J\u{2663} (+A\u{2663}, K\u{2666}, 9\u{2660})"
    );
}
