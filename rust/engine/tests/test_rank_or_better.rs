use videopoker_engine::cards::{all_ranks, all_suits, Rank};
use videopoker_engine::evaluators::{category_name, Category};
use videopoker_engine::variant::Variant;

const MIXED: [&str; 5] = ["S", "C", "H", "D", "S"];

fn jacks(suits: &[&str], ranks: &[&str]) -> &'static str {
    category_name(Variant::jacks_or_better().classify(suits, ranks).unwrap())
}

fn tens(suits: &[&str], ranks: &[&str]) -> &'static str {
    category_name(Variant::tens_or_better().classify(suits, ranks).unwrap())
}

fn both(suits: &[&str], ranks: &[&str]) -> (&'static str, &'static str) {
    (jacks(suits, ranks), tens(suits, ranks))
}

#[test]
fn royal_flush_in_every_suit() {
    for suit in ["S", "C", "H", "D"] {
        let suits = [suit; 5];
        assert_eq!(both(&suits, &["10", "J", "Q", "K", "A"]), ("Royal Flush", "Royal Flush"));
        assert_eq!(both(&suits, &["A", "Q", "10", "K", "J"]), ("Royal Flush", "Royal Flush"));
    }
}

#[test]
fn straight_flush_for_every_lower_window() {
    let ranks = all_ranks();
    // the top window is the royal flush
    for window in ranks.windows(5).take(8) {
        let symbols: Vec<&str> = window.iter().rev().map(|r| r.symbol()).collect();
        assert_eq!(jacks(&["H"; 5], &symbols), "Straight Flush", "{:?}", symbols);
        assert_eq!(tens(&["D"; 5], &symbols), "Straight Flush", "{:?}", symbols);
    }
}

#[test]
fn four_of_a_kind_never_falls_through() {
    for quad in all_ranks() {
        for kicker in all_ranks().into_iter().filter(|r| *r != quad) {
            for kicker_pos in 0..5 {
                let mut ranks = [quad.symbol(); 5];
                ranks[kicker_pos] = kicker.symbol();
                assert_eq!(jacks(&MIXED, &ranks), "Four of a Kind", "{:?}", ranks);
                assert_eq!(tens(&MIXED, &ranks), "Four of a Kind", "{:?}", ranks);
            }
        }
    }
}

#[test]
fn four_of_a_kind_boundary() {
    assert_eq!(both(&MIXED, &["9", "9", "9", "9", "K"]), ("Four of a Kind", "Four of a Kind"));
}

#[test]
fn full_house_regardless_of_order() {
    assert_eq!(both(&MIXED, &["7", "7", "7", "3", "3"]), ("Full House", "Full House"));
    assert_eq!(both(&MIXED, &["7", "7", "3", "3", "3"]), ("Full House", "Full House"));
    assert_eq!(both(&MIXED, &["3", "7", "3", "7", "3"]), ("Full House", "Full House"));
}

#[test]
fn every_pair_triple_combination_is_a_full_house() {
    for triple in all_ranks() {
        for pair in all_ranks().into_iter().filter(|r| *r != triple) {
            let ranks = [
                pair.symbol(),
                triple.symbol(),
                pair.symbol(),
                triple.symbol(),
                triple.symbol(),
            ];
            assert_eq!(jacks(&MIXED, &ranks), "Full House", "{:?}", ranks);
        }
    }
}

#[test]
fn flush_without_sequence() {
    assert_eq!(both(&["C"; 5], &["2", "5", "9", "J", "A"]), ("Flush", "Flush"));
    // flush outranks a pair
    assert_eq!(both(&["C"; 5], &["2", "5", "9", "A", "A"]), ("Flush", "Flush"));
}

#[test]
fn straight_for_every_window_with_mixed_suits() {
    let ranks = all_ranks();
    for window in ranks.windows(5) {
        let symbols: Vec<&str> = window.iter().map(|r| r.symbol()).collect();
        assert_eq!(jacks(&MIXED, &symbols), "Straight", "{:?}", symbols);
        assert_eq!(tens(&MIXED, &symbols), "Straight", "{:?}", symbols);
    }
}

#[test]
fn ace_is_high_only() {
    assert_eq!(both(&MIXED, &["A", "2", "3", "4", "5"]), ("", ""));
    assert_eq!(both(&MIXED, &["Q", "K", "A", "2", "3"]), ("", ""));
}

#[test]
fn three_of_a_kind() {
    for rank in all_ranks() {
        let others: Vec<Rank> = all_ranks()
            .into_iter()
            .filter(|r| *r != rank)
            .step_by(5)
            .take(2)
            .collect();
        let ranks = [
            rank.symbol(),
            others[0].symbol(),
            rank.symbol(),
            others[1].symbol(),
            rank.symbol(),
        ];
        assert_eq!(jacks(&MIXED, &ranks), "Three of a Kind", "{:?}", ranks);
    }
}

#[test]
fn two_pairs() {
    assert_eq!(both(&MIXED, &["4", "4", "9", "9", "K"]), ("Two Pairs", "Two Pairs"));
    assert_eq!(both(&MIXED, &["A", "2", "A", "3", "2"]), ("Two Pairs", "Two Pairs"));
}

#[test]
fn rank_thresholds_differ_only_at_ten() {
    assert_eq!(both(&MIXED, &["10", "10", "3", "5", "8"]), ("", "Tens or Better"));
    for high in ["J", "Q", "K", "A"] {
        assert_eq!(
            both(&MIXED, &[high, "3", high, "5", "8"]),
            ("Jacks or Better", "Tens or Better")
        );
    }
    for low in ["2", "3", "4", "5", "6", "7", "8", "9"] {
        let kicker = if low == "9" { "K" } else { "9" };
        assert_eq!(both(&MIXED, &[low, low, "J", kicker, "A"]), ("", ""), "{}", low);
    }
}

#[test]
fn losing_hands_are_empty() {
    assert_eq!(both(&MIXED, &["2", "4", "6", "8", "10"]), ("", ""));
    assert_eq!(both(&["S", "S", "S", "S", "H"], &["2", "7", "9", "J", "K"]), ("", ""));
}

#[test]
fn results_stay_within_the_variant() {
    for v in [Variant::jacks_or_better(), Variant::tens_or_better()] {
        for suit in all_suits() {
            for rank in all_ranks() {
                let s = [suit.symbol(), "C", "H", "D", "S"];
                let r = [rank.symbol(), "3", "8", "J", "J"];
                if let Some(c) = v.classify(&s, &r).unwrap() {
                    assert!(v.pays(c), "{} not paid by {}", c, v.name);
                    assert_ne!(c, Category::FourDeuces);
                }
            }
        }
    }
}
