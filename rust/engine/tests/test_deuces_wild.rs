use videopoker_engine::cards::{all_ranks, all_suits, Rank};
use videopoker_engine::evaluators::category_name;
use videopoker_engine::variant::Variant;

const MIXED: [&str; 5] = ["S", "C", "H", "D", "S"];

fn deuces(suits: &[&str], ranks: &[&str]) -> &'static str {
    category_name(Variant::deuces_wild().classify(suits, ranks).unwrap())
}

fn no_deuce_ranks() -> Vec<Rank> {
    all_ranks().into_iter().filter(|r| *r != Rank::Two).collect()
}

/// Every way to pick `k` ranks out of `window`, in window order.
fn choose(window: &[Rank], k: usize) -> Vec<Vec<Rank>> {
    (0u32..1 << window.len())
        .filter(|mask| mask.count_ones() as usize == k)
        .map(|mask| {
            window
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, r)| *r)
                .collect()
        })
        .collect()
}

/// `wild` deuces in varied suits followed by naturals all in `suit`.
fn suited_with_deuces(suit: &'static str, wild: usize) -> Vec<&'static str> {
    let mut suits: Vec<&str> = MIXED[..wild].to_vec();
    suits.resize(5, suit);
    suits
}

fn ranks_with_deuces(wild: usize, naturals: &[Rank]) -> Vec<&'static str> {
    let mut ranks = vec!["2"; wild];
    ranks.extend(naturals.iter().map(|r| r.symbol()));
    ranks
}

#[test]
fn four_deuces_ignores_the_fifth_card() {
    assert_eq!(deuces(&MIXED, &["2", "2", "2", "2", "K"]), "Four Deuces");
    for suit in all_suits() {
        for rank in no_deuce_ranks() {
            let suits = ["S", "C", "H", "D", suit.symbol()];
            let ranks = ["2", "2", "2", "2", rank.symbol()];
            assert_eq!(deuces(&suits, &ranks), "Four Deuces", "{:?}", ranks);
        }
    }
}

#[test]
fn natural_royal_flush_outranks_everything() {
    for suit in ["S", "C", "H", "D"] {
        assert_eq!(deuces(&[suit; 5], &["10", "J", "Q", "K", "A"]), "Natural Royal Flush");
    }
}

#[test]
fn deuces_royal_flush_with_one_to_three_deuces() {
    let royal = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];
    for suit in ["S", "C", "H", "D"] {
        for wild in 1..=3 {
            for naturals in choose(&royal, 5 - wild) {
                let suits = suited_with_deuces(suit, wild);
                let ranks = ranks_with_deuces(wild, &naturals);
                assert_eq!(deuces(&suits, &ranks), "Deuces Royal Flush", "{:?} {:?}", suits, ranks);
            }
        }
    }
}

#[test]
fn five_of_a_kind_with_one_to_three_deuces() {
    assert_eq!(deuces(&MIXED, &["2", "9", "9", "9", "9"]), "Five of a Kind");
    for wild in 1..=3 {
        for rank in no_deuce_ranks() {
            let ranks = ranks_with_deuces(wild, &vec![rank; 5 - wild]);
            assert_eq!(deuces(&MIXED, &ranks), "Five of a Kind", "{:?}", ranks);
        }
    }
}

#[test]
fn five_deuces_count_as_five_of_a_kind() {
    // only reachable with duplicate cards
    assert_eq!(deuces(&MIXED, &["2"; 5]), "Five of a Kind");
}

#[test]
fn straight_flush_with_and_without_deuces() {
    let ranks = no_deuce_ranks();
    for suit in ["S", "C", "H", "D"] {
        for wild in 0..=3 {
            for window in ranks.windows(5) {
                for naturals in choose(window, 5 - wild) {
                    if naturals.iter().all(|r| *r >= Rank::Ten) {
                        continue; // royal flush family
                    }
                    let suits = suited_with_deuces(suit, wild);
                    let hand = ranks_with_deuces(wild, &naturals);
                    assert_eq!(deuces(&suits, &hand), "Straight Flush", "{:?}", hand);
                }
            }
        }
    }
}

#[test]
fn deuces_complete_the_top_straight_flush_window() {
    assert_eq!(deuces(&["S", "H", "H", "H", "H"], &["2", "9", "J", "Q", "K"]), "Straight Flush");
}

#[test]
fn four_of_a_kind_with_zero_to_three_deuces() {
    for wild in 0..=3 {
        for rank in no_deuce_ranks() {
            let kicker = if rank == Rank::King { Rank::Four } else { Rank::King };
            let mut naturals = vec![rank; 4 - wild];
            naturals.push(kicker);
            let ranks = ranks_with_deuces(wild, &naturals);
            assert_eq!(deuces(&MIXED, &ranks), "Four of a Kind", "{:?}", ranks);
        }
    }
}

#[test]
fn full_house_with_zero_or_one_deuce() {
    assert_eq!(deuces(&MIXED, &["7", "7", "7", "3", "3"]), "Full House");
    assert_eq!(deuces(&MIXED, &["7", "7", "3", "3", "3"]), "Full House");
    assert_eq!(deuces(&MIXED, &["7", "3", "7", "3", "2"]), "Full House");
    assert_eq!(deuces(&MIXED, &["2", "A", "K", "A", "K"]), "Full House");
}

#[test]
fn flush_with_zero_to_two_deuces() {
    assert_eq!(deuces(&["H"; 5], &["3", "6", "9", "J", "K"]), "Flush");
    assert_eq!(deuces(&["S", "H", "H", "H", "H"], &["2", "3", "9", "J", "K"]), "Flush");
    assert_eq!(deuces(&["S", "C", "H", "H", "H"], &["2", "2", "3", "9", "K"]), "Flush");
}

#[test]
fn straight_with_zero_to_two_deuces() {
    let ranks = no_deuce_ranks();
    for wild in 0..=2 {
        for window in ranks.windows(5) {
            for naturals in choose(window, 5 - wild) {
                let hand = ranks_with_deuces(wild, &naturals);
                assert_eq!(deuces(&MIXED, &hand), "Straight", "{:?}", hand);
            }
        }
    }
}

#[test]
fn natural_deuce_low_straight() {
    // the 2 is wild here, standing in for the six
    assert_eq!(deuces(&MIXED, &["2", "3", "4", "5", "7"]), "Straight");
}

#[test]
fn three_of_a_kind_with_zero_to_two_deuces() {
    assert_eq!(deuces(&MIXED, &["9", "9", "9", "4", "K"]), "Three of a Kind");
    assert_eq!(deuces(&MIXED, &["2", "9", "9", "4", "K"]), "Three of a Kind");
    assert_eq!(deuces(&MIXED, &["2", "2", "9", "4", "K"]), "Three of a Kind");
}

#[test]
fn a_deuce_never_makes_two_pairs() {
    assert_eq!(deuces(&MIXED, &["2", "4", "4", "9", "K"]), "Three of a Kind");
}

#[test]
fn pairs_and_two_pairs_do_not_pay() {
    assert_eq!(deuces(&MIXED, &["4", "4", "9", "9", "K"]), "");
    assert_eq!(deuces(&MIXED, &["J", "J", "3", "8", "K"]), "");
    assert_eq!(deuces(&MIXED, &["A", "A", "3", "8", "K"]), "");
}

#[test]
fn single_deuce_without_a_pattern_loses() {
    assert_eq!(deuces(&MIXED, &["2", "4", "8", "J", "A"]), "");
}
