use serde_json::json;
use videopoker_engine::cards::{all_ranks, all_suits, Rank, Suit};
use videopoker_engine::errors::{HandError, HandField};
use videopoker_engine::hand::Hand;
use videopoker_engine::variant::Variant;

const SUITS: [&str; 5] = ["S", "C", "H", "D", "S"];
const RANKS: [&str; 5] = ["2", "5", "9", "J", "A"];

#[test]
fn vocabulary_symbols_round_trip() {
    for suit in all_suits() {
        assert_eq!(Suit::from_symbol(suit.symbol()), Some(suit));
    }
    for rank in all_ranks() {
        assert_eq!(rank.symbol().parse::<Rank>(), Ok(rank));
    }
    assert_eq!(all_suits().len(), 4);
    assert_eq!(all_ranks().len(), 13);
}

#[test]
fn ten_is_spelled_with_two_digits() {
    assert_eq!("10".parse::<Rank>(), Ok(Rank::Ten));
    assert_eq!("T".parse::<Rank>(), Err(HandError::UnknownRank("T".into())));
    assert_eq!("s".parse::<Suit>(), Err(HandError::UnknownSuit("s".into())));
}

#[test]
fn scalar_arguments_are_type_errors() {
    let v = Variant::jacks_or_better();
    let err = v.classify_json(&json!("SSSSS"), &json!(RANKS)).unwrap_err();
    assert_eq!(err, HandError::NotASequence { field: HandField::Suits });
    assert!(err.is_shape_error());

    let err = v.classify_json(&json!(SUITS), &json!(12345)).unwrap_err();
    assert_eq!(err, HandError::NotASequence { field: HandField::Ranks });
}

#[test]
fn wrong_lengths_are_length_errors() {
    let v = Variant::jacks_or_better();
    let err = v
        .classify(&["S", "S", "S", "S", "S", "S"], &RANKS)
        .unwrap_err();
    assert_eq!(
        err,
        HandError::WrongLength {
            field: HandField::Suits,
            len: 6
        }
    );
    assert!(err.is_shape_error());

    let err = v.classify(&SUITS, &["2", "3", "4"]).unwrap_err();
    assert_eq!(
        err,
        HandError::WrongLength {
            field: HandField::Ranks,
            len: 3
        }
    );

    let empty: [&str; 0] = [];
    assert!(v.classify(&empty, &empty).is_err());
}

#[test]
fn numeric_suits_are_domain_errors() {
    for v in [Variant::jacks_or_better(), Variant::tens_or_better(), Variant::deuces_wild()] {
        let err = v
            .classify_json(&json!([1, 2, 3, 4, 5]), &json!(RANKS))
            .unwrap_err();
        assert_eq!(err, HandError::UnknownSuit("1".into()));
        assert!(!err.is_shape_error());
    }
}

#[test]
fn letter_ranks_are_domain_errors() {
    let v = Variant::tens_or_better();
    let err = v.classify(&SUITS, &["A", "B", "C", "D", "E"]).unwrap_err();
    assert_eq!(err, HandError::UnknownRank("B".into()));
    assert_eq!(err.to_string(), "Unknown card rank: B");
}

#[test]
fn error_messages_name_the_field() {
    let err = Hand::from_symbols(&["S"; 4], &RANKS).unwrap_err();
    assert_eq!(err.to_string(), "Number of card suits must be equal to 5, got 4");
    let err = Hand::from_json(&json!(SUITS), &json!(null)).unwrap_err();
    assert_eq!(err.to_string(), "Card ranks must be a list");
}

#[test]
fn validation_runs_before_any_evaluation() {
    // a royal flush with one bad suit is still an error
    let v = Variant::jacks_or_better();
    let err = v
        .classify(&["S", "S", "S", "S", "X"], &["10", "J", "Q", "K", "A"])
        .unwrap_err();
    assert_eq!(err, HandError::UnknownSuit("X".into()));
}

#[test]
fn duplicate_cards_are_accepted() {
    let v = Variant::jacks_or_better();
    let result = v
        .classify(&["S"; 5], &["9", "9", "9", "9", "K"])
        .expect("duplicates are not a validation error");
    assert!(result.is_some());
}

#[test]
fn owned_strings_are_accepted() {
    let suits: Vec<String> = SUITS.iter().map(|s| s.to_string()).collect();
    let ranks: Vec<String> = RANKS.iter().map(|s| s.to_string()).collect();
    let hand = Hand::from_symbols(&suits, &ranks).unwrap();
    assert_eq!(hand.suits()[2], Suit::Hearts);
    assert_eq!(hand.ranks()[4], Rank::Ace);
}
