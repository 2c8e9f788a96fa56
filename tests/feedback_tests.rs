use mastermind_bot::{Code, Feedback, Oracle, Rule};

fn code(symbols: &[u8]) -> Code {
    Code::new(symbols.to_vec(), 6).unwrap()
}

#[test]
fn test_exact_perfect_match() {
    let guess = code(&[1, 1, 2, 2]);
    let feedback = Rule::ExactColor.score(&guess, &guess);
    assert_eq!(feedback, Feedback::Pegs { hits: 4, near: 0 });
    assert!(feedback.is_win(4));
}

#[test]
fn test_exact_no_matches() {
    let guess = code(&[1, 1, 2, 2]);
    let target = code(&[3, 4, 5, 6]);
    assert_eq!(
        Rule::ExactColor.score(&guess, &target),
        Feedback::Pegs { hits: 0, near: 0 }
    );
}

#[test]
fn test_exact_all_near() {
    let guess = code(&[1, 2, 3, 4]);
    let target = code(&[4, 3, 2, 1]);
    assert_eq!(
        Rule::ExactColor.score(&guess, &target),
        Feedback::Pegs { hits: 0, near: 4 }
    );
}

#[test]
fn test_exact_duplicates_not_double_counted() {
    let guess = code(&[1, 1, 2, 3]);
    let target = code(&[1, 2, 2, 2]);
    assert_eq!(
        Rule::ExactColor.score(&guess, &target),
        Feedback::Pegs { hits: 2, near: 0 }
    );

    let guess = code(&[1, 1, 2, 2]);
    let target = code(&[2, 2, 1, 1]);
    assert_eq!(
        Rule::ExactColor.score(&guess, &target),
        Feedback::Pegs { hits: 0, near: 4 }
    );
}

#[test]
fn test_exact_hits_full_iff_equal_and_bounded() {
    let universe = Code::universe(3, 3);
    for guess in &universe {
        for target in &universe {
            let Feedback::Pegs { hits, near } = Rule::ExactColor.score(guess, target) else {
                panic!("exact rule must produce peg feedback");
            };
            assert_eq!(hits == 3, guess == target);
            assert!(usize::from(hits) + usize::from(near) <= 3);
        }
    }
}

#[test]
fn test_exact_feedback_symmetric() {
    let universe = Code::universe(3, 3);
    for guess in &universe {
        for target in &universe {
            assert_eq!(
                Rule::ExactColor.score(guess, target),
                Rule::ExactColor.score(target, guess)
            );
        }
    }
}

#[test]
fn test_manhattan_distance() {
    let guess = code(&[4, 4, 4, 4]);
    let target = code(&[6, 6, 6, 6]);
    assert_eq!(Rule::Manhattan.score(&guess, &target), Feedback::Distance(8));

    let same = Rule::Manhattan.score(&target, &target);
    assert_eq!(same, Feedback::Distance(0));
    assert!(same.is_win(4));
}

#[test]
fn test_hamming_distance() {
    let guess = code(&[1, 2, 3, 4]);
    assert_eq!(
        Rule::Hamming.score(&guess, &code(&[1, 2, 3, 4])),
        Feedback::Distance(0)
    );
    assert_eq!(
        Rule::Hamming.score(&guess, &code(&[1, 2, 4, 3])),
        Feedback::Distance(2)
    );
    assert_eq!(
        Rule::Hamming.score(&guess, &code(&[4, 3, 2, 1])),
        Feedback::Distance(4)
    );
}

#[test]
fn test_distance_rules_symmetric() {
    let universe = Code::universe(4, 2);
    for rule in [Rule::Manhattan, Rule::Hamming] {
        for guess in &universe {
            for target in &universe {
                assert_eq!(rule.score(guess, target), rule.score(target, guess));
            }
        }
    }
}

#[test]
#[should_panic(expected = "equal length")]
fn test_length_mismatch_panics() {
    let guess = Code::new(vec![1, 2, 3], 6).unwrap();
    let target = Code::new(vec![1, 2, 3, 4], 6).unwrap();
    Rule::ExactColor.score(&guess, &target);
}

#[test]
fn test_is_win_requires_all_positions() {
    assert!(!Feedback::Pegs { hits: 3, near: 1 }.is_win(4));
    assert!(Feedback::Pegs { hits: 4, near: 0 }.is_win(4));
    assert!(!Feedback::Distance(1).is_win(4));
    assert!(Feedback::Distance(0).is_win(4));
}

#[test]
fn test_parse_feedback() {
    assert_eq!(
        Rule::ExactColor.parse_feedback("2 1"),
        Some(Feedback::Pegs { hits: 2, near: 1 })
    );
    assert_eq!(
        Rule::Manhattan.parse_feedback("8"),
        Some(Feedback::Distance(8))
    );
    assert_eq!(Rule::ExactColor.parse_feedback("2"), None);
    assert_eq!(Rule::ExactColor.parse_feedback("2 1 0"), None);
    assert_eq!(Rule::Hamming.parse_feedback("1 2"), None);
    assert_eq!(Rule::Hamming.parse_feedback("x"), None);
}

#[test]
fn test_rule_from_str() {
    assert_eq!("exact".parse::<Rule>().unwrap(), Rule::ExactColor);
    assert_eq!("Manhattan".parse::<Rule>().unwrap(), Rule::Manhattan);
    assert_eq!("hamming".parse::<Rule>().unwrap(), Rule::Hamming);
    assert!("chebyshev".parse::<Rule>().is_err());
}

#[test]
fn test_default_openings() {
    assert_eq!(
        Rule::ExactColor.default_opening(6, 4).symbols(),
        &[1, 1, 2, 2]
    );
    assert_eq!(
        Rule::Manhattan.default_opening(6, 4).symbols(),
        &[4, 4, 4, 4]
    );
}
