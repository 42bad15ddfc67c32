//! Property tests for the scorer and the candidate filter

use bofhle::core::{Feedback, GuessRecord, Mark, Word};
use bofhle::solver::filter_candidates;
use proptest::prelude::*;

fn word() -> impl Strategy<Value = Word> {
    "[a-z]{5}".prop_map(|text| Word::new(text).unwrap())
}

fn dictionary() -> impl Strategy<Value = Vec<Word>> {
    prop::collection::vec(word(), 1..40)
}

proptest! {
    #[test]
    fn guessing_the_target_is_all_hit(guess in word()) {
        prop_assert_eq!(Feedback::score(&guess, &guess), Feedback::ALL_HIT);
    }

    #[test]
    fn feedback_has_five_symbols(guess in word(), target in word()) {
        let text = Feedback::score(&guess, &target).to_string();
        prop_assert_eq!(text.len(), 5);
        prop_assert!(text.chars().all(|c| matches!(c, 'b' | 'y' | 'g')));
    }

    #[test]
    fn hits_match_equal_positions(guess in word(), target in word()) {
        let marks = Feedback::score(&guess, &target).marks();
        for (i, mark) in marks.iter().enumerate() {
            prop_assert_eq!(*mark == Mark::Hit, guess.chars()[i] == target.chars()[i]);
        }
    }

    #[test]
    fn feedback_text_parses_back(guess in word(), target in word()) {
        let feedback = Feedback::score(&guess, &target);
        prop_assert_eq!(feedback.to_string().parse::<Feedback>(), Ok(feedback));
    }

    #[test]
    fn empty_history_keeps_everything(words in dictionary()) {
        let candidates = filter_candidates(&words, &[]);
        prop_assert_eq!(candidates.len(), words.len());
    }

    #[test]
    fn filter_never_grows_and_keeps_the_secret(
        words in dictionary(),
        guesses in prop::collection::vec(word(), 1..5),
        pick in any::<prop::sample::Index>(),
    ) {
        let secret = pick.get(&words).clone();
        let history: Vec<GuessRecord> = guesses
            .into_iter()
            .map(|guess| GuessRecord::against(guess, &secret))
            .collect();

        let mut previous = words.len();
        for rounds in 1..=history.len() {
            let candidates = filter_candidates(&words, &history[..rounds]);
            prop_assert!(candidates.len() <= previous);
            prop_assert!(candidates.contains(&&secret));
            previous = candidates.len();
        }
    }
}
