// Integration tests for the guess-processing state machine.
// These exercise pure Rust logic so they run under `cargo test` on the host.

use hangman_web::game::keyboard;
use hangman_web::{
    BodyPart, Catalog, GameState, GuessOutcome, MAX_INCORRECT, RevealCase, Selection, Session,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn session(phrase: &str) -> Session {
    Session::new(Selection {
        category: "Test".into(),
        phrase: phrase.into(),
    })
}

#[test]
fn cat_scenario() {
    let mut s = session("CAT");
    assert_eq!(s.category(), "Test");

    assert_eq!(s.guess('C'), GuessOutcome::Hit { key: 'C', won: false });
    assert_eq!(s.masked(RevealCase::Upper), "C__");
    assert_eq!(s.state(), GameState::Playing);

    assert_eq!(s.guess('A'), GuessOutcome::Hit { key: 'A', won: false });
    assert_eq!(s.masked(RevealCase::Upper), "CA_");
    assert_eq!(s.state(), GameState::Playing);

    assert_eq!(
        s.guess('Z'),
        GuessOutcome::Miss {
            key: 'Z',
            part: BodyPart::Head,
            lost: false
        }
    );
    assert_eq!(s.incorrect(), 1);
    assert_eq!(s.state(), GameState::Playing);

    assert_eq!(s.guess('T'), GuessOutcome::Hit { key: 'T', won: true });
    assert_eq!(s.masked(RevealCase::Upper), "CAT");
    assert_eq!(s.state(), GameState::Won);
    assert_eq!(s.outcome_message().as_deref(), Some("Congratulations! You won!"));
}

#[test]
fn separated_words_win_in_any_order() {
    for order in [['A', 'B'], ['B', 'A']] {
        let mut s = session("A B");
        assert_eq!(s.words(RevealCase::Upper).len(), 2);
        assert_eq!(s.guess(' '), GuessOutcome::Ignored);
        s.guess(order[0]);
        assert_eq!(s.state(), GameState::Playing);
        s.guess(order[1]);
        assert_eq!(s.state(), GameState::Won);
        assert_eq!(s.masked(RevealCase::Upper), "A B");
    }
}

#[test]
fn six_misses_lose() {
    let mut s = session("DOG");
    let wrong = ['Q', 'X', 'Z', 'J', 'V', 'K'];
    for (i, c) in wrong.iter().enumerate() {
        assert_eq!(s.state(), GameState::Playing);
        let outcome = s.guess(*c);
        let expected_part = BodyPart::ORDER[i];
        assert_eq!(
            outcome,
            GuessOutcome::Miss {
                key: *c,
                part: expected_part,
                lost: i + 1 == wrong.len()
            }
        );
    }
    assert_eq!(s.incorrect(), MAX_INCORRECT);
    assert_eq!(s.state(), GameState::Lost);
    assert_eq!(
        s.outcome_message().as_deref(),
        Some("Game Over! The phrase was: DOG")
    );
}

#[test]
fn repeated_correct_guess_is_noop() {
    let mut s = session("CAT");
    s.guess('c');
    let guessed = s.guessed().clone();
    let incorrect = s.incorrect();
    assert_eq!(s.guess('C'), GuessOutcome::Repeated { key: 'C' });
    assert_eq!(s.guess('c'), GuessOutcome::Repeated { key: 'C' });
    assert_eq!(s.guessed(), &guessed);
    assert_eq!(s.incorrect(), incorrect);
}

#[test]
fn repeated_wrong_guess_does_not_count_twice() {
    let mut s = session("CAT");
    s.guess('z');
    assert_eq!(s.guess('Z'), GuessOutcome::Repeated { key: 'Z' });
    assert_eq!(s.incorrect(), 1);
}

#[test]
fn matching_is_case_insensitive_but_display_configurable() {
    let mut s = session("The Matrix");
    assert!(matches!(s.guess('T'), GuessOutcome::Hit { .. }));
    assert!(matches!(s.guess('m'), GuessOutcome::Hit { .. }));
    assert_eq!(s.masked(RevealCase::Upper), "T__ M_T___");
    assert_eq!(s.masked(RevealCase::AsWritten), "T__ M_t___");
}

#[test]
fn terminal_states_absorb_guesses() {
    let mut won = session("A");
    won.guess('a');
    let mut lost = session("A");
    for c in ['B', 'C', 'D', 'E', 'F', 'G'] {
        lost.guess(c);
    }
    for s in [&mut won, &mut lost] {
        let state = s.state();
        let guessed = s.guessed().clone();
        let incorrect = s.incorrect();
        for c in keyboard::all_keys() {
            assert_eq!(s.guess(c), GuessOutcome::Ignored);
        }
        assert_eq!(s.state(), state);
        assert_eq!(s.guessed(), &guessed);
        assert_eq!(s.incorrect(), incorrect);
    }
}

// Walk every key in keyboard order against every builtin phrase and check the
// counters after each step.
#[test]
fn invariants_hold_for_every_builtin_phrase() {
    let catalog = Catalog::builtin().unwrap();
    for cat in catalog.categories() {
        for phrase in &cat.phrases {
            let mut s = Session::new(Selection {
                category: cat.name.clone(),
                phrase: phrase.clone(),
            });
            let mut last_incorrect = 0;
            let mut last_guessed = 0;
            for c in keyboard::all_keys() {
                s.guess(c);
                assert!(s.incorrect() <= MAX_INCORRECT);
                assert!(s.incorrect() >= last_incorrect);
                assert!(s.guessed().len() >= last_guessed);
                last_incorrect = s.incorrect();
                last_guessed = s.guessed().len();

                let all_revealed = phrase
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .all(|c| s.is_revealed(c));
                assert_eq!(s.state() == GameState::Won, all_revealed, "{phrase}");
                assert_eq!(s.state() == GameState::Lost, s.incorrect() == MAX_INCORRECT);
            }
            assert!(s.state().is_terminal(), "{phrase} never finished");
        }
    }
}

#[test]
fn every_builtin_phrase_is_winnable() {
    let catalog = Catalog::builtin().unwrap();
    for cat in catalog.categories() {
        for phrase in &cat.phrases {
            let mut s = session(phrase);
            for c in phrase.chars().filter(|c| !c.is_whitespace()) {
                s.guess(c);
            }
            assert_eq!(s.state(), GameState::Won, "{phrase}");
            assert_eq!(s.incorrect(), 0);
        }
    }
}

#[test]
fn new_session_after_any_state_is_fresh() {
    let catalog = Catalog::builtin().unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let mut s = Session::new(catalog.select_random_phrase(&mut rng));
    for c in ['Q', 'X', 'Z', 'J', 'V', 'K', 'W', 'Y'] {
        s.guess(c);
    }
    s = Session::new(catalog.select_random_phrase(&mut rng));
    assert_eq!(s.state(), GameState::Playing);
    assert!(s.guessed().is_empty());
    assert_eq!(s.incorrect(), 0);
}
