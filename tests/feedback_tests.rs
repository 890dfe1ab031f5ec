use test_case::test_case;
use wordle_entropy::{compute_feedback, Feedback, FeedbackPattern, Word, WordleError};

fn word(s: &str) -> Word {
    Word::new(s).unwrap()
}

fn marks(pattern: FeedbackPattern) -> String {
    pattern
        .to_feedbacks()
        .iter()
        .map(|f| match f {
            Feedback::Correct => 'g',
            Feedback::Present => 'y',
            Feedback::Absent => 'b',
        })
        .collect()
}

#[test_case("crane", "charm" => "gygbb" ; "mixed feedback")]
#[test_case("quick", "dream" => "bbbbb" ; "all absent")]
#[test_case("speed", "creep" => "byggb" ; "duplicate letters in guess")]
#[test_case("arose", "creep" => "bgbby" ; "duplicate letters in secret")]
#[test_case("geese", "creep" => "bygbb" ; "extra copy in guess stays gray")]
#[test_case("sores", "those" => "yybyb" ; "second s already consumed")]
#[test_case("allot", "hello" => "bygyb" ; "green consumes before yellow")]
fn test_feedback_marks(guess: &str, secret: &str) -> String {
    marks(compute_feedback(&word(guess), &word(secret)))
}

#[test]
fn test_all_correct() {
    let pattern = compute_feedback(&word("crane"), &word("crane"));
    assert!(pattern.is_win());
    assert_eq!(pattern, FeedbackPattern::ALL_CORRECT);
}

#[test]
fn test_self_match_is_win() {
    for w in ["crane", "allot", "hello", "geese", "fuzzy", "mamma"] {
        assert!(compute_feedback(&word(w), &word(w)).is_win(), "{}", w);
    }
}

#[test]
fn test_allot_hello_positions() {
    let feedbacks = compute_feedback(&word("allot"), &word("hello")).to_feedbacks();
    // The l at index 2 lines up with hello's first l, so the l at index 1 can
    // only claim the second one.
    assert_eq!(feedbacks[2], Feedback::Correct);
    assert_eq!(feedbacks[1], Feedback::Present);
    assert_eq!(feedbacks[3], Feedback::Present);
    assert_eq!(feedbacks[0], Feedback::Absent);
    assert_eq!(feedbacks[4], Feedback::Absent);
}

#[test]
fn test_marks_never_exceed_secret_letters() {
    let words = [
        "crane", "allot", "hello", "geese", "creep", "speed", "eerie", "llama", "mamma", "sores",
        "those", "abbey", "babes", "kayak",
    ];
    for g in words {
        for s in words {
            let (guess, secret) = (word(g), word(s));
            let feedbacks = compute_feedback(&guess, &secret).to_feedbacks();

            let greens = feedbacks.iter().filter(|&&f| f == Feedback::Correct).count();
            let same_position = g.bytes().zip(s.bytes()).filter(|(a, b)| a == b).count();
            assert_eq!(greens, same_position, "{} vs {}", g, s);

            for letter in b'a'..=b'z' {
                let marked = g
                    .bytes()
                    .zip(feedbacks.iter())
                    .filter(|&(c, f)| c == letter && *f != Feedback::Absent)
                    .count();
                let in_guess = g.bytes().filter(|&c| c == letter).count();
                let in_secret = s.bytes().filter(|&c| c == letter).count();
                assert_eq!(marked, in_guess.min(in_secret), "{} vs {}", g, s);
            }
        }
    }
}

#[test]
fn test_calculate_validates_words() {
    let pattern = FeedbackPattern::calculate("CRANE", "charm").unwrap();
    assert_eq!(marks(pattern), "gygbb");

    assert_eq!(
        FeedbackPattern::calculate("cran", "charm"),
        Err(WordleError::InvalidWord("cran".to_string()))
    );
    assert_eq!(
        FeedbackPattern::calculate("crane", "charms"),
        Err(WordleError::InvalidWord("charms".to_string()))
    );
    assert!(FeedbackPattern::calculate("cr4ne", "charm").is_err());
}

#[test]
fn test_pattern_encoding_decoding() {
    for pattern_val in 0..FeedbackPattern::NUM_PATTERNS {
        let pattern = FeedbackPattern(pattern_val as u8);
        let feedbacks = pattern.to_feedbacks();
        let reconstructed = FeedbackPattern::new(feedbacks);
        assert_eq!(pattern, reconstructed);
    }
}

#[test]
fn test_pattern_parse() {
    let pattern = FeedbackPattern::parse("gybbb").unwrap();
    let feedbacks = pattern.to_feedbacks();
    assert_eq!(feedbacks[0], Feedback::Correct);
    assert_eq!(feedbacks[1], Feedback::Present);
    assert_eq!(feedbacks[2], Feedback::Absent);
    assert_eq!(feedbacks[3], Feedback::Absent);
    assert_eq!(feedbacks[4], Feedback::Absent);

    let pattern2 = FeedbackPattern::parse("21000").unwrap();
    assert_eq!(pattern, pattern2);
    assert_eq!(FeedbackPattern::parse("GGGGG").unwrap(), FeedbackPattern::ALL_CORRECT);
}

#[test]
fn test_pattern_parse_invalid() {
    assert_eq!(
        FeedbackPattern::parse("gybbb1"),
        Err(WordleError::InvalidPattern("gybbb1".to_string()))
    );
    assert!(FeedbackPattern::parse("gybb").is_err());
    assert!(FeedbackPattern::parse("gybzb").is_err());
}

#[test]
fn test_pattern_count() {
    let pattern = FeedbackPattern::parse("gybgb").unwrap();
    assert_eq!(pattern.count(Feedback::Correct), 2);
    assert_eq!(pattern.count(Feedback::Present), 1);
    assert_eq!(pattern.count(Feedback::Absent), 2);
}

#[test]
fn test_emoji_display() {
    let pattern = FeedbackPattern::new([
        Feedback::Correct,
        Feedback::Present,
        Feedback::Absent,
        Feedback::Absent,
        Feedback::Correct,
    ]);
    assert_eq!(pattern.to_emoji_string(), "🟩🟨⬛⬛🟩");
    assert_eq!(pattern.to_string(), "🟩🟨⬛⬛🟩");
}

#[test]
fn test_word_normalization() {
    assert_eq!(word(" CRANE\n"), word("crane"));
    assert_eq!(word("Crane").as_str(), "crane");
    assert_eq!(word("crane").to_uppercase(), "CRANE");
    assert_eq!("slate".parse::<Word>().unwrap().to_string(), "slate");
}

#[test_case("cran" ; "too short")]
#[test_case("cranes" ; "too long")]
#[test_case("cr4ne" ; "digit")]
#[test_case("crâne" ; "non ascii")]
#[test_case("" ; "empty")]
fn test_word_rejects(input: &str) {
    assert_eq!(
        Word::new(input),
        Err(WordleError::InvalidWord(input.to_string()))
    );
}

#[test]
fn test_word_order_is_lexicographic() {
    assert!(word("crane") < word("trace"));
    assert!(word("aaaab") < word("abcde"));
}

#[test]
fn test_pattern_digits_are_positional() {
    use Feedback::{Absent as B, Correct as G, Present as Y};
    assert_eq!(FeedbackPattern::new([B, B, B, B, B]).0, 0);
    assert_eq!(FeedbackPattern::new([G, B, B, B, B]).0, 2);
    assert_eq!(FeedbackPattern::new([B, Y, B, B, B]).0, 3);
    assert_eq!(FeedbackPattern::new([B, B, B, B, Y]).0, 81);
    assert_eq!(FeedbackPattern::ALL_CORRECT.0, 242);
    assert_eq!(FeedbackPattern(3).to_feedbacks(), [B, Y, B, B, B]);
    assert_eq!(FeedbackPattern(162).to_feedbacks(), [B, B, B, B, G]);
}
