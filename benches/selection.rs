use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordle_entropy::{
    estimate_distribution, rank_guesses, select_guess, CandidatePool, Vocabulary, Word,
};

/// Consonant-vowel-consonant-vowel-consonant words; enough of them to make the
/// scan non-trivial without shipping a word list.
fn synthetic_words() -> Vec<Word> {
    let consonants = b"bdlmrst";
    let vowels = b"aeio";
    let mut words = Vec::new();
    for &a in consonants {
        for &b in vowels {
            for &c in consonants {
                for &d in vowels {
                    for &e in consonants {
                        let bytes = [a, b, c, d, e];
                        if let Ok(word) = Word::new(std::str::from_utf8(&bytes).unwrap()) {
                            words.push(word);
                        }
                    }
                }
            }
        }
    }
    words
}

fn bench_selection(c: &mut Criterion) {
    let words = synthetic_words();
    let vocabulary = Vocabulary::new(words.iter().copied());
    let pool = CandidatePool::new(words.iter().step_by(4).copied());
    let guess = words[0];

    c.bench_function("estimate_distribution", |b| {
        b.iter(|| estimate_distribution(black_box(&guess), black_box(&pool)))
    });

    c.bench_function("select_guess", |b| {
        b.iter(|| select_guess(black_box(&vocabulary), black_box(&pool)))
    });

    c.bench_function("rank_guesses_sequential", |b| {
        b.iter(|| rank_guesses(black_box(&vocabulary), black_box(&pool), 10, false))
    });
}

criterion_group!(benches, bench_selection);
criterion_main!(benches);
