//! Wordle Entropy CLI
//!
//! Suggests guesses, solves known secrets, benchmarks the solver, or helps
//! play a live game interactively.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use wordle_entropy::loader;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wordle_entropy::stats::{run_benchmark, run_sampled, summarize, BenchmarkReport};
use wordle_entropy::{
    FeedbackPattern, GameState, GameStatus, GuessAnalysis, SolverConfig, Word, WordListConfig,
    WordleSolver, MAX_ROUNDS,
};

const HELP_TEXT: &str = "\
Commands:
  suggest, s              best guess for the current round
  top [n], t [n]          the n best guesses (default 5)
  feedback <word> <pat>   record the colors for a guess, e.g. 'feedback crane gybbb'
                          (g = green, y = yellow, b = gray)
  remaining, r            list the words still possible
  reset                   start a new game
  quit, q                 exit";

#[derive(Parser)]
#[command(name = "wordle-entropy", version, about = "Entropy-maximizing Wordle solver")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Allowed guesses, one word per line
    #[arg(short, long, global = true, env = "WORDLE_VOCABULARY", default_value = "words.txt")]
    vocabulary: PathBuf,

    /// Possible secrets, one word per line (defaults to the vocabulary)
    #[arg(short, long, global = true, env = "WORDLE_ANSWERS")]
    answers: Option<PathBuf>,

    /// Rounds allowed per game
    #[arg(
        long,
        global = true,
        default_value_t = MAX_ROUNDS as u16,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    max_rounds: u16,

    /// Score guesses on a single thread
    #[arg(long, global = true)]
    sequential: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the best opening guess
    Suggest,
    /// Print the best opening guesses
    Top {
        #[arg(short, default_value_t = 5)]
        n: usize,
    },
    /// Solve for a known secret
    Solve { word: String },
    /// Interactive helper for a live game (the default)
    Play,
    /// Solve every answer and print the round distribution
    Bench {
        /// Only play the first N answers
        #[arg(short, long, conflicts_with = "sample")]
        limit: Option<usize>,
        /// Play N answers picked at random, once per run
        #[arg(short, long)]
        sample: Option<usize>,
        /// Number of sampled runs
        #[arg(short, long, default_value_t = 1, requires = "sample")]
        runs: usize,
        /// Seed for the sampler
        #[arg(long, requires = "sample")]
        seed: Option<u64>,
    },
}

fn build_solver(cli: &Cli) -> Result<WordleSolver> {
    let mut lists = WordListConfig::new(&cli.vocabulary);
    if let Some(answers) = &cli.answers {
        lists = lists.with_answers(answers);
    }
    let (vocabulary, answers) = loader::load(&lists).context("loading word lists")?;

    let mut config = SolverConfig::default().with_max_rounds(cli.max_rounds.into());
    if cli.sequential {
        config = config.sequential();
    }
    Ok(WordleSolver::new(vocabulary, answers, config))
}

fn print_analysis(analysis: &GuessAnalysis) {
    println!("Best guess: {}", analysis.word.to_uppercase());
    println!("  Entropy: {:.3} bits", analysis.entropy);
    println!("  Expected remaining: {:.1} words", analysis.expected_remaining);
    if analysis.is_possible_answer {
        println!("  ✓ This word is a possible answer");
    } else {
        println!("  ✗ This word is NOT a possible answer");
    }
}

fn print_top(top: &[GuessAnalysis]) {
    println!("{:>4} {:>8} {:>8} {:>12} Possible?", "#", "Word", "Entropy", "Exp. Remain");
    println!("{}", "-".repeat(50));
    for (i, analysis) in top.iter().enumerate() {
        println!(
            "{:>4} {:>8} {:>8.3} {:>12.1} {}",
            i + 1,
            analysis.word.to_uppercase(),
            analysis.entropy,
            analysis.expected_remaining,
            if analysis.is_possible_answer { "✓" } else { "" }
        );
    }
}

fn print_game(state: &GameState) {
    for (i, (guess, pattern)) in state.history().iter().enumerate() {
        println!("Guess {}: {} → {}", i + 1, guess.to_uppercase(), pattern);
    }
    println!();
    match state.status() {
        GameStatus::Solved { rounds_used, .. } => {
            println!("✓ Solved in {} guesses!", rounds_used)
        }
        GameStatus::Failed(reason) => println!("✗ Not solved: {}", reason),
        GameStatus::Active { round } => println!("Still playing (round {})", round),
    }
}

fn print_report(report: &BenchmarkReport, max_rounds: u16) {
    let total = report.games().max(1);

    println!("Results:");
    println!("{}", "=".repeat(40));
    println!();
    println!("Guess distribution:");
    for (guesses, count) in &report.distribution {
        let pct = *count as f64 / total as f64 * 100.0;
        let bar = "█".repeat((*count * 40 / total).max(1));
        println!("  {} guesses: {:>5} ({:>5.1}%) {}", guesses, count, pct, bar);
    }
    println!();
    println!("Solved: {:.2}%", report.win_rate() * 100.0);
    println!("Average guesses: {:.3}", report.average_rounds());
    println!("Total words: {}", report.games());
    println!("Time elapsed: {:.2?}", report.elapsed);
    if report.over_budget > 0 {
        println!("Words not solved in {} guesses: {}", max_rounds, report.over_budget);
    }
    if report.inconsistent > 0 {
        println!("Games with inconsistent feedback: {}", report.inconsistent);
    }
}

fn run_interactive(solver: &WordleSolver) -> Result<()> {
    println!(
        "Loaded {} guesses, {} possible answers.",
        solver.vocabulary().len(),
        solver.answers().len()
    );
    println!("Type 'help' for commands or 'suggest' to get started.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut state = solver.new_game();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" | "?" => println!("{}", HELP_TEXT),
            "quit" | "exit" | "q" => break,
            "suggest" | "s" | "best" => match solver.next_guess(&state) {
                Ok(analysis) => {
                    println!();
                    print_analysis(&analysis);
                    println!();
                    println!("Remaining possibilities: {}", state.pool().len());
                    println!();
                }
                Err(err) => println!("{}. Use 'reset' to start over.", err),
            },
            "top" | "t" => {
                let n: usize = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(5);
                match solver.top_guesses(&state, n) {
                    Ok(top) => {
                        println!();
                        print_top(&top);
                        println!();
                    }
                    Err(err) => println!("{}. Use 'reset' to start over.", err),
                }
            }
            "feedback" | "f" | "fb" => {
                if parts.len() < 3 {
                    println!("Usage: feedback <word> <pattern>");
                    println!("Example: feedback crane gybbb");
                    continue;
                }
                let guess = match Word::new(parts[1]) {
                    Ok(word) => word,
                    Err(err) => {
                        println!("{}", err);
                        continue;
                    }
                };
                let pattern = match FeedbackPattern::parse(parts[2]) {
                    Ok(pattern) => pattern,
                    Err(err) => {
                        println!("{}", err);
                        continue;
                    }
                };

                let prev_count = state.pool().len();
                state = match state.clone().advance_round(guess, pattern) {
                    Ok(next) => next,
                    Err(err) => {
                        println!("{}. Use 'reset' to start over.", err);
                        continue;
                    }
                };

                println!();
                println!("Guess: {}", guess.to_uppercase());
                println!("Feedback: {}", pattern);
                println!(
                    "Eliminated {} words ({} → {})",
                    prev_count - state.pool().len(),
                    prev_count,
                    state.pool().len()
                );
                match state.status() {
                    GameStatus::Solved { rounds_used, .. } => {
                        println!();
                        println!("🎉 Solved in {} guesses!", rounds_used);
                    }
                    GameStatus::Failed(reason) => {
                        println!();
                        println!("⚠️  Game over: {}. Use 'reset' to start over.", reason);
                    }
                    GameStatus::Active { .. } if state.pool().len() <= 10 => {
                        let words: Vec<String> =
                            state.pool().iter().map(Word::to_uppercase).collect();
                        println!("Remaining words: {:?}", words);
                    }
                    GameStatus::Active { .. } => {}
                }
                println!();
            }
            "remaining" | "r" | "left" => {
                let remaining = state.pool();
                println!();
                println!("Remaining possibilities: {}", remaining.len());
                if remaining.len() <= 20 {
                    for (i, word) in remaining.iter().enumerate() {
                        if i > 0 && i % 10 == 0 {
                            println!();
                        }
                        print!("{:>8}", word.to_uppercase());
                    }
                    println!();
                }
                println!();
            }
            "reset" => {
                state = solver.new_game();
                println!("Reset to initial state. {} words available.", state.pool().len());
            }
            _ => {
                println!("Unknown command: {}", parts[0]);
                println!("Type 'help' for available commands.");
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let solver = build_solver(&cli)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Suggest => {
            let analysis = solver.opening_guess()?;
            print_analysis(&analysis);
        }
        Command::Top { n } => {
            let top = solver.top_guesses(&solver.new_game(), n)?;
            print_top(&top);
        }
        Command::Solve { word } => {
            let target = Word::new(&word)?;
            if !solver.answers().contains(&target) {
                bail!("{} is not in the answer list", target);
            }
            println!("Solving for: {}", target.to_uppercase());
            println!();
            let state = solver.solve_for_target(target.as_str())?;
            print_game(&state);
        }
        Command::Play => run_interactive(&solver)?,
        Command::Bench {
            limit,
            sample,
            runs,
            seed,
        } => {
            let secrets = solver.answers().words();
            match sample {
                Some(sample) => {
                    let mut rng = match seed {
                        Some(seed) => StdRng::seed_from_u64(seed),
                        None => StdRng::from_entropy(),
                    };
                    println!("Running {} benchmarks on {} random words each...", runs, sample);
                    let reports = run_sampled(&solver, secrets, sample, runs, &mut rng)?;
                    for (i, report) in reports.iter().enumerate() {
                        println!(
                            "Run {}: {:.2}%, {:.4}, {:.2?}",
                            i + 1,
                            report.win_rate() * 100.0,
                            report.average_rounds(),
                            report.elapsed
                        );
                    }
                    let summary = summarize(&reports);
                    println!();
                    println!("Completed {} runs.", summary.runs);
                    println!(
                        "Solved = {:.2}% ({:.2})",
                        summary.win_rate.mean * 100.0,
                        summary.win_rate.std_dev * 100.0
                    );
                    println!(
                        "Average guesses = {:.4} ({:.4})",
                        summary.average_rounds.mean, summary.average_rounds.std_dev
                    );
                    println!(
                        "Time = {:.4}s ({:.4})",
                        summary.seconds.mean, summary.seconds.std_dev
                    );
                }
                None => {
                    let secrets = &secrets[..limit.unwrap_or(secrets.len()).min(secrets.len())];
                    println!("Running benchmark on {} words...", secrets.len());
                    let report = run_benchmark(&solver, secrets)?;
                    print_report(&report, cli.max_rounds);
                }
            }
        }
    }

    Ok(())
}
