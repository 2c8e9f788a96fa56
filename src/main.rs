//! Mastermind Bot CLI
//!
//! Session driver for the minimax solver: interactive assistant, self-play,
//! known-secret solving, a human-guessing mode and a full-universe benchmark.

use mastermind_bot::{
    Code, Oracle, Outcome, Rule, Solver, Transcript, DEFAULT_COLORS, DEFAULT_POSITIONS,
};
use rand::thread_rng;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

const USAGE_TEXT: &str = include_str!("text/usage.txt");

#[derive(Debug, Clone, Copy)]
struct Options {
    colors: u8,
    positions: usize,
    rule: Rule,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS,
            positions: DEFAULT_POSITIONS,
            rule: Rule::ExactColor,
        }
    }
}

/// Split `--colors`, `--positions` and `--rule` out of the argument list,
/// returning the remaining positional arguments.
fn parse_options(args: &[String]) -> Result<(Options, Vec<String>), String> {
    let mut options = Options::default();
    let mut positional = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--colors" => {
                let value = iter.next().ok_or("--colors needs a value")?;
                options.colors = value
                    .parse()
                    .map_err(|_| format!("invalid color count: {}", value))?;
                if options.colors == 0 {
                    return Err("--colors must be at least 1".into());
                }
            }
            "--positions" => {
                let value = iter.next().ok_or("--positions needs a value")?;
                options.positions = value
                    .parse()
                    .map_err(|_| format!("invalid position count: {}", value))?;
                if options.positions == 0 {
                    return Err("--positions must be at least 1".into());
                }
            }
            "--rule" => {
                let value = iter.next().ok_or("--rule needs a value")?;
                options.rule = Rule::from_str(value)?;
            }
            other => positional.push(other.to_string()),
        }
    }

    Ok((options, positional))
}

fn print_transcript(transcript: &Transcript) {
    for round in &transcript.rounds {
        println!(
            "[Guess #{}] {} => {}",
            round.number, round.guess, round.feedback
        );
    }
    println!();
    match transcript.outcome {
        Outcome::Solved { rounds } => println!("Solved in {} round(s).", rounds),
        Outcome::OutOfRounds { rounds } => {
            println!("Gave up after the {}-round cap.", rounds)
        }
    }
}

fn run_selfplay(options: Options, secret: Option<Code>) {
    let mut solver = Solver::new(options.colors, options.positions, options.rule);
    let secret = secret.unwrap_or_else(|| {
        Code::random(options.colors, options.positions, &mut thread_rng())
    });
    let opening = options
        .rule
        .default_opening(options.colors, options.positions);

    println!("=== Mastermind Self-Play ({} rule) ===", options.rule);
    println!("Secret code (unknown to solver): {}", secret);
    println!();

    match solver.solve_for_target(&secret, Some(opening), None) {
        Ok(transcript) => print_transcript(&transcript),
        Err(err) => eprintln!("error: {}", err),
    }
}

fn run_benchmark(options: Options) {
    let solver = Solver::new(options.colors, options.positions, options.rule);
    let opening = options
        .rule
        .default_opening(options.colors, options.positions);

    println!(
        "Solving all {} possible secrets ({} rule)...",
        solver.universe().len(),
        options.rule
    );

    let start = std::time::Instant::now();
    let distribution = match solver.benchmark_round_distribution(Some(&opening)) {
        Ok(distribution) => distribution,
        Err(err) => {
            eprintln!("error: {}", err);
            return;
        }
    };
    let elapsed = start.elapsed();

    let total: usize = distribution.iter().map(|(_, n)| n).sum();
    let total_rounds: usize = distribution.iter().map(|(rounds, n)| rounds * n).sum();

    println!();
    println!("Round distribution:");
    for (rounds, secrets) in &distribution {
        let pct = *secrets as f64 / total as f64 * 100.0;
        println!("  {} round(s): {:>6} ({:>5.1}%)", rounds, secrets, pct);
    }
    println!();
    println!("Average rounds: {:.3}", total_rounds as f64 / total as f64);
    println!("Time elapsed: {:.2?}", elapsed);
}

/// The out-of-scope human game: the machine hides a code, you guess.
fn run_play(options: Options) {
    let secret = Code::random(options.colors, options.positions, &mut thread_rng());
    let rule = options.rule;

    println!("Welcome to Mastermind!");
    println!(
        "The secret code has {} positions, each a symbol from 1 to {}.",
        options.positions, options.colors
    );
    println!("Enter guesses as space-separated numbers, or 'quit' to stop.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("guess> ");
        stdout.flush().unwrap();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap() == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if matches!(trimmed, "quit" | "exit" | "q") {
            println!("The secret was {}.", secret);
            break;
        }

        let guess = match Code::parse(trimmed, options.colors, options.positions) {
            Ok(guess) => guess,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };

        let feedback = rule.score(&guess, &secret);
        println!("Score: {}", feedback);
        if feedback.is_win(options.positions) {
            println!("You found the secret code!");
            break;
        }
    }
}

fn run_interactive(options: Options) {
    let mut solver = Solver::new(options.colors, options.positions, options.rule);
    let rule = options.rule;

    println!(
        "mastermind-bot: {} colors, {} positions, {} rule",
        options.colors, options.positions, options.rule
    );
    println!("{} possible codes.", solver.universe().len());
    println!("Type 'help' for commands or 'suggest' to get started.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush().unwrap();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap() == 0 {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" | "?" => {
                println!("{}", USAGE_TEXT);
            }
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "suggest" | "s" | "best" => match solver.select_guess() {
                Some(guess) => {
                    println!();
                    println!("Best guess: {}", guess);
                    println!("  Worst case: {} candidates", solver.worst_case_for(&guess));
                    println!("  Remaining possibilities: {}", solver.remaining_count());
                    println!();
                }
                None => {
                    println!("No candidates remaining. Use 'reset' to start over.");
                }
            },
            "top" | "t" => {
                let n: usize = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(5);
                let top = solver.best_guesses(n);

                if top.is_empty() {
                    println!("No candidates remaining.");
                } else {
                    println!();
                    println!("Top {} guesses:", top.len());
                    println!("{:>4} {:>12} {:>12} Candidate?", "#", "Code", "Worst case");
                    println!("{}", "-".repeat(46));
                    for (i, analysis) in top.iter().enumerate() {
                        println!(
                            "{:>4} {:>12} {:>12} {}",
                            i + 1,
                            analysis.code.to_string(),
                            analysis.worst_case,
                            if analysis.is_candidate { "yes" } else { "" }
                        );
                    }
                    println!();
                }
            }
            "feedback" | "f" | "fb" => {
                if parts.len() < 1 + options.positions + 1 {
                    println!("Usage: feedback <{} symbols> <feedback>", options.positions);
                    println!("Example (exact rule): feedback 1 1 2 2 0 1");
                    continue;
                }

                let code_part = parts[1..=options.positions].join(" ");
                let feedback_part = parts[options.positions + 1..].join(" ");

                let guess = match Code::parse(&code_part, options.colors, options.positions) {
                    Ok(guess) => guess,
                    Err(err) => {
                        println!("{}", err);
                        continue;
                    }
                };
                let feedback = match rule.parse_feedback(&feedback_part) {
                    Some(feedback) => feedback,
                    None => {
                        println!("Invalid feedback for the {} rule: {}", rule, feedback_part);
                        continue;
                    }
                };

                let prev_count = solver.remaining_count();
                let new_count = solver.apply_feedback(&guess, feedback);

                println!();
                println!("Guess: {}", guess);
                println!("Feedback: {}", feedback);
                println!(
                    "Eliminated {} codes ({} -> {})",
                    prev_count - new_count,
                    prev_count,
                    new_count
                );

                if feedback.is_win(options.positions) {
                    println!();
                    println!("That was the secret. Solved!");
                } else if new_count == 0 {
                    println!();
                    println!("No codes match this feedback sequence!");
                    println!("This indicates an error. Use 'reset' to start over.");
                } else if new_count <= 10 {
                    println!();
                    println!("Remaining codes:");
                    for candidate in solver.candidates() {
                        println!("  {}", candidate);
                    }
                }
                println!();
            }
            "remaining" | "r" | "left" => {
                println!();
                println!("Remaining possibilities: {}", solver.remaining_count());
                if solver.remaining_count() <= 20 {
                    for candidate in solver.candidates() {
                        println!("  {}", candidate);
                    }
                }
                println!();
            }
            "reset" => {
                solver.reset();
                println!(
                    "Reset to initial state. {} codes possible.",
                    solver.remaining_count()
                );
            }
            other => {
                println!("Unknown command: {}", other);
                println!("Type 'help' for available commands.");
            }
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (options, positional) = match parse_options(&args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {}", err);
            eprintln!("Use --help for usage information.");
            std::process::exit(1);
        }
    };

    match positional.first().map(String::as_str) {
        Some("--help") | Some("-h") => {
            println!("{}", USAGE_TEXT);
        }
        Some("selfplay") => {
            run_selfplay(options, None);
        }
        Some("solve") => {
            let symbols = positional[1..].join(" ");
            match Code::parse(&symbols, options.colors, options.positions) {
                Ok(secret) => run_selfplay(options, Some(secret)),
                Err(err) => {
                    eprintln!("error: {}", err);
                    std::process::exit(1);
                }
            }
        }
        Some("play") => {
            run_play(options);
        }
        Some("benchmark") | Some("bench") => {
            run_benchmark(options);
        }
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Use --help for usage information.");
            std::process::exit(1);
        }
        None => {
            run_interactive(options);
        }
    }
}
