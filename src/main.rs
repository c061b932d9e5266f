use std::env;
use std::process;

use chain_nfa_compiler::{compile, matches, Automaton, StateKind};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => demo(),
        3 => run(&args[1], &args[2]),
        _ => {
            eprintln!("usage: {} <pattern> <input>", args[0]);
            process::exit(2);
        }
    }
}

/// Match a single input against a pattern, reporting the result through the
/// exit code: 0 on match, 1 on non-match, 2 on compile error.
fn run(pattern: &str, input: &str) -> ! {
    match compile(pattern) {
        Ok(automaton) => {
            if matches(&automaton, input) {
                println!("match");
                process::exit(0);
            } else {
                println!("no match");
                process::exit(1);
            }
        }
        Err(err) => {
            eprintln!("compile error: {}", err);
            process::exit(2);
        }
    }
}

fn demo() {
    println!("Spliced-Chain NFA - Structure and Matching Demo");
    println!("===============================================");

    let pattern = "a*4.+hi";
    println!("\n=== Pattern: '{}' ===", pattern);

    let automaton = match compile(pattern) {
        Ok(automaton) => automaton,
        Err(err) => {
            eprintln!("failed to compile: {}", err);
            process::exit(2);
        }
    };

    print_automaton(&automaton);

    println!();
    for input in ["aaaaaa4uhi", "4uhi", "meow"] {
        println!("{:?} -> {}", input, matches(&automaton, input));
    }
}

fn print_automaton(automaton: &Automaton) {
    println!("Start state: {}", automaton.start);
    println!("Terminal state: {}", automaton.terminal);
    println!("States:");

    for (id, state) in automaton.states.iter().enumerate() {
        let kind = match state.kind {
            StateKind::Start => "START".to_string(),
            StateKind::Terminal => "TERMINAL".to_string(),
            StateKind::Literal(ch) => format!("'{}'", ch),
            StateKind::Wildcard => ".".to_string(),
            StateKind::Repeat { min, inner } => {
                format!("REPEAT(min={}, inner={})", min, inner)
            }
        };
        println!("  {}: {} -> {:?}", id, kind, state.edges);
    }
}
