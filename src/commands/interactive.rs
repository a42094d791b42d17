//! Interactive CLI mode
//!
//! Prompts for the twelve letters side by side, then solves the puzzle.

use super::solve::{SolveConfig, solve_puzzle};
use crate::catalog::Exclusions;
use crate::core::{LETTERS_PER_SIDE, Puzzle, SIDE_COUNT, parse_letter_token};
use crate::output::{print_puzzle, print_solve_result};
use std::io::{self, Write};

/// Run the interactive mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_interactive<W: AsRef<str>>(
    config: &SolveConfig,
    dictionary: &[W],
    excluded: &Exclusions,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║             Letter Boxed Solver - Interactive Mode           ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter the puzzle one letter at a time, three letters per side.");
    println!("Type 'quit' at any prompt to exit.\n");

    loop {
        let Some(tokens) = read_sides()? else {
            println!("\n👋 Goodbye!\n");
            return Ok(());
        };

        let puzzle = match Puzzle::from_tokens(&tokens) {
            Ok(puzzle) => puzzle,
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        print_puzzle(&puzzle);
        let result = solve_puzzle(config, puzzle, dictionary, excluded);
        print_solve_result(&result, false, false);

        match get_user_input("Solve another? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => println!(),
            _ => {
                println!("\n👋 Goodbye!\n");
                return Ok(());
            }
        }
    }
}

/// Read four sides of three letters; `None` if the user quits
fn read_sides() -> Result<Option<Vec<[String; LETTERS_PER_SIDE]>>, String> {
    let mut sides = Vec::with_capacity(SIDE_COUNT);

    for side in 1..=SIDE_COUNT {
        let mut letters: [String; LETTERS_PER_SIDE] = Default::default();
        for (i, slot) in letters.iter_mut().enumerate() {
            let letter = loop {
                let input = get_user_input(&format!("Letter {} of side {side}", i + 1))?;
                if matches!(input.to_lowercase().as_str(), "quit" | "exit") {
                    return Ok(None);
                }
                match parse_letter_token(&input) {
                    Ok(c) => break c,
                    Err(e) => println!("❌ {e}"),
                }
            };
            *slot = letter.to_string();
        }
        println!();
        sides.push(letters);
    }

    Ok(Some(sides))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Err("unexpected end of input".to_string());
    }

    Ok(input.trim().to_string())
}
