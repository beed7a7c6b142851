//! Interactive driver: feeds the same keys to every hash table and prints the results side by side.
//!
//! Usage: `hash_tables [capacity] [strategy...]`, where a strategy is one of
//! `chaining`, `linear`, `quadratic` or `double`. Without a capacity the size is read from stdin.
//! Set `RUST_LOG=trace` to see every probe.

use std::env;
use std::error::Error as StdError;
use std::io::{self, BufRead, Write};
use std::process;

use hashlab::hashing::{Key, Strategy, TableSet};
use hashlab::logger::initialize_logger;
use hashlab::{Error, Result};

fn prompt<R: BufRead>(input: &mut R, message: &str) -> io::Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn parse_capacity(s: &str) -> Result<usize> {
    s.parse::<usize>()
        .map_err(|_| Error::InvalidInput(format!("'{}' is not a valid table size", s)))
}

fn parse_key(s: &str) -> Result<Key> {
    s.parse::<Key>()
        .map_err(|_| Error::InvalidInput(format!("'{}' is not an integer key", s)))
}

/// Splits a list such as `"10, 22 31,4"` on commas and whitespace.
fn parse_keys(s: &str) -> Result<Vec<Key>> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(parse_key)
        .collect()
}

fn print_menu() {
    println!("\nHash Table Operations:");
    println!("1. Insert a key");
    println!("2. Insert several keys");
    println!("3. Search for a key");
    println!("4. Display all hash tables");
    println!("5. Exit");
}

fn run() -> std::result::Result<(), Box<dyn StdError>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let capacity = match args.first() {
        Some(arg) => parse_capacity(arg)?,
        None => match prompt(&mut input, "Enter the size of hash tables: ")? {
            Some(line) => parse_capacity(&line)?,
            None => return Ok(()),
        },
    };
    let strategies = args
        .iter()
        .skip(1)
        .map(|s| s.parse())
        .collect::<Result<Vec<Strategy>>>()?;
    let mut tables = if strategies.is_empty() {
        TableSet::new(capacity)?
    } else {
        TableSet::with_strategies(capacity, &strategies)?
    };

    loop {
        print_menu();
        let choice = match prompt(&mut input, "Enter your choice: ")? {
            Some(choice) => choice,
            None => break,
        };

        match choice.as_str() {
            "1" => {
                let line = match prompt(&mut input, "Enter key to insert: ")? {
                    Some(line) => line,
                    None => break,
                };
                let key = match parse_key(&line) {
                    Ok(key) => key,
                    Err(err) => {
                        println!("{}", err);
                        continue;
                    }
                };
                println!("\nInserting {} in all tables:", key);
                for (name, outcome) in tables.insert(key) {
                    match outcome {
                        Ok(placement) => println!(
                            "{}: slot {} after {} probe(s)",
                            name, placement.index, placement.probes
                        ),
                        Err(err) => println!("{}: {}", name, err),
                    }
                }
            }
            "2" => {
                let line = match prompt(&mut input, "Enter keys separated by commas or spaces: ")? {
                    Some(line) => line,
                    None => break,
                };
                let keys = match parse_keys(&line) {
                    Ok(keys) => keys,
                    Err(err) => {
                        println!("{}", err);
                        continue;
                    }
                };
                let count = keys.len();
                let failed = tables.insert_many(keys);
                println!(
                    "\nInserted {} key(s) in all tables, {} placement(s) failed",
                    count, failed
                );
            }
            "3" => {
                let line = match prompt(&mut input, "Enter key to search: ")? {
                    Some(line) => line,
                    None => break,
                };
                let key = match parse_key(&line) {
                    Ok(key) => key,
                    Err(err) => {
                        println!("{}", err);
                        continue;
                    }
                };
                println!("\nSearch results for key {}:", key);
                for (name, found) in tables.search(key) {
                    println!("{}: {}", name, if found { "Found" } else { "Not Found" });
                }
            }
            "4" => print!("{}", tables.display()),
            "5" => {
                println!("Exiting program...");
                break;
            }
            _ => println!("Invalid choice! Please try again."),
        }
    }
    Ok(())
}

fn main() {
    initialize_logger();
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
