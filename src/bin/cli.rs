//! dialdex CLI
//!
//! Interactive menu shell over the contact store. Prompts for input,
//! invokes the store's four operations, and prints search latency.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use clap::Parser;
use dialdex::{Config, Contact, ContactStore};
use tracing_subscriber::{fmt, EnvFilter};

/// dialdex interactive contact store
#[derive(Parser, Debug)]
#[command(name = "dialdex-cli")]
#[command(about = "Persistent contact store with trie-indexed search")]
#[command(version)]
struct Args {
    /// Log file path
    #[arg(short, long, default_value = "address_book.dat")]
    file: String,

    /// Insert two demo contacts at startup
    #[arg(long)]
    seed: bool,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,dialdex=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let args = Args::parse();

    tracing::info!("dialdex v{}", dialdex::VERSION);
    tracing::info!("Log file: {}", args.file);

    let config = Config::builder().log_path(&args.file).build();

    let store = match ContactStore::open(config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            std::process::exit(1);
        }
    };

    if args.seed {
        seed_demo_contacts(&store);
    }

    run_menu(&store);
}

/// Insert the demo contacts used by the original address book
fn seed_demo_contacts(store: &ContactStore) {
    let demo = [
        Contact::new("Avinash", "test", "Bengaluru", "9676806379"),
        Contact::new("first", "last", "test address ", "1234567890"),
    ];
    for contact in demo {
        if let Err(e) = store.add(&contact) {
            tracing::error!("Failed to seed contact: {}", e);
        }
    }
}

/// Interactive menu loop
///
/// A store error aborts only the current operation; the loop continues.
fn run_menu(store: &ContactStore) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n1. Add Contact");
        println!("2. Search by Phone Number");
        println!("3. Search by Name");
        println!("4. Exit");
        print!("Choose an option: ");
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => break, // EOF on stdin
        };

        let choice: u32 = match line.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                println!("Invalid choice. Please enter a number.");
                continue;
            }
        };

        let result = match choice {
            1 => add_contact(store, &mut lines),
            2 => search(store, &mut lines, "Enter Phone Number to Search: ", |s, q| {
                s.search_by_phone(q)
            }),
            3 => search(store, &mut lines, "Enter Name to Search: ", |s, q| {
                s.search_by_name(q)
            }),
            4 => {
                if let Err(e) = store.close() {
                    eprintln!("Error closing store: {}", e);
                }
                println!("Exiting. Goodbye!");
                return;
            }
            _ => {
                println!("Invalid choice. Please try again.");
                continue;
            }
        };

        if let Err(e) = result {
            eprintln!("Error: {}", e);
        }
    }
}

fn add_contact(
    store: &ContactStore,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> dialdex::Result<()> {
    let first_name = prompt(lines, "Enter First Name: ")?;
    let last_name = prompt(lines, "Enter Last Name: ")?;
    let address = prompt(lines, "Enter Address: ")?;
    let phone_number = prompt(lines, "Enter Phone Number: ")?;

    store.add(&Contact::new(first_name, last_name, address, phone_number))?;
    println!("Contact added successfully!");
    Ok(())
}

fn search(
    store: &ContactStore,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt_text: &str,
    lookup: impl Fn(&ContactStore, &str) -> dialdex::Result<Option<Contact>>,
) -> dialdex::Result<()> {
    let query = prompt(lines, prompt_text)?;

    let start = Instant::now();
    let result = lookup(store, &query)?;
    let elapsed = start.elapsed();

    match result {
        Some(contact) => println!("Search Result: {}", contact),
        None => println!("Contact not found."),
    }
    println!("Search time: {:.4} milliseconds", elapsed.as_secs_f64() * 1e3);
    Ok(())
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> dialdex::Result<String> {
    print!("{}", text);
    let _ = io::stdout().flush();
    match lines.next() {
        Some(line) => Ok(line?),
        None => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed").into()),
    }
}
