//! Interactive shell for RosterDB
//!
//! A stdin menu loop over a single in-memory `RecordStore`: add records,
//! search by id, list all records sorted by id. All input parsing and
//! output formatting happens here; the store only sees well-formed
//! records.

use std::io::{self, BufRead, Write};

use rosterdb::{Record, RecordStore};

fn main() {
    tracing_subscriber::fmt::init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    if let Err(err) = run(&mut input) {
        eprintln!("roster-shell error: {err}");
        std::process::exit(2);
    }
}

fn run(input: &mut impl BufRead) -> io::Result<()> {
    let mut store = RecordStore::new();

    loop {
        println!();
        println!("--- Record Store Menu ---");
        println!("1. Add record");
        println!("2. Search by id");
        println!("3. List all records (sorted by id)");
        println!("4. Exit");

        let Some(choice) = prompt(input, "Enter your choice: ")? else {
            break; // stdin closed
        };

        match choice.trim() {
            "1" => add_record(input, &mut store)?,
            "2" => search_record(input, &store)?,
            "3" => list_records(&store),
            "4" => {
                store.clear();
                println!("Goodbye.");
                break;
            }
            other => println!("Invalid choice '{other}'. Enter a number between 1 and 4."),
        }
    }

    Ok(())
}

fn add_record(input: &mut impl BufRead, store: &mut RecordStore) -> io::Result<()> {
    let Some(id) = prompt_parsed::<i64>(input, "Enter record id: ", "integer")? else {
        return Ok(());
    };
    let Some(name) = prompt(input, "Enter name: ")? else {
        return Ok(());
    };
    let Some(score) = prompt_parsed::<f64>(input, "Enter score: ", "number")? else {
        return Ok(());
    };

    match store.insert(Record::new(id, name, score)) {
        Ok(()) => println!("Record added."),
        Err(err) => println!("  ERROR: {err}. Skipping insertion."),
    }
    Ok(())
}

fn search_record(input: &mut impl BufRead, store: &RecordStore) -> io::Result<()> {
    let Some(id) = prompt_parsed::<i64>(input, "Enter record id to search: ", "integer")? else {
        return Ok(());
    };

    match store.get(id) {
        Some(record) => println!("  Found: {}", format_record(record)),
        None => println!("  Record with id {id} not found."),
    }
    Ok(())
}

fn list_records(store: &RecordStore) {
    let records = store.scan_sorted();
    if records.is_empty() {
        println!("  No records in the store.");
        return;
    }
    for record in records {
        println!("  {}", format_record(record));
    }
}

fn format_record(record: &Record) -> String {
    format!(
        "[id: {:<6} | name: {:<20} | score: {:.2}]",
        record.id.as_i64(),
        record.name,
        record.score
    )
}

/// Print a label, then read one line; `None` means stdin hit EOF
fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}

/// Prompt until the line parses as `T`; `None` means stdin hit EOF
fn prompt_parsed<T: std::str::FromStr>(
    input: &mut impl BufRead,
    label: &str,
    what: &str,
) -> io::Result<Option<T>> {
    loop {
        let Some(raw) = prompt(input, label)? else {
            return Ok(None);
        };
        match raw.trim().parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Invalid {what} '{}'. Try again.", raw.trim()),
        }
    }
}
