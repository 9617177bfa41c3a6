//! # recson Demonstration Driver
//!
//! Walks through the codec end to end: decoding, validation, nested
//! records, encoding with derived and renamed keys, omission, and both
//! output layouts.
//!
//! ## Usage
//!
//! ```bash
//! # Run every demonstration
//! recson
//!
//! # Show version
//! recson --version
//!
//! # Show help
//! recson --help
//! ```

use eyre::{bail, Result};
use recson::{decode, encode, is_well_formed, Datum, FieldDef, FieldKind, Pretty, RecordInstance, RecordSchema};
use std::env;
use std::sync::Arc;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    for arg in &args[1..] {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-v" => {
                println!("recson {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            arg => {
                bail!("Unknown option: {}", arg);
            }
        }
    }

    decode_demo()?;
    validation_demo();
    nested_decode_demo()?;
    encode_demo()?;
    encode_with_renames_demo()?;
    pretty_demo()?;

    Ok(())
}

fn greeting_schema() -> Result<Arc<RecordSchema>> {
    Ok(Arc::new(RecordSchema::new(
        "greeting",
        vec![
            FieldDef::new("message", FieldKind::Text),
            FieldDef::new("other_message", FieldKind::Text).rename("otherMessage"),
        ],
    )?))
}

fn address_schema() -> Result<Arc<RecordSchema>> {
    Ok(Arc::new(RecordSchema::new(
        "address",
        vec![
            FieldDef::new("street", FieldKind::Text).rename("street"),
            FieldDef::new("city", FieldKind::Text).rename("city"),
            FieldDef::new("state", FieldKind::Text).rename("state"),
            FieldDef::new("zip_code", FieldKind::Int).rename("zipcode"),
        ],
    )?))
}

fn person_schema() -> Result<Arc<RecordSchema>> {
    Ok(Arc::new(RecordSchema::new(
        "person",
        vec![
            FieldDef::new("last_name", FieldKind::Text).rename("lname"),
            FieldDef::new("first_name", FieldKind::Text).rename("fname"),
            FieldDef::new("address", FieldKind::Record(address_schema()?)).rename("address"),
        ],
    )?))
}

fn book_schema() -> Result<Arc<RecordSchema>> {
    Ok(Arc::new(RecordSchema::new(
        "book",
        vec![
            FieldDef::new("isbn", FieldKind::Text).rename("isbn"),
            FieldDef::new("title", FieldKind::Text).rename("title"),
            FieldDef::new("year_published", FieldKind::Int).rename("yearpub"),
            FieldDef::new("author", FieldKind::Text).rename("author"),
            FieldDef::new("co_author", FieldKind::Text)
                .rename("coauthor")
                .omit_if_empty(),
        ],
    )?))
}

fn decode_demo() -> Result<()> {
    let data = r#"
        {
            "message": "Greetings fellow traveler",
            "otherMessage": "Good bye, little hobbit"
        }
    "#;
    let schema = greeting_schema()?;
    let rec = decode(data, &schema)?;

    println!("{}", rec.field("message").and_then(Datum::as_text).unwrap_or(""));
    println!(
        "{}",
        rec.field("other_message").and_then(Datum::as_text).unwrap_or("")
    );
    Ok(())
}

fn validation_demo() {
    let bad_data = r#"{message": "Greetings fellow traveler"}"#;
    if !is_well_formed(bad_data) {
        println!("document is not well-formed: {}", bad_data);
    }
}

fn nested_decode_demo() -> Result<()> {
    let data = r#"
        {
            "lname": "Smith",
            "fname": "John",
            "address": {
                "street": "Sulphur Springs Rd",
                "city": "Park City",
                "state": "VA",
                "zipcode": 12345
            }
        }
    "#;
    let schema = person_schema()?;
    let rec = decode(data, &schema)?;

    println!("{}", encode(&rec, Pretty::Compact));
    Ok(())
}

fn encode_demo() -> Result<()> {
    // No renames: keys derive from the field identifiers.
    let schema = Arc::new(RecordSchema::new(
        "goodbye",
        vec![FieldDef::new("some_message", FieldKind::Text)],
    )?);
    let mut rec = RecordInstance::new(&schema);
    rec.set_text("some_message", "Encode me")?;

    println!("{}", encode(&rec, Pretty::Compact));
    Ok(())
}

fn encode_with_renames_demo() -> Result<()> {
    let schema = book_schema()?;
    let mut rec = RecordInstance::new(&schema);
    rec.set_text("isbn", "9933HIST")?;
    rec.set_text("title", "Greatest of all Books")?;
    rec.set_text("author", "John Adams")?;

    // co_author stays empty, so the omit-if-empty policy drops it.
    println!("{}", encode(&rec, Pretty::Compact));
    Ok(())
}

fn pretty_demo() -> Result<()> {
    let schema = person_schema()?;
    let address_schema = address_schema()?;

    let mut rec = RecordInstance::new(&schema);
    rec.set_text("last_name", "Vader")?;
    rec.set_text("first_name", "Darth")?;

    let mut address = RecordInstance::new(&address_schema);
    address.set_text("street", "Galaxy Far Away")?;
    address.set_text("city", "Dark Side")?;
    address.set_text("state", "Tatooine")?;
    address.set_int("zip_code", 12345)?;
    rec.set_record("address", address)?;

    println!("{}", encode(&rec, Pretty::Compact));
    println!();
    println!("{}", encode(&rec, Pretty::Indented("  ")));
    Ok(())
}

fn print_usage() {
    println!("recson - schema-driven record codec demonstration");
    println!();
    println!("USAGE:");
    println!("    recson [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show this help");
    println!("    -v, --version    Show version");
}
