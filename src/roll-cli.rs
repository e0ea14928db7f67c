//! A simple CLI for browsing a voter roll dump and checking raw entry-form
//! submissions against the form's validation rules.

use std::fs::File;
use std::io::BufReader;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::info;

use voter_roll::form::VoterForm;
use voter_roll::model::VoterRecord;
use voter_roll::roll::{RollPage, RollView};
use voter_roll::{Error, Result};

const PROGRAM_NAME: &str = "voter-roll";

const ABOUT_TEXT: &str = "Browse a voter roll and validate new entries.

EXIT CODES:
     0: Success.
   255: Ran successfully, but the form input failed validation.
 Other: Error.";

const ROLL_PATH: &str = "ROLL_PATH";

const ROLL_PATH_HELP: &str = "The path to a JSON array of voter records";

const FORM_PATH: &str = "FORM_PATH";

const FORM_PATH_HELP: &str = "The path to a JSON object of raw form fields\n\
(string values, camelCase keys)";

const QUERY: &str = "QUERY";

const PAGE: &str = "PAGE";

const PAGE_SIZE: &str = "PAGE_SIZE";

/// Construct the CLI configuration.
fn cli() -> Command {
    // Make the build dirty when the toml changes.
    include_str!("../Cargo.toml");

    clap::command!(PROGRAM_NAME)
        .about(ABOUT_TEXT)
        .subcommand_required(true)
        .subcommand(
            Command::new("list")
                .about("Print one page of the roll, optionally filtered")
                .arg(
                    Arg::new(ROLL_PATH)
                        .help(ROLL_PATH_HELP)
                        .action(ArgAction::Set)
                        .required(true),
                )
                .arg(
                    Arg::new(QUERY)
                        .long("query")
                        .short('q')
                        .help("Free-text search across all record fields")
                        .action(ArgAction::Set)
                        .default_value(""),
                )
                .arg(
                    Arg::new(PAGE)
                        .long("page")
                        .short('p')
                        .help("1-indexed page number")
                        .value_parser(value_parser!(usize))
                        .action(ArgAction::Set)
                        .default_value("1"),
                )
                .arg(
                    Arg::new(PAGE_SIZE)
                        .long("page-size")
                        .help("Records per page")
                        .value_parser(value_parser!(usize))
                        .action(ArgAction::Set)
                        .default_value("15"),
                ),
        )
        .subcommand(
            Command::new("validate")
                .about("Validate a raw entry-form submission")
                .arg(
                    Arg::new(FORM_PATH)
                        .help(FORM_PATH_HELP)
                        .action(ArgAction::Set)
                        .required(true),
                ),
        )
}

/// Load a roll dump: a JSON array of voter records.
fn load_roll(path: &str) -> Result<Vec<VoterRecord>> {
    let file = File::open(path).map_err(|err| Error::io(path, err))?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Load a raw form submission: a JSON object of string fields.
fn load_form(path: &str) -> Result<VoterForm> {
    let file = File::open(path).map_err(|err| Error::io(path, err))?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Print one page of results as an aligned table with a results footer.
fn print_page(page: &RollPage) {
    println!(
        "{:>6}  {:<22}  {:<22}  {:<10}  {:<20}  {:<17}  {:>3}  {}",
        "Serial", "Name", "Guardian's Name", "Ward/No", "House Name", "Gender", "Age", "ID Card No",
    );
    for record in &page.records {
        println!(
            "{:>6}  {:<22}  {:<22}  {:<10}  {:<20}  {:<17}  {:>3}  {}",
            record.serial_no,
            record.name,
            record.guardian_name,
            record.old_ward_house_no,
            record.house_name,
            record.gender.as_str(),
            record.age,
            record.id_card_no,
        );
    }
    println!();
    println!(
        "Results: {}    Page {} of {}",
        page.pagination.total(),
        page.pagination.page_num(),
        page.pagination.total_pages(),
    );
}

/// Run the list subcommand and return the exit code.
fn run_list(args: &ArgMatches) -> u8 {
    let path: &String = args.get_one(ROLL_PATH).unwrap(); // Required argument is guaranteed to be present.
    let query: &String = args.get_one(QUERY).unwrap(); // Defaulted arguments are always present.
    let page_num: usize = *args.get_one(PAGE).unwrap();
    let page_size: usize = *args.get_one(PAGE_SIZE).unwrap();

    let records = match load_roll(path) {
        Ok(records) => records,
        Err(err) => {
            println!("{err}");
            return 1;
        }
    };
    info!("Loaded {} record(s) from {path}", records.len());

    let mut view = RollView::with_page_size(page_size);
    view.set_query(query);
    view.set_page(page_num);
    print_page(&view.page(&records));
    0
}

/// Run the validate subcommand and return the exit code.
fn run_validate(args: &ArgMatches) -> u8 {
    let path: &String = args.get_one(FORM_PATH).unwrap(); // Required argument is guaranteed to be present.

    let form = match load_form(path) {
        Ok(form) => form,
        Err(err) => {
            println!("{err}");
            return 1;
        }
    };

    match form.validate() {
        Ok(record) => {
            println!("Validation succeeded.");
            // Unwrap valid because `VoterRecord` serialization doesn't fail.
            println!("{}", serde_json::to_string_pretty(&record).unwrap());
            0
        }
        Err(errors) => {
            println!("Validation failed:");
            for (field, message) in &errors {
                println!("  {field}: {message}");
            }
            255
        }
    }
}

/// Dispatch to the chosen subcommand.
fn run(args: &ArgMatches) -> u8 {
    match args.subcommand() {
        Some(("list", sub_args)) => run_list(sub_args),
        Some(("validate", sub_args)) => run_validate(sub_args),
        _ => unreachable!("a subcommand is required"),
    }
}

fn main() {
    // Set up logging.
    log4rs::init_file("log4rs.yaml", Default::default()).expect("Failed to initialise logging");

    let args = cli().get_matches();
    let exit_code = run(&args);
    std::process::exit(exit_code.into())
}
