//! The interactive menu loop: dispatches numbered commands against a rental
//! store and renders records for the console.

use std::io::{BufRead, Write};

use anyhow::Result;

use rental_store::record::RentalRecord;
use rental_store::store::RentalsRepository;

use crate::{catalog, input};

const MENU: &str = "\n==== PHONE RENTAL SYSTEM ====\n\
    1. Add Rental\n\
    2. Display All Rentals\n\
    3. Display Sorted Rentals (By Renter Name)\n\
    4. Search Rental\n\
    5. Delete Rental\n\
    6. Exit\n\
    Enter choice: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    ListAll,
    ListSorted,
    Search,
    Delete,
    Exit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Command> {
        match line.trim() {
            "1" => Some(Command::Add),
            "2" => Some(Command::ListAll),
            "3" => Some(Command::ListSorted),
            "4" => Some(Command::Search),
            "5" => Some(Command::Delete),
            "6" => Some(Command::Exit),
            _ => None,
        }
    }
}

pub fn print_banner<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "========================================")?;
    writeln!(output, " Mobile Phone Rental Service v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(output, "========================================")?;
    Ok(())
}

/// Runs the menu until Exit or until the input stream closes.
pub fn run<S, R, W>(store: &mut S, input: &mut R, output: &mut W) -> Result<()>
where
    S: RentalsRepository,
    R: BufRead,
    W: Write,
{
    print_banner(output)?;
    loop {
        let line = input::prompt_line(input, output, MENU)?;
        match Command::parse(&line) {
            Some(Command::Add) => add_rental(store, input, output)?,
            Some(Command::ListAll) => display_records(store.list(), output)?,
            Some(Command::ListSorted) => display_records(&store.sorted_by_name(), output)?,
            Some(Command::Search) => search_rental(store, input, output)?,
            Some(Command::Delete) => delete_rental(store, input, output)?,
            Some(Command::Exit) => {
                writeln!(output, "Exiting...")?;
                return Ok(());
            }
            None => writeln!(output, "Invalid choice. Please try again.")?,
        }
    }
}

fn add_rental<S, R, W>(store: &mut S, input_r: &mut R, output: &mut W) -> Result<()>
where
    S: RentalsRepository,
    R: BufRead,
    W: Write,
{
    let renter_name = input::prompt_name(input_r, output)?;
    let (phone_model, model_variant) = catalog::prompt_phone(input_r, output)?;
    let start_date = input::prompt_date(input_r, output, "Enter Start Date (YYYY-MM-DD): ")?;
    let end_date = input::prompt_date(input_r, output, "Enter End Date (YYYY-MM-DD): ")?;

    let record = RentalRecord::new(renter_name, phone_model, model_variant, start_date, end_date);
    writeln!(
        output,
        "Amount to be paid: {} pesos for {} day(s).",
        record.total_amount, record.days
    )?;

    if input::prompt_yes_no(input_r, output, "Confirm rental? (yes/no): ")? {
        store.add(record)?;
        writeln!(output, "Rental record added successfully!")?;
    } else {
        writeln!(output, "Rental cancelled. Returning to menu.")?;
    }
    Ok(())
}

fn display_records<W: Write>(records: &[RentalRecord], output: &mut W) -> Result<()> {
    if records.is_empty() {
        writeln!(output, "No records found.")?;
        return Ok(());
    }
    for record in records {
        writeln!(
            output,
            "Renter: {} | Phone: {} ({}) | Start: {} | End: {} | Days: {} | Amount: {} pesos",
            record.renter_name,
            record.phone_model,
            record.model_variant,
            record.start_date,
            record.end_date,
            record.days,
            record.total_amount,
        )?;
    }
    Ok(())
}

fn search_rental<S, R, W>(store: &S, input_r: &mut R, output: &mut W) -> Result<()>
where
    S: RentalsRepository,
    R: BufRead,
    W: Write,
{
    let term = input::prompt_line(input_r, output, "Enter Renter Name or Phone Model to search: ")?;

    let matches = store.find_by_exact(&term);
    if matches.is_empty() {
        writeln!(output, "No record found with the given information.")?;
        return Ok(());
    }
    for record in matches {
        writeln!(output, "Record found:")?;
        writeln!(output, "Renter: {}", record.renter_name)?;
        writeln!(output, "Phone: {} ({})", record.phone_model, record.model_variant)?;
        writeln!(output, "Start: {}", record.start_date)?;
        writeln!(output, "End: {}", record.end_date)?;
        writeln!(output, "Days: {}", record.days)?;
        writeln!(output, "Amount: {} pesos", record.total_amount)?;
    }
    Ok(())
}

fn delete_rental<S, R, W>(store: &mut S, input_r: &mut R, output: &mut W) -> Result<()>
where
    S: RentalsRepository,
    R: BufRead,
    W: Write,
{
    let name = input::prompt_line(input_r, output, "Enter Renter Name to delete: ")?;

    if store.delete_first_by_name(&name)? {
        writeln!(output, "Record deleted successfully.")?;
    } else {
        writeln!(output, "No record found with the given Renter Name.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Cursor;

    use tempdir::TempDir;

    use rental_store::store::file::FileRentalStore;
    use rental_store::store::RentalsRepository;

    use super::{run, Command};

    fn run_session(store: &mut FileRentalStore, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run(store, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse("1"), Some(Command::Add));
        assert_eq!(Command::parse(" 6 "), Some(Command::Exit));
        assert_eq!(Command::parse("7"), None);
        assert_eq!(Command::parse("exit"), None);
    }

    #[test]
    fn test_add_flow_persists_record() {
        let tmp_dir = TempDir::new("rentals_").unwrap();
        let file = tmp_dir.path().join("rentals.txt");
        let mut store = FileRentalStore::new(file.clone());

        let shown = run_session(
            &mut store,
            "1\nJuan Dela Cruz\n1\npro\n2024-01-01\n2024-01-05\nyes\n6\n",
        );

        assert!(shown.contains("Amount to be paid: 10000 pesos for 5 day(s)."));
        assert!(shown.contains("Rental record added successfully!"));
        assert_eq!(
            fs::read_to_string(file).unwrap(),
            "Juan Dela Cruz|iPhone 16|pro|2024-01-01|2024-01-05|5|10000\n"
        );

        tmp_dir.close().unwrap();
    }

    #[test]
    fn test_add_flow_cancelled_keeps_store_empty() {
        let tmp_dir = TempDir::new("rentals_").unwrap();
        let file = tmp_dir.path().join("rentals.txt");
        let mut store = FileRentalStore::new(file.clone());

        let shown = run_session(
            &mut store,
            "1\nJuan Dela Cruz\n1\npro\n2024-01-01\n2024-01-05\nno\n6\n",
        );

        assert!(shown.contains("Rental cancelled. Returning to menu."));
        assert!(store.is_empty());
        assert!(!file.exists());

        tmp_dir.close().unwrap();
    }

    #[test]
    fn test_invalid_menu_choice_reprompts() {
        let tmp_dir = TempDir::new("rentals_").unwrap();
        let mut store = FileRentalStore::new(tmp_dir.path().join("rentals.txt"));

        let shown = run_session(&mut store, "list\n6\n");
        assert!(shown.contains("Invalid choice. Please try again."));
        assert!(shown.contains("Exiting..."));

        tmp_dir.close().unwrap();
    }

    #[test]
    fn test_display_and_delete_flow() {
        let tmp_dir = TempDir::new("rentals_").unwrap();
        let mut store = FileRentalStore::new(tmp_dir.path().join("rentals.txt"));

        let shown = run_session(
            &mut store,
            concat!(
                "2\n",
                "1\nJuan Dela Cruz\n2\nultra\n2024-02-01\n2024-02-03\nyes\n",
                "4\nJuan Dela Cruz\n",
                "5\nJuan Dela Cruz\n",
                "5\nJuan Dela Cruz\n",
                "6\n",
            ),
        );

        assert!(shown.contains("No records found."));
        assert!(shown.contains("Record found:"));
        assert!(shown.contains("Phone: Samsung Galaxy S25 (ultra)"));
        assert!(shown.contains("Record deleted successfully."));
        assert!(shown.contains("No record found with the given Renter Name."));
        assert!(store.is_empty());

        tmp_dir.close().unwrap();
    }

    #[test]
    fn test_sorted_display_leaves_store_order() {
        let tmp_dir = TempDir::new("rentals_").unwrap();
        let mut store = FileRentalStore::new(tmp_dir.path().join("rentals.txt"));

        let shown = run_session(
            &mut store,
            concat!(
                "1\nBob\n1\nbase\n2024-01-01\n2024-01-02\nyes\n",
                "1\nAlice\n1\nbase\n2024-01-01\n2024-01-02\nyes\n",
                "3\n",
                "6\n",
            ),
        );

        let alice = shown.find("Renter: Alice |").unwrap();
        let bob = shown.find("Renter: Bob |").unwrap();
        assert!(alice < bob);
        assert_eq!(store.list()[0].renter_name, "Bob");

        tmp_dir.close().unwrap();
    }
}
