use std::path::Path;

use anyhow::Result;

use rental_store::store::file::FileRentalStore;
use rental_store::store::RentalsRepository;

fn main() -> Result<()> {
    {
        let env_file = Path::new(".env");
        if env_file.exists() {
            dotenv::from_filename(".env").ok();
        }
    }
    pretty_env_logger::formatted_timed_builder()
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or("INFO".to_string()))
        .init();

    let data_file = std::env::var("RENTALS_FILE").unwrap_or("rentals.txt".to_string());
    let mut store = FileRentalStore::open(&data_file)?;
    log::info!("Loaded {} record(s) from {}", store.len(), data_file);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    cli::menu::run(&mut store, &mut stdin.lock(), &mut stdout.lock())
}
