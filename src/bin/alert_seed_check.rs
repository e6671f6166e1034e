use home_energy_alerts::adapters::seed_file::load_seed_file;
use home_energy_alerts::domain::alert::{AlertCategory, AlertFilter};
use home_energy_alerts::domain::alert_store::AlertStore;

fn main() {
    if let Err(error) = run() {
        eprintln!("seed check failed: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut path: Option<String> = None;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "--path" => {
                let Some(value) = args.get(index + 1) else {
                    return Err("--path requires a value".to_string());
                };
                path = Some(value.clone());
                index += 2;
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            other => {
                return Err(format!("unknown argument: {other}"));
            }
        }
    }

    let Some(path) = path else {
        return Err("--path is required".to_string());
    };

    let seed = load_seed_file(&path).map_err(|error| error.to_string())?;
    let store = AlertStore::new(seed).map_err(|error| error.to_string())?;

    println!("seed file: {path}");
    println!("all: {}", store.list(AlertFilter::All).len());
    println!("unread: {}", store.list(AlertFilter::Unread).len());
    for category in AlertCategory::ALL {
        println!(
            "{category}: {}",
            store.list(AlertFilter::Category(category)).len()
        );
    }
    Ok(())
}

fn print_help() {
    println!("alert_seed_check");
    println!();
    println!("Usage:");
    println!("  cargo run --bin alert_seed_check -- --path <file>");
    println!();
    println!("Options:");
    println!("  --path <file>   alert seed json to validate");
}
