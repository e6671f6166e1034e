fn main() {
    if let Err(err) = home_energy_alerts::app::run() {
        eprintln!("application startup failed: {err}");
        std::process::exit(1);
    }
}
