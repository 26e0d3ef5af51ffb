fn main() {
    if let Err(err) = datasense::run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
