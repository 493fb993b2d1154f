fn main() {
    if let Err(e) = image_helpers::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
