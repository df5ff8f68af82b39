fn main() {
    if let Err(err) = odoofit::cli::run() {
        odoofit::ui::eprintln_error(&err);
        std::process::exit(odoofit::exit::exit_code(&err));
    }
}
