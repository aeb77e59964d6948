fn main() {
    if let Err(e) = chess_sim::console::run_console_loop() {
        eprintln!("console error: {e}");
        std::process::exit(1);
    }
}
