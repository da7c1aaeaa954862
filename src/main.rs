fn main() {
    kuhn_report::cli::run();
}
