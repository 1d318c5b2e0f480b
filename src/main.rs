fn main() {
    prdgen::app::cli::run();
}
