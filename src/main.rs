fn main() {
    lexis::app::cli::run();
}
