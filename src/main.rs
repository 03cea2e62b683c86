fn main() {
    if std::env::args().any(|arg| arg == "--demo") {
        pocketgdk::interface::demo::run();
    } else {
        pocketgdk::interface::cli::run();
    }
}
