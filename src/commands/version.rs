//! Version command

/// Run the version command.
pub fn run() {
    println!("docship {}", env!("CARGO_PKG_VERSION"));
}
