use chrono::Local;

/// Report the size of a collection produced at some stage of a run,
/// e.g. `42 links from chat db`. Applied at call sites instead of
/// wrapping the producing function.
pub fn count(label: &str, n: usize) {
    println!("{n} {label}");
}

/// Timestamped progress note on stderr, kept off stdout so command
/// output stays machine-consumable.
pub fn note(message: &str) {
    eprintln!("[{}] {message}", Local::now().format("%Y-%m-%d %H:%M:%S"));
}
