use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

/// Prints an informational line to stdout.
#[macro_export]
macro_rules! out {
    ($($arg:tt)*) => ($crate::out_impl($crate::Level::Info, format!($($arg)*)))
}

/// Prints a warning line to stderr.
#[macro_export]
macro_rules! warn_out {
    ($($arg:tt)*) => ($crate::out_impl($crate::Level::Warning, format!($($arg)*)))
}

/// Prints an error line to stderr.
#[macro_export]
macro_rules! err_out {
    ($($arg:tt)*) => ($crate::out_impl($crate::Level::Error, format!($($arg)*)))
}

/// Silences (or re-enables) all output from the `out!` family.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

pub fn format_line(level: Level, s: &str) -> String {
    match level {
        Level::Info => s.to_owned(),
        Level::Warning => format!("[Warn] {}", s),
        Level::Error => format!("[Error] {}", s),
    }
}

#[cfg(not(test))]
pub fn out_impl(level: Level, s: String) {
    if is_quiet() {
        return;
    }

    match level {
        Level::Info => println!("{}", format_line(level, &s)),
        Level::Warning | Level::Error => eprintln!("{}", format_line(level, &s)),
    }
}

#[cfg(test)]
pub fn out_impl(_level: Level, _s: String) {}
