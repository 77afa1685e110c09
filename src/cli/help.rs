//! Log level selection for the command line

/// Log filter for the given verbosity; without flags the configured level applies
pub fn get_log_level(verbose: u8, configured: &str) -> &str {
    match verbose {
        0 => configured,
        1 => "debug",
        _ => "trace",
    }
}
