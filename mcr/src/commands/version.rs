/// Get the version string for mcr and libmcr
pub fn get_version_string() -> String {
    format!(
        "mcr {}\nlibmcr {}",
        env!("CARGO_PKG_VERSION"),
        libmcr::version()
    )
}

/// Print version information to stdout
pub fn print_version() {
    println!("{}", get_version_string());
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
