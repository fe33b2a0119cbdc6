mod contact;
mod health_check;

// allow external `use` statements to skip `contact` etc
pub use contact::contact;
pub use health_check::health_check;

/// Walk and print the chain of `source` errors; used by the `Debug` impls of
/// route error enums, so the logs carry the full cause while `Display` stays
/// caller-facing
pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{e}\n")?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{cause}")?;
        current = cause.source();
    }
    Ok(())
}
