//! Display-name resolution.
//!
//! Screens receive a patient's name from up to three API responses, each of
//! which may be missing or blank. This is the explicit precedence function
//! replacing the nested optional-chaining fallbacks: callers list their
//! sources highest-precedence first and the first usable one wins.

/// Pick the first non-blank source, trimmed.
pub fn resolve_display_name<'a, I>(sources: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    sources
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|candidate| !candidate.is_empty())
        .map(str::to_owned)
}

/// Join optional given/family name parts into a single display name.
pub fn full_name(first_name: Option<&str>, last_name: Option<&str>) -> Option<String> {
    let parts: Vec<&str> = [first_name, last_name]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}
