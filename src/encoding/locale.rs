//! Locale-preferred encoding lookup.

/// Encoding used when the locale names no codeset.
pub const LOCALE_DEFAULT: &str = "utf-8";

/// Return the encoding the current process locale prefers for text files.
#[cfg(not(windows))]
pub fn preferred_encoding() -> String {
    preferred_encoding_from(|key| std::env::var(key).ok())
}

/// Return the encoding the current process locale prefers for text files.
#[cfg(windows)]
pub fn preferred_encoding() -> String {
    "cp1252".to_string()
}

/// Derive the preferred encoding from locale environment variables.
///
/// `LC_ALL`, `LC_CTYPE` and `LANG` are consulted in that order; the first
/// non-empty one wins. The codeset is the part of the locale name after `.`,
/// with any `@modifier` removed. The `C` and `POSIX` locales and locale names
/// without a codeset map to [`LOCALE_DEFAULT`].
pub fn preferred_encoding_from<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
        .into_iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.is_empty());

    match locale {
        Some(name) => codeset(&name).unwrap_or_else(|| LOCALE_DEFAULT.to_string()),
        None => LOCALE_DEFAULT.to_string(),
    }
}

fn codeset(locale: &str) -> Option<String> {
    let without_modifier = locale.split('@').next().unwrap_or(locale);
    let (_, codeset) = without_modifier.split_once('.')?;
    if codeset.is_empty() {
        return None;
    }
    Some(codeset.to_ascii_lowercase())
}
