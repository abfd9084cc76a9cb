/// Whether `value` can be written without quotes: an ASCII letter or `_`
/// followed by ASCII letters, digits and `_`.
#[must_use]
pub fn is_simple_name(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
