/// Reduce a user-supplied name to a safe ASCII file stem; empty when nothing usable remains.
pub fn sanitize_stem(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .filter_map(|c| match c {
            c if c.is_whitespace() => Some('_'),
            c if c.is_ascii_alphanumeric() => Some(c),
            '.' | '-' | '_' => Some(c),
            _ => None,
        })
        .collect();

    cleaned.trim_start_matches('.').to_string()
}

pub fn split_extension(filename: &str) -> Option<(&str, &str)> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some((stem, ext))
}

pub fn file_stem(filename: &str) -> &str {
    split_extension(filename).map_or(filename, |(stem, _)| stem)
}

pub fn is_safe_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\', '\0'])
}
