/// Returns the final segment of a remote path.
///
/// Both `/` and `\` are treated as separators, so a path ending in a
/// separator has an empty name.
pub fn file_name(path: &str) -> &str {
    match path.rfind(&['/', '\\'][..]) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}
