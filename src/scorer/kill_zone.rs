/// Count the unmatched characters left of the first matched character, up to
/// the nearest preceding path separator or the start of the text.
///
/// `prefix` is the text strictly left of the first matched character.
pub fn kill_zone(prefix: &str, path_separator: char) -> usize {
    prefix
        .chars()
        .rev()
        .take_while(|&ch| ch != path_separator)
        .count()
}
