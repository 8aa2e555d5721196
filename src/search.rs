/// Target path for the player search box.
///
/// Blank input (empty or whitespace-only) is a no-op and yields `None`.
/// Anything else navigates to the players view with the entered text
/// URL-encoded as the `q` query parameter.
pub fn player_search_target(input: &str) -> Option<String> {
    if input.trim().is_empty() {
        return None;
    }
    Some(format!("/players?q={}", urlencoding::encode(input)))
}
