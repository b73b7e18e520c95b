use regex::Regex;

/// Returns true when the input starts with a Yandex Music track link,
/// `https://music.yandex.{ru,com}/album/<id>/track/<id>`. The match is
/// anchored at the start only, so trailing content is tolerated.
pub fn is_track_url(input: &str) -> bool {
    Regex::new(r"^https?://music\.yandex\.(ru|com)/album/\d+/track/\d+")
        .map(|regex| regex.is_match(input))
        .unwrap_or(false)
}
