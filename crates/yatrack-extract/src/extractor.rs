use std::time::Duration;

use regex::Regex;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use yatrack_core::{TrackError, TrackInfo, TrackResult, format_duration};

use crate::link::is_track_url;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

const UNKNOWN: &str = "Unknown";

/// Fetches Yandex Music track pages and pulls structured data out of them.
///
/// Carries only an immutable `reqwest::Client`, so one instance can be
/// shared across tasks.
#[derive(Debug, Clone)]
pub struct TrackExtractor {
    client: Client,
}

impl TrackExtractor {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()
            .expect("failed to build http client");
        Self { client }
    }

    /// Fetches the track page and extracts its metadata.
    ///
    /// One GET, no retries. Transport errors, timeouts and non-success
    /// statuses all surface as `TrackError::Network`; fields missing from
    /// the page degrade to `"Unknown"` instead of failing the call.
    pub async fn fetch_track(&self, url: &str) -> TrackResult<TrackInfo> {
        if !is_track_url(url) {
            return Err(TrackError::InvalidInput(format!(
                "not a yandex music track url: {url}"
            )));
        }

        let body = self.fetch_page(url).await?;
        Ok(parse_track_page(&body, url))
    }

    async fn fetch_page(&self, url: &str) -> TrackResult<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| TrackError::Network(format!("track page request failed: {err}")))?;

        if !response.status().is_success() {
            return Err(TrackError::Network(format!(
                "track page returned status {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|err| TrackError::Network(format!("failed to read track page: {err}")))
    }
}

impl Default for TrackExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts track metadata from an already-fetched page.
///
/// Each field runs its own cascade of selector strategies, first success
/// wins; a field whose whole cascade misses becomes `"Unknown"`. The `url`
/// field is the caller's input, unchanged.
pub fn parse_track_page(html: &str, url: &str) -> TrackInfo {
    let document = Html::parse_document(html);
    TrackInfo {
        title: extract_title(&document).unwrap_or_else(|| UNKNOWN.to_string()),
        artist: extract_artist(&document).unwrap_or_else(|| UNKNOWN.to_string()),
        duration: extract_duration(&document).unwrap_or_else(|| UNKNOWN.to_string()),
        url: url.to_string(),
    }
}

fn extract_title(document: &Html) -> Option<String> {
    text_by_class_fragment(document, "h1", "title")
        .or_else(|| meta_content(document, "og:title"))
}

fn extract_artist(document: &Html) -> Option<String> {
    text_by_class_fragment(document, "a", "artist")
        .or_else(|| text_by_class_fragment(document, "span", "artist"))
        .or_else(|| artist_from_description(document))
}

fn extract_duration(document: &Html) -> Option<String> {
    text_by_class_fragment(document, "span", "duration")
        .or_else(|| first_element_text(document, "time"))
        .or_else(|| duration_from_scripts(document))
}

/// Text of the first `tag` element whose class attribute contains
/// `fragment`, case-insensitively.
fn text_by_class_fragment(document: &Html, tag: &str, fragment: &str) -> Option<String> {
    let selector = Selector::parse(tag).ok()?;
    document
        .select(&selector)
        .find(|element| {
            element
                .value()
                .attr("class")
                .is_some_and(|class| class.to_lowercase().contains(fragment))
        })
        .map(element_text)
}

fn first_element_text(document: &Html, tag: &str) -> Option<String> {
    let selector = Selector::parse(tag).ok()?;
    document.select(&selector).next().map(element_text)
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn meta_content(document: &Html, property: &str) -> Option<String> {
    let selector = Selector::parse(&format!(r#"meta[property="{property}"]"#)).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.to_string())
}

/// The artist often only appears in `og:description` as
/// "Artist — Song · ...". Everything before the em-dash is the artist.
fn artist_from_description(document: &Html) -> Option<String> {
    let content = meta_content(document, "og:description")?;
    let (artist, _) = content.split_once('—')?;
    Some(artist.trim().to_string())
}

/// Last-resort duration source: the page's embedded player state carries
/// `"durationMs":<digits>` inside a script block.
fn duration_from_scripts(document: &Html) -> Option<String> {
    let selector = Selector::parse("script").ok()?;
    let regex = Regex::new(r#""durationMs":(\d+)"#).ok()?;
    for script in document.select(&selector) {
        let text = script.text().collect::<String>();
        if let Some(captures) = regex.captures(&text)
            && let Ok(ms) = captures[1].parse::<u64>()
        {
            return Some(format_duration(ms / 1000));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{TrackExtractor, parse_track_page};
    use yatrack_core::TrackError;

    #[test]
    fn extracts_all_fields_from_full_page() {
        let html = r#"
            <html><body>
                <h1 class="page-track__title">Song A</h1>
                <a class="d-artists__artist" href="/artist/1">Artist A</a>
                <span class="track__duration">3:41</span>
            </body></html>
        "#;
        let url = "https://music.yandex.ru/album/1/track/2";
        let track = parse_track_page(html, url);
        assert_eq!(track.title, "Song A");
        assert_eq!(track.artist, "Artist A");
        assert_eq!(track.duration, "3:41");
        assert_eq!(track.url, url);
    }

    #[test]
    fn title_falls_back_to_og_title() {
        let html = r#"<head><meta property="og:title" content="Song B"></head>"#;
        let track = parse_track_page(html, "https://music.yandex.ru/album/1/track/2");
        assert_eq!(track.title, "Song B");
    }

    #[test]
    fn title_defaults_to_unknown() {
        let track = parse_track_page("<html><body></body></html>", "url");
        assert_eq!(track.title, "Unknown");
        assert_eq!(track.artist, "Unknown");
        assert_eq!(track.duration, "Unknown");
    }

    #[test]
    fn h1_title_wins_over_og_title() {
        let html = r#"
            <head><meta property="og:title" content="Meta Title"></head>
            <body><h1 class="Track-Title">Heading Title</h1></body>
        "#;
        let track = parse_track_page(html, "url");
        assert_eq!(track.title, "Heading Title");
    }

    #[test]
    fn artist_falls_back_to_span_then_description() {
        let html = r#"<span class="artist-name">Span Artist</span>"#;
        let track = parse_track_page(html, "url");
        assert_eq!(track.artist, "Span Artist");

        let html = r#"<meta property="og:description" content="Artist X — Song Y">"#;
        let track = parse_track_page(html, "url");
        assert_eq!(track.artist, "Artist X");
    }

    #[test]
    fn description_without_dash_gives_unknown_artist() {
        let html = r#"<meta property="og:description" content="just words">"#;
        let track = parse_track_page(html, "url");
        assert_eq!(track.artist, "Unknown");
    }

    #[test]
    fn duration_falls_back_to_time_element() {
        let html = "<body><time>2:15</time></body>";
        let track = parse_track_page(html, "url");
        assert_eq!(track.duration, "2:15");
    }

    #[test]
    fn duration_falls_back_to_script_duration_ms() {
        let html = r#"
            <script>var state = {"track":{"durationMs":185000,"id":2}};</script>
        "#;
        let track = parse_track_page(html, "url");
        assert_eq!(track.duration, "3:05");
    }

    #[test]
    fn class_matching_is_case_insensitive_substring() {
        let html = r#"<h1 class="PageTrack__TITLE-main">Loud Song</h1>"#;
        let track = parse_track_page(html, "url");
        assert_eq!(track.title, "Loud Song");
    }

    #[tokio::test]
    async fn rejects_urls_that_fail_validation() {
        let extractor = TrackExtractor::new();
        let result = extractor.fetch_track("https://example.com/album/1/track/2").await;
        assert!(matches!(result, Err(TrackError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn network_failure_is_an_error_not_a_panic() {
        // Port 9 (discard) has no listener, so the connection is refused.
        let extractor = TrackExtractor::new();
        let result = extractor.fetch_page("http://127.0.0.1:9/").await;
        assert!(matches!(result, Err(TrackError::Network(_))));
    }
}
