mod extractor;
mod link;

pub use extractor::{TrackExtractor, parse_track_page};
pub use link::is_track_url;
