mod error;
mod track;

pub use error::{TrackError, TrackResult};
pub use track::{TrackInfo, format_duration};
