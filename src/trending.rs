use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Deserialize;

pub const MAX_TRENDING: usize = 5;
pub const TAG_DELIMITER: char = '#';
pub const HASHTAG_ROUTE_PREFIX: &str = "/hashtag/";

// Characters that cannot appear raw in a single path segment.
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/');

/// A hashtag surfaced by the backend as currently popular.
///
/// The name is stored without its leading delimiter; exactly one `#` is
/// removed when the tag is built, so `"##rust"` keeps one as part of its name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrendingTag {
    name: String,
}

impl TrendingTag {
    pub fn new<S: AsRef<str>>(raw: S) -> Self {
        let raw = raw.as_ref();
        Self {
            name: raw.strip_prefix(TAG_DELIMITER).unwrap_or(raw).to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Link to the hashtag screen for this tag, with the name percent-encoded
    /// as one path segment.
    pub fn href(&self) -> String {
        format!(
            "{HASHTAG_ROUTE_PREFIX}{}",
            utf8_percent_encode(&self.name, SEGMENT_ENCODE_SET)
        )
    }
}

/// The tag name a hashtag screen path refers to, the inverse of [`TrendingTag::href`].
pub fn hashtag_from_path<S: AsRef<str>>(path: S) -> Option<String> {
    match path.as_ref().strip_prefix(HASHTAG_ROUTE_PREFIX) {
        Some(segment) if !segment.is_empty() && !segment.contains('/') => {
            Some(percent_decode_str(segment).decode_utf8_lossy().into_owned())
        }
        _ => None,
    }
}

/// Body of `GET /posts/hashtags`. Fields other than `hashtags[].tag` are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct HashtagsResponse {
    #[serde(default)]
    pub hashtags: Option<Vec<HashtagEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct HashtagEntry {
    pub tag: String,
}

impl HashtagsResponse {
    pub fn into_trending(self) -> Vec<TrendingTag> {
        self.hashtags
            .unwrap_or_default()
            .into_iter()
            .take(MAX_TRENDING)
            .map(|entry| TrendingTag::new(entry.tag))
            .collect()
    }
}
