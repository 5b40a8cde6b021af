// Controller-relative RESTCONF paths.
//
// Segments are stored raw. Encoding happens once, when the path is joined
// onto the controller base URL, so a key such as `GigabitEthernet0/0/0/1`
// stays a single segment on the wire.

use std::fmt;

use url::Url;

use crate::error::Error;

/// A controller-relative path made of unencoded segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    /// Build a path from an ordered list of raw segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Append one raw segment. Reserved characters are escaped later by [`to_url`](Self::to_url).
    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// A new path with `segments` appended to this one.
    pub fn join<I, S>(&self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut joined = self.clone();
        joined.segments.extend(segments.into_iter().map(Into::into));
        joined
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Resolve against the controller base URL, percent-encoding each segment.
    pub fn to_url(&self, base: &Url) -> Result<Url, Error> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidBaseUrl(base.to_string()))?
            .pop_if_empty()
            .extend(&self.segments);
        Ok(url)
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}
