// Copyright (c) 2025 Zensical and contributors

// SPDX-License-Identifier: MIT
// Third-party contributions licensed under DCO

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NON-INFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.

// ----------------------------------------------------------------------------

//! Accept header.

use std::fmt;
use std::slice::Iter;

use crate::media::MediaType;
use crate::score::Score;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Accept header.
///
/// An accept header is a comma-separated list of media ranges, which express
/// the preferences of a client for the representation of a resource. Parsing
/// an accept header with [`Accept::from`] never fails: media ranges that are
/// malformed are left out, as they could never match a mime type anyway. The
/// order of media ranges is preserved, since it's relevant for tie-breaking.
///
/// Parsing the header once and reusing it is the preferred way when scoring
/// many mime types against the same header.
///
/// # Examples
///
/// ```
/// use mimeparse::Accept;
///
/// // Create accept header from string
/// let accept = Accept::from("text/*;q=0.5, */*;q=0.1");
///
/// // Obtain best match for supported mime types
/// let best = accept.best_match(&["application/xbel+xml", "text/xml"]);
/// assert_eq!(best, Some("text/xml"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accept {
    /// List of media ranges.
    inner: Vec<MediaType>,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Accept {
    /// Creates an empty accept header.
    ///
    /// # Examples
    ///
    /// ```
    /// use mimeparse::Accept;
    ///
    /// // Create accept header
    /// let accept = Accept::new();
    /// assert!(accept.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the fitness and quality of the given mime type.
    ///
    /// # Examples
    ///
    /// ```
    /// use mimeparse::Accept;
    ///
    /// // Create accept header and compute score
    /// let accept = Accept::from("text/*;q=0.3, text/html;q=0.7");
    /// let score = accept.fitness_and_quality("text/html");
    /// assert_eq!(score.fitness, 110);
    /// ```
    #[inline]
    #[must_use]
    pub fn fitness_and_quality(&self, mime: &str) -> Score {
        Score::compute(mime, &self.inner)
    }

    /// Returns the quality of the given mime type.
    ///
    /// The quality is the value of `q` of the most specific media range that
    /// matches the mime type, or `0` if there's none.
    ///
    /// # Examples
    ///
    /// ```
    /// use mimeparse::Accept;
    ///
    /// // Create accept header and compute quality
    /// let accept = Accept::from("text/*;q=0.3, text/html;q=0.7");
    /// assert_eq!(accept.quality("text/html"), 0.7);
    /// assert_eq!(accept.quality("image/png"), 0.0);
    /// ```
    #[inline]
    #[must_use]
    pub fn quality(&self, mime: &str) -> f64 {
        self.fitness_and_quality(mime).quality
    }

    /// Returns the supported mime type with the highest quality.
    ///
    /// Every supported mime type is scored against the accept header, and the
    /// one with the strictly highest quality wins, so when several mime types
    /// share the same quality, the first of them is chosen. If none of them is
    /// acceptable, i.e., has a quality greater than `0`, [`None`] is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use mimeparse::Accept;
    ///
    /// // Create accept header
    /// let accept = Accept::from("text/html, application/atom+xml;q=0.9");
    ///
    /// // Obtain best match for supported mime types
    /// let best = accept.best_match(&["application/xbel+xml", "text/xml"]);
    /// assert_eq!(best, None);
    /// ```
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn best_match<'a, S>(&self, supported: &'a [S]) -> Option<&'a str>
    where
        S: AsRef<str>,
    {
        let mut best = None;
        let mut best_quality = 0.0;
        for mime in supported {
            let mime = mime.as_ref();
            let quality = self.quality(mime);
            if quality > best_quality {
                best = Some(mime);
                best_quality = quality;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(?best, best_quality, "negotiated media type");
        best
    }

    /// Returns an iterator over all media ranges.
    #[inline]
    pub fn iter(&self) -> Iter<'_, MediaType> {
        self.inner.iter()
    }
}

#[allow(clippy::must_use_candidate)]
impl Accept {
    /// Returns the number of media ranges.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns whether there are any media ranges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl AsRef<[MediaType]> for Accept {
    /// Returns the media ranges as a slice.
    #[inline]
    fn as_ref(&self) -> &[MediaType] {
        &self.inner
    }
}

// ----------------------------------------------------------------------------

impl From<&str> for Accept {
    /// Creates an accept header from a string.
    ///
    /// The string is split on `,`, and each part is parsed as a media range
    /// with [`MediaType::parse_range`]. Parts which are not valid media ranges
    /// are skipped, so a single malformed media range doesn't invalidate the
    /// entire header.
    ///
    /// # Examples
    ///
    /// ```
    /// use mimeparse::Accept;
    ///
    /// // Create accept header from string
    /// let accept = Accept::from("text/html, invalid, */*;q=0.1");
    /// assert_eq!(accept.len(), 2);
    /// ```
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    fn from(value: &str) -> Self {
        value.split(',').filter_map(parse_or_skip).collect()
    }
}

// ----------------------------------------------------------------------------

impl FromIterator<MediaType> for Accept {
    /// Creates an accept header from an iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use mimeparse::{Accept, MediaType};
    ///
    /// // Create accept header from iterator
    /// let accept = Accept::from_iter([
    ///     MediaType::parse_range("text/html")?,
    ///     MediaType::parse_range("*/*;q=0.1")?,
    /// ]);
    /// # Ok(())
    /// # }
    /// ```
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = MediaType>,
    {
        Self { inner: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Accept {
    type Item = &'a MediaType;
    type IntoIter = Iter<'a, MediaType>;

    /// Creates an iterator over all media ranges.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ----------------------------------------------------------------------------

impl fmt::Display for Accept {
    /// Formats the accept header for display.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, media) in self.inner.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{media}")?;
        }

        // No errors occurred
        Ok(())
    }
}

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Parses a media range, or skips it if it's malformed.
fn parse_or_skip(value: &str) -> Option<MediaType> {
    match MediaType::parse_range(value) {
        Ok(media) => Some(media),
        #[cfg(feature = "tracing")]
        Err(err) => {
            tracing::debug!(%err, "skipping media range");
            None
        }
        #[cfg(not(feature = "tracing"))]
        Err(_) => None,
    }
}
