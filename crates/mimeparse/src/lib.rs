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

//! Content negotiation for mime types.
//!
//! This crate implements the selection of the best-matching mime type from a
//! set of supported mime types, given the media ranges of an `Accept` header,
//! as described in [RFC 2616, section 14.1]. Mime types and media ranges are
//! parsed into a normalized [`MediaType`], and every supported mime type is
//! scored against the media ranges by fitness and quality. There's no state
//! and no I/O involved, so all functions are pure.
//!
//! [RFC 2616, section 14.1]: https://www.rfc-editor.org/rfc/rfc2616#section-14.1
//!
//! # Examples
//!
//! ```
//! use mimeparse::best_match;
//!
//! // Obtain best match for supported mime types
//! let best = best_match(&["application/xbel+xml", "text/xml"], "text/*;q=0.5,*/*;q=0.1");
//! assert_eq!(best, "text/xml");
//! ```

#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]

mod accept;
mod media;
mod score;

pub use accept::Accept;
pub use media::{Error, MediaType, Params, Result, WILDCARD};
pub use score::Score;

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Parses a mime type into its normalized form.
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use mimeparse::parse_mime_type;
///
/// // Parse mime type
/// let media = parse_mime_type("application/xhtml;q=0.5")?;
/// assert_eq!(media.major(), "application");
/// assert_eq!(media.minor(), "xhtml");
/// # Ok(())
/// # }
/// ```
#[inline]
pub fn parse_mime_type(value: &str) -> Result<MediaType> {
    value.parse()
}

/// Parses a media range into its normalized form, ensuring a valid quality.
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use mimeparse::parse_media_range;
///
/// // Parse media range
/// let media = parse_media_range("application/*")?;
/// assert_eq!(media.params().get("q"), Some("1"));
/// # Ok(())
/// # }
/// ```
#[inline]
pub fn parse_media_range(value: &str) -> Result<MediaType> {
    MediaType::parse_range(value)
}

/// Parses an `Accept` header into media ranges, skipping malformed ones.
#[inline]
#[must_use]
pub fn parse_header(header: &str) -> Accept {
    Accept::from(header)
}

/// Returns the fitness and quality of a mime type against parsed media ranges.
///
/// If no media range matches, `(-1, 0.0)` is returned.
///
/// # Examples
///
/// ```
/// use mimeparse::{fitness_and_quality_parsed, parse_header};
///
/// // Parse header and compute fitness and quality
/// let accept = parse_header("text/*;q=0.3, text/html;level=1");
/// let (fitness, quality) = fitness_and_quality_parsed("text/html;level=1", accept.as_ref());
/// assert_eq!(fitness, 111);
/// assert_eq!(quality, 1.0);
/// ```
#[inline]
#[must_use]
pub fn fitness_and_quality_parsed(mime: &str, ranges: &[MediaType]) -> (i32, f64) {
    Score::compute(mime, ranges).into()
}

/// Returns the quality of a mime type against parsed media ranges.
#[inline]
#[must_use]
pub fn quality_parsed(mime: &str, ranges: &[MediaType]) -> f64 {
    Score::compute(mime, ranges).quality
}

/// Returns the quality of a mime type against an `Accept` header.
///
/// # Examples
///
/// ```
/// use mimeparse::quality;
///
/// // Compute quality of mime type
/// let header = "text/*;q=0.3, text/html;q=0.7, */*;q=0.5";
/// assert_eq!(quality("text/html", header), 0.7);
/// assert_eq!(quality("image/png", header), 0.5);
/// ```
#[must_use]
pub fn quality(mime: &str, header: &str) -> f64 {
    parse_header(header).quality(mime)
}

/// Returns the supported mime type that best matches an `Accept` header.
///
/// If none of the supported mime types is acceptable, an empty string is
/// returned. See [`Accept::best_match`] for how ties are resolved.
///
/// # Examples
///
/// ```
/// use mimeparse::best_match;
///
/// // Obtain best match for supported mime types
/// let best = best_match(&["image/*", "application/xml"], "image/png");
/// assert_eq!(best, "image/*");
///
/// // Obtain no match
/// let best = best_match(&["application/xml"], "text/html");
/// assert_eq!(best, "");
/// ```
#[must_use]
pub fn best_match<S>(supported: &[S], header: &str) -> String
where
    S: AsRef<str>,
{
    parse_header(header)
        .best_match(supported)
        .map(ToString::to_string)
        .unwrap_or_default()
}
