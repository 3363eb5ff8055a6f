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

//! Media type.

use std::fmt;
use std::str::FromStr;

mod error;
mod params;

pub use error::{Error, Result};
pub use params::Params;

// ----------------------------------------------------------------------------
// Constants
// ----------------------------------------------------------------------------

/// Wildcard for major type and subtype.
pub const WILDCARD: &str = "*";

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Media type.
///
/// A media type is the normalized form of a mime type like `text/html`, or a
/// media range like `text/*;q=0.5`, as found in `Accept` headers. Major type,
/// subtype and parameter names are case-insensitive and lower-cased when
/// parsing, while parameter values are kept verbatim, except for surrounding
/// whitespace. Both the major type and the subtype are guaranteed to be non
/// empty, but may be the wildcard `*`.
///
/// The difference between a mime type and a media range is solely the quality
/// parameter `q`: parsing with [`MediaType::parse_range`] guarantees that `q`
/// is present and denotes a number between `0` and `1`.
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use mimeparse::MediaType;
///
/// // Create media type from string
/// let media: MediaType = "Application/XHTML;q=0.5;vEr=1.2".parse()?;
/// assert_eq!(media.major(), "application");
/// assert_eq!(media.minor(), "xhtml");
/// assert_eq!(media.params().get("ver"), Some("1.2"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaType {
    /// Major type, e.g., `text`.
    major: String,
    /// Subtype, e.g., `html`.
    minor: String,
    /// Parameters.
    params: Params,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl MediaType {
    /// Creates a media range from a string.
    ///
    /// This parses the string as a mime type, and then ensures that it has a
    /// valid quality parameter `q`. If the parameter is missing, empty, not a
    /// number or outside of `[0, 1]`, it's set to `1`. Valid values are kept
    /// as written, so `q=.2` stays `.2`.
    ///
    /// # Errors
    ///
    /// This method returns [`Error::InvalidMimeType`], if the string is not a
    /// valid mime type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use mimeparse::MediaType;
    ///
    /// // Create media range from string
    /// let media = MediaType::parse_range("application/xml;q=2")?;
    /// assert_eq!(media.params().get("q"), Some("1"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn parse_range(value: &str) -> Result<Self> {
        let mut media = Self::from_str(value)?;
        if parse_quality(media.params.get("q")).is_none() {
            media.params.insert("q", "1");
        }
        Ok(media)
    }

    /// Returns the numeric value of the quality parameter.
    ///
    /// Missing or invalid values are treated as `1`, which is consistent with
    /// the normalization applied by [`MediaType::parse_range`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use mimeparse::MediaType;
    ///
    /// // Create media range and obtain quality
    /// let media = MediaType::parse_range("text/*;q=.2")?;
    /// assert_eq!(media.quality(), 0.2);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn quality(&self) -> f64 {
        parse_quality(self.params.get("q")).unwrap_or(1.0)
    }
}

#[allow(clippy::must_use_candidate)]
impl MediaType {
    /// Returns the major type.
    #[inline]
    pub fn major(&self) -> &str {
        &self.major
    }

    /// Returns the subtype.
    #[inline]
    pub fn minor(&self) -> &str {
        &self.minor
    }

    /// Returns the parameters.
    #[inline]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Returns whether major type or subtype is a wildcard.
    #[inline]
    pub fn is_wildcard(&self) -> bool {
        self.major == WILDCARD || self.minor == WILDCARD
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl FromStr for MediaType {
    type Err = Error;

    /// Attempts to create a media type from a string.
    ///
    /// The string is split on `;` into the `type/subtype` part and parameters,
    /// which are `key=value` pairs or bare keys. Some clients send a single `*`
    /// instead of `*/*`, which is why we rewrite it before splitting. Note that
    /// the quality parameter is not touched, see [`MediaType::parse_range`].
    ///
    /// # Errors
    ///
    /// This method returns [`Error::InvalidMimeType`], if the `type/subtype`
    /// part doesn't contain exactly one `/`, or either side of it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use mimeparse::MediaType;
    ///
    /// // Create media type from string
    /// let media: MediaType = " *".parse()?;
    /// assert_eq!(media.to_string(), "*/*");
    /// # Ok(())
    /// # }
    /// ```
    fn from_str(value: &str) -> Result<Self> {
        let mut parts = value.split(';');

        // Splitting yields at least one part, even for empty strings, so the
        // fallback is only there to keep the compiler happy
        let head = parts.next().unwrap_or_default().trim();
        let params = parts
            .map(|part| part.split_once('=').unwrap_or((part, "")))
            .filter(|(key, _)| !key.trim().is_empty())
            .collect::<Params>();

        // Rewrite a lone wildcard, and ensure that we're left with exactly two
        // non-empty parts, or the mime type is invalid
        let head = if head == WILDCARD { "*/*" } else { head };
        let mut iter = head.split('/').map(str::trim);
        match (iter.next(), iter.next(), iter.next()) {
            (Some(major), Some(minor), None)
                if !major.is_empty() && !minor.is_empty() =>
            {
                Ok(Self {
                    major: major.to_lowercase(),
                    minor: minor.to_lowercase(),
                    params,
                })
            }
            _ => Err(Error::InvalidMimeType(value.to_string())),
        }
    }
}

// ----------------------------------------------------------------------------

impl fmt::Display for MediaType {
    /// Formats the media type for display.
    ///
    /// This is the canonical form of the media type, which parses back into an
    /// identical value.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}{}", self.major, self.minor, self.params)
    }
}

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Parses a quality value, if it's a number between `0` and `1`.
fn parse_quality(value: Option<&str>) -> Option<f64> {
    value
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|quality| (0.0..=1.0).contains(quality))
}
