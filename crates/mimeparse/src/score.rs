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

//! Fitness and quality scoring.

use crate::media::{MediaType, WILDCARD};

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Score of a mime type against a list of media ranges.
///
/// The fitness measures how specifically the best-matching media range matches
/// the mime type: an equal major type is worth `100`, an equal subtype `10`,
/// and each equal parameter `1`. Wildcards are compatible, but don't add to
/// the fitness. The quality is the value of `q` of the best-matching range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Score {
    /// Fitness of the best-matching media range.
    pub fitness: i32,
    /// Quality of the best-matching media range.
    pub quality: f64,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Score {
    /// Score if no media range matches.
    pub const NONE: Score = Score { fitness: -1, quality: 0.0 };

    /// Computes the score of the given mime type against media ranges.
    ///
    /// Ranges are considered in order, and a range only replaces the current
    /// best match if its fitness is strictly greater, so when several ranges
    /// share the highest fitness, the first of them determines the quality.
    /// Mime types that can't be parsed don't match anything.
    ///
    /// # Examples
    ///
    /// ```
    /// use mimeparse::{MediaType, Score};
    ///
    /// // Create media ranges
    /// let ranges = ["text/*;q=0.3", "text/html;q=0.7"]
    ///     .into_iter()
    ///     .map(MediaType::parse_range)
    ///     .collect::<Result<Vec<_>, _>>()
    ///     .unwrap();
    ///
    /// // Compute score of mime type
    /// let score = Score::compute("text/html", &ranges);
    /// assert_eq!(score.fitness, 110);
    /// assert_eq!(score.quality, 0.7);
    /// ```
    #[must_use]
    pub fn compute(mime: &str, ranges: &[MediaType]) -> Self {
        let Ok(target) = MediaType::parse_range(mime) else {
            return Self::NONE;
        };

        // Find the first range with the highest fitness
        let mut best = Self::NONE;
        for range in ranges {
            if let Some(fitness) = fitness(&target, range) {
                if fitness > best.fitness {
                    best = Self { fitness, quality: range.quality() };
                }
            }
        }
        best
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl Default for Score {
    /// Creates a score that doesn't match anything.
    #[inline]
    fn default() -> Self {
        Self::NONE
    }
}

impl From<Score> for (i32, f64) {
    /// Converts the score into a tuple of fitness and quality.
    #[inline]
    fn from(score: Score) -> Self {
        (score.fitness, score.quality)
    }
}

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Returns whether two type components are compatible.
fn compatible(a: &str, b: &str) -> bool {
    a == b || a == WILDCARD || b == WILDCARD
}

/// Computes the fitness of a media range for the given target, if compatible.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn fitness(target: &MediaType, range: &MediaType) -> Option<i32> {
    if !compatible(range.major(), target.major())
        || !compatible(range.minor(), target.minor())
    {
        return None;
    }

    // Count parameters of the target that the range shares verbatim, but
    // exclude the quality, as it's not part of the mime type's identity
    let params = range.params();
    let matches = target
        .params()
        .iter()
        .filter(|(key, value)| {
            *key != "q" && params.get(key.as_str()) == Some(value.as_str())
        })
        .count();

    // Exact major and subtype matches outweigh any number of parameters
    let mut fitness = matches as i32;
    if range.major() == target.major() {
        fitness += 100;
    }
    if range.minor() == target.minor() {
        fitness += 10;
    }
    Some(fitness)
}
