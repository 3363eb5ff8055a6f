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

//! Media type parameters.

use std::collections::btree_map::{BTreeMap, Iter};
use std::fmt;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Media type parameters.
///
/// Parameter names are case-insensitive, which is why they are lower-cased on
/// insertion, while values are stored verbatim. Ordering of parameters isn't
/// significant for media types, so we keep them in a [`BTreeMap`], which has
/// the nice side effect of making formatting deterministic.
///
/// # Examples
///
/// ```
/// use mimeparse::Params;
///
/// // Create parameters and add parameter
/// let mut params = Params::new();
/// params.insert("Level", "1");
///
/// // Obtain reference to parameter value
/// assert_eq!(params.get("level"), Some("1"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    /// Ordered map of parameters.
    inner: BTreeMap<String, String>,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Params {
    /// Creates a parameter map.
    ///
    /// # Examples
    ///
    /// ```
    /// use mimeparse::Params;
    ///
    /// // Create parameter map
    /// let params = Params::new();
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for the given parameter.
    ///
    /// # Examples
    ///
    /// ```
    /// use mimeparse::Params;
    ///
    /// // Create parameter map and add parameter
    /// let mut params = Params::new();
    /// params.insert("charset", "utf-8");
    ///
    /// // Obtain reference to parameter value
    /// let value = params.get("charset");
    /// assert_eq!(value, Some("utf-8"));
    /// ```
    pub fn get<K>(&self, key: K) -> Option<&str>
    where
        K: AsRef<str>,
    {
        self.inner.get(key.as_ref()).map(String::as_str)
    }

    /// Returns whether the parameter is contained.
    ///
    /// # Examples
    ///
    /// ```
    /// use mimeparse::Params;
    ///
    /// // Create parameter map and add parameter
    /// let mut params = Params::new();
    /// params.insert("charset", "utf-8");
    ///
    /// // Ensure presence of parameter
    /// let check = params.contains("charset");
    /// assert_eq!(check, true);
    /// ```
    pub fn contains<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        self.inner.contains_key(key.as_ref())
    }

    /// Updates the given parameter.
    ///
    /// The key is trimmed and lower-cased, the value is only trimmed. If the
    /// parameter already exists, its value is replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use mimeparse::Params;
    ///
    /// // Create parameter map and add parameter
    /// let mut params = Params::new();
    /// params.insert(" Q ", " 0.5 ");
    /// assert_eq!(params.get("q"), Some("0.5"));
    /// ```
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let key = key.as_ref().trim().to_lowercase();
        self.inner.insert(key, value.as_ref().trim().to_string());
    }

    /// Returns an iterator over all parameters, ordered by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use mimeparse::Params;
    ///
    /// // Create parameter map from iterator
    /// let params = Params::from_iter([("level", "1"), ("charset", "utf-8")]);
    ///
    /// // Iterate over parameters
    /// for (key, value) in params.iter() {
    ///     println!("{key}={value}");
    /// }
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, String, String> {
        self.inner.iter()
    }
}

#[allow(clippy::must_use_candidate)]
impl Params {
    /// Returns the number of parameters.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns whether there are any parameters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl<K, V> FromIterator<(K, V)> for Params
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    /// Creates a parameter map from an iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use mimeparse::Params;
    ///
    /// // Create parameter map from iterator
    /// let params = Params::from_iter([
    ///     ("level", "1"),
    ///     ("q", "0.5"),
    /// ]);
    /// ```
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
    {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    /// Creates an iterator over all parameters.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ----------------------------------------------------------------------------

impl fmt::Display for Params {
    /// Formats the parameters for display.
    ///
    /// Every parameter is prefixed with a `;` separator, so the output can be
    /// appended to a `type/subtype` pair as is. Parameters without a value are
    /// written as a bare key.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (key, value) in &self.inner {
            f.write_str(";")?;
            f.write_str(key)?;
            if !value.is_empty() {
                f.write_str("=")?;
                f.write_str(value)?;
            }
        }

        // No errors occurred
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_normalizes_key() {
        let test_cases = vec![
            ("q", "0.5", "q", "0.5"),
            ("Level", "1", "level", "1"),
            ("  CHARSET ", " UTF-8 ", "charset", "UTF-8"),
            ("flag", "", "flag", ""),
        ];

        for (key, value, expected_key, expected_value) in test_cases {
            let mut params = Params::new();
            params.insert(key, value);
            assert_eq!(
                params.get(expected_key),
                Some(expected_value),
                "Failed for key: {key}"
            );
        }
    }

    #[test]
    fn test_insert_replaces_value() {
        let params = Params::from_iter([("q", "0.2"), ("Q", "0.4")]);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("q"), Some("0.4"));
    }

    #[test]
    fn test_display() {
        let test_cases = vec![
            (vec![], ""),
            (vec![("q", "0.5")], ";q=0.5"),
            (vec![("q", "1"), ("level", "1")], ";level=1;q=1"),
            (vec![("flag", "")], ";flag"),
        ];

        for (pairs, expected) in test_cases {
            let params = Params::from_iter(pairs);
            assert_eq!(params.to_string(), expected);
        }
    }
}
