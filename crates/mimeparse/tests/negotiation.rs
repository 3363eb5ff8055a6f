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

//! Content negotiation scenarios.

use mimeparse::{
    Error, best_match, fitness_and_quality_parsed, parse_header,
    parse_media_range, parse_mime_type, quality, quality_parsed,
};

const RFC_2616_EXAMPLE: &str = "text/*;q=0.3, text/html;q=0.7, \
    text/html;level=1, text/html;level=2;q=0.4, */*;q=0.5";

fn assert_quality(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < f64::EPSILON,
        "expected quality {expected}, got {actual}"
    );
}

#[test]
fn test_parse_mime_type_wildcard_quirk() {
    let media = parse_mime_type(" *").unwrap();
    assert_eq!(media.major(), "*");
    assert_eq!(media.minor(), "*");
    assert!(media.params().is_empty());
}

#[test]
fn test_parse_mime_type_invalid() {
    let res = parse_mime_type("text/html/x;q=1");
    assert_eq!(res, Err(Error::InvalidMimeType("text/html/x;q=1".into())));
}

#[test]
fn test_parse_media_range_quality() {
    let test_cases = vec![
        ("0", "0"),
        ("0.0", "0.0"),
        (".5", ".5"),
        ("0.333", "0.333"),
        ("1", "1"),
        ("1.0", "1.0"),
        ("1.01", "1"),
        ("-0.5", "1"),
        ("abc", "1"),
        ("", "1"),
    ];

    for (value, expected) in test_cases {
        let media = parse_media_range(&format!("a/b;q={value}")).unwrap();
        assert_eq!(
            media.params().get("q"),
            Some(expected),
            "Failed for value: {value:?}"
        );
    }

    // Media ranges always carry a quality
    let media = parse_media_range("a/b").unwrap();
    assert_eq!(media.params().get("q"), Some("1"));
}

#[test]
fn test_parse_media_range_idempotent() {
    let test_cases = vec![
        "text/html",
        "Text/HTML; Level=1; q=0.7",
        "application/xml ; q=2;b=other",
        " *; q=.2",
        "image/png;flag",
    ];

    for value in test_cases {
        let media = parse_media_range(value).unwrap();
        let again = parse_media_range(&media.to_string()).unwrap();
        assert_eq!(again, media, "Failed for value: {value}");
    }
}

#[test]
fn test_quality_rfc_2616_example() {
    let test_cases = vec![
        ("text/html;level=1", 1.0),
        ("text/html", 0.7),
        ("text/plain", 0.3),
        ("image/jpeg", 0.5),
        ("text/html;level=2", 0.4),
        ("text/html;level=3", 0.7),
    ];

    for (mime, expected) in test_cases {
        assert_quality(quality(mime, RFC_2616_EXAMPLE), expected);
    }
}

#[test]
fn test_quality_parsed_reuses_header() {
    let accept = parse_header(RFC_2616_EXAMPLE);
    assert_quality(quality_parsed("text/html", accept.as_ref()), 0.7);
    assert_quality(quality_parsed("text/plain", accept.as_ref()), 0.3);
}

#[test]
fn test_fitness_and_quality_parsed() {
    let accept = parse_header(RFC_2616_EXAMPLE);
    let test_cases = vec![
        ("text/html;level=1", 111),
        ("text/html", 110),
        ("text/plain", 100),
        ("image/jpeg", 0),
    ];

    for (mime, expected) in test_cases {
        let (fitness, _) = fitness_and_quality_parsed(mime, accept.as_ref());
        assert_eq!(fitness, expected, "Failed for mime: {mime}");
    }

    // Nothing matches
    let accept = parse_header("image/*");
    let (fitness, quality) = fitness_and_quality_parsed("text/html", accept.as_ref());
    assert_eq!(fitness, -1);
    assert_quality(quality, 0.0);
}

#[test]
fn test_best_match_scenarios() {
    let test_cases = vec![
        (
            vec!["application/xbel+xml", "text/xml"],
            "text/*;q=0.5,*/*;q=0.1",
            "text/xml",
        ),
        (
            vec!["application/xbel+xml", "text/xml"],
            "text/html,application/atom+xml;q=0.9",
            "",
        ),
        (vec!["image/*", "application/xml"], "image/*", "image/*"),
        (vec!["image/*", "application/xml"], "image/png", "image/*"),
        (
            vec!["application/json", "text/html"],
            "application/json, text/javascript, */*",
            "application/json",
        ),
    ];

    for (supported, header, expected) in test_cases {
        assert_eq!(
            best_match(&supported, header),
            expected,
            "Failed for header: {header}"
        );
    }
}

#[test]
fn test_best_match_empty_supported() {
    let supported: Vec<String> = Vec::new();
    assert_eq!(best_match(&supported, "*/*"), "");
    assert_eq!(best_match(&supported, ""), "");
}

#[test]
fn test_best_match_tolerates_malformed_ranges() {
    let supported = ["text/html", "application/json"];
    let header = "garbage, application/json;q=0.8, text/html/x";
    assert_eq!(best_match(&supported, header), "application/json");
    assert_eq!(best_match(&supported, "garbage"), "");
}

#[test]
fn test_best_match_owned_strings() {
    let supported = vec![String::from("text/plain"), String::from("text/html")];
    assert_eq!(best_match(&supported, "text/html"), "text/html");
}
