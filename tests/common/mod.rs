#![allow(dead_code)]

use regexlite::{Regex, RegexBuilder};

#[cfg_attr(feature = "track_caller", track_caller)]
pub fn regex(re: &str) -> Regex {
    Regex::new(re)
}

#[cfg_attr(feature = "track_caller", track_caller)]
pub fn is_match(re: &str, text: &str) -> bool {
    regex(re).is_match(text).unwrap()
}

#[cfg_attr(feature = "track_caller", track_caller)]
pub fn is_match_casei(re: &str, text: &str) -> bool {
    RegexBuilder::new()
        .case_insensitive(true)
        .build(re)
        .is_match(text)
        .unwrap()
}
