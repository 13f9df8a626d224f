mod common;

use common::{is_match, is_match_casei};

#[test]
fn empty_pattern_matches_anything() {
    for text in &["", "a", "hello world", "\0"] {
        assert!(is_match("", text));
        assert!(regexlite::is_match("", text));
    }
}

#[test]
fn bare_caret_matches_anything() {
    for text in &["", "a", "^", "xyz"] {
        assert!(is_match("^", text));
    }
}

#[test]
fn bare_dollar_matches_anything() {
    for text in &["", "a", "$"] {
        assert!(is_match("$", text));
    }
}

#[test]
fn literals() {
    assert!(is_match("abc", "xxabcxx"));
    assert!(!is_match("abc", "ab"));
    assert!(!is_match("abc", "acb"));
    assert!(is_match("a.c", "abc"));
    assert!(!is_match("a.c", "ac"));
}

#[test]
fn star() {
    assert!(is_match("a*", ""));
    assert!(is_match("a*", "bbb"));
    assert!(is_match("a*a", "aaaa"));
    assert!(is_match("ba*c", "bc"));
    assert!(is_match("ba*c", "baaac"));
    assert!(is_match("ba*c", "babc"));
    assert!(!is_match("^ba*c", "babc"));
    assert!(!is_match("ba*c", "bab"));
    assert!(is_match(".*x", "abcx"));
}

#[test]
fn plus() {
    assert!(!is_match("a+", ""));
    assert!(!is_match("a+", "b"));
    assert!(is_match("a+", "aaab"));
    assert!(is_match("ba+c", "baac"));
    assert!(!is_match("ba+c", "bc"));
    assert!(is_match("a+a", "aa"));
    assert!(!is_match("^a+a$", "a"));
}

#[test]
fn question() {
    assert!(is_match("ab?c", "ac"));
    assert!(is_match("ab?c", "abc"));
    assert!(!is_match("ab?c", "abbc"));
    // the one-occurrence branch is tried first but must be given up here
    assert!(is_match("^a?a$", "a"));
}

#[test]
fn braces() {
    assert!(!is_match("a{2,3}", "a"));
    assert!(is_match("a{2,3}", "aa"));
    assert!(is_match("a{2,3}", "aaaa"));
    assert!(!is_match("^a{2,3}$", "aaaa"));
    assert!(is_match("^a{2,3}$", "aaa"));
    assert!(is_match("^a{3}$", "aaa"));
    assert!(!is_match("^a{3}$", "aa"));
    assert!(is_match("^a{2,}$", "aaaaaaa"));
    assert!(!is_match("^a{2,}$", "a"));
    assert!(is_match("^xa{0}y", "xy"));
    assert!(is_match("^a{1,3}a$", "aa"));
}

#[test]
fn braces_with_max_below_min_require_min() {
    assert!(is_match("^a{3,1}$", "aaa"));
    assert!(!is_match("^a{3,1}$", "a"));
}

#[test]
fn brackets() {
    assert!(!is_match("[^0-9]", "5"));
    assert!(is_match("[^0-9]", "x"));
    assert!(is_match("[a-c]", "b"));
    assert!(!is_match("[a-c]", "d"));
    assert!(is_match("[xyz]", "--z--"));
    assert!(!is_match("[]", "a"));
    assert!(is_match("[^]", "a"));
    assert!(!is_match("[^]", ""));
}

#[test]
fn reversed_range_is_swapped() {
    assert!(is_match("[z-a]", "m"));
    assert!(!is_match("[z-a]", "M"));
}

#[test]
fn quantified_classes() {
    assert!(is_match("^[0-9]+$", "12345"));
    assert!(!is_match("^[0-9]+$", "123a5"));
    assert!(is_match("^[a-f]{2}-[0-9]*$", "be-"));
    assert!(is_match("x[ab]?y", "xy"));
    assert!(is_match("x[ab]?y", "xby"));
}

#[test]
fn anchors() {
    assert!(is_match("x$", "wx"));
    assert!(!is_match("x$", "xw"));
    assert!(is_match("^x", "xw"));
    assert!(!is_match("^x", "wx"));
    assert!(is_match("^$", ""));
    assert!(!is_match("^$", "a"));
}

#[test]
fn anchors_in_the_middle_are_literal() {
    assert!(is_match("a$b", "a$b"));
    assert!(!is_match("a$b", "ab"));
    assert!(is_match("a^b", "a^b"));
}

#[test]
fn malformed_constructs_are_literal() {
    assert!(is_match("a{2", "a{2"));
    assert!(!is_match("a{2", "aa"));
    assert!(is_match("[ab", "x[ab"));
    assert!(!is_match("[ab", "a"));
    assert!(is_match("a{x}", "a{x}"));
}

#[test]
fn case_folding() {
    assert!(is_match_casei("ABC", "abc"));
    assert!(!is_match("ABC", "abc"));
    assert!(is_match_casei("a*B", "AAAb"));
    assert!(is_match_casei("^[A-C]+$", "abcCBA"));
    assert!(!is_match_casei("[^a]", "A"));
    assert!(is_match_casei("x{2}", "xX"));
    assert!(is_match_casei("q?Z$", "QZ"));
}

#[test]
fn case_folding_is_ascii_only() {
    assert!(!is_match_casei("\u{e9}", "\u{c9}"));
}

#[test]
fn bytes_not_chars() {
    // `.` consumes a single byte of a multi-byte character
    assert!(!is_match("^.$", "\u{e9}"));
    assert!(is_match("^..$", "\u{e9}"));
    let re = common::regex("^a.b$");
    assert!(re.is_match_bytes(b"a\x80b").unwrap());
}

#[test]
fn nul_is_an_ordinary_byte() {
    assert!(is_match("a.b", "a\0b"));
    assert!(is_match("\0", "x\0"));
}

#[test]
fn large_bounds() {
    let text = "a".repeat(100_000);
    assert!(is_match("^a{1,100000}$", &text));
    assert!(!is_match("^a{100001}", &text));
    assert!(is_match("a*a*a*$", &text));
}

#[test]
fn deterministic() {
    let re = common::regex("[a-c]+x?d{1,2}$");
    let texts = ["abcd", "abcxdd", "abcxddd", "", "zzz"];
    let first: Vec<bool> = texts.iter().map(|t| re.is_match(t).unwrap()).collect();
    for _ in 0..10 {
        let again: Vec<bool> = texts.iter().map(|t| re.is_match(t).unwrap()).collect();
        assert_eq!(first, again);
    }
}

#[test]
fn shared_across_threads() {
    use std::sync::Arc;
    use std::thread;

    let re = Arc::new(common::regex("^[0-9]+$"));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let re = Arc::clone(&re);
            thread::spawn(move || {
                (0..100).all(|n| re.is_match(&(n * i).to_string()).unwrap())
                    && !re.is_match("12a").unwrap()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn free_function_is_case_sensitive() {
    assert!(!regexlite::is_match("ABC", "abc"));
    assert!(!regexlite::is_match("[A-C]", "b"));
    assert!(is_match_casei("[A-C]", "b"));
}
