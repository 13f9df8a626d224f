// Copyright 2016 The Fancy Regex Authors.
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::io::Cursor;

use regexlite::internal::{analyze, compile};
use regexlite::{Expr, Regex, RegexBuilder};

fn parse_and_compile(c: &mut Criterion) {
    let re = "^[a-z]+[0-9]{2,4}x?.*$";
    c.bench_function("parse", |b| b.iter(|| Expr::parse_tree(black_box(re))));
    let tree = Expr::parse_tree(re);
    c.bench_function("analyze", |b| b.iter(|| analyze(black_box(&tree))));
    c.bench_function("compile", |b| b.iter(|| compile(black_box(&tree))));
}

fn literal(c: &mut Criterion) {
    let re = Regex::new("needle");
    let haystack = format!("{}needle", "hay ".repeat(250));
    c.bench_function("literal", |b| {
        b.iter(|| re.is_match(black_box(&haystack)).unwrap())
    });
}

fn star_backtrack(c: &mut Criterion) {
    let re = Regex::new("a*a*a*b");
    let text = "a".repeat(40);
    c.bench_function("star_backtrack", |b| {
        b.iter(|| re.is_match(black_box(&text)).unwrap())
    });
}

fn anchored_class(c: &mut Criterion) {
    let re = Regex::new("^[0-9a-f]{8}-[0-9a-f]{4}$");
    c.bench_function("anchored_class", |b| {
        b.iter(|| re.is_match(black_box("deadbeef-cafe")).unwrap())
    });
}

fn case_insensitive(c: &mut Criterion) {
    let re = RegexBuilder::new().case_insensitive(true).build("ERROR:.*timeout");
    let text = "2024-01-01 error: connection Timeout after 30s";
    c.bench_function("case_insensitive", |b| {
        b.iter(|| re.is_match(black_box(text)).unwrap())
    });
}

fn search_lines(c: &mut Criterion) {
    let re = Regex::new("^[a-z]+=[0-9]+$");
    let input: String = (0..1000)
        .map(|i| {
            if i % 3 == 0 {
                format!("key{}=value\n", i)
            } else {
                format!("key={}\n", i)
            }
        })
        .collect();
    c.bench_function("search_lines", |b| {
        b.iter(|| re.search_lines(Cursor::new(black_box(&input))).count())
    });
}

criterion_group!(
    benches,
    parse_and_compile,
    literal,
    star_backtrack,
    anchored_class,
    case_insensitive,
    search_lines
);
criterion_main!(benches);
