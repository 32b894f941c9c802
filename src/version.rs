//! Next-version name resolution for timeline snapshots
//!
//! Snapshots of a timeline named `base` are siblings named `base V<n>`.
//! The next name is derived from the existing siblings: natural-sort
//! maximum, trailing digit run incremented with the previous zero-padded
//! width preserved.

use std::cmp::Ordering;

use log::debug;
use regex::RegexBuilder;

/// Compute the next snapshot name for `base` given all sibling timeline
/// names in the project. Returns `"<base> V1"` when no snapshot exists yet.
pub(crate) fn next_version_name(base: &str, siblings: &[String]) -> String {
    let pattern = format!(r"^{}\sV\d+", regex::escape(base));
    // The base name is escaped, so the pattern itself cannot fail to parse.
    let matcher = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .expect("escaped base name forms a valid pattern");

    let mut versions: Vec<&String> = siblings.iter().filter(|s| matcher.is_match(s)).collect();

    if versions.is_empty() {
        debug!("no snapshots of \"{base}\" exist yet, starting at V1");
        return format!("{base} V1");
    }

    versions.sort_by(|a, b| natural_cmp(a.as_str(), b.as_str()));
    let last = versions.last().expect("non-empty after filter");
    debug!("last snapshot version: \"{last}\"");

    increment_trailing_digits(last)
}

/// Increment the trailing digit run of `name` by one, zero-padding the
/// result to the width of the original run. Names without a trailing
/// digit run are returned unchanged.
fn increment_trailing_digits(name: &str) -> String {
    let tail = name
        .bytes()
        .rev()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if tail == 0 {
        return name.to_string();
    }

    let split = name.len() - tail;
    let (head, digits) = name.split_at(split);
    match digits.parse::<u128>() {
        Ok(n) => format!("{head}{:0width$}", n + 1, width = tail),
        Err(_) => name.to_string(),
    }
}

/// Natural-order comparison: digit runs compare as integers, everything
/// else compares lexicographically. `"V9" < "V10"`.
pub(crate) fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ai = a.char_indices().peekable();
    let mut bi = b.char_indices().peekable();

    loop {
        match (ai.peek().copied(), bi.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some((apos, ac)), Some((bpos, bc))) => {
                if ac.is_ascii_digit() && bc.is_ascii_digit() {
                    let arun = take_digit_run(a, apos, &mut ai);
                    let brun = take_digit_run(b, bpos, &mut bi);
                    match cmp_digit_runs(arun, brun) {
                        Ordering::Equal => {}
                        other => return other,
                    }
                } else {
                    match ac.cmp(&bc) {
                        Ordering::Equal => {
                            ai.next();
                            bi.next();
                        }
                        other => return other,
                    }
                }
            }
        }
    }
}

/// Advance the iterator past the digit run starting at `start` and
/// return it as a slice.
fn take_digit_run<'a>(
    s: &'a str,
    start: usize,
    iter: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
) -> &'a str {
    let mut end = start;
    while let Some((pos, c)) = iter.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        end = pos + c.len_utf8();
        iter.next();
    }
    &s[start..end]
}

/// Compare two digit runs as integers without parsing: strip leading
/// zeros, compare lengths, then compare digit by digit.
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
