//! Natural ordering for path segment names.
//!
//! Plain byte comparison puts `file10` before `file2`, which reads wrong in
//! any directory listing. `compare` treats embedded decimal digit runs as
//! numbers, so `file2` < `file10` and `img_2_3` < `img_2_10`.
//!
//! Collation rules:
//!
//! - digit runs compare by numeric value, with no length limit (a run longer
//!   than any machine integer still compares correctly);
//! - non-digit bytes compare ASCII-case-insensitively, so `IMG_5` and
//!   `img_5` collate together;
//! - any remaining tie (case difference, zero padding such as `01` vs `1`)
//!   is broken by plain byte order, making the result a total order that is
//!   safe for `sort_by` and stable across runs.

use std::cmp::Ordering;

/// Compare two names in natural order.
pub fn compare(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut i = 0;
    let mut j = 0;
    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let da = digit_run(a, i);
            let db = digit_run(b, j);
            match compare_digit_runs(&a[i..da], &b[j..db]) {
                Ordering::Equal => {
                    i = da;
                    j = db;
                }
                unequal => return unequal,
            }
        } else {
            let ca = a[i].to_ascii_lowercase();
            let cb = b[j].to_ascii_lowercase();
            if ca != cb {
                return ca.cmp(&cb);
            }
            i += 1;
            j += 1;
        }
    }
    // One name is a prefix of the other (modulo case/zero-padding): the
    // shorter sorts first, exact byte order breaks the final tie.
    match (a.len() - i).cmp(&(b.len() - j)) {
        Ordering::Equal => a.cmp(b),
        unequal => unequal,
    }
}

fn digit_run(s: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < s.len() && s[end].is_ascii_digit() {
        end += 1;
    }
    end
}

/// Compare two all-digit byte runs by numeric value without parsing them
/// into integers (runs may exceed u64 range).
fn compare_digit_runs(a: &[u8], b: &[u8]) -> Ordering {
    let a = trim_leading_zeros(a);
    let b = trim_leading_zeros(b);
    match a.len().cmp(&b.len()) {
        Ordering::Equal => a.cmp(b),
        unequal => unequal,
    }
}

fn trim_leading_zeros(s: &[u8]) -> &[u8] {
    let mut start = 0;
    // Keep the last zero so "0" stays non-empty.
    while start + 1 < s.len() && s[start] == b'0' {
        start += 1;
    }
    &s[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut names: Vec<&str>) -> Vec<&str> {
        names.sort_by(|a, b| compare(a, b));
        names
    }

    #[test]
    fn test_numeric_runs_compare_by_value() {
        assert_eq!(compare("file2", "file10"), Ordering::Less);
        assert_eq!(compare("img_2_10", "img_2_3"), Ordering::Greater);
        assert_eq!(
            sorted(vec!["file10", "file1", "file2"]),
            vec!["file1", "file2", "file10"]
        );
    }

    #[test]
    fn test_case_insensitive_with_byte_tiebreak() {
        assert_eq!(compare("IMG_2", "img_10"), Ordering::Less);
        // Same folded form: byte order decides, uppercase first.
        assert_eq!(compare("IMG", "img"), Ordering::Less);
        assert_eq!(compare("img", "IMG"), Ordering::Greater);
    }

    #[test]
    fn test_zero_padding_is_a_tiebreak_only() {
        assert_eq!(compare("file01", "file1"), Ordering::Less);
        assert_eq!(compare("file01", "file2"), Ordering::Less);
        assert_eq!(compare("file010", "file2"), Ordering::Greater);
    }

    #[test]
    fn test_plain_strings_and_prefixes() {
        assert_eq!(compare("abc", "abc"), Ordering::Equal);
        assert_eq!(compare("abc", "abcd"), Ordering::Less);
        assert_eq!(compare("", "a"), Ordering::Less);
        assert_eq!(compare("a1", "a1b"), Ordering::Less);
    }

    #[test]
    fn test_digit_run_longer_than_u64() {
        let small = "x99999999999999999999";
        let big = "x100000000000000000000";
        assert_eq!(compare(small, big), Ordering::Less);
    }

    #[test]
    fn test_digits_sort_before_letters() {
        assert_eq!(sorted(vec!["b", "2", "10", "a"]), vec!["2", "10", "a", "b"]);
    }
}
