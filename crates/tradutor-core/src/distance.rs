//! Levenshtein edit distance.
//!
//! Unit-cost insertions, deletions and substitutions over `char`s. Comparison
//! is exact, callers fold case before calling.

/// Minimum number of single-character edits turning `a` into `b`.
///
/// Runs in O(len(a) * len(b)) time keeping only two rows of the table, each
/// sized by the shorter input.
///
/// ```
/// use tradutor_core::distance::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("cat", "cta"), 2);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Distance is symmetric, so the row can run over the shorter side
    let (row_chars, col_chars) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    let mut prev: Vec<usize> = (0..=row_chars.len()).collect();
    let mut curr: Vec<usize> = vec![0; row_chars.len() + 1];

    for (i, col_char) in col_chars.iter().enumerate() {
        curr[0] = i + 1;

        for (j, row_char) in row_chars.iter().enumerate() {
            curr[j + 1] = if col_char == row_char {
                prev[j]
            } else {
                1 + prev[j].min(curr[j]).min(prev[j + 1])
            };
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[row_chars.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_inputs() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("gato", ""), 4);
        assert_eq!(levenshtein("", "casa"), 4);
    }

    #[test]
    fn test_single_edits() {
        assert_eq!(levenshtein("cat", "hat"), 1);
        assert_eq!(levenshtein("cat", "cats"), 1);
        assert_eq!(levenshtein("cats", "cat"), 1);
        assert_eq!(levenshtein("cat", "cta"), 2);
    }

    #[test]
    fn test_classic_pairs() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("saturday", "sunday"), 3);
        assert_eq!(levenshtein("cachorro", "cachoro"), 1);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(levenshtein("maçã", "maca"), 2);
        assert_eq!(levenshtein("", "ção"), 3);
        assert_eq!(levenshtein("avó", "avô"), 1);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(levenshtein("Cat", "cat"), 1);
    }

    proptest! {
        #[test]
        fn prop_identity(a in "[a-zç]{0,12}") {
            prop_assert_eq!(levenshtein(&a, &a), 0);
        }

        #[test]
        fn prop_symmetric(a in "[a-e]{0,10}", b in "[a-e]{0,10}") {
            prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
        }

        #[test]
        fn prop_triangle_inequality(a in "[a-d]{0,8}", b in "[a-d]{0,8}", c in "[a-d]{0,8}") {
            prop_assert!(levenshtein(&a, &b) <= levenshtein(&a, &c) + levenshtein(&c, &b));
        }

        #[test]
        fn prop_empty_is_length(s in "\\PC{0,16}") {
            prop_assert_eq!(levenshtein("", &s), s.chars().count());
            prop_assert_eq!(levenshtein(&s, ""), s.chars().count());
        }
    }
}
