//! Numeric-aware string ordering ("Level 2" < "Level 10")

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

fn chunks(s: &str) -> Vec<Chunk<'_>> {
    let mut result = Vec::new();
    let mut start = 0;
    let mut in_digits: Option<bool> = None;

    for (pos, ch) in s.char_indices() {
        let is_digit = ch.is_ascii_digit();
        match in_digits {
            Some(prev) if prev != is_digit => {
                result.push(make_chunk(&s[start..pos], prev));
                start = pos;
            }
            _ => {}
        }
        in_digits = Some(is_digit);
    }
    if let Some(prev) = in_digits {
        result.push(make_chunk(&s[start..], prev));
    }
    result
}

fn make_chunk(s: &str, digits: bool) -> Chunk<'_> {
    if digits {
        Chunk::Digits(s)
    } else {
        Chunk::Text(s)
    }
}

/// Compares digit runs by value without parsing, so any length works
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

fn compare_chunk(a: Chunk<'_>, b: Chunk<'_>) -> Ordering {
    match (a, b) {
        (Chunk::Digits(x), Chunk::Digits(y)) => compare_digits(x, y),
        (Chunk::Text(x), Chunk::Text(y)) => compare_text(x, y),
        (Chunk::Digits(_), Chunk::Text(_)) => Ordering::Less,
        (Chunk::Text(_), Chunk::Digits(_)) => Ordering::Greater,
    }
}

/// Total order over strings where embedded numbers compare by value and
/// letters compare case-insensitively. Remaining ties fall back to byte order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let left = chunks(a);
    let right = chunks(b);

    left.iter()
        .zip(right.iter())
        .map(|(x, y)| compare_chunk(*x, *y))
        .find(|ord| ord.is_ne())
        .unwrap_or_else(|| left.len().cmp(&right.len()))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut values: Vec<&str>) -> Vec<&str> {
        values.sort_by(|a, b| natural_cmp(a, b));
        values
    }

    #[test]
    fn test_numbers_compare_by_value() {
        assert_eq!(natural_cmp("Level 2", "Level 10"), Ordering::Less);
        assert_eq!(natural_cmp("Level 10", "Level 2"), Ordering::Greater);
        assert_eq!(natural_cmp("10th Kyu", "9th Kyu"), Ordering::Greater);
    }

    #[test]
    fn test_belt_ranks() {
        assert_eq!(
            sorted(vec!["5th Kyu", "10th Kyu", "1st Dan", "3rd Kyu", "2nd Dan"]),
            vec!["1st Dan", "2nd Dan", "3rd Kyu", "5th Kyu", "10th Kyu"]
        );
    }

    #[test]
    fn test_case_insensitive_with_stable_tiebreak() {
        assert_eq!(natural_cmp("brown", "Black"), Ordering::Greater);
        assert_eq!(natural_cmp("Brown", "brown"), Ordering::Less);
        assert_eq!(natural_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_leading_zeros_and_long_numbers() {
        assert_eq!(natural_cmp("007", "7"), Ordering::Less);
        assert_eq!(
            natural_cmp("99999999999999999999999", "100000000000000000000000"),
            Ordering::Less
        );
    }

    #[test]
    fn test_digits_before_letters_and_prefixes_first() {
        assert_eq!(natural_cmp("1", "a"), Ordering::Less);
        assert_eq!(natural_cmp("Level", "Level 1"), Ordering::Less);
        assert_eq!(natural_cmp("", "a"), Ordering::Less);
    }
}
