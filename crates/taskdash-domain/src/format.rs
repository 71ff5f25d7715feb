/// Avatar initials: the first letter of each space-separated word,
/// optionally capped at `limit` letters.
pub fn initials(name: &str, limit: Option<usize>) -> String {
    let letters = name
        .split(' ')
        .filter_map(|word| word.chars().next());
    match limit {
        Some(limit) => letters.take(limit).collect(),
        None => letters.collect(),
    }
}

/// Whole-number percentage of `part` over `total`, rounded; 0 when `total` is 0.
pub fn percent(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Ada Lovelace", None), "AL");
        assert_eq!(initials("Mobile App Redesign", Some(2)), "MA");
        assert_eq!(initials("solo", Some(2)), "s");
        assert_eq!(initials("", None), "");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(4, 4), 100);
    }
}
