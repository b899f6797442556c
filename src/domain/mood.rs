//! Mood labels and the Exist mood scale

/// Rating given to mood labels outside the Daylio defaults
pub const UNKNOWN_MOOD_RATING: i32 = -1;

/// Map a Daylio mood label to its 1-5 rating.
///
/// Labels are matched exactly; custom or renamed moods yield
/// [`UNKNOWN_MOOD_RATING`].
pub fn mood_rating(label: &str) -> i32 {
    match label {
        "awful" => 1,
        "bad" => 2,
        "meh" => 3,
        "good" => 4,
        "rad" => 5,
        _ => UNKNOWN_MOOD_RATING,
    }
}

/// Convert a 1-5 Daylio rating to Exist's odd 1-9 mood scale.
///
/// No bounds checking: the sentinel rating maps to -3.
pub fn to_exist_scale(rating: i32) -> i32 {
    (rating * 2) - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        assert_eq!(mood_rating("awful"), 1);
        assert_eq!(mood_rating("bad"), 2);
        assert_eq!(mood_rating("meh"), 3);
        assert_eq!(mood_rating("good"), 4);
        assert_eq!(mood_rating("rad"), 5);
    }

    #[test]
    fn test_unknown_labels_map_to_sentinel() {
        assert_eq!(mood_rating("ecstatic"), UNKNOWN_MOOD_RATING);
        assert_eq!(mood_rating("Rad"), UNKNOWN_MOOD_RATING);
        assert_eq!(mood_rating(""), UNKNOWN_MOOD_RATING);
    }

    #[test]
    fn test_exist_scale_is_odd_and_increasing() {
        let converted: Vec<i32> = (1..=5).map(to_exist_scale).collect();
        assert_eq!(converted, vec![1, 3, 5, 7, 9]);
        assert!(converted.windows(2).all(|w| w[0] < w[1]));
        assert!(converted.iter().all(|v| v % 2 == 1));
    }

    #[test]
    fn test_sentinel_is_not_clamped() {
        assert_eq!(to_exist_scale(UNKNOWN_MOOD_RATING), -3);
    }
}
