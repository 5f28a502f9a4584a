//! AQI classification into the display bands.
//!
//! Every integer maps to exactly one [`Category`]; bands are checked in
//! ascending order so an edge value lands in the lower band.

/// Air-quality category for an AQI value.
///
/// | Value     | Category                 | Color     |
/// |-----------|--------------------------|-----------|
/// | == 0      | Error                    | `#7e0023` |
/// | <= 50     | Good                     | `#00e400` |
/// | <= 100    | Moderate                 | `#ffff00` |
/// | <= 150    | Unsafe if Sensitive      | `#ff7e00` |
/// | <= 200    | Unhealthy                | `#ff0000` |
/// | <= 250    | Very Unhealthy           | `#8F3F97` |
/// | > 250     | Hazardous                | `#7e0023` |
///
/// Zero is the "no data" sentinel from upstream, not a real reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Error,
    Good,
    Moderate,
    UnsafeIfSensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl Category {
    pub fn color(self) -> &'static str {
        match self {
            Category::Error | Category::Hazardous => "#7e0023",
            Category::Good => "#00e400",
            Category::Moderate => "#ffff00",
            Category::UnsafeIfSensitive => "#ff7e00",
            Category::Unhealthy => "#ff0000",
            Category::VeryUnhealthy => "#8F3F97",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Error => "ERROR",
            Category::Good => "Good",
            Category::Moderate => "Moderate",
            Category::UnsafeIfSensitive => "Unsafe if Sensitive",
            Category::Unhealthy => "Unhealthy",
            Category::VeryUnhealthy => "Very Unhealthy",
            Category::Hazardous => "Hazardous",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps an AQI value to its category. Band edges belong to the lower band.
pub fn classify(value: i64) -> Category {
    match value {
        0 => Category::Error,
        v if v <= 50 => Category::Good,
        v if v <= 100 => Category::Moderate,
        v if v <= 150 => Category::UnsafeIfSensitive,
        v if v <= 200 => Category::Unhealthy,
        v if v <= 250 => Category::VeryUnhealthy,
        _ => Category::Hazardous,
    }
}

/// Color code and label for `value`, in that order.
pub fn color_and_label(value: i64) -> (&'static str, &'static str) {
    let category = classify(value);
    (category.color(), category.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(0), Category::Error);
        assert_eq!(classify(1), Category::Good);
        assert_eq!(classify(50), Category::Good);
        assert_eq!(classify(51), Category::Moderate);
        assert_eq!(classify(100), Category::Moderate);
        assert_eq!(classify(101), Category::UnsafeIfSensitive);
        assert_eq!(classify(150), Category::UnsafeIfSensitive);
        assert_eq!(classify(151), Category::Unhealthy);
        assert_eq!(classify(200), Category::Unhealthy);
        assert_eq!(classify(201), Category::VeryUnhealthy);
        assert_eq!(classify(250), Category::VeryUnhealthy);
        assert_eq!(classify(251), Category::Hazardous);
    }

    #[test]
    fn test_color_and_label_known_values() {
        assert_eq!(color_and_label(0), ("#7e0023", "ERROR"));
        assert_eq!(color_and_label(50), ("#00e400", "Good"));
        assert_eq!(color_and_label(100), ("#ffff00", "Moderate"));
        assert_eq!(color_and_label(300), ("#7e0023", "Hazardous"));
    }

    #[test]
    fn test_classify_is_monotonic_over_range() {
        // Every value in range lands in a band, and bands never go backwards.
        let order = [
            Category::Good,
            Category::Moderate,
            Category::UnsafeIfSensitive,
            Category::Unhealthy,
            Category::VeryUnhealthy,
            Category::Hazardous,
        ];
        let mut last = 0;
        for v in 1..=1000 {
            let idx = order
                .iter()
                .position(|c| *c == classify(v))
                .expect("value outside every band");
            assert!(idx >= last, "band regressed at {v}");
            last = idx;
        }
        assert_eq!(last, order.len() - 1);
    }

    #[test]
    fn test_negative_values_are_good() {
        assert_eq!(classify(-5), Category::Good);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Category::UnsafeIfSensitive.to_string(), "Unsafe if Sensitive");
    }
}
