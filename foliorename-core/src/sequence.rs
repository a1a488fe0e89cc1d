use crate::error::Error;

/// Render a folio number as a zero-padded decimal string of at least `width`
/// characters. Width is a minimum, never a cap: a number whose decimal form
/// is longer than `width` is emitted in full.
///
/// Negative numbers render with the sign counted against the width
/// (`format_folio(-1, 3)` is `"-01"`), matching `String.format("%0Nd", n)`
/// in the original tool.
pub fn format_folio(number: i64, width: usize) -> Result<String, Error> {
    if width < 1 {
        return Err(Error::InvalidWidth(width));
    }
    Ok(format!("{number:0width$}"))
}

/// The digit-width growth rule: bump the width when `number` crosses a
/// power-of-ten threshold. Only ever increases the width.
pub fn grown_width(number: i64, width: usize) -> usize {
    let mut width = width;
    if number > 9 && width < 2 {
        width = 2;
    }
    if number > 99 && width < 3 {
        width = 3;
    }
    if number > 999 && width < 4 {
        width = 4;
    }
    if number > 9999 && width < 5 {
        width = 5;
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_pads_to_width() {
        assert_eq!(format_folio(7, 4).unwrap(), "0007");
        assert_eq!(format_folio(0, 3).unwrap(), "000");
        assert_eq!(format_folio(99, 4).unwrap(), "0099");
    }

    #[test]
    fn test_format_width_is_a_minimum() {
        assert_eq!(format_folio(12345, 4).unwrap(), "12345");
        assert_eq!(format_folio(10, 1).unwrap(), "10");
    }

    #[test]
    fn test_format_negative_numbers() {
        assert_eq!(format_folio(-1, 3).unwrap(), "-01");
        assert_eq!(format_folio(-1, 1).unwrap(), "-1");
    }

    #[test]
    fn test_format_rejects_zero_width() {
        assert!(matches!(
            format_folio(5, 0).unwrap_err(),
            Error::InvalidWidth(0)
        ));
    }

    #[test]
    fn test_grown_width_thresholds() {
        assert_eq!(grown_width(9, 1), 1);
        assert_eq!(grown_width(10, 1), 2);
        assert_eq!(grown_width(100, 1), 3);
        assert_eq!(grown_width(1000, 1), 4);
        assert_eq!(grown_width(10000, 1), 5);
        assert_eq!(grown_width(100_000, 1), 5);
    }

    #[test]
    fn test_grown_width_never_shrinks() {
        assert_eq!(grown_width(5, 4), 4);
        assert_eq!(grown_width(10, 4), 4);
        assert_eq!(grown_width(-1, 3), 3);
    }

    proptest! {
        #[test]
        fn prop_format_length_is_max_of_width_and_digits(n in 0i64..1_000_000, w in 1usize..8) {
            let formatted = format_folio(n, w).unwrap();
            let natural_len = n.to_string().len();
            prop_assert_eq!(formatted.len(), natural_len.max(w));
            prop_assert!(formatted.chars().all(|c| c.is_ascii_digit()));
            prop_assert_eq!(formatted.trim_start_matches('0').parse::<i64>().unwrap_or(0), n);
        }
    }
}
