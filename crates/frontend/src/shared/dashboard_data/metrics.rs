//! Derived metrics computed from aggregate rows.
//!
//! Pure and deterministic. Degenerate inputs (empty series, zero or
//! non-finite denominators) produce zeros, never NaN or infinity.

/// First `n` rows in source order.
///
/// Rows are not re-sorted: rankings are trusted to arrive ordered.
pub fn top_n<T>(rows: &[T], n: usize) -> &[T] {
    &rows[..n.min(rows.len())]
}

/// `value / max(values)` for every value.
///
/// Empty input gives empty output; a non-positive or non-finite maximum gives
/// all zeros.
pub fn normalize_by_max(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !(max.is_finite() && max > 0.0) {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| finite_or_zero(v / max)).collect()
}

/// `value / sum(values) * 100` for every value.
///
/// A zero or non-finite sum (including empty input) gives all zeros.
pub fn percentage_of_total(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    if total == 0.0 || !total.is_finite() {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|v| finite_or_zero(v / total * 100.0))
        .collect()
}

/// [`normalize_by_max`] over one field of each row
pub fn normalize_field<T>(rows: &[T], field: impl Fn(&T) -> f64) -> Vec<f64> {
    normalize_by_max(&rows.iter().map(field).collect::<Vec<_>>())
}

/// [`percentage_of_total`] over one field of each row
pub fn percentage_field<T>(rows: &[T], field: impl Fn(&T) -> f64) -> Vec<f64> {
    percentage_of_total(&rows.iter().map(field).collect::<Vec<_>>())
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{:?} vs {:?}", actual, expected);
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < EPS, "{:?} vs {:?}", actual, expected);
        }
    }

    #[test]
    fn test_top_n() {
        let rows = [5, 1, 9, 3];
        assert_eq!(top_n(&rows, 2), &[5, 1]);
        assert_eq!(top_n(&rows, 10), &rows);
        assert!(top_n(&rows, 0).is_empty());
        assert!(top_n::<i32>(&[], 3).is_empty());
    }

    #[test]
    fn test_top_n_is_idempotent() {
        let rows: Vec<u32> = (0..12).rev().collect();
        for n in 0..15 {
            let once = top_n(&rows, n);
            assert_eq!(top_n(once, n), once);
        }
    }

    #[test]
    fn test_normalize_max_row_is_one() {
        let samples: [&[f64]; 4] = [
            &[300.0, 100.0, 100.0],
            &[0.5],
            &[2.0, 8.0, 8.0, 1.0],
            &[1e-6, 3e-6],
        ];
        for values in samples {
            let normalized = normalize_by_max(values);
            let max_index = values
                .iter()
                .enumerate()
                .fold(0, |best, (i, v)| if *v > values[best] { i } else { best });
            assert!((normalized[max_index] - 1.0).abs() < EPS);
            assert!(normalized.iter().all(|n| (0.0..=1.0).contains(n)));
        }
    }

    #[test]
    fn test_normalize_degenerate_inputs() {
        assert!(normalize_by_max(&[]).is_empty());
        assert_eq!(normalize_by_max(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert_eq!(normalize_by_max(&[-4.0, -1.0]), vec![0.0, 0.0]);
        assert_eq!(normalize_by_max(&[f64::NAN]), vec![0.0]);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let samples: [&[f64]; 3] = [&[1.0, 2.0, 3.0, 4.0], &[7.0], &[0.1, 0.2, 0.7]];
        for values in samples {
            let sum: f64 = percentage_of_total(values).iter().sum();
            assert!((sum - 100.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_percentages_zero_total() {
        assert!(percentage_of_total(&[]).is_empty());
        assert_eq!(percentage_of_total(&[0.0, 0.0, 0.0]), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_region_scenario() {
        let revenue = [300.0, 100.0, 100.0];
        assert_close(&percentage_of_total(&revenue), &[60.0, 20.0, 20.0]);
        assert_close(&normalize_by_max(&revenue), &[1.0, 1.0 / 3.0, 1.0 / 3.0]);
    }

    #[test]
    fn test_field_helpers() {
        let rows = [("a", 2.0), ("b", 6.0)];
        assert_close(&normalize_field(&rows, |r| r.1), &[1.0 / 3.0, 1.0]);
        assert_close(&percentage_field(&rows, |r| r.1), &[25.0, 75.0]);
    }

    #[test]
    fn test_repeatable_output() {
        let values = [12.5, 0.3, 99.9, 42.0];
        let first = percentage_of_total(&values);
        let second = percentage_of_total(&values);
        assert_eq!(
            first.iter().map(|v| v.to_bits()).collect::<Vec<_>>(),
            second.iter().map(|v| v.to_bits()).collect::<Vec<_>>()
        );
    }
}
