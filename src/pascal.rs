use std::{collections::HashMap, sync::{Arc, OnceLock, RwLock}};

type RowCache<T> = OnceLock<RwLock<HashMap<usize, Arc<[T]>>>>;

static PASCAL_ROWS: RowCache<u64> = OnceLock::new();
static PASCAL_WEIGHTS: RowCache<f64> = OnceLock::new();

/// Returns row `row_index` of Pascal's triangle, the `row_index + 1` binomial coefficients
/// `C(row_index, 0..=row_index)` used as weights of a Bezier curve of that degree.
/// Negative `row_index` yields an empty row.
///
/// Rows are cached per index. Coefficients that do not fit in `u64` saturate at `u64::MAX`,
/// Bezier evaluation uses an `f64` row built the same way instead.
/// # Example
/// ```
/// use generic_easing::pascal_row;
///
/// assert_eq!(vec![1, 4, 6, 4, 1], pascal_row(4));
/// assert!(pascal_row(-1).is_empty());
/// ```
pub fn pascal_row(row_index: isize) -> Vec<u64> {
    if row_index < 0 {
        return Vec::new();
    }
    cached_row(&PASCAL_ROWS, row_index as usize, 1u64, u64::saturating_add)
}

/// Row `degree` of Pascal's triangle as `f64`, so coefficients past `u64` keep their magnitude.
pub(crate) fn pascal_weights(degree: usize) -> Vec<f64> {
    cached_row(&PASCAL_WEIGHTS, degree, 1.0, |a, b| a + b)
}

fn cached_row<T: Copy>(
    cache: &RowCache<T>,
    row_index: usize,
    one: T,
    add: fn(T, T) -> T,
) -> Vec<T> {
    let cache = cache.get_or_init(|| RwLock::new(HashMap::new()));

    if let Ok(rows) = cache.read() {
        if let Some(row) = rows.get(&row_index) {
            return row.to_vec();
        }
    }

    let row = calculate_row(row_index, one, add);
    if let Ok(mut rows) = cache.write() {
        rows.entry(row_index).or_insert_with(|| Arc::from(row.as_slice()));
    }
    row
}

fn calculate_row<T: Copy>(row_index: usize, one: T, add: fn(T, T) -> T) -> Vec<T> {
    let mut row: Vec<T> = Vec::with_capacity(row_index + 1);
    row.push(one);

    for k in 1..=row_index {
        // walk right to left so row[i - 1] still holds the previous row
        row.push(one);
        for i in (1..k).rev() {
            row[i] = add(row[i], row[i - 1]);
        }
    }
    row
}
