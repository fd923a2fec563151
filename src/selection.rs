//! Root move selection shared by the searches

/// Picks the column of the highest-valued `(value, column)` pair
///
/// When several pairs share the highest value the largest column wins, no
/// matter where the pairs sit in the slice. Returns `None` for an empty slice.
pub fn select_best<V: PartialOrd + Copy>(candidates: &[(V, usize)]) -> Option<usize> {
    let mut best: Option<(V, usize)> = None;
    for &(value, column) in candidates {
        best = match best {
            Some((best_value, best_column))
                if value < best_value || (value == best_value && column < best_column) =>
            {
                Some((best_value, best_column))
            }
            _ => Some((value, column)),
        };
    }
    best.map(|(_, column)| column)
}
