//! Lower-bound binary search and membership check over sorted surnames.

/// Lower-bound binary search over an ascending-sorted slice.
///
/// Returns the index of the first element not less than `target`, which is
/// the insertion index when `target` is absent. The slice must already be
/// sorted ascending under `str` ordering.
pub fn binary_search<S: AsRef<str>>(sorted: &[S], target: &str) -> usize {
    binary_search_bounded(sorted, target, 0, sorted.len())
}

/// Lower-bound binary search restricted to the window `[low, high)`.
///
/// An inverted or out-of-range window is clamped to the slice and logged at
/// error level rather than aborting; the result is then the lower bound
/// within the clamped window.
pub fn binary_search_bounded<S: AsRef<str>>(
    sorted: &[S],
    target: &str,
    low: usize,
    high: usize,
) -> usize {
    let mut high = high.min(sorted.len());
    let mut low = low;
    if low > high {
        log::error!("search window inverted ({low}..{high}), clamping to {high}..{high}");
        low = high;
    }

    while low < high {
        let mid = low + (high - low) / 2;
        if sorted[mid].as_ref() < target {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}

/// Linear membership check, decoupled from any binary-search index.
///
/// `believed_index` is the index a prior [`binary_search`] call reported; it
/// is logged on a hit but never validated against the matched element, so
/// this function's contract is member-test only.
pub fn find<S: AsRef<str>>(haystack: &[S], target: &str, believed_index: Option<usize>) -> bool {
    if haystack.iter().any(|s| s.as_ref() == target) {
        match believed_index {
            Some(idx) => log::info!("surname {target:?} found, caller believed index {idx}"),
            None => log::info!("surname {target:?} found"),
        }
        true
    } else {
        log::error!("surname {target:?} not found in the contact list");
        false
    }
}
