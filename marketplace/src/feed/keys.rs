//! Synthetic list keys for looped feed positions.
//!
//! A virtualized list needs a unique key per row, but the reels feed shows
//! each product many times. Row keys take the form
//! `{productId}_loop{loop}_{position}` and must be stripped back to the
//! product id before anything reaches the network.

/// Key for the copy of a product shown in loop `loop_index` at
/// `position` within the shuffled list.
pub fn loop_key(product_id: &str, loop_index: usize, position: usize) -> String {
    format!("{}_loop{}_{}", product_id, loop_index, position)
}

/// Recover the product id from a row key. Keys without a well-formed loop
/// suffix are returned unchanged, so plain product ids pass through.
///
/// ```rust
/// use marketplace::feed::keys::strip_loop_suffix;
///
/// assert_eq!(strip_loop_suffix("66f1_loop3_12"), "66f1");
/// assert_eq!(strip_loop_suffix("66f1"), "66f1");
/// ```
pub fn strip_loop_suffix(key: &str) -> &str {
    let Some(pos) = key.rfind("_loop") else {
        return key;
    };

    let suffix = &key[pos + "_loop".len()..];
    match suffix.split_once('_') {
        Some((loop_index, position)) if is_digits(loop_index) && is_digits(position) => {
            &key[..pos]
        }
        _ => key,
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
