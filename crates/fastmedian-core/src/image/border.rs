//! Border policy for window overhang
//!
//! Filter windows centred near the image edge reach past it. Every such
//! index is resolved with clamp-to-edge: the nearest valid row or column
//! is used. This is the only place where signed window offsets are turned
//! back into buffer indices.

/// Clamp a signed index into `[0, len)`.
///
/// `len` must be non-zero; images and views guarantee that.
///
/// # Example
///
/// ```
/// use fastmedian_core::clamp_index;
///
/// assert_eq!(clamp_index(-2, 5), 0);
/// assert_eq!(clamp_index(3, 5), 3);
/// assert_eq!(clamp_index(5, 5), 4);
/// ```
#[inline]
pub fn clamp_index(index: i64, len: u32) -> u32 {
    debug_assert!(len > 0, "clamp_index on an empty axis");
    let last = i64::from(len.saturating_sub(1));
    index.clamp(0, last) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_is_identity() {
        for i in 0..10 {
            assert_eq!(clamp_index(i, 10), i as u32);
        }
    }

    #[test]
    fn test_first_and_last_valid() {
        assert_eq!(clamp_index(0, 10), 0);
        assert_eq!(clamp_index(9, 10), 9);
    }

    #[test]
    fn test_one_past_each_edge() {
        assert_eq!(clamp_index(-1, 10), 0);
        assert_eq!(clamp_index(10, 10), 9);
    }

    #[test]
    fn test_far_overhang() {
        assert_eq!(clamp_index(-1_000_000, 10), 0);
        assert_eq!(clamp_index(1_000_000, 10), 9);
        assert_eq!(clamp_index(i64::MIN, 10), 0);
        assert_eq!(clamp_index(i64::MAX, 10), 9);
    }

    #[test]
    fn test_single_element_axis() {
        assert_eq!(clamp_index(-1, 1), 0);
        assert_eq!(clamp_index(0, 1), 0);
        assert_eq!(clamp_index(1, 1), 0);
    }

    #[test]
    fn test_full_u32_axis() {
        assert_eq!(clamp_index(i64::MAX, u32::MAX), u32::MAX - 1);
    }
}
