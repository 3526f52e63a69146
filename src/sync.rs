//! Sync marker scanning

use crate::layout::SYNC_MARKER;

/// Find the first sync marker at or after `start`
///
/// Returns the index of the marker's first byte. Both marker bytes must lie
/// inside `buffer`, so a lone `0xAA` as the final byte never matches. Every
/// position is tried as a candidate start, which resolves overlapping
/// candidates such as `AA AA 55` to the pair ending in `0x55`.
///
/// Returns `None` when `start` is past the end or no marker remains.
pub fn find_sync(buffer: &[u8], start: usize) -> Option<usize> {
    buffer
        .get(start..)?
        .windows(SYNC_MARKER.len())
        .position(|pair| pair == SYNC_MARKER)
        .map(|index| start + index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_sync_at_start() {
        assert_eq!(find_sync(&[0xAA, 0x55, 0x00], 0), Some(0));
    }

    #[test]
    fn test_find_sync_after_noise() {
        let buf = [0x01, 0x02, 0xAA, 0x55, 0x10];
        assert_eq!(find_sync(&buf, 0), Some(2));
        assert_eq!(find_sync(&buf, 2), Some(2));
        assert_eq!(find_sync(&buf, 3), None);
    }

    #[test]
    fn test_find_sync_earliest_match() {
        let buf = [0xAA, 0x55, 0xAA, 0x55];
        assert_eq!(find_sync(&buf, 0), Some(0));
        assert_eq!(find_sync(&buf, 1), Some(2));
    }

    #[test]
    fn test_find_sync_overlapping_candidates() {
        let buf = [0x00, 0xAA, 0xAA, 0x55];
        assert_eq!(find_sync(&buf, 0), Some(2));
    }

    #[test]
    fn test_find_sync_lone_high_byte_at_end() {
        let buf = [0x00, 0x00, 0xAA];
        assert_eq!(find_sync(&buf, 0), None);
        assert_eq!(find_sync(&buf, 2), None);
    }

    #[test]
    fn test_find_sync_bounds() {
        let buf = [0xAA, 0x55];
        assert_eq!(find_sync(&buf, 2), None);
        assert_eq!(find_sync(&buf, 3), None);
        assert_eq!(find_sync(&[], 0), None);
    }

    #[test]
    fn test_find_sync_reversed_marker() {
        assert_eq!(find_sync(&[0x55, 0xAA, 0x00], 0), None);
    }
}
