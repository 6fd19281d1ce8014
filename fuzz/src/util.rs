//! Input decoding shared by the fuzz targets.

/// Reads the input as little endian `i32` values, ignoring trailing bytes.
pub fn bytes_as_i32(data: &[u8]) -> Vec<i32> {
    data.chunks_exact(4)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

/// Reads the input as `(key, position)` pairs with keys narrowed to 16 values, so that equal keys
/// are common.
pub fn bytes_as_keyed(data: &[u8]) -> Vec<(u8, usize)> {
    data.iter()
        .enumerate()
        .map(|(pos, byte)| (byte % 16, pos))
        .collect()
}

/// Picks an inclusive sub-range from the first two bytes, if there is room for one.
pub fn bytes_as_range(data: &[u8], len: usize) -> Option<(usize, usize)> {
    match (data.first(), data.get(1), len) {
        (Some(a), Some(b), 1..) => {
            let a = *a as usize % len;
            let b = *b as usize % len;
            Some((a.min(b), a.max(b)))
        }
        _ => None,
    }
}
