//! Growable `char` buffers shared by the token state types.
//!
//! Buffers are plain `Box<[char]>` values whose length is the physical
//! capacity. The logical length is always tracked separately by the owner, so
//! a buffer only ever grows: shrinking the logical length never reallocates.

/// Ensure `buffer` can hold at least `requested_len` chars.
///
/// Returns the input unchanged (same storage, nothing copied) when it is large
/// enough. Otherwise allocates a buffer of exactly `requested_len` chars and
/// copies the old contents into its prefix; the tail is filled with `'\0'`.
/// Callers set their logical length after writing.
pub fn ensure_capacity(buffer: Box<[char]>, requested_len: usize) -> Box<[char]> {
    if buffer.len() >= requested_len {
        return buffer;
    }

    let mut grown = vec!['\0'; requested_len].into_boxed_slice();
    grown[..buffer.len()].copy_from_slice(&buffer);
    grown
}

/// Compare the first `len` chars of two optional buffers.
///
/// Identical storage compares equal without looking at the contents, which
/// also covers two absent buffers. Buffers of different capacities holding the
/// same logical content compare equal.
///
/// # Panics
///
/// Panics if `len` exceeds either present buffer.
pub fn buffers_equal(a: Option<&[char]>, b: Option<&[char]>, len: usize) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            if std::ptr::eq(a, b) {
                return true;
            }
            assert!(
                len <= a.len() && len <= b.len(),
                "length {len} exceeds buffer capacity ({} / {})",
                a.len(),
                b.len()
            );
            a[..len] == b[..len]
        }
        _ => false,
    }
}

/// Returns true iff none of the first `len` chars is alphabetic.
///
/// Pure digit and punctuation tokens are non-alphabetic; the empty prefix is
/// vacuously non-alphabetic.
///
/// # Panics
///
/// Panics if `len` exceeds the buffer.
pub fn is_non_alphabetic(buffer: &[char], len: usize) -> bool {
    assert!(
        len <= buffer.len(),
        "length {len} exceeds buffer capacity {}",
        buffer.len()
    );
    !buffer[..len].iter().any(|c| c.is_alphabetic())
}

/// Copy `len` chars of `data` into `buffer`, growing it if needed.
///
/// Returns the (possibly reallocated) buffer. Shared by every type that keeps
/// a buffer plus logical length pair.
///
/// # Panics
///
/// Panics if `len` exceeds `data`.
pub(crate) fn copy_into_buffer(buffer: Box<[char]>, data: &[char], len: usize) -> Box<[char]> {
    assert!(
        len <= data.len(),
        "length {len} exceeds source length {}",
        data.len()
    );
    let mut buffer = ensure_capacity(buffer, len);
    buffer[..len].copy_from_slice(&data[..len]);
    buffer
}
