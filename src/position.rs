/// Maps a requested position onto a non-negative insertion index.
///
/// Non-negative positions are used as-is, even past the end of the sequence,
/// which is how sparse gaps are created. Negative positions count back from
/// the end and wrap around as many times as needed. An empty sequence only
/// has index 0.
pub(crate) fn canonical(position: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if position >= 0 {
        return position as usize;
    }

    match position.unsigned_abs() % len {
        0 => 0,
        back => len - back,
    }
}

/// Index one before `position`, re-canonicalized so that "before the front"
/// wraps to the last slot.
pub(crate) fn before(position: isize, len: usize) -> usize {
    predecessor(canonical(position, len), len)
}

/// Index one after `position`.
pub(crate) fn after(position: isize, len: usize) -> usize {
    canonical(position, len) + 1
}

/// Index of the label whose options a new label at `index` inherits.
///
/// For index 0 this is the last slot of the sequence.
pub(crate) fn predecessor(index: usize, len: usize) -> usize {
    match index.checked_sub(1) {
        Some(previous) if len > 0 => previous,
        _ => canonical(-1, len),
    }
}
