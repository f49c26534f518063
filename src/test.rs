/// Turns a pair of arbitrary numbers into a valid `(x, n)` pair
///
/// Returns `None` when no trial was drawn, so the caller can discard the case
pub fn counts(x: u16, n: u16) -> Option<(usize, usize)> {
    if n > 0 {
        let n = n as usize;

        Some((x as usize % (n + 1), n))
    } else {
        None
    }
}
