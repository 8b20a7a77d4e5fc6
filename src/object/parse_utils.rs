/// Split a byte slice at the first occurrence of `c`, excluding the
/// delimiter itself. Returns `None` if `c` never occurs.
pub(crate) fn split_once<'a>(s: &'a [u8], c: u8) -> Option<(&'a [u8], &'a [u8])> {
    s.iter()
        .position(|b| *b == c)
        .map(|n| (&s[0..n], &s[n + 1..]))
}
