//! Questions about the clock conventions of a format string.
//!
//! These are plain character scans, not token scans: a stray `a` anywhere in the format (say, in a
//! literal word) is enough to make it a 12-hour format.

/// True if the format contains any of `a`, `A`, `p` or `P`.
pub fn uses_meridiem(fmt: &str) -> bool {
  fmt.contains(['a', 'A', 'p', 'P'])
}

/// True if the format contains `p` or `P`.
pub fn is_meridiem_pm(fmt: &str) -> bool {
  fmt.contains(['p', 'P'])
}

/// True if the format writes midnight as 24 (`k` or `kk`). Only lowercase `k` counts.
pub fn uses_midnight_as_k(fmt: &str) -> bool {
  fmt.contains('k')
}

/// True if the format has a seconds token.
pub fn uses_seconds(fmt: &str) -> bool {
  fmt.contains('s')
}
