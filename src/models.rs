use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

#[cfg(feature = "serde")]
use serde::Deserialize;
#[cfg(feature = "serde")]
use serde::Serialize;

/// A time of day, normalized to a 24-hour clock.
///
/// Only the hour is ever normalized by parsing; the minute and second are carried through exactly
/// as they were read, so nothing here guarantees they are below 60.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Time {
  pub(crate) hour: u32,
  pub(crate) minute: u32,
  pub(crate) second: u32,
}

impl Time {
  /// Midnight; also the value every absent or unreadable input degrades to.
  pub const MIDNIGHT: Self = Self::new(0, 0, 0);

  /// Create a new time from its components. No range checks are performed.
  #[inline]
  pub const fn new(hour: u32, minute: u32, second: u32) -> Self {
    Self { hour, minute, second }
  }

  /// The hour; between 0 and 23, inclusive, for any value produced by parsing with a 24-hour or
  /// `k` format.
  #[inline]
  pub const fn hour(&self) -> u32 {
    self.hour
  }

  /// The minute.
  #[inline]
  pub const fn minute(&self) -> u32 {
    self.minute
  }

  /// The second.
  #[inline]
  pub const fn second(&self) -> u32 {
    self.second
  }

  /// The `(hour, minute, second)` triple.
  #[inline]
  pub const fn hms(&self) -> (u32, u32, u32) {
    (self.hour, self.minute, self.second)
  }

  /// Whether the hour falls before or after noon.
  #[inline]
  pub const fn meridiem(&self) -> Meridiem {
    Meridiem::of(self.hour)
  }
}

impl From<(u32, u32, u32)> for Time {
  fn from((hour, minute, second): (u32, u32, u32)) -> Self {
    Self::new(hour, minute, second)
  }
}

impl Display for Time {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
  }
}

/// The AM/PM designator of a 12-hour clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Meridiem {
  #[cfg_attr(feature = "serde", serde(rename = "AM"))]
  Am,
  #[cfg_attr(feature = "serde", serde(rename = "PM"))]
  Pm,
}

impl Meridiem {
  /// The meridiem of a 24-hour clock hour. Anything from 12 up is `Pm`.
  #[inline]
  pub const fn of(hour: u32) -> Self {
    match hour >= 12 {
      true => Self::Pm,
      false => Self::Am,
    }
  }

  #[inline]
  pub const fn as_upper(&self) -> &'static str {
    match self {
      Self::Am => "AM",
      Self::Pm => "PM",
    }
  }

  #[inline]
  pub const fn as_lower(&self) -> &'static str {
    match self {
      Self::Am => "am",
      Self::Pm => "pm",
    }
  }
}

impl Display for Meridiem {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.write_str(self.as_upper())
  }
}

/// Convert a 24-hour clock hour to the 12-hour clock, where both midnight and noon read as 12.
#[inline]
pub const fn to_12h(hour: u32) -> u32 {
  match hour % 12 {
    0 => 12,
    v => v,
  }
}

/// Convert a 12-hour clock hour back to the 24-hour clock.
#[inline]
pub const fn to_24h(hour: u32, meridiem: Meridiem) -> u32 {
  match meridiem {
    Meridiem::Am => hour % 12,
    Meridiem::Pm => hour % 12 + 12,
  }
}
