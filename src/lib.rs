//! Conversion between clock-time text and hour/minute/second values, driven by a format string.
//!
//! A format is a template of literal characters and the tokens `HH`, `H`, `hh`, `h`, `kk`, `k`,
//! `mm`, `m`, `ss`, `s`, `A`, `a`, `P` and `p`. Rendering substitutes those tokens; parsing reads
//! the digits out of the text and normalizes the hour by the format's clock convention (24-hour,
//! 12-hour with a meridiem, or `k` where midnight is written as 24).
//!
//! Every conversion is total. Text that cannot be read degrades to zeros rather than failing.
//!
//! ```
//! use clockfmt::Time;
//! use clockfmt::TimeFormat;
//!
//! let fmt = TimeFormat::new("hh:mm A");
//! assert_eq!(fmt.parse("01:30 PM"), Time::new(13, 30, 0));
//! assert_eq!(fmt.render(&Time::new(0, 30, 0)), "12:30 AM");
//! ```

#[macro_use]
mod logging;

mod error;
mod inspect;
mod models;
mod parser;
mod render;
mod tests;
mod validate;

pub use error::ErrorKind;
pub use error::FormatError;
pub use inspect::is_meridiem_pm;
pub use inspect::uses_meridiem;
pub use inspect::uses_midnight_as_k;
pub use inspect::uses_seconds;
pub use models::to_12h;
pub use models::to_24h;
pub use models::Meridiem;
pub use models::Time;
pub use validate::validate_format;

/// The format used when none is configured.
pub const DEFAULT_FORMAT: &str = "HH:mm";

/// Read a time out of `text` according to the clock convention of `fmt`.
///
/// The first three runs of digits become the hour, minute and second; missing ones are zero. An
/// absent or empty text yields midnight.
///
/// ## Example
///
/// ```
/// assert_eq!(clockfmt::parse("24:00", "kk:mm").hms(), (0, 0, 0));
/// assert_eq!(clockfmt::parse(None, "HH:mm").hms(), (0, 0, 0));
/// ```
pub fn parse<'a>(text: impl Into<Option<&'a str>>, fmt: &str) -> Time {
  parser::OnceParser::new(fmt, text.into()).parse()
}

/// Write the given time using `fmt`.
///
/// Values are not range checked; an hour of 25 under a 24-hour format renders as `25`.
///
/// ## Example
///
/// ```
/// assert_eq!(clockfmt::render("HH:mm", 0, 5, 0), "00:05");
/// assert_eq!(clockfmt::render("kk:mm", 0, 0, 0), "24:00");
/// ```
pub fn render(fmt: &str, hour: u32, minute: u32, second: u32) -> String {
  render::render(fmt, &Time::new(hour, minute, second))
}

/// A format string, with the conversions and convention queries that apply to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimeFormat<'a> {
  fmt: &'a str,
}

impl<'a> TimeFormat<'a> {
  /// Wrap a format string. The format is not validated; see [`TimeFormat::validate`].
  pub const fn new(fmt: &'a str) -> Self {
    Self { fmt }
  }

  /// The underlying format string.
  pub const fn as_str(&self) -> &'a str {
    self.fmt
  }

  /// Read a time out of `text`. See [`parse`].
  pub fn parse<'t>(&self, text: impl Into<Option<&'t str>>) -> Time {
    parser::OnceParser::new(self.fmt, text.into()).parse()
  }

  /// Write `time` using this format. See [`render`].
  pub fn render(&self, time: &Time) -> String {
    render::render(self.fmt, time)
  }

  /// Whether this is a 12-hour format.
  pub fn uses_meridiem(&self) -> bool {
    uses_meridiem(self.fmt)
  }

  pub fn is_meridiem_pm(&self) -> bool {
    is_meridiem_pm(self.fmt)
  }

  /// Whether midnight is written as 24.
  pub fn uses_midnight_as_k(&self) -> bool {
    uses_midnight_as_k(self.fmt)
  }

  pub fn uses_seconds(&self) -> bool {
    uses_seconds(self.fmt)
  }

  /// Check the format against the `H[H][:mm[:ss]]` shape. See [`validate_format`].
  pub fn validate(&self) -> Result<(), FormatError> {
    validate_format(self.fmt)
  }
}

impl Default for TimeFormat<'static> {
  fn default() -> Self {
    Self::new(DEFAULT_FORMAT)
  }
}

impl<'a> From<&'a str> for TimeFormat<'a> {
  fn from(fmt: &'a str) -> Self {
    Self::new(fmt)
  }
}
