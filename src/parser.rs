use once_cell::sync::Lazy;
use regex::Regex;

use crate::inspect;
use crate::models::to_24h;
use crate::Meridiem;
use crate::Time;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());
static MERIDIEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(am|pm)\b").unwrap());

/// An object that reads one time string against one format, and is consumed.
///
/// Parsing is driven by the clock convention of the format, not by its token order: the first
/// three runs of digits in the text are taken as hour, minute and second, and an `AM`/`PM` word
/// anywhere in the text is taken as the meridiem.
#[must_use]
pub(crate) struct OnceParser<'a> {
  fmt: &'a str,
  text: Option<&'a str>,
}

impl<'a> OnceParser<'a> {
  #[inline]
  pub(crate) fn new(fmt: &'a str, text: Option<&'a str>) -> Self {
    Self { fmt, text }
  }

  pub(crate) fn parse(self) -> Time {
    let text = match self.text {
      Some(text) if !text.is_empty() => text,
      _ => return Time::MIDNIGHT,
    };

    let mut nums = DIGIT_RUN.find_iter(text).map(|m| parse_digits(m.as_str()));
    let hour = nums.next().unwrap_or_default();
    let minute = nums.next().unwrap_or_default();
    let second = nums.next().unwrap_or_default();
    let meridiem = MERIDIEM.find(text).map(|m| match m.as_str().eq_ignore_ascii_case("pm") {
      true => Meridiem::Pm,
      false => Meridiem::Am,
    });
    trace!("parsed {text:?}: digits ({hour}, {minute}, {second}), meridiem {meridiem:?}");

    let hour = normalize_hour(self.fmt, hour, meridiem);
    let time = Time::new(hour, minute, second);
    trace!("normalized {text:?} against {:?} to {time}", self.fmt);
    time
  }
}

/// Bring a raw hour onto the 24-hour clock according to the format's convention.
///
/// A `k` format takes precedence over a meridiem format, which takes precedence over the 24-hour
/// default.
fn normalize_hour(fmt: &str, hour: u32, meridiem: Option<Meridiem>) -> u32 {
  if inspect::uses_midnight_as_k(fmt) {
    return match hour {
      24 => 0,
      h => h,
    };
  }
  if inspect::uses_meridiem(fmt) {
    let hour = meridiem.map_or(hour, |m| to_24h(hour, m));
    return match hour {
      24 => 0,
      h => h,
    };
  }
  hour % 24
}

/// Read a run of ASCII digits, saturating rather than overflowing.
fn parse_digits(digits: &str) -> u32 {
  digits.bytes().fold(0u32, |acc, b| acc.saturating_mul(10).saturating_add(u32::from(b - b'0')))
}
