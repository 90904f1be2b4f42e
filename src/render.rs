use std::fmt::Write;

use crate::inspect;
use crate::models::to_12h;
use crate::Meridiem;
use crate::Time;

/// The pieces of a time a format token can stand for.
#[derive(Clone, Copy, Debug)]
enum Token {
  Hour { padded: bool },
  KHour { padded: bool },
  Minute { padded: bool },
  Second { padded: bool },
  Meridiem { upper: bool },
}

/// Recognized tokens, two-character tokens first so that `HH` is never read as two `H`s.
const TOKENS: &[(&str, Token)] = &[
  ("HH", Token::Hour { padded: true }),
  ("hh", Token::Hour { padded: true }),
  ("kk", Token::KHour { padded: true }),
  ("mm", Token::Minute { padded: true }),
  ("ss", Token::Second { padded: true }),
  ("H", Token::Hour { padded: false }),
  ("h", Token::Hour { padded: false }),
  ("k", Token::KHour { padded: false }),
  ("m", Token::Minute { padded: false }),
  ("s", Token::Second { padded: false }),
  ("A", Token::Meridiem { upper: true }),
  ("a", Token::Meridiem { upper: false }),
  ("P", Token::Meridiem { upper: true }),
  ("p", Token::Meridiem { upper: false }),
];

/// The display values of one time under one format.
struct Fields {
  hour: u32,
  k_hour: u32,
  minute: u32,
  second: u32,
  meridiem: Meridiem,
}

impl Fields {
  fn new(fmt: &str, time: &Time) -> Self {
    let meridiem = time.meridiem();
    let hour = match inspect::uses_meridiem(fmt) {
      true => to_12h(time.hour),
      false => time.hour,
    };
    // Derived from the display hour, so a format mixing `k` with a meridiem shows the 12-hour
    // value here too.
    let k_hour = match hour {
      0 => 24,
      h => h,
    };
    trace!("rendering {time} with {fmt:?}: display hour {hour}, k hour {k_hour}");
    Self { hour, k_hour, minute: time.minute, second: time.second, meridiem }
  }

  fn write(&self, out: &mut String, token: Token) {
    let number = |out: &mut String, value: u32, padded: bool| {
      // Writing to a `String` cannot fail.
      let _ = match padded {
        true => write!(out, "{value:02}"),
        false => write!(out, "{value}"),
      };
    };
    match token {
      Token::Hour { padded } => number(out, self.hour, padded),
      Token::KHour { padded } => number(out, self.k_hour, padded),
      Token::Minute { padded } => number(out, self.minute, padded),
      Token::Second { padded } => number(out, self.second, padded),
      Token::Meridiem { upper: true } => out.push_str(self.meridiem.as_upper()),
      Token::Meridiem { upper: false } => out.push_str(self.meridiem.as_lower()),
    }
  }
}

/// Substitute every token in the format with the matching piece of the time. Everything else is
/// copied through untouched.
pub(crate) fn render(fmt: &str, time: &Time) -> String {
  let fields = Fields::new(fmt, time);
  let mut out = String::with_capacity(fmt.len() + 4);
  let mut rest = fmt;
  while let Some(ch) = rest.chars().next() {
    match TOKENS.iter().find(|(token, _)| rest.starts_with(token)) {
      Some((token, kind)) => {
        fields.write(&mut out, *kind);
        rest = &rest[token.len()..];
      },
      None => {
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
      },
    }
  }
  out
}
