#![cfg(test)]

use assert2::check;

use crate::parse;
use crate::render;
use crate::Time;
use crate::TimeFormat;

#[test]
fn test_render_24h() {
  check!(render("HH:mm", 0, 5, 0) == "00:05");
  check!(render("H:m", 7, 5, 0) == "7:5");
  check!(render("HH:mm:ss", 23, 59, 9) == "23:59:09");
  check!(render("H:mm:s", 9, 0, 4) == "9:00:4");
}

#[test]
fn test_render_12h() {
  check!(render("hh:mm A", 0, 30, 0) == "12:30 AM");
  check!(render("hh:mm A", 13, 0, 0) == "01:00 PM");
  check!(render("h:mm a", 12, 15, 0) == "12:15 pm");
  check!(render("h:mm p", 23, 15, 0) == "11:15 pm");
  check!(render("hh:mm P", 11, 59, 0) == "11:59 AM");
}

#[test]
fn test_render_k() {
  check!(render("kk:mm", 0, 0, 0) == "24:00");
  check!(render("k:mm", 0, 7, 0) == "24:07");
  check!(render("kk:mm", 9, 0, 0) == "09:00");
  check!(render("kk:mm", 13, 0, 0) == "13:00");
}

#[test]
fn test_render_k_with_meridiem_follows_12h_hour() {
  // The k value is taken from the already converted 12-hour hour, so it never reads 24 here.
  check!(render("kk:mm a", 0, 0, 0) == "12:00 am");
  check!(render("kk:mm a", 13, 0, 0) == "01:00 pm");
}

#[test]
fn test_render_out_of_range() {
  check!(render("HH:mm:ss", 25, 61, 75) == "25:61:75");
  check!(render("hh A", 25, 0, 0) == "01 PM");
}

#[test]
fn test_parse_24h() {
  check!(parse("15:30:45", "HH:mm:ss").hms() == (15, 30, 45));
  check!(parse("7:05", "H:mm").hms() == (7, 5, 0));
  check!(parse("24:00", "HH:mm").hms() == (0, 0, 0));
  check!(parse("27:10", "HH:mm").hms() == (3, 10, 0));
}

#[test]
fn test_parse_12h() {
  check!(parse("01:30 PM", "hh:mm A") == Time::new(13, 30, 0));
  check!(parse("12:00 AM", "hh:mm A").hms() == (0, 0, 0));
  check!(parse("12:00 PM", "hh:mm A").hms() == (12, 0, 0));
  check!(parse("11:30 pm", "h:mm a").hms() == (23, 30, 0));
  check!(parse("11:30 Pm", "h:mm a").hms() == (23, 30, 0));
  check!(parse("9:15:20 am", "h:mm:ss a").hms() == (9, 15, 20));
}

#[test]
fn test_parse_12h_without_marker() {
  check!(parse("11:30", "hh:mm A").hms() == (11, 30, 0));
  check!(parse("24:30", "hh:mm A").hms() == (0, 30, 0));
  // The marker must be a word of its own.
  check!(parse("11:30PM", "hh:mm A").hms() == (11, 30, 0));
}

#[test]
fn test_parse_k() {
  check!(parse("24:00", "kk:mm") == Time::MIDNIGHT);
  check!(parse("24:15", "k:mm").hms() == (0, 15, 0));
  check!(parse("13:15", "kk:mm").hms() == (13, 15, 0));
  // No modulo under k.
  check!(parse("30:15", "kk:mm").hms() == (30, 15, 0));
}

#[test]
fn test_parse_degraded() {
  check!(parse(None, "HH:mm") == Time::MIDNIGHT);
  check!(parse("", "HH:mm") == Time::MIDNIGHT);
  check!(parse("noon", "HH:mm") == Time::MIDNIGHT);
  check!(parse("9", "HH:mm").hms() == (9, 0, 0));
  check!(parse("1:2:3:4", "HH:mm:ss").hms() == (1, 2, 3));
  // Minutes and seconds are not clamped.
  check!(parse("10:75:99", "HH:mm:ss").hms() == (10, 75, 99));
}

#[test]
fn test_parse_ignores_token_order() {
  check!(parse("30:10", "mm:HH").hms() == (6, 10, 0));
  check!(parse("at 8h05", "HH:mm").hms() == (8, 5, 0));
}

#[test]
fn test_round_trip() {
  for fmt in ["HH:mm:ss", "H:m:s", "hh:mm:ss A", "h:m:s a", "kk:mm:ss", "k:m:s"] {
    for hour in 0..24 {
      let text = render(fmt, hour, 7, 42);
      check!(parse(text.as_str(), fmt).hms() == (hour, 7, 42), "{fmt} {text}");
      check!(render(fmt, hour, 7, 42) == text);
    }
  }
}

#[test]
fn test_time_format() {
  let fmt = TimeFormat::new("hh:mm:ss a");
  check!(fmt.uses_meridiem());
  check!(!fmt.is_meridiem_pm());
  check!(fmt.uses_seconds());
  check!(!fmt.uses_midnight_as_k());
  check!(fmt.validate().is_err());
  let time = fmt.parse("10:04:05 pm");
  check!(time.hms() == (22, 4, 5));
  check!(fmt.render(&time) == "10:04:05 pm");

  let fmt = TimeFormat::default();
  check!(fmt.as_str() == "HH:mm");
  check!(fmt.validate().is_ok());
  check!(fmt.parse(None) == Time::MIDNIGHT);
  check!(TimeFormat::from("kk:mm").render(&Time::MIDNIGHT) == "24:00");
}

#[cfg(feature = "serde")]
#[test]
fn test_serde() -> Result<(), serde_json::Error> {
  use crate::Meridiem;

  let time = Time::new(13, 30, 5);
  let json = serde_json::to_string(&time)?;
  check!(json == r#"{"hour":13,"minute":30,"second":5}"#);
  check!(serde_json::from_str::<Time>(&json)? == time);
  check!(serde_json::to_string(&Meridiem::Pm)? == r#""PM""#);
  check!(serde_json::from_str::<Meridiem>(r#""AM""#)? == Meridiem::Am);
  Ok(())
}
