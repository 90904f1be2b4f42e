use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::ErrorKind;
use crate::FormatError;

/// A wrapper around a format string being validated, capable of easily handling errors.
struct Input<'a> {
  src: &'a str,
  chars: Peekable<CharIndices<'a>>,
}

impl<'a> Input<'a> {
  fn new(src: &'a str) -> Self {
    Self { src, chars: src.char_indices().peekable() }
  }

  /// The byte index of the next unread character.
  fn index(&mut self) -> usize {
    self.chars.peek().map_or(self.src.len(), |&(ix, _)| ix)
  }

  /// Consume the next character if it satisfies the predicate.
  fn eat(&mut self, pred: impl Fn(char) -> bool) -> bool {
    match self.chars.peek() {
      Some(&(_, ch)) if pred(ch) => {
        self.chars.next();
        true
      },
      _ => false,
    }
  }

  /// Parse a static sequence.
  fn expect_seq(&mut self, seq: &str) -> Result<(), FormatError> {
    for expected in seq.chars() {
      match self.chars.peek() {
        None => return self.fail(ErrorKind::InputTooShort),
        Some(&(_, ch)) if ch != expected => return self.fail(ErrorKind::Unexpected),
        Some(_) => {
          self.chars.next();
        },
      }
    }
    Ok(())
  }

  fn fail<T>(&mut self, kind: ErrorKind) -> Result<T, FormatError> {
    let ix = self.index();
    Err(FormatError::new(self.src, kind).at_index(ix))
  }
}

/// Check that a format has the shape `H[H][:mm[:ss]]`, where each hour character is one of `H`,
/// `h`, `k` or `K` (case and family may be mixed).
///
/// This is the check a time picker applies to its configured format. It is stricter than what
/// [`render`](crate::render()) accepts: meridiem tokens, unpadded minutes and literals are all
/// rejected. Parsing and rendering never call it.
pub fn validate_format(fmt: &str) -> Result<(), FormatError> {
  let is_hour = |c: char| matches!(c, 'H' | 'h' | 'k' | 'K');
  let mut input = Input::new(fmt);
  if !input.eat(is_hour) {
    return input.fail(ErrorKind::MissingHour);
  }
  input.eat(is_hour);

  if input.eat(|c| c == ':') {
    input.expect_seq("mm")?;
    if input.eat(|c| c == ':') {
      input.expect_seq("ss")?;
    }
  }

  if input.chars.peek().is_some() {
    debug!("rejecting format {fmt:?}: trailing input at {}", input.index());
    return input.fail(ErrorKind::InputTooLong);
  }
  Ok(())
}
