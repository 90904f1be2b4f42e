use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// Errors occurring during format validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
  /// An owned copy of the format string.
  pub src: String,
  /// The index in the format string where the error occurred.
  pub index: Option<usize>,
  /// A machine-readable explanation of the error.
  pub kind: ErrorKind,
}

impl FormatError {
  pub(crate) fn new(src: &str, kind: ErrorKind) -> Self {
    Self { src: src.into(), index: None, kind }
  }

  pub(crate) fn at_index(mut self, ix: usize) -> Self {
    self.index = Some(ix);
    self
  }
}

impl Display for FormatError {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(
      f,
      "{}\n{}\n{}",
      self.src,
      match self.index {
        Some(ix) => format!("{}^-----", " ".repeat(ix)),
        None => String::new(),
      },
      self.kind
    )
  }
}

impl Error for FormatError {}

/// Ways a format string can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
  InputTooLong,
  InputTooShort,
  MissingHour,
  Unexpected,
}

impl Display for ErrorKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "{}", match self {
      Self::InputTooLong => "Format is valid up to here, but more follows",
      Self::InputTooShort => "Format ended in the middle of a token",
      Self::MissingHour => "Format must start with one or two hour characters (H, h, k, K)",
      Self::Unexpected => "Format does not match HH[:mm[:ss]]",
    })
  }
}
