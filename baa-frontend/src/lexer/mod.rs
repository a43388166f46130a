//! Numeric-literal lexing for the Baa language
//!
//! Character-stream scanning lives with the tokenizer; this module owns
//! the digit alphabet and the number engine the tokenizer calls into
//! whenever a token starts with a digit or decimal separator (per
//! [`is_number_start`]).

pub mod digits;
pub mod number;

pub use digits::{
    digit_value, is_arabic_digit, is_decimal_separator, is_digit, is_number_start,
};
pub use number::{lex_number, parse_number, Number, NumberError, NumberKind, NumberValue};
