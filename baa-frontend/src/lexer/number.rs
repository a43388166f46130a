//! Numeric literal parsing for the Baa lexer
//!
//! Converts a raw token span into a typed number value. Both digit
//! alphabets and both decimal-separator glyphs are accepted, integer
//! accumulation is overflow-checked, and the exact source span is kept
//! for diagnostics.

use baa_common::{CompilerError, SourceLocation};
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::digits::{digit_value, is_decimal_separator, is_digit};

/// Arabic-script message reported for a successful lex
pub const SUCCESS_MESSAGE: &str = "نجاح";

/// Errors produced while lexing a numeric literal
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberError {
    /// Integer literal exceeds the representable range
    #[error("integer literal too large")]
    Overflow,

    /// Reserved for malformed input reaching the parser from an
    /// unvalidated caller. The digit-consumption loops stop at the first
    /// non-digit, so they never produce it themselves.
    #[error("invalid character in numeric literal")]
    InvalidChar,

    /// More than one decimal separator in one literal
    #[error("multiple decimal separators in numeric literal")]
    MultipleDots,

    /// Zero digits where at least one was required (bare separator,
    /// empty span)
    #[error("invalid numeric literal format")]
    InvalidFormat,

    /// Allocation exhaustion reported by embedders. Library code here
    /// never constructs it; allocation failure aborts instead.
    #[error("memory allocation failed")]
    MemoryError,
}

impl NumberError {
    /// Diagnostic message in the language's native script
    pub fn localized_message(&self) -> &'static str {
        match self {
            NumberError::Overflow => "الرقم كبير جداً",
            NumberError::InvalidChar => "حرف غير صالح في الرقم",
            NumberError::MultipleDots => "نقاط عشرية متعددة",
            NumberError::InvalidFormat => "تنسيق رقم غير صالح",
            NumberError::MemoryError => "خطأ في الذاكرة",
        }
    }
}

/// Kind tag for a parsed numeric literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberKind {
    Integer,
    Decimal,
}

/// Value of a parsed numeric literal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NumberValue {
    Integer(i64),
    Decimal(f64),
}

/// A parsed numeric literal
///
/// `raw_text` preserves the source span exactly as written, whichever
/// digit script it used, so diagnostics can round-trip it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Number {
    pub raw_text: String,
    pub value: NumberValue,
}

impl Number {
    pub fn kind(&self) -> NumberKind {
        match self.value {
            NumberValue::Integer(_) => NumberKind::Integer,
            NumberValue::Decimal(_) => NumberKind::Decimal,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self.value {
            NumberValue::Integer(n) => Some(n),
            NumberValue::Decimal(_) => None,
        }
    }

    pub fn as_decimal(&self) -> Option<f64> {
        match self.value {
            NumberValue::Integer(_) => None,
            NumberValue::Decimal(d) => Some(d),
        }
    }
}

/// Consume digits from `pos`, accumulating an overflow-checked integer.
///
/// Stops at the first non-digit; `pos` ends up just past the last digit
/// consumed.
fn parse_integer_part(chars: &[char], pos: &mut usize) -> Result<i64, NumberError> {
    let mut result: i64 = 0;
    let mut has_digits = false;

    while let Some(&c) = chars.get(*pos) {
        if !is_digit(c) {
            break;
        }
        has_digits = true;

        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add(digit_value(c) as i64))
            .ok_or(NumberError::Overflow)?;
        *pos += 1;
    }

    if !has_digits {
        return Err(NumberError::InvalidFormat);
    }

    Ok(result)
}

/// Consume digits from `pos` as a fractional part.
///
/// Accumulates digit * place with place starting at 0.1; bounded f64
/// precision is accepted here rather than corrected.
fn parse_decimal_part(chars: &[char], pos: &mut usize) -> Result<f64, NumberError> {
    let mut result = 0.0;
    let mut place = 0.1;
    let mut has_digits = false;

    while let Some(&c) = chars.get(*pos) {
        if !is_digit(c) {
            break;
        }
        has_digits = true;

        result += digit_value(c) as f64 * place;
        place /= 10.0;
        *pos += 1;
    }

    if !has_digits {
        return Err(NumberError::InvalidFormat);
    }

    Ok(result)
}

/// Parse a numeric literal span into a [`Number`].
///
/// One separator splits the span into integer and fractional parts; zero
/// separators make it an integer. Failures never leave a partially built
/// `Number` behind, and success always retains the span verbatim in
/// `raw_text`.
pub fn parse_number(text: &str) -> Result<Number, NumberError> {
    if text.is_empty() {
        return Err(NumberError::InvalidFormat);
    }

    let chars: Vec<char> = text.chars().collect();

    let separators = chars.iter().filter(|c| is_decimal_separator(**c)).count();
    if separators > 1 {
        return Err(NumberError::MultipleDots);
    }

    let mut pos = 0;
    let value = if separators == 0 {
        NumberValue::Integer(parse_integer_part(&chars, &mut pos)?)
    } else {
        let int_part = parse_integer_part(&chars, &mut pos)?;
        pos += 1; // skip the separator
        let dec_part = parse_decimal_part(&chars, &mut pos)?;
        NumberValue::Decimal(int_part as f64 + dec_part)
    };

    if pos < chars.len() {
        // Token spans handed over by the tokenizer end at the last digit;
        // anything left over means the caller sliced the span itself.
        warn!("ignoring trailing characters in numeric literal: {text:?}");
    }

    Ok(Number {
        raw_text: text.to_string(),
        value,
    })
}

/// Lex a numeric literal span, reporting failures through the shared
/// compiler error type with the localized message attached.
pub fn lex_number(text: &str, location: SourceLocation) -> Result<Number, CompilerError> {
    parse_number(text)
        .map_err(|err| CompilerError::lexer_error(err.localized_message().to_string(), location))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer() {
        let number = parse_number("123").unwrap();
        assert_eq!(number.raw_text, "123");
        assert_eq!(number.kind(), NumberKind::Integer);
        assert_eq!(number.as_integer(), Some(123));
    }

    #[test]
    fn test_arabic_integer() {
        let number = parse_number("١٢٣").unwrap();
        assert_eq!(number.raw_text, "١٢٣");
        assert_eq!(number.value, NumberValue::Integer(123));
    }

    #[test]
    fn test_mixed_script_integer() {
        let number = parse_number("1٢3").unwrap();
        assert_eq!(number.value, NumberValue::Integer(123));
    }

    #[test]
    fn test_zero() {
        assert_eq!(parse_number("0").unwrap().as_integer(), Some(0));
        assert_eq!(parse_number("٠").unwrap().as_integer(), Some(0));
    }

    #[test]
    fn test_decimal() {
        let number = parse_number("3.25").unwrap();
        assert_eq!(number.kind(), NumberKind::Decimal);
        let d = number.as_decimal().unwrap();
        assert!((d - 3.25).abs() < 1e-9);
    }

    #[test]
    fn test_arabic_decimal() {
        let number = parse_number("3٫25").unwrap();
        let d = number.as_decimal().unwrap();
        assert!((d - 3.25).abs() < 1e-9);

        let number = parse_number("٣٫٢٥").unwrap();
        assert_eq!(number.raw_text, "٣٫٢٥");
        let d = number.as_decimal().unwrap();
        assert!((d - 3.25).abs() < 1e-9);
    }

    #[test]
    fn test_overflow_boundary() {
        let number = parse_number("9223372036854775807").unwrap();
        assert_eq!(number.as_integer(), Some(i64::MAX));

        assert_eq!(
            parse_number("9223372036854775808"),
            Err(NumberError::Overflow)
        );
    }

    #[test]
    fn test_multiple_dots() {
        assert_eq!(parse_number("1.2.3"), Err(NumberError::MultipleDots));
        assert_eq!(parse_number("1.2٫3"), Err(NumberError::MultipleDots));
        assert_eq!(parse_number(".."), Err(NumberError::MultipleDots));
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(parse_number(""), Err(NumberError::InvalidFormat));
        assert_eq!(parse_number("."), Err(NumberError::InvalidFormat));
        assert_eq!(parse_number("٫"), Err(NumberError::InvalidFormat));
        // trailing separator with nothing after it
        assert_eq!(parse_number("5."), Err(NumberError::InvalidFormat));
        // separator with no integer part
        assert_eq!(parse_number(".5"), Err(NumberError::InvalidFormat));
    }

    #[test]
    fn test_trailing_characters_ignored() {
        // The consumption loop stops at the first non-digit; the raw
        // text still covers the whole span.
        let number = parse_number("12x").unwrap();
        assert_eq!(number.as_integer(), Some(12));
        assert_eq!(number.raw_text, "12x");
    }

    #[test]
    fn test_raw_text_round_trip() {
        for text in ["42", "٧", "3.25", "٣٫٢٥", "0.5٥"] {
            let number = parse_number(text).unwrap();
            assert_eq!(number.raw_text, text);
        }
    }

    #[test]
    fn test_localized_messages() {
        assert_eq!(NumberError::Overflow.localized_message(), "الرقم كبير جداً");
        assert_eq!(
            NumberError::InvalidChar.localized_message(),
            "حرف غير صالح في الرقم"
        );
        assert_eq!(
            NumberError::MultipleDots.localized_message(),
            "نقاط عشرية متعددة"
        );
        assert_eq!(
            NumberError::InvalidFormat.localized_message(),
            "تنسيق رقم غير صالح"
        );
        assert_eq!(NumberError::MemoryError.localized_message(), "خطأ في الذاكرة");
        assert_eq!(SUCCESS_MESSAGE, "نجاح");
    }

    #[test]
    fn test_lex_number_reports_compiler_error() {
        let location = SourceLocation::new("main.baa", 4, 9);
        let err = lex_number("1.2.3", location.clone()).unwrap_err();
        assert_eq!(
            err,
            CompilerError::LexError {
                location,
                message: "نقاط عشرية متعددة".to_string(),
            }
        );
    }

    #[test]
    fn test_lex_number_success() {
        let number = lex_number("٤٢", SourceLocation::new_simple(1, 1)).unwrap();
        assert_eq!(number.as_integer(), Some(42));
    }
}
