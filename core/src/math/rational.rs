use crate::prelude::{EntryError, EntryResult};
use num_rational::Ratio;

/// Rational entry value. Reduction and sign normalization are delegated to
/// `num-rational`, never reimplemented here.
pub type Rational = Ratio<i64>;

/// Applies the cleanup an entry field performs before parsing: strip all
/// whitespace, treat the first comma as a decimal separator, and substitute
/// "0" for tokens with no digits left.
pub fn clean_token(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let normalized = stripped.replacen(',', ".", 1);
    match normalized.as_str() {
        "" | "." | "-." | "-" => "0".to_string(),
        _ => normalized,
    }
}

/// Parses a cleaned token as an integer, a decimal, or an `a/b` fraction
/// whose sides are themselves integers or decimals.
pub fn parse_rational(token: &str) -> EntryResult<Rational> {
    match token.split_once('/') {
        Some((numer, denom)) => {
            let numer = parse_decimal(numer, token)?;
            let denom = parse_decimal(denom, token)?;
            if *denom.numer() == 0 {
                return Err(EntryError::ZeroDenominator(token.to_string()));
            }
            Ok(numer / denom)
        }
        None => parse_decimal(token, token),
    }
}

/// Canonical display form: the reduced numerator alone for whole values,
/// `numerator/denominator` otherwise, sign on the numerator.
pub fn format_rational(value: &Rational) -> String {
    if *value.denom() == 1 {
        value.numer().to_string()
    } else {
        format!("{}/{}", value.numer(), value.denom())
    }
}

/// Full entry pipeline: clean, parse, format.
pub fn canonicalize(raw: &str) -> EntryResult<String> {
    let cleaned = clean_token(raw);
    let value = parse_rational(&cleaned)?;
    Ok(format_rational(&value))
}

fn parse_decimal(text: &str, token: &str) -> EntryResult<Rational> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (digits, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(EntryError::Malformed(token.to_string()));
    }
    let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return Err(EntryError::Malformed(token.to_string()));
    }

    let overflow = || EntryError::Overflow(token.to_string());
    let scale = 10i64.checked_pow(frac_part.len() as u32).ok_or_else(overflow)?;
    let int_value: i64 = if int_part.is_empty() {
        0
    } else {
        int_part.parse().map_err(|_| overflow())?
    };
    let frac_value: i64 = if frac_part.is_empty() {
        0
    } else {
        frac_part.parse().map_err(|_| overflow())?
    };
    let numer = int_value
        .checked_mul(scale)
        .and_then(|value| value.checked_add(frac_value))
        .ok_or_else(overflow)?;

    Ok(Ratio::new(if negative { -numer } else { numer }, scale))
}
