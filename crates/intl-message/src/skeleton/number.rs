//! Number skeleton compilation.
//!
//! Maps ICU number skeleton tokens (`currency/EUR`, `.00`, `@@#`,
//! `sign-always`, ...) onto [`NumberFormatOptions`]. Stems the compiler does
//! not recognize are skipped, matching how platform formatters treat unknown
//! skeleton stems.

use std::sync::LazyLock;

use regex::Regex;

use super::RangeError;
use crate::parser::NumberSkeletonToken;
use crate::types::{
    CompactDisplay, CurrencyDisplay, CurrencySign, Notation, NumberFormatOptions,
    NumberFormatStyle, SignDisplay, TrailingZeroDisplay, UnitDisplay,
};

/// `.00`, `.00*`, `.##`, `.00##`
static FRACTION_PRECISION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\.(?:(0+)(\*)?|(#+)|(0+)(#+))$").expect("fraction precision pattern is valid")
});

/// `@@@`, `@@+`, `@##`
static SIGNIFICANT_PRECISION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(@+)?(\+|#+)?$").expect("significant precision pattern is valid")
});

/// Compile number skeleton tokens into formatter options.
///
/// # Example
///
/// ```
/// use intl_message::compile_number_skeleton;
/// use intl_message::parser::NumberSkeletonToken;
///
/// let options = compile_number_skeleton(&[
///     NumberSkeletonToken::new("currency", &["EUR"]),
///     NumberSkeletonToken::new(".00", &[]),
/// ])
/// .unwrap();
/// assert_eq!(options.currency.as_deref(), Some("EUR"));
/// assert_eq!(options.minimum_fraction_digits, Some(2));
/// assert_eq!(options.maximum_fraction_digits, Some(2));
/// ```
pub fn compile_number_skeleton(
    tokens: &[NumberSkeletonToken],
) -> Result<NumberFormatOptions, RangeError> {
    let mut result = NumberFormatOptions::default();
    for token in tokens {
        let stem = token.stem.as_str();
        match stem {
            "percent" | "%" => result.style = Some(NumberFormatStyle::Percent),
            "currency" => {
                result.style = Some(NumberFormatStyle::Currency);
                result.currency = Some(required_option(token)?.to_string());
            }
            "group-off" | ",_" => result.use_grouping = Some(false),
            "precision-integer" | "." => result.maximum_fraction_digits = Some(0),
            "measure-unit" | "unit" => {
                result.style = Some(NumberFormatStyle::Unit);
                result.unit = Some(icu_unit_to_ecma(required_option(token)?).to_string());
            }
            "compact-short" | "K" => {
                result.notation = Some(Notation::Compact);
                result.compact_display = Some(CompactDisplay::Short);
            }
            "compact-long" | "KK" => {
                result.notation = Some(Notation::Compact);
                result.compact_display = Some(CompactDisplay::Long);
            }
            "scientific" | "engineering" => {
                result.notation = Some(if stem == "scientific" {
                    Notation::Scientific
                } else {
                    Notation::Engineering
                });
                for option in &token.options {
                    if let Some(sign) = parse_sign(option) {
                        sign.apply(&mut result);
                    }
                }
            }
            "notation-simple" => result.notation = Some(Notation::Standard),
            "unit-width-narrow" => {
                result.currency_display = Some(CurrencyDisplay::NarrowSymbol);
                result.unit_display = Some(UnitDisplay::Narrow);
            }
            "unit-width-short" => {
                result.currency_display = Some(CurrencyDisplay::Code);
                result.unit_display = Some(UnitDisplay::Short);
            }
            "unit-width-full-name" => {
                result.currency_display = Some(CurrencyDisplay::Name);
                result.unit_display = Some(UnitDisplay::Long);
            }
            "unit-width-iso-code" => result.currency_display = Some(CurrencyDisplay::Symbol),
            _ => compile_precision_or_sign(token, &mut result)?,
        }
    }
    Ok(result)
}

fn compile_precision_or_sign(
    token: &NumberSkeletonToken,
    result: &mut NumberFormatOptions,
) -> Result<(), RangeError> {
    let stem = token.stem.as_str();

    if let Some(caps) = FRACTION_PRECISION.captures(stem) {
        if token.options.len() > 1 {
            return Err(RangeError::FractionPrecisionOptions {
                stem: stem.to_string(),
                count: token.options.len(),
            });
        }
        let len = |i: usize| caps.get(i).map(|m| digit_count(m.as_str()));
        match (len(1), caps.get(2), len(3), len(4), len(5)) {
            (Some(min), Some(_), _, _, _) => result.minimum_fraction_digits = Some(min),
            (_, _, Some(max), _, _) => result.maximum_fraction_digits = Some(max),
            (_, _, _, Some(min), Some(extra)) => {
                result.minimum_fraction_digits = Some(min);
                result.maximum_fraction_digits = Some(min + extra);
            }
            (Some(exact), None, _, _, _) => {
                result.minimum_fraction_digits = Some(exact);
                result.maximum_fraction_digits = Some(exact);
            }
            _ => {}
        }
        match token.options.first().map(String::as_str) {
            Some("w") => result.trailing_zero_display = Some(TrailingZeroDisplay::StripIfInteger),
            Some(option) => apply_significant_precision(option, result),
            None => {}
        }
        return Ok(());
    }

    if SIGNIFICANT_PRECISION.is_match(stem) {
        apply_significant_precision(stem, result);
        return Ok(());
    }

    if let Some(sign) = parse_sign(stem) {
        sign.apply(result);
        return Ok(());
    }

    tracing::debug!(stem, "skipping unsupported number skeleton stem");
    Ok(())
}

fn apply_significant_precision(text: &str, result: &mut NumberFormatOptions) {
    let Some(caps) = SIGNIFICANT_PRECISION.captures(text) else {
        return;
    };
    let at_signs = caps.get(1).map(|m| digit_count(m.as_str()));
    let suffix = caps.get(2).map(|m| m.as_str());
    match (at_signs, suffix) {
        // @@@
        (Some(exact), None) => {
            result.minimum_significant_digits = Some(exact);
            result.maximum_significant_digits = Some(exact);
        }
        // @@@+
        (Some(min), Some("+")) => result.minimum_significant_digits = Some(min),
        // @@##
        (Some(min), Some(hashes)) => {
            result.minimum_significant_digits = Some(min);
            result.maximum_significant_digits = Some(min + digit_count(hashes));
        }
        // ###
        (None, Some(hashes)) if hashes != "+" => {
            result.maximum_significant_digits = Some(digit_count(hashes));
        }
        _ => {}
    }
}

fn digit_count(run: &str) -> u32 {
    u32::try_from(run.len()).unwrap_or(u32::MAX)
}

fn required_option(token: &NumberSkeletonToken) -> Result<&str, RangeError> {
    token
        .options
        .first()
        .map(String::as_str)
        .ok_or_else(|| RangeError::MissingOption {
            stem: token.stem.clone(),
        })
}

/// `length-meter` -> `meter`
fn icu_unit_to_ecma(unit: &str) -> &str {
    unit.split_once('-').map_or(unit, |(_, rest)| rest)
}

struct SignOptions {
    sign_display: Option<SignDisplay>,
    currency_sign: Option<CurrencySign>,
}

impl SignOptions {
    fn apply(&self, result: &mut NumberFormatOptions) {
        if let Some(sign_display) = self.sign_display {
            result.sign_display = Some(sign_display);
        }
        if let Some(currency_sign) = self.currency_sign {
            result.currency_sign = Some(currency_sign);
        }
    }
}

fn parse_sign(stem: &str) -> Option<SignOptions> {
    let (sign_display, currency_sign) = match stem {
        "sign-auto" => (Some(SignDisplay::Auto), None),
        "sign-accounting" | "()" => (None, Some(CurrencySign::Accounting)),
        "sign-always" | "+!" => (Some(SignDisplay::Always), None),
        "sign-accounting-always" | "()!" => {
            (Some(SignDisplay::Always), Some(CurrencySign::Accounting))
        }
        "sign-except-zero" | "+?" => (Some(SignDisplay::ExceptZero), None),
        "sign-accounting-except-zero" | "()?" => {
            (Some(SignDisplay::ExceptZero), Some(CurrencySign::Accounting))
        }
        "sign-never" | "+_" => (Some(SignDisplay::Never), None),
        _ => return None,
    };
    Some(SignOptions {
        sign_display,
        currency_sign,
    })
}
