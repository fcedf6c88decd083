//! CLDR plural rules backed by `icu_plurals`.

use icu_locale_core::{Locale, locale};
use icu_plurals::{
    PluralCategory as IcuCategory, PluralOperands, PluralRuleType, PluralRules as IcuRules,
};

use super::{PluralCategory, PluralRules};
use crate::parser::PluralType;

/// Plural rules for one locale, cardinal or ordinal.
///
/// # Examples
///
/// ```
/// use icu_locale_core::locale;
/// use intl_message::parser::PluralType;
/// use intl_message::provider::{IcuPluralRules, PluralCategory, PluralRules};
///
/// let ru = IcuPluralRules::try_new(Some(locale!("ru")), PluralType::Cardinal).unwrap();
/// assert_eq!(ru.select(1.0), PluralCategory::One);
/// assert_eq!(ru.select(2.0), PluralCategory::Few);
/// assert_eq!(ru.select(5.0), PluralCategory::Many);
///
/// let en = IcuPluralRules::try_new(None, PluralType::Ordinal).unwrap();
/// assert_eq!(en.select(2.0), PluralCategory::Two);
/// assert_eq!(en.select(3.0), PluralCategory::Few);
/// ```
pub struct IcuPluralRules {
    rules: IcuRules,
}

impl IcuPluralRules {
    /// Build rules for `locale`, falling back to English when the locale is
    /// missing or has no plural data.
    pub fn try_new(locale: Option<Locale>, plural_type: PluralType) -> Option<Self> {
        let rule_type = match plural_type {
            PluralType::Cardinal => PluralRuleType::Cardinal,
            PluralType::Ordinal => PluralRuleType::Ordinal,
        };
        let requested = locale.unwrap_or(locale!("en"));
        let rules = IcuRules::try_new(requested.clone().into(), rule_type.into())
            .or_else(|error| {
                tracing::debug!(locale = %requested, %error, "no plural data, falling back to en");
                IcuRules::try_new(locale!("en").into(), rule_type.into())
            })
            .ok()?;
        Some(Self { rules })
    }
}

impl PluralRules for IcuPluralRules {
    fn select(&self, n: f64) -> PluralCategory {
        let n = n.abs();
        let category = if n.fract() == 0.0 && n < 9.0e15 {
            self.rules.category_for(n as i64)
        } else {
            match n.to_string().parse::<PluralOperands>() {
                Ok(operands) => self.rules.category_for(operands),
                Err(_) => IcuCategory::Other,
            }
        };
        category_from_icu(category)
    }
}

fn category_from_icu(category: IcuCategory) -> PluralCategory {
    match category {
        IcuCategory::Zero => PluralCategory::Zero,
        IcuCategory::One => PluralCategory::One,
        IcuCategory::Two => PluralCategory::Two,
        IcuCategory::Few => PluralCategory::Few,
        IcuCategory::Many => PluralCategory::Many,
        IcuCategory::Other => PluralCategory::Other,
    }
}
