//! Runtime configuration read from the environment.

use core::str::FromStr;

use renoovy_catalog::DEFAULT_INSTALLMENTS;
use renoovy_core::Currency;
use renoovy_reviews::DEFAULT_FEATURED_LIMIT;

pub const CURRENCY_ENV: &str = "RENOOVY_CURRENCY";
pub const DEFAULT_INSTALLMENTS_ENV: &str = "RENOOVY_DEFAULT_INSTALLMENTS";
pub const FEATURED_LIMIT_ENV: &str = "RENOOVY_FEATURED_LIMIT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Currency of prices created through the use cases.
    pub currency: Currency,
    /// Installment count for packages created without one.
    pub default_installments: u32,
    /// Featured testimonials shown when a request gives no limit.
    pub featured_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency: Currency::Brl,
            default_installments: DEFAULT_INSTALLMENTS,
            featured_limit: DEFAULT_FEATURED_LIMIT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Missing keys take the default;
    /// invalid values log a warning and take the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            currency: read(&lookup, CURRENCY_ENV, defaults.currency, |v| {
                Currency::from_str(v).ok()
            }),
            default_installments: read(
                &lookup,
                DEFAULT_INSTALLMENTS_ENV,
                defaults.default_installments,
                positive::<u32>,
            ),
            featured_limit: read(
                &lookup,
                FEATURED_LIMIT_ENV,
                defaults.featured_limit,
                positive::<usize>,
            ),
        }
    }
}

fn read<T: core::fmt::Debug>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
    parse: impl Fn(&str) -> Option<T>,
) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|| {
        tracing::warn!(
            key,
            value = %raw,
            fallback = ?default,
            "invalid configuration value; using default"
        );
        default
    })
}

fn positive<T: FromStr + PartialOrd + Default>(raw: &str) -> Option<T> {
    raw.trim().parse::<T>().ok().filter(|v| *v > T::default())
}
