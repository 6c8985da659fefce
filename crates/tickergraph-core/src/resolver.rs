//! Market-state-aware field resolution.
//!
//! Every required page field is pulled through the locator table and
//! normalized into a typed record. The central contract is per-field failure
//! isolation: one broken locator degrades one field to the sentinel and never
//! corrupts the rest of the record.

use log::debug;

use crate::domain::{
    EntityKind, FieldValue, IndexQuote, MarketIndex, PageField, QuoteStatus, Symbol, SymbolQuote,
};
use crate::locator::FieldLocatorTable;
use crate::market_state::MarketState;
use crate::page::QuotePage;

/// Strip currency symbols, thousands separators, percent signs, surrounding
/// parentheses, and outer whitespace. Idempotent: normalizing an already
/// normalized string is a no-op.
pub fn normalize(raw: &str) -> String {
    let mut text = raw.trim();
    while text.len() >= 2 && text.starts_with('(') && text.ends_with(')') {
        text = text[1..text.len() - 1].trim();
    }

    text.chars()
        .filter(|ch| !matches!(ch, '$' | ',' | '%'))
        .collect::<String>()
        .trim()
        .to_owned()
}

/// Resolve every field a security quote requires. The page is already
/// fetched; callers that could not fetch it at all build
/// [`SymbolQuote::unavailable`] instead and skip resolution entirely.
pub fn resolve_symbol(page: &dyn QuotePage, symbol: &Symbol, state: MarketState) -> SymbolQuote {
    let field = |f: PageField| resolve_field(page, EntityKind::Symbol, state, f);

    let latest_price = field(PageField::LatestPrice);
    let (day_low, day_high) = split_range(field(PageField::DayRange));
    let (week52_low, week52_high) = split_range(field(PageField::Week52Range));
    let week52_change_percent = percent_over(&latest_price, &week52_low);

    SymbolQuote {
        symbol: symbol.clone(),
        status: QuoteStatus::Ok,
        fullname: field(PageField::Fullname),
        change: field(PageField::Change),
        change_percent: field(PageField::ChangePercent),
        ytd_change_percent: field(PageField::YtdChangePercent),
        one_year_change_percent: field(PageField::OneYearChangePercent),
        time_stamp: field(PageField::TimeStamp),
        latest_price,
        day_low,
        day_high,
        week52_low,
        week52_high,
        week52_change_percent,
    }
}

/// Resolve every field an index quote requires.
pub fn resolve_index(page: &dyn QuotePage, index: MarketIndex, state: MarketState) -> IndexQuote {
    let field = |f: PageField| resolve_field(page, EntityKind::Index, state, f);

    let (week52_low, week52_high) = split_range(field(PageField::Week52Range));

    IndexQuote {
        index,
        status: QuoteStatus::Ok,
        latest_price: field(PageField::LatestPrice),
        change: field(PageField::Change),
        change_percent: field(PageField::ChangePercent),
        ytd_change_percent: field(PageField::YtdChangePercent),
        one_year_change_percent: field(PageField::OneYearChangePercent),
        time_stamp: field(PageField::TimeStamp),
        week52_low,
        week52_high,
    }
}

fn resolve_field(
    page: &dyn QuotePage,
    kind: EntityKind,
    state: MarketState,
    field: PageField,
) -> FieldValue {
    let Some(locator) = FieldLocatorTable::lookup(kind, state, field) else {
        return FieldValue::Sentinel;
    };

    match page.extract(&locator) {
        Ok(raw) => FieldValue::value(normalize(&raw)),
        Err(err) => {
            debug!("field {field:?} unresolved ({err}); degrading to sentinel");
            FieldValue::Sentinel
        }
    }
}

/// Split a range value like "180.17 - 199.62" into its low and high halves.
/// Anything but exactly two parts degrades both halves to the sentinel.
fn split_range(value: FieldValue) -> (FieldValue, FieldValue) {
    if let FieldValue::Value(raw) = &value {
        let parts: Vec<&str> = raw.split(" - ").collect();
        if let [low, high] = parts.as_slice() {
            return (
                FieldValue::value(low.trim()),
                FieldValue::value(high.trim()),
            );
        }
    }
    (FieldValue::Sentinel, FieldValue::Sentinel)
}

/// Derived percentage change of `current` over `base`. Non-numeric operands
/// (sentinels included) yield the sentinel rather than propagating an error.
fn percent_over(current: &FieldValue, base: &FieldValue) -> FieldValue {
    match (current.as_f64(), base.as_f64()) {
        (Some(current), Some(base)) if base != 0.0 => {
            FieldValue::value(format!("{:+.2}", (current - base) / base * 100.0))
        }
        _ => FieldValue::Sentinel,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::error::ExtractError;
    use crate::locator::Locator;

    use super::*;

    /// Static extraction double keyed by locator string.
    struct StaticPage {
        values: HashMap<&'static str, &'static str>,
    }

    impl StaticPage {
        fn for_symbol(state: MarketState) -> Self {
            let mut values = HashMap::new();
            let mut put = |field: PageField, text: &'static str| {
                let locator = FieldLocatorTable::lookup(EntityKind::Symbol, state, field)
                    .expect("required symbol field has a locator");
                values.insert(locator.as_str(), text);
            };

            put(PageField::Fullname, "Acme Corp. (ACME)");
            put(PageField::LatestPrice, "$1,234.56");
            put(PageField::Change, "-12.44");
            put(PageField::ChangePercent, "(0.99%)");
            put(PageField::DayRange, "1,222.00 - 1,250.10");
            put(PageField::Week52Range, "$987.65 - $1,432.10");
            put(PageField::YtdChangePercent, "4.20%");
            put(PageField::OneYearChangePercent, "18.75%");
            put(PageField::TimeStamp, "Mar 1, 2024 4:00 p.m. EST");

            Self { values }
        }

        fn without(mut self, state: MarketState, field: PageField) -> Self {
            let locator = FieldLocatorTable::lookup(EntityKind::Symbol, state, field)
                .expect("required symbol field has a locator");
            self.values.remove(locator.as_str());
            self
        }
    }

    impl QuotePage for StaticPage {
        fn extract(&self, locator: &Locator) -> Result<String, ExtractError> {
            self.values
                .get(locator.as_str())
                .map(|text| (*text).to_owned())
                .ok_or(ExtractError::NotFound)
        }
    }

    fn symbol() -> Symbol {
        Symbol::parse("ACME").expect("valid symbol")
    }

    #[test]
    fn resolves_and_normalizes_every_field() {
        let page = StaticPage::for_symbol(MarketState::Closed);
        let quote = resolve_symbol(&page, &symbol(), MarketState::Closed);

        assert_eq!(quote.status, QuoteStatus::Ok);
        assert_eq!(quote.latest_price.as_str(), "1234.56");
        assert_eq!(quote.change.as_str(), "-12.44");
        assert_eq!(quote.change_percent.as_str(), "0.99");
        assert_eq!(quote.day_low.as_str(), "1222.00");
        assert_eq!(quote.day_high.as_str(), "1250.10");
        assert_eq!(quote.week52_low.as_str(), "987.65");
        assert_eq!(quote.week52_high.as_str(), "1432.10");
        assert_eq!(quote.ytd_change_percent.as_str(), "4.20");
    }

    #[test]
    fn one_failing_field_leaves_the_other_eight_intact() {
        let page =
            StaticPage::for_symbol(MarketState::Open).without(MarketState::Open, PageField::Change);
        let quote = resolve_symbol(&page, &symbol(), MarketState::Open);

        assert_eq!(quote.status, QuoteStatus::Ok);
        assert!(quote.change.is_sentinel());
        assert!(!quote.latest_price.is_sentinel());
        assert!(!quote.fullname.is_sentinel());
        assert!(!quote.day_low.is_sentinel());
        assert!(!quote.week52_high.is_sentinel());
        assert!(!quote.ytd_change_percent.is_sentinel());
        assert!(!quote.one_year_change_percent.is_sentinel());
        assert!(!quote.time_stamp.is_sentinel());
        assert!(!quote.change_percent.is_sentinel());
    }

    #[test]
    fn malformed_range_degrades_both_halves() {
        let mut page = StaticPage::for_symbol(MarketState::Closed);
        let locator =
            FieldLocatorTable::lookup(EntityKind::Symbol, MarketState::Closed, PageField::DayRange)
                .expect("locator");
        page.values.insert(locator.as_str(), "1222.00 to 1250.10");

        let quote = resolve_symbol(&page, &symbol(), MarketState::Closed);
        assert!(quote.day_low.is_sentinel());
        assert!(quote.day_high.is_sentinel());
        assert!(!quote.week52_low.is_sentinel());
    }

    #[test]
    fn derived_percent_degrades_when_an_operand_is_missing() {
        let page = StaticPage::for_symbol(MarketState::Closed)
            .without(MarketState::Closed, PageField::Week52Range);
        let quote = resolve_symbol(&page, &symbol(), MarketState::Closed);

        assert!(quote.week52_low.is_sentinel());
        assert!(quote.week52_change_percent.is_sentinel());
    }

    #[test]
    fn derived_percent_uses_resolved_operands() {
        let page = StaticPage::for_symbol(MarketState::Closed);
        let quote = resolve_symbol(&page, &symbol(), MarketState::Closed);

        // (1234.56 - 987.65) / 987.65 * 100
        assert_eq!(quote.week52_change_percent.as_str(), "+25.00");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["  $1,234.56 ", "(0.99%)", "((2.50))", "plain text", "---"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn index_resolution_skips_inapplicable_fields() {
        // An empty page: every extraction fails, but the record still carries
        // an Ok status with sentinels throughout.
        let page = StaticPage {
            values: HashMap::new(),
        };
        let quote = resolve_index(&page, MarketIndex::Nasdaq, MarketState::Open);

        assert_eq!(quote.status, QuoteStatus::Ok);
        assert!(quote.latest_price.is_sentinel());
        assert!(quote.week52_low.is_sentinel());
    }
}
