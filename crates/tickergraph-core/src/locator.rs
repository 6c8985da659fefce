//! Single field-locator table keyed by (entity kind, market state, page
//! field). The provider publishes different page structure while trading is
//! live, so every field carries one locator per market state. The locator
//! contents are opaque to everything outside the page-extraction collaborator.

use crate::domain::{EntityKind, PageField};
use crate::market_state::MarketState;

/// Opaque descriptor telling the page-extraction collaborator where a field's
/// raw value lives. The core only passes it through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locator(&'static str);

impl Locator {
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Total lookup over (kind, state, field). `None` means the field is not
/// applicable to that entity kind, never an extraction failure; a missing
/// entry for a required field is a configuration defect caught by
/// [`FieldLocatorTable::verify_complete`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldLocatorTable;

impl FieldLocatorTable {
    pub fn lookup(kind: EntityKind, state: MarketState, field: PageField) -> Option<Locator> {
        locator_str(kind, state, field).map(Locator)
    }

    /// Locator for the market open/closed banner. State-independent; it is
    /// what the state probe reads before any state is known.
    pub const fn market_status() -> Locator {
        Locator("div.market__status span.status")
    }

    /// Startup assertion: every required field for each entity kind must have
    /// an entry for both market states.
    pub fn verify_complete() -> Result<(), (EntityKind, MarketState, PageField)> {
        let checks = [
            (EntityKind::Symbol, PageField::required_for_symbol()),
            (EntityKind::Index, PageField::required_for_index()),
        ];

        for (kind, fields) in checks {
            for &field in fields {
                for state in [MarketState::Open, MarketState::Closed] {
                    if Self::lookup(kind, state, field).is_none() {
                        return Err((kind, state, field));
                    }
                }
            }
        }

        Ok(())
    }
}

const fn locator_str(kind: EntityKind, state: MarketState, field: PageField) -> Option<&'static str> {
    use EntityKind::{Index, Symbol};
    use MarketState::{Closed, Open};
    use PageField::*;

    match (kind, state, field) {
        // Securities, market open: live values come from streaming quote nodes.
        (Symbol, Open, LatestPrice) => Some("div.intraday__data h2.intraday__price bg-quote"),
        (Symbol, Open, Change) => Some("span.change--point--q bg-quote"),
        (Symbol, Open, ChangePercent) => Some("span.change--percent--q bg-quote"),
        (Symbol, Open, TimeStamp) => Some("div.intraday__timestamp bg-quote"),

        // Securities, market closed: the same figures move into the static
        // close table.
        (Symbol, Closed, LatestPrice) => Some("div.intraday__close td.table__cell.u-semi"),
        (Symbol, Closed, Change) => Some("div.intraday__close td.change--point"),
        (Symbol, Closed, ChangePercent) => Some("div.intraday__close td.change--percent"),
        (Symbol, Closed, TimeStamp) => Some("div.intraday__timestamp span.timestamp__time"),

        // Securities, state-invariant fields.
        (Symbol, _, Fullname) => Some("div.company__name h1.company__ticker-name"),
        (Symbol, _, DayRange) => Some("ul.list--kv li.kv__item.day-range span.primary"),
        (Symbol, _, Week52Range) => Some("ul.list--kv li.kv__item.range-52wk span.primary"),
        (Symbol, _, YtdChangePercent) => Some("table.performance tr.table__row.ytd li.content__item.value"),
        (Symbol, _, OneYearChangePercent) => Some("table.performance tr.table__row.one-year li.content__item.value"),

        // Indexes, market open.
        (Index, Open, LatestPrice) => Some("div.intraday__data h2.intraday__price bg-quote"),
        (Index, Open, Change) => Some("span.change--point--q bg-quote"),
        (Index, Open, ChangePercent) => Some("span.change--percent--q bg-quote"),

        // Indexes, market closed: index pages render plain spans after close.
        (Index, Closed, LatestPrice) => Some("div.intraday__data h2.intraday__price span.value"),
        (Index, Closed, Change) => Some("span.change--point--q span.value"),
        (Index, Closed, ChangePercent) => Some("span.change--percent--q span.value"),

        // Indexes, state-invariant fields.
        (Index, _, Week52Range) => Some("ul.list--kv li.kv__item.range-52wk span.primary"),
        (Index, _, YtdChangePercent) => Some("table.performance tr.table__row.ytd li.content__item.value"),
        (Index, _, OneYearChangePercent) => Some("table.performance tr.table__row.one-year li.content__item.value"),
        (Index, _, TimeStamp) => Some("div.intraday__timestamp bg-quote"),

        // Not applicable to indexes.
        (Index, _, Fullname) | (Index, _, DayRange) => None,
    }
}
