pub mod bar;
pub mod field;
pub mod record;
pub mod symbol;

pub use bar::{DailyBar, TrendSeries};
pub use field::{FieldKey, FieldValue, PageField, SENTINEL};
pub use record::{EntityKind, IndexQuote, MarketIndex, QuoteStatus, RecordFields, SymbolQuote};
pub use symbol::Symbol;
