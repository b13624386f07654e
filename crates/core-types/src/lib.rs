pub mod enums;
pub mod error;
pub mod input;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::TradeType;
pub use error::CoreError;
pub use input::{TradeBatch, parse_trades};
pub use structs::{EntryContext, Execution, ExecutionQuality, Psychology, TradeRecord};
