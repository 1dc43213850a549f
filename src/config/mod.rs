//! Configuration for the invoice engine.
//!
//! Default hourly rates and invoice defaults are loaded from YAML files,
//! so a contractor's standing agreement rates live next to the engine
//! instead of being re-entered per invoice.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, InvoiceDefaults, RatesFile};
