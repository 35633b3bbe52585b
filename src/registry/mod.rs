//! Registry of named items.
//!
//! `SymbolRegistry` maps symbol ids to their owned `RenderedSymbol` state.

mod symbol;

pub use symbol::{RenderedSymbol, SymbolRegistry};
