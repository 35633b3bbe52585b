//! Error types shared by the symbol pipeline

use thiserror::Error;

/// Error raised while generating, placing or moving symbols.
///
/// Every variant is local and recoverable by the caller. Nothing in the
/// pipeline swallows these; a catalog miss in particular is a configuration
/// bug and is surfaced as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SymbolError {
    /// Shape name is not part of the generator's closed set
    #[error("unknown shape '{0}'")]
    UnknownShape(String),
    /// No catalog entry for this faction/role pair
    #[error("no shape registered for role '{role}' of faction '{faction}'")]
    UnknownPieceRole { faction: String, role: String },
    /// A drawable with this id already exists on the surface
    #[error("symbol id '{0}' is already in use")]
    DuplicateSymbolId(String),
    /// No drawable with this id exists on the surface
    #[error("no symbol with id '{0}'")]
    SymbolNotFound(String),
}
