//! Named, range-bounded regions of a document and lookup by position.

mod go;

pub use go::GoSymbolProvider;

use crate::document::{Document, Position, Range};
use crate::error::{ResolveError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Function,
    Method,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub range: Range,
}

impl Symbol {
    pub fn new(name: impl Into<String>, kind: SymbolKind, range: Range) -> Self {
        Self {
            name: name.into(),
            kind,
            range,
        }
    }
}

/// Supplies the symbols of a document, innermost before enclosing ones.
pub trait SymbolProvider {
    fn document_symbols(&self, document: &Document) -> Result<Vec<Symbol>>;
}

/// First symbol, in the order supplied, whose range contains `position`.
///
/// No name filtering happens here.
pub fn resolve_symbol_at(symbols: &[Symbol], position: Position) -> Result<&Symbol> {
    symbols
        .iter()
        .find(|symbol| symbol.range.contains(position))
        .ok_or_else(|| {
            ResolveError::SymbolNotFound {
                line: position.line + 1,
                column: position.character + 1,
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn symbol(name: &str, start: (usize, usize), end: (usize, usize)) -> Symbol {
        Symbol::new(
            name,
            SymbolKind::Function,
            Range::new(Position::new(start.0, start.1), Position::new(end.0, end.1)),
        )
    }

    #[test]
    fn test_resolve_symbol_at_picks_containing_symbol() {
        let symbols = vec![symbol("TestA", (2, 0), (8, 1)), symbol("TestB", (10, 0), (20, 1))];
        let found = resolve_symbol_at(&symbols, Position::new(12, 4)).unwrap();
        assert_eq!(found.name, "TestB");
    }

    #[test]
    fn test_resolve_symbol_at_prefers_earlier_symbol() {
        let symbols = vec![
            symbol("inner", (4, 0), (6, 0)),
            symbol("TestOuter", (2, 0), (8, 1)),
        ];
        let found = resolve_symbol_at(&symbols, Position::new(5, 2)).unwrap();
        assert_eq!(found.name, "inner");
    }

    #[test]
    fn test_resolve_symbol_at_range_bounds() {
        let symbols = vec![symbol("TestA", (2, 0), (8, 1))];
        assert!(resolve_symbol_at(&symbols, Position::new(2, 0)).is_ok());
        assert!(resolve_symbol_at(&symbols, Position::new(8, 1)).is_ok());
        assert!(resolve_symbol_at(&symbols, Position::new(8, 2)).is_err());
    }

    #[test]
    fn test_resolve_symbol_at_not_found() {
        let symbols = vec![symbol("TestA", (2, 0), (8, 1))];
        let err = resolve_symbol_at(&symbols, Position::new(0, 3)).unwrap_err();
        assert!(matches!(
            err,
            Error::Resolve(ResolveError::SymbolNotFound { line: 1, column: 4 })
        ));
        assert!(resolve_symbol_at(&[], Position::default()).is_err());
    }
}
