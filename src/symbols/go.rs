use std::path::Path;

use tracing::debug;
use tree_sitter::Parser;

use super::{Symbol, SymbolKind, SymbolProvider};
use crate::document::{Document, Range};
use crate::error::{ParserError, Result};
use crate::query::{QueryEngine, FUNCTIONS_QUERY, GO};

/// Reports top-level function and method declarations of a Go file.
pub struct GoSymbolProvider {
    query_engine: QueryEngine,
}

impl GoSymbolProvider {
    pub fn new() -> Result<Self> {
        Ok(Self {
            query_engine: QueryEngine::new()?,
        })
    }

    fn parser(&self) -> Result<Parser> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .map_err(|_| ParserError::language_setup_failed(GO))?;
        Ok(parser)
    }
}

impl SymbolProvider for GoSymbolProvider {
    fn document_symbols(&self, document: &Document) -> Result<Vec<Symbol>> {
        let source = document.text();
        let tree = self.parser()?.parse(source, None).ok_or_else(|| {
            ParserError::parse_failed(document.path().unwrap_or(Path::new("<memory>")))
        })?;

        let matches = self
            .query_engine
            .query(FUNCTIONS_QUERY, tree.root_node(), source)?;

        let symbols: Vec<Symbol> = matches
            .iter()
            .filter_map(|m| {
                let name = m.get("name")?;
                let decl = m.get_capture("decl")?;
                let (name, kind) = match m.get("receiver") {
                    Some(receiver) => (format!("({receiver}).{name}"), SymbolKind::Method),
                    None => (name.to_string(), SymbolKind::Function),
                };
                let range = Range::new(
                    document.position_at(decl.start_byte),
                    document.position_at(decl.end_byte),
                );
                Some(Symbol::new(name, kind, range))
            })
            .collect();

        debug!(count = symbols.len(), "collected document symbols");
        Ok(symbols)
    }
}
