//! Turns a cursor inside a Go table test into the `Parent/subtest` name
//! that `go test -run` accepts.

mod build_tags;
mod identifier;

pub use build_tags::{extract_build_tags, BUILD_CONSTRAINT_MARKER};
pub use identifier::{build_identifier, TestIdentifier, DEFAULT_TEST_PREFIX};

use tracing::debug;

use crate::document::{quoted_literal_on_line, Document, Position};
use crate::error::Result;
use crate::symbols::{resolve_symbol_at, SymbolProvider};

/// Resolves the subtest under `cursor`.
///
/// The quoted literal on the cursor line names the subtest; the symbol
/// containing the cursor names its parent test function.
pub fn resolve_subtest(
    document: &Document,
    cursor: Position,
    provider: &dyn SymbolProvider,
    test_prefix: &str,
) -> Result<TestIdentifier> {
    let ctx = document.cursor_context(cursor);
    debug!(
        offset = ctx.offset,
        line = ctx.position.line + 1,
        text = %ctx.line,
        "resolving subtest at cursor"
    );

    let literal = quoted_literal_on_line(&ctx.line, ctx.position.line)?;

    let symbols = provider.document_symbols(document)?;
    let parent = resolve_symbol_at(&symbols, ctx.position)?;
    debug!(parent = %parent.name, literal, "found enclosing symbol");

    let identifier = TestIdentifier::build(&parent.name, literal, test_prefix)?;
    debug!(%identifier, "resolved subtest");
    Ok(identifier)
}
