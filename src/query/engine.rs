use crate::error::ParserError;
use std::collections::HashMap;
use tracing::trace;
use tree_sitter::{Language, Node, Query, QueryCursor, StreamingIterator};

pub const GO: &str = "go";

/// Top-level functions and methods, captured as `@decl` with the name in
/// `@name`. Methods also capture their receiver type as `@receiver`.
pub const FUNCTIONS_QUERY: &str = "functions";

#[derive(Debug, Clone)]
pub struct Capture {
    pub name: String,
    pub text: String,
    pub start_byte: usize,
    pub end_byte: usize,
}

#[derive(Debug, Clone)]
pub struct Match {
    pub pattern_index: usize,
    pub captures: HashMap<String, Capture>,
}

impl Match {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.captures.get(name).map(|c| c.text.as_str())
    }

    pub fn get_capture(&self, name: &str) -> Option<&Capture> {
        self.captures.get(name)
    }
}

pub struct QueryEngine {
    queries: HashMap<&'static str, Query>,
}

impl QueryEngine {
    pub fn new() -> Result<Self, ParserError> {
        let mut engine = Self {
            queries: HashMap::new(),
        };

        engine.load_go_queries()?;

        Ok(engine)
    }

    pub fn query(
        &self,
        query_name: &str,
        node: Node<'_>,
        source: &str,
    ) -> Result<Vec<Match>, ParserError> {
        trace!(query_name, "executing query");

        let query = self
            .queries
            .get(query_name)
            .ok_or_else(|| ParserError::invalid_query(GO, query_name, "query not loaded"))?;

        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(query, node, source.as_bytes());
        let mut results = Vec::new();

        while let Some(m) = matches.next() {
            let mut captures = HashMap::new();

            for capture in m.captures {
                let name = query.capture_names()[capture.index as usize].to_string();
                let text = capture
                    .node
                    .utf8_text(source.as_bytes())
                    .unwrap_or("")
                    .to_string();

                captures.insert(
                    name.clone(),
                    Capture {
                        name,
                        text,
                        start_byte: capture.node.start_byte(),
                        end_byte: capture.node.end_byte(),
                    },
                );
            }

            results.push(Match {
                pattern_index: m.pattern_index,
                captures,
            });
        }

        Ok(results)
    }

    fn add_query(
        &mut self,
        name: &'static str,
        ts_lang: &Language,
        pattern: &str,
    ) -> Result<(), ParserError> {
        trace!(name, "compiling query");

        let query = Query::new(ts_lang, pattern)
            .map_err(|e| ParserError::invalid_query(GO, name, e.to_string()))?;
        self.queries.insert(name, query);
        Ok(())
    }

    fn load_go_queries(&mut self) -> Result<(), ParserError> {
        let lang: Language = tree_sitter_go::LANGUAGE.into();

        self.add_query(
            FUNCTIONS_QUERY,
            &lang,
            r#"
            (source_file
              (function_declaration
                name: (identifier) @name) @decl)
            (source_file
              (method_declaration
                receiver: (parameter_list
                  (parameter_declaration
                    type: (_) @receiver))
                name: (field_identifier) @name) @decl)
            "#,
        )
    }
}
