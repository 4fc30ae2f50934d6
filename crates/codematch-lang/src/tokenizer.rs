//! Turning source text into a flat token stream with a parallel source-region
//! mapping, via a tree-sitter concrete syntax tree.
//!
//! A token is a named node's grammar label (its `kind()`, e.g.
//! `function_definition` or `identifier`), not the node's literal source
//! text — this is what makes two renamed-but-structurally-identical
//! snippets collapse to the same token stream. Anonymous nodes (keywords,
//! punctuation) carry no structural information beyond what their named
//! parent already encodes, so they are walked but not emitted.

use std::path::Path;

use codematch_core::{FileId, Region, SourceFile, TokenizedFile};
use tree_sitter::Node;

use crate::error::TokenizerError;
use crate::language::Language;

/// Tokenize one file's source text for the given language.
///
/// Tokens are the grammar labels of every named CST node, leaf or inner,
/// visited in pre-order DFS. When `include_comments` is `false`, comment
/// nodes (and everything under them) are skipped entirely.
pub fn tokenize(
    id: FileId,
    path: &Path,
    source: &str,
    language: Language,
    include_comments: bool,
) -> Result<TokenizedFile, TokenizerError> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&language.ts_language())
        .map_err(|e| TokenizerError::ParseFailure {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let tree = parser
        .parse(source.as_bytes(), None)
        .ok_or_else(|| TokenizerError::ParseFailure {
            path: path.to_path_buf(),
            message: "tree-sitter returned no tree".to_string(),
        })?;

    let mut tokens = Vec::new();
    let mut mapping = Vec::new();
    let comment_kinds = language.comment_kinds();

    walk(
        &tree.root_node(),
        comment_kinds,
        include_comments,
        &mut tokens,
        &mut mapping,
    );

    let file = SourceFile::new(id, path, source.to_string());
    Ok(TokenizedFile::new(file, tokens, mapping))
}

fn walk(
    node: &Node,
    comment_kinds: &[&str],
    include_comments: bool,
    tokens: &mut Vec<String>,
    mapping: &mut Vec<Region>,
) {
    if !include_comments && comment_kinds.contains(&node.kind()) {
        return;
    }

    if node.is_named() && !node.byte_range().is_empty() {
        let start = node.start_position();
        let end = node.end_position();
        tokens.push(node.kind().to_string());
        mapping.push(Region::new(
            start.row as u32,
            start.column as u32,
            end.row as u32,
            end.column as u32,
        ));
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk(&child, comment_kinds, include_comments, tokens, mapping);
    }
}
