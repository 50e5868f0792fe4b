//! Context types available to checks during a scan.

use crate::tree::SymbolTable;
use std::path::Path;

/// Identity of the file being scanned.
///
/// Source text is optional: the engine works from the tree alone, but when
/// the surrounding tool supplies the text, issue locations can be mapped
/// to byte offsets for diagnostic rendering.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Path of the file, as the surrounding tool names it.
    pub path: &'a Path,
    /// Raw source text, when available.
    pub source: Option<&'a str>,
}

impl<'a> FileContext<'a> {
    /// Creates a context for a file without source text.
    #[must_use]
    pub fn new(path: &'a Path) -> Self {
        Self { path, source: None }
    }

    /// Attaches the raw source text.
    #[must_use]
    pub fn with_source(mut self, source: &'a str) -> Self {
        self.source = Some(source);
        self
    }

    /// Byte offset of a 1-indexed line/column pair.
    ///
    /// Returns 0 when no source text is available or the position is out
    /// of bounds.
    #[must_use]
    pub fn offset_for(&self, line: usize, column: usize) -> usize {
        let Some(source) = self.source else { return 0 };
        if line == 0 {
            return 0;
        }

        let mut offset = 0;
        for (i, line_content) in source.lines().enumerate() {
            if i + 1 == line {
                return offset + column.saturating_sub(1);
            }
            offset += line_content.len() + 1; // +1 for newline
        }
        0
    }
}

/// Read-only scan state shared by all checks during one file scan.
#[derive(Debug, Clone)]
pub struct ScanContext<'a> {
    file: &'a FileContext<'a>,
    symbols: &'a SymbolTable,
}

impl<'a> ScanContext<'a> {
    /// Creates a scan context over one file's tree.
    #[must_use]
    pub fn new(file: &'a FileContext<'a>, symbols: &'a SymbolTable) -> Self {
        Self { file, symbols }
    }

    /// The file being scanned.
    #[must_use]
    pub fn file(&self) -> &FileContext<'a> {
        self.file
    }

    /// Symbol information resolved by the front end.
    #[must_use]
    pub fn symbols(&self) -> &SymbolTable {
        self.symbols
    }
}
