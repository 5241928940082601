//! The script lifecycle: text edits and the staged pipeline.

use std::sync::Arc;

use sql_analyzer::{AnalyzedScript, AnalyzerOptions, Catalog, analyze};
use sql_parser::ParsedScript;
use sql_scanner::ScannedScript;
use sql_text::TextBuffer;

use crate::cursor::ScriptCursor;
use crate::status::StatusCode;

/// One SQL script with its staged pipeline outputs.
///
/// Edits bump the text version; each stage records the version it
/// consumed, which is how stale downstream artifacts are detected. The
/// chain is strictly sequential: scan, parse, analyze, reindex.
#[derive(Debug)]
pub struct Script {
    /// The context id within the catalog
    pub context_id: u32,
    /// The mutable script text
    text: TextBuffer,
    /// Bumped on every edit
    text_version: u64,
    /// Analyzer defaults
    options: AnalyzerOptions,

    scanned: Option<Arc<ScannedScript>>,
    parsed: Option<Arc<ParsedScript>>,
    analyzed: Option<Arc<AnalyzedScript>>,
    cursor: Option<ScriptCursor>,
}

impl Script {
    /// Create an empty script. The context id must be non-zero and unique
    /// within the catalog the script will be registered in.
    pub fn new(context_id: u32) -> Self {
        debug_assert!(context_id != 0, "context id 0 is reserved");
        Self {
            context_id,
            text: TextBuffer::new(),
            text_version: 0,
            options: AnalyzerOptions::default(),
            scanned: None,
            parsed: None,
            analyzed: None,
            cursor: None,
        }
    }

    /// Override the analyzer defaults for unqualified names.
    pub fn with_analyzer_options(mut self, options: AnalyzerOptions) -> Self {
        self.options = options;
        self
    }

    #[inline]
    pub fn text_version(&self) -> u64 {
        self.text_version
    }

    /// Copy the current text out.
    pub fn text(&self) -> String {
        self.text.to_text()
    }

    pub fn scanned(&self) -> Option<&Arc<ScannedScript>> {
        self.scanned.as_ref()
    }

    pub fn parsed(&self) -> Option<&Arc<ParsedScript>> {
        self.parsed.as_ref()
    }

    pub fn analyzed(&self) -> Option<&Arc<AnalyzedScript>> {
        self.analyzed.as_ref()
    }

    pub fn cursor(&self) -> Option<&ScriptCursor> {
        self.cursor.as_ref()
    }

    /// Insert text at a byte offset (snapped to a code-point boundary).
    /// Later stages are invalidated.
    pub fn insert_text_at(&mut self, offset: usize, text: &str) {
        self.text.insert_text_at(offset, text);
        self.bump_version();
    }

    /// Erase a byte range (clamped and code-point aligned). Later stages
    /// are invalidated.
    pub fn erase_text_at(&mut self, offset: usize, length: usize) {
        self.text.erase_text_at(offset, length);
        self.bump_version();
    }

    fn bump_version(&mut self) {
        self.text_version += 1;
        self.cursor = None;
    }

    /// Scan the current text.
    pub fn scan(&mut self) -> StatusCode {
        match sql_scanner::scan(&self.text, self.context_id, self.text_version) {
            Ok(scanned) => {
                self.scanned = Some(Arc::new(scanned));
                StatusCode::Ok
            }
            Err(error) => {
                tracing::debug!(context_id = self.context_id, %error, "scan failed");
                self.scanned = None;
                StatusCode::ScannerInputInvalid
            }
        }
    }

    /// Parse the scanned text. Requires a fresh scan.
    pub fn parse(&mut self) -> StatusCode {
        let Some(scanned) = self.fresh_scanned() else {
            return StatusCode::ParserInputNotScanned;
        };
        let parsed = sql_parser::parse(scanned.as_ref());
        self.parsed = Some(Arc::new(parsed));
        StatusCode::Ok
    }

    /// Analyze the parsed script against the catalog. Requires a fresh
    /// parse. `external` optionally names one additional analyzed script.
    pub fn analyze(
        &mut self,
        catalog: &Catalog,
        external: Option<&Arc<AnalyzedScript>>,
    ) -> StatusCode {
        if let Some(external) = external
            && external.context_id == self.context_id
        {
            return StatusCode::ExternalContextCollision;
        }
        let Some(scanned) = self.fresh_scanned() else {
            return StatusCode::AnalyzerInputNotParsed;
        };
        let Some(parsed) = self.fresh_parsed() else {
            return StatusCode::AnalyzerInputNotParsed;
        };
        let analyzed = analyze(&scanned, &parsed, catalog, external, &self.options);
        self.analyzed = Some(Arc::new(analyzed));
        StatusCode::Ok
    }

    /// Register the analyzed script with the catalog.
    pub fn reindex(&mut self, catalog: &mut Catalog) -> StatusCode {
        let Some(analyzed) = self.fresh_analyzed() else {
            return StatusCode::AnalyzerInputInvalid;
        };
        catalog.add_script(analyzed);
        StatusCode::Ok
    }

    /// Move the cursor to a byte offset. Requires a fresh analyze.
    pub fn move_cursor(&mut self, offset: usize) -> (StatusCode, Option<ScriptCursor>) {
        let Some(scanned) = self.fresh_scanned() else {
            return (StatusCode::AnalyzerInputInvalid, None);
        };
        let Some(parsed) = self.fresh_parsed() else {
            return (StatusCode::AnalyzerInputInvalid, None);
        };
        if self.fresh_analyzed().is_none() {
            return (StatusCode::AnalyzerInputInvalid, None);
        }
        let cursor = ScriptCursor::moved_to(&scanned, &parsed, offset as u32);
        self.cursor = Some(cursor);
        (StatusCode::Ok, Some(cursor))
    }

    /// Compute completions at the current cursor.
    pub fn complete_at_cursor(
        &self,
        catalog: &Catalog,
        limit: usize,
    ) -> (StatusCode, Vec<sql_completion::Completion>) {
        let Some(cursor) = self.cursor else {
            return (StatusCode::CompletionMissesCursor, Vec::new());
        };
        let (Some(scanned), Some(analyzed)) = (self.fresh_scanned(), self.fresh_analyzed())
        else {
            return (StatusCode::AnalyzerInputInvalid, Vec::new());
        };
        let context = sql_completion::CompletionContext {
            scanned: &scanned,
            analyzed: &analyzed,
            catalog,
            scanner_token_id: cursor.scanner_token_id.map(|id| id as usize),
            statement_id: cursor.statement_id.map(|id| id as usize),
        };
        (StatusCode::Ok, sql_completion::complete(&context, limit))
    }

    fn fresh_scanned(&self) -> Option<Arc<ScannedScript>> {
        self.scanned
            .as_ref()
            .filter(|scanned| scanned.text_version == self.text_version)
            .cloned()
    }

    fn fresh_parsed(&self) -> Option<Arc<ParsedScript>> {
        self.parsed
            .as_ref()
            .filter(|parsed| parsed.text_version == self.text_version)
            .cloned()
    }

    fn fresh_analyzed(&self) -> Option<Arc<AnalyzedScript>> {
        self.analyzed
            .as_ref()
            .filter(|analyzed| analyzed.text_version == self.text_version)
            .cloned()
    }
}
