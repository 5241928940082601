//! The handle boundary consumed by host languages.
//!
//! Hosts never touch [`Script`] directly: they hold opaque handles into a
//! [`ScriptRegistry`] and get every result back as a serialized
//! [`ResultBuffer`]. The buffer owns its bytes; dropping it releases them,
//! which is the ownership contract the foreign bridge forwards.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use sql_analyzer::{
    Catalog, ColumnReference, JoinEdge, TableDeclaration, TableReference,
};
use sql_ast::{Location, Node, Statement};
use sql_completion::Completion;
use sql_scanner::Highlighting;

use crate::script::Script;
use crate::status::StatusCode;

/// An opaque script handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScriptHandle(u32);

/// A serialized operation result.
///
/// `data` holds the JSON-serialized payload of the stage output; it may be
/// partially populated (errors filled in) when `status_code` is not OK.
#[derive(Debug)]
pub struct ResultBuffer {
    /// The outcome
    pub status_code: StatusCode,
    /// The serialized payload
    pub data: Vec<u8>,
    /// The script text version the payload was computed from
    pub text_version: u64,
}

impl ResultBuffer {
    fn empty(status_code: StatusCode) -> Self {
        Self { status_code, data: Vec::new(), text_version: 0 }
    }

    fn with_payload<T: Serialize>(status_code: StatusCode, version: u64, payload: &T) -> Self {
        let data = serde_json::to_vec(payload).unwrap_or_default();
        Self { status_code, data, text_version: version }
    }
}

/// Payload of `script_scan`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ScanPayload {
    pub highlighting: Highlighting,
    pub line_breaks: Vec<Location>,
    pub comments: Vec<Location>,
    pub errors: Vec<(Location, String)>,
}

/// Payload of `script_parse`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ParsePayload {
    pub nodes: Vec<Node>,
    pub statements: Vec<Statement>,
    pub errors: Vec<(Location, String)>,
}

/// Payload of `script_analyze`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AnalyzePayload {
    pub table_declarations: Vec<TableDeclaration>,
    pub table_references: Vec<TableReference>,
    pub column_references: Vec<ColumnReference>,
    pub join_edges: Vec<JoinEdge>,
}

/// Payload of `script_complete_at_cursor`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CompletionPayload {
    pub completions: Vec<Completion>,
}

/// The registry of live scripts plus their shared catalog.
#[derive(Debug, Default)]
pub struct ScriptRegistry {
    scripts: FxHashMap<ScriptHandle, Script>,
    catalog: Catalog,
    next_handle: u32,
}

impl ScriptRegistry {
    pub fn new() -> Self {
        Self { scripts: FxHashMap::default(), catalog: Catalog::new(), next_handle: 1 }
    }

    /// The shared catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Create a script. The context id must be non-zero and unused.
    pub fn script_new(&mut self, context_id: u32) -> Option<ScriptHandle> {
        if context_id == 0 || context_id == sql_ast::KEYWORD_CONTEXT_ID {
            return None;
        }
        if self.scripts.values().any(|script| script.context_id == context_id) {
            return None;
        }
        let handle = ScriptHandle(self.next_handle);
        self.next_handle += 1;
        self.scripts.insert(handle, Script::new(context_id));
        tracing::debug!(context_id, ?handle, "created script");
        Some(handle)
    }

    /// Insert text at a byte offset.
    pub fn script_insert_text_at(
        &mut self,
        handle: ScriptHandle,
        offset: usize,
        text: &str,
    ) -> StatusCode {
        match self.scripts.get_mut(&handle) {
            Some(script) => {
                script.insert_text_at(offset, text);
                StatusCode::Ok
            }
            None => StatusCode::ScriptUnknown,
        }
    }

    /// Erase a byte range.
    pub fn script_erase_text_at(
        &mut self,
        handle: ScriptHandle,
        offset: usize,
        length: usize,
    ) -> StatusCode {
        match self.scripts.get_mut(&handle) {
            Some(script) => {
                script.erase_text_at(offset, length);
                StatusCode::Ok
            }
            None => StatusCode::ScriptUnknown,
        }
    }

    /// Scan and return the packed scanner output.
    pub fn script_scan(&mut self, handle: ScriptHandle) -> ResultBuffer {
        let Some(script) = self.scripts.get_mut(&handle) else {
            return ResultBuffer::empty(StatusCode::ScriptUnknown);
        };
        let status = script.scan();
        let version = script.text_version();
        match script.scanned() {
            Some(scanned) => {
                let payload = ScanPayload {
                    highlighting: scanned.pack_highlighting(),
                    line_breaks: scanned.line_breaks.clone(),
                    comments: scanned.comments.clone(),
                    errors: scanned.errors.clone(),
                };
                ResultBuffer::with_payload(status, version, &payload)
            }
            None => ResultBuffer::empty(status),
        }
    }

    /// Parse and return the packed node buffer.
    pub fn script_parse(&mut self, handle: ScriptHandle) -> ResultBuffer {
        let Some(script) = self.scripts.get_mut(&handle) else {
            return ResultBuffer::empty(StatusCode::ScriptUnknown);
        };
        let status = script.parse();
        if !status.is_ok() {
            return ResultBuffer::empty(status);
        }
        let version = script.text_version();
        match script.parsed() {
            Some(parsed) => {
                let payload = ParsePayload {
                    nodes: parsed.nodes.clone(),
                    statements: parsed.statements.clone(),
                    errors: parsed.errors.clone(),
                };
                ResultBuffer::with_payload(status, version, &payload)
            }
            None => ResultBuffer::empty(status),
        }
    }

    /// Analyze against the catalog, optionally importing one external
    /// script by context id.
    pub fn script_analyze(
        &mut self,
        handle: ScriptHandle,
        external_context_id: Option<u32>,
    ) -> ResultBuffer {
        let external = match external_context_id {
            Some(context_id) => match self.catalog.script(context_id) {
                Some(script) => Some(script.clone()),
                None => {
                    return ResultBuffer::empty(StatusCode::CatalogDescriptorPoolUnknown);
                }
            },
            None => None,
        };
        let Some(script) = self.scripts.get_mut(&handle) else {
            return ResultBuffer::empty(StatusCode::ScriptUnknown);
        };
        let status = script.analyze(&self.catalog, external.as_ref());
        if !status.is_ok() {
            return ResultBuffer::empty(status);
        }
        let version = script.text_version();
        match script.analyzed() {
            Some(analyzed) => {
                let payload = AnalyzePayload {
                    table_declarations: analyzed.table_declarations.clone(),
                    table_references: analyzed.table_references.clone(),
                    column_references: analyzed.column_references.clone(),
                    join_edges: analyzed.join_edges.clone(),
                };
                ResultBuffer::with_payload(status, version, &payload)
            }
            None => ResultBuffer::empty(status),
        }
    }

    /// Register the analyzed script with the catalog.
    pub fn script_reindex(&mut self, handle: ScriptHandle) -> StatusCode {
        let Some(script) = self.scripts.get_mut(&handle) else {
            return StatusCode::ScriptUnknown;
        };
        script.reindex(&mut self.catalog)
    }

    /// Move the cursor and return the packed cursor info.
    pub fn script_move_cursor(&mut self, handle: ScriptHandle, offset: usize) -> ResultBuffer {
        let Some(script) = self.scripts.get_mut(&handle) else {
            return ResultBuffer::empty(StatusCode::ScriptUnknown);
        };
        let (status, cursor) = script.move_cursor(offset);
        match cursor {
            Some(cursor) => {
                ResultBuffer::with_payload(status, script.text_version(), &cursor)
            }
            None => ResultBuffer::empty(status),
        }
    }

    /// Compute completions at the cursor.
    pub fn script_complete_at_cursor(
        &mut self,
        handle: ScriptHandle,
        limit: usize,
    ) -> ResultBuffer {
        let Some(script) = self.scripts.get(&handle) else {
            return ResultBuffer::empty(StatusCode::ScriptUnknown);
        };
        let (status, completions) = script.complete_at_cursor(&self.catalog, limit);
        if !status.is_ok() {
            return ResultBuffer::empty(status);
        }
        let payload = CompletionPayload { completions };
        ResultBuffer::with_payload(status, script.text_version(), &payload)
    }

    /// Drop a script: its catalog entry goes with it.
    pub fn script_delete(&mut self, handle: ScriptHandle) -> StatusCode {
        match self.scripts.remove(&handle) {
            Some(script) => {
                self.catalog.drop_script(script.context_id);
                tracing::debug!(context_id = script.context_id, ?handle, "deleted script");
                StatusCode::Ok
            }
            None => StatusCode::ScriptUnknown,
        }
    }

    /// Borrow a script for direct (in-process) use.
    pub fn script(&self, handle: ScriptHandle) -> Option<&Script> {
        self.scripts.get(&handle)
    }

    /// Mutably borrow a script for direct (in-process) use.
    pub fn script_mut(&mut self, handle: ScriptHandle) -> Option<&mut Script> {
        self.scripts.get_mut(&handle)
    }
}
