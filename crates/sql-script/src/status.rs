//! Status codes crossing the host boundary.

use serde::{Deserialize, Serialize};

/// The outcome of a boundary operation.
///
/// Discriminants are wire-stable; hosts switch on the numeric value. A
/// non-OK status may still ship a partially populated payload whose
/// `errors` field is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u32)]
pub enum StatusCode {
    Ok = 0,
    ScannerInputInvalid = 1,
    ParserInputInvalid = 2,
    ParserInputNotScanned = 3,
    AnalyzerInputNotParsed = 4,
    AnalyzerInputInvalid = 5,
    CatalogDescriptorPoolUnknown = 6,
    ScriptUnknown = 7,
    CompletionMissesCursor = 8,
    ExternalContextCollision = 9,
}

impl StatusCode {
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, StatusCode::Ok)
    }
}
