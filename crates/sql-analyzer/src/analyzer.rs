//! Analysis orchestration.

use std::sync::Arc;

use sql_parser::ParsedScript;
use sql_scanner::ScannedScript;

use crate::analyzed::AnalyzedScript;
use crate::catalog::Catalog;
use crate::name_resolution::NameResolutionPass;
use crate::pass::{Pass, PassManager};

/// Defaults applied to unqualified names during resolution.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerOptions {
    pub database_default: Option<String>,
    pub schema_default: Option<String>,
}

/// Run the analysis passes over a parsed script.
///
/// The catalog is only read; the caller registers the result afterwards
/// via [`Catalog::add_script`] (the reindex step). `external` names one
/// additional analyzed script whose tables are imported even when it is
/// not registered yet.
pub fn analyze(
    scanned: &Arc<ScannedScript>,
    parsed: &Arc<ParsedScript>,
    catalog: &Catalog,
    external: Option<&Arc<AnalyzedScript>>,
    options: &AnalyzerOptions,
) -> AnalyzedScript {
    let mut pass = NameResolutionPass::new(scanned, parsed)
        .with_defaults(options.database_default.clone(), options.schema_default.clone());
    for script in catalog.iter_scripts() {
        if script.context_id != parsed.context_id {
            pass.register_external_tables(script);
        }
    }
    if let Some(external) = external
        && external.context_id != parsed.context_id
        && catalog.script(external.context_id).is_none()
    {
        pass.register_external_tables(external);
    }

    {
        let manager = PassManager::new(parsed);
        let mut passes: [&mut dyn Pass; 1] = [&mut pass];
        manager.execute(&mut passes);
    }

    let (table_declarations, table_references, column_references, join_edges) = pass.export();
    AnalyzedScript {
        context_id: parsed.context_id,
        text_version: parsed.text_version,
        database_default: options.database_default.clone(),
        schema_default: options.schema_default.clone(),
        table_declarations,
        table_references,
        column_references,
        join_edges,
        scanned: Arc::clone(scanned),
        parsed: Arc::clone(parsed),
    }
}
