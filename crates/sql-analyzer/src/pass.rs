//! Morsel-wise analysis pass execution.

use sql_ast::Node;
use sql_parser::ParsedScript;

/// Nodes handed to a pass per visit call.
pub const MORSEL_SIZE: usize = 1024;

/// An analysis pass over the flat AST.
///
/// The node buffer is laid out in post-order, so a left-to-right scan is a
/// DFS post-order traversal: when a pass sees a node, it has already seen
/// all of the node's children.
pub trait Pass {
    /// Prepare the analysis pass.
    fn prepare(&mut self) {}
    /// Visit a chunk of nodes. `offset` is the buffer index of `nodes[0]`.
    fn visit(&mut self, offset: usize, nodes: &[Node]);
    /// Finish the analysis pass.
    fn finish(&mut self) {}
}

/// Runs passes over a parsed script in morsels of [`MORSEL_SIZE`] nodes.
///
/// Multiple passes share a single scan: each morsel is offered to every
/// pass in declaration order before moving right.
pub struct PassManager<'a> {
    parsed: &'a ParsedScript,
}

impl<'a> PassManager<'a> {
    pub fn new(parsed: &'a ParsedScript) -> Self {
        Self { parsed }
    }

    pub fn execute(&self, passes: &mut [&mut dyn Pass]) {
        for pass in passes.iter_mut() {
            pass.prepare();
        }
        let mut offset = 0;
        for morsel in self.parsed.nodes.chunks(MORSEL_SIZE) {
            for pass in passes.iter_mut() {
                pass.visit(offset, morsel);
            }
            offset += morsel.len();
        }
        for pass in passes.iter_mut() {
            pass.finish();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct CountingPass {
        prepared: bool,
        visited: usize,
        offsets: Vec<usize>,
        finished: bool,
    }

    impl Pass for CountingPass {
        fn prepare(&mut self) {
            self.prepared = true;
        }
        fn visit(&mut self, offset: usize, nodes: &[Node]) {
            self.offsets.push(offset);
            self.visited += nodes.len();
        }
        fn finish(&mut self) {
            self.finished = true;
        }
    }

    #[test]
    fn visits_every_node_in_morsels() {
        let scanned = sql_scanner::scan_text("select 1, 2, 3 from a, b", 1, 0)
            .unwrap_or_default();
        let parsed = sql_parser::parse(&scanned);
        let mut pass = CountingPass::default();
        {
            let manager = PassManager::new(&parsed);
            manager.execute(&mut [&mut pass]);
        }
        assert!(pass.prepared && pass.finished);
        assert_eq!(pass.visited, parsed.nodes.len());
        assert_eq!(pass.offsets, vec![0]);
    }
}
