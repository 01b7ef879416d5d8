//! DOT Format Export for the Tree Diagram
//!
//! Lays a [`GraphIndex`] out left to right: first constituents in one column,
//! second constituents in the other, joined by plain pink lines. The index is
//! first lifted into a petgraph [`Graph`] so the exporter walks real node and
//! edge references instead of parallel index vectors.

use komposita_core::{EdgeMeta, GraphIndex, Side};
use petgraph::graph::NodeIndex;
use petgraph::visit::{EdgeRef, IntoNodeReferences};
use petgraph::{Directed, Graph};

/// One constituent in the tree diagram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstituentNode {
    pub label: String,
    /// Column the node is drawn in
    pub side: Side,
    pub is_pivot: bool,
}

/// Directed first -> second constituent graph
pub type CompoundGraph = Graph<ConstituentNode, EdgeMeta, Directed>;

/// Lift a graph index into petgraph, one column per constituent side
///
/// The first-constituent column is added before the second, which is also
/// the order of `components`, so node indices equal component positions.
pub fn to_compound_graph(index: &GraphIndex) -> CompoundGraph {
    let bipartite = index.bipartite();
    let pivot_side = bipartite.direction.pivot_side();
    let mut graph = CompoundGraph::with_capacity(index.node_count(), index.edge_count());

    let nodes: Vec<NodeIndex> = [(Side::First, bipartite.firsts()), (Side::Second, bipartite.seconds())]
        .into_iter()
        .flat_map(|(side, column)| column.into_iter().map(move |label| (side, label)))
        .map(|(side, label)| {
            graph.add_node(ConstituentNode {
                label: label.to_string(),
                side,
                is_pivot: side == pivot_side,
            })
        })
        .collect();

    for ((&source, &target), meta) in index
        .source_indices
        .iter()
        .zip(&index.target_indices)
        .zip(&index.edges)
    {
        graph.add_edge(nodes[source], nodes[target], meta.clone());
    }

    graph
}

/// DOT exporter for the bipartite tree diagram
#[derive(Debug, Clone)]
pub struct DotExporter {
    /// Line colour of every edge
    pub edge_color: String,
    /// Attach `lemma (frequency)` as an edge tooltip
    pub show_tooltips: bool,
    /// Emit a graph label with this heading
    pub title: Option<String>,
}

impl Default for DotExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DotExporter {
    pub fn new() -> Self {
        Self {
            edge_color: "pink".to_string(),
            show_tooltips: true,
            title: None,
        }
    }

    /// Builder pattern: edge colour
    pub fn with_edge_color(mut self, color: impl Into<String>) -> Self {
        self.edge_color = color.into();
        self
    }

    /// Builder pattern: enable/disable edge tooltips
    pub fn with_tooltips(mut self, enabled: bool) -> Self {
        self.show_tooltips = enabled;
        self
    }

    /// Builder pattern: graph heading
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Export a graph index as DOT
    pub fn export_tree(&self, index: &GraphIndex) -> String {
        self.export_graph(&to_compound_graph(index))
    }

    /// Export a compound graph as DOT
    pub fn export_graph(&self, graph: &CompoundGraph) -> String {
        let mut dot = String::from("digraph Komposita {\n");

        dot.push_str("  rankdir=LR;\n");
        dot.push_str("  nodesep=0.001;\n");
        dot.push_str("  ranksep=1;\n");
        dot.push_str("  splines=polyline;\n");
        dot.push_str("  labeljust=r;\n");
        if let Some(title) = &self.title {
            dot.push_str(&format!("  label=\"{}\";\n", escape_dot_label(title)));
            dot.push_str("  labelloc=t;\n");
        }
        dot.push('\n');

        for (node_idx, node) in graph.node_references() {
            dot.push_str(&format!(
                "  n{} [label=\"{}\", shape=plain];\n",
                node_idx.index(),
                escape_dot_label(&node.label)
            ));
        }

        if graph.edge_count() > 0 {
            dot.push('\n');
        }

        for edge in graph.edge_references() {
            let mut attrs = vec![
                "arrowhead=none".to_string(),
                format!("color=\"{}\"", escape_dot_label(&self.edge_color)),
            ];
            if self.show_tooltips {
                let meta = edge.weight();
                attrs.push(format!(
                    "tooltip=\"{} ({})\"",
                    escape_dot_label(&meta.lemma),
                    meta.frequency
                ));
            }
            dot.push_str(&format!(
                "  n{} -> n{} [{}];\n",
                edge.source().index(),
                edge.target().index(),
                attrs.join(", ")
            ));
        }

        dot.push_str("}\n");
        dot
    }
}

/// Escape special characters in DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
