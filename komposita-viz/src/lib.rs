//! Komposita Visualization - Flow and tree diagram export
//!
//! Turns a [`GraphView`] from `komposita-core` into something a person can
//! look at:
//! - flow mode: a Plotly Sankey figure serialized as JSON
//! - tree mode: Graphviz DOT built through petgraph, optionally rendered
//!   by the `dot` binary
//!
//! Both come with a heading, an edition stamp and a plain-text lemma table.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use komposita_core::{DiagramMode, GraphView};

pub mod graph_dot;
pub mod graphviz;
pub mod labels;
pub mod sankey;
pub mod table;

pub use graph_dot::{to_compound_graph, CompoundGraph, ConstituentNode, DotExporter};
pub use graphviz::{check_graphviz_installed, render_dot_to_file, render_dot_to_svg, OutputFormat};
pub use labels::{category_caption, edition_stamp, heading, pivot_label, today_stamp};
pub use sankey::{SankeyFigure, SankeyStyle};
pub use table::render_lemma_table;

/// Diagram payload of a rendered view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagram {
    Flow(SankeyFigure),
    /// DOT source
    Tree(String),
}

/// Everything shown for one selected pivot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    pub heading: String,
    /// Category caption, tree mode only
    pub caption: Option<String>,
    pub diagram: Diagram,
    pub table: String,
}

/// Styling for both diagram kinds
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub sankey: SankeyStyle,
    /// Tree exporter; its title is replaced by the view heading
    pub tree: DotExporter,
}

/// Render a graph view
///
/// Flow mode tabulates one row per edge; tree mode tabulates the lemma
/// totals, which may exceed an edge's own frequency when a lemma occurs
/// in several categories.
pub fn render_view(view: &GraphView, options: &RenderOptions) -> RenderedView {
    let pivot = view.graph.pivot();
    let heading = heading(pivot, view.graph.direction);

    match view.mode {
        DiagramMode::Flow => RenderedView {
            heading,
            caption: None,
            diagram: Diagram::Flow(SankeyFigure::from_graph(&view.graph, &options.sankey)),
            table: render_lemma_table(&view.graph.edge_rows()),
        },
        DiagramMode::Tree => RenderedView {
            caption: Some(category_caption(&view.categories)),
            diagram: Diagram::Tree(options.tree.clone().with_title(&heading).export_tree(&view.graph)),
            table: render_lemma_table(&view.lemmas),
            heading,
        },
    }
}
