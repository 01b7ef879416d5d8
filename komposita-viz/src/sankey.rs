//! Plotly Sankey figure for the flow diagram
//!
//! The figure is plain serde data; serialized to JSON it can be handed to
//! `Plotly.newPlot` (or `plotly.io.from_json`) unchanged.

use anyhow::{Context, Result};
use komposita_core::GraphIndex;
use serde::{Deserialize, Serialize};

use crate::labels::pivot_label;

/// Visual parameters of the flow diagram
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SankeyStyle {
    pub node_pad: u32,
    pub node_thickness: u32,
    pub node_color: String,
    pub outline_color: String,
    pub outline_width: u32,
    pub link_color: String,
    pub font_size: u32,
    pub width: u32,
    /// Figure height per node
    pub row_height: u32,
}

impl Default for SankeyStyle {
    fn default() -> Self {
        Self {
            node_pad: 10,
            node_thickness: 10,
            node_color: "orchid".to_string(),
            outline_color: "black".to_string(),
            outline_width: 1,
            link_color: "lavenderblush".to_string(),
            font_size: 14,
            width: 500,
            row_height: 21,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SankeyFigure {
    pub data: Vec<SankeyTrace>,
    pub layout: SankeyLayout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SankeyTrace {
    #[serde(rename = "type")]
    pub kind: String,
    pub node: SankeyNodes,
    pub link: SankeyLinks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SankeyNodes {
    pub pad: u32,
    pub thickness: u32,
    pub line: Outline,
    pub label: Vec<String>,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    pub color: String,
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SankeyLinks {
    pub source: Vec<usize>,
    pub target: Vec<usize>,
    pub value: Vec<u32>,
    /// `"{lemma}; Frequenz: {frequency}"` per link
    pub customdata: Vec<String>,
    pub hovertemplate: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SankeyLayout {
    pub title: Title,
    pub font: Font,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    pub size: u32,
}

impl SankeyFigure {
    /// Build the flow figure for one graph index
    ///
    /// Every link has value 1 so partner bars are equally thick; the edge
    /// frequency only appears in the hover text.
    pub fn from_graph(index: &GraphIndex, style: &SankeyStyle) -> Self {
        let customdata = index
            .edges
            .iter()
            .map(|meta| format!("{}; Frequenz: {}", meta.lemma, meta.frequency))
            .collect();
        let node_count = u32::try_from(index.node_count()).unwrap_or(u32::MAX);

        Self {
            data: vec![SankeyTrace {
                kind: "sankey".to_string(),
                node: SankeyNodes {
                    pad: style.node_pad,
                    thickness: style.node_thickness,
                    line: Outline {
                        color: style.outline_color.clone(),
                        width: style.outline_width,
                    },
                    label: index.components.clone(),
                    color: style.node_color.clone(),
                },
                link: SankeyLinks {
                    source: index.source_indices.clone(),
                    target: index.target_indices.clone(),
                    value: vec![1; index.edge_count()],
                    customdata,
                    hovertemplate: "Lemma: %{customdata}<extra></extra>".to_string(),
                    color: style.link_color.clone(),
                },
            }],
            layout: SankeyLayout {
                title: Title {
                    text: format!(
                        "Nominalkomposita mit <i>{}</i>",
                        pivot_label(index.pivot(), index.direction)
                    ),
                },
                font: Font { size: style.font_size },
                width: style.width,
                height: style.row_height.saturating_mul(node_count),
            },
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize Sankey figure")
    }
}
