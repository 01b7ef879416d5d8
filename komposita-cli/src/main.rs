//! Komposita CLI Entry Point
//!
//! Explore two-part noun compounds from a lemmatized manifesto corpus: list
//! categories, rank constituents, and draw the flow or tree diagram around a
//! chosen pivot.

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};

use komposita_core::{
    CategorySelection, DiagramMode, Direction, Exploration, Explorer, ExplorerConfig, GraphView,
    Selection, Side, Sources,
};
use komposita_utils::logging::{init_logging, LogLevel, LoggerConfig};
use komposita_viz::{
    render_dot_to_file, render_dot_to_svg, render_view, today_stamp, Diagram, DotExporter,
    OutputFormat, RenderOptions, RenderedView,
};

#[derive(Parser)]
#[command(name = "komposita")]
#[command(about = "Noun compounds in election manifestos")]
#[command(version)]
struct Cli {
    /// Lemmatized corpus (TSV with a `lemma` column)
    #[arg(long, env = "KOMPOSITA_CORPUS")]
    corpus: PathBuf,

    /// Compound-split table (headerless TSV)
    #[arg(long, env = "KOMPOSITA_SPLITS")]
    splits: PathBuf,

    /// Configuration file (toml, json or yaml)
    #[arg(short = 'c', long, env = "KOMPOSITA_CONFIG")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the categories (parties) found in the corpus
    Categories,

    /// Rank the most productive constituents
    Top {
        /// Constituent position to rank
        #[arg(short = 's', long, value_enum, default_value = "first")]
        side: Side,

        /// Which diagram's table, cutoff and blocklist to use
        #[arg(short = 'm', long, value_enum, default_value = "flow")]
        mode: DiagramMode,

        /// Restrict to these categories (tree mode, repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,

        /// Select no category at all (tree mode yields nothing)
        #[arg(long, conflicts_with = "categories")]
        no_categories: bool,
    },

    /// Sankey figure of one pivot over the whole corpus
    Flow {
        /// Pivot constituent, e.g. `Wahl`
        pivot: String,

        /// Position of the pivot in the compound
        #[arg(short = 's', long, value_enum, default_value = "first")]
        side: Side,

        /// Write the figure JSON here instead of stdout
        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },

    /// Graphviz tree of one pivot, optionally per category
    Tree {
        /// Pivot constituent, e.g. `Programm`
        pivot: String,

        /// Position of the pivot in the compound
        #[arg(short = 's', long, value_enum, default_value = "first")]
        side: Side,

        /// Restrict to these categories (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,

        /// Select no category at all, leaving the pivot without partners
        #[arg(long, conflicts_with = "categories")]
        no_categories: bool,

        /// Output file (its extension is replaced by the format's)
        #[arg(short = 'o', long)]
        out: Option<PathBuf>,

        /// Output format (dot, svg, png, pdf)
        #[arg(short = 'f', long, default_value = "dot")]
        format: OutputFormat,

        /// Edge colour
        #[arg(long, default_value = "pink")]
        edge_color: String,

        /// Leave out the `lemma (frequency)` edge tooltips
        #[arg(long)]
        no_tooltips: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&LoggerConfig {
        level: LogLevel::from_verbosity(cli.verbose),
        ..Default::default()
    })?;

    let config = ExplorerConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let sources = Sources::load(&cli.corpus, &cli.splits, &config)?;
    let explorer = Explorer::from_sources(&sources, config);

    match cli.command {
        Commands::Categories => {
            for category in explorer.categories() {
                println!("{category}");
            }
        }

        Commands::Top {
            side,
            mode,
            categories,
            no_categories,
        } => {
            let selection = category_selection(categories, no_categories);
            for constituent in explorer.ranking(mode, side, &selection) {
                println!("{constituent}");
            }
        }

        Commands::Flow { pivot, side, out } => {
            let selection = Selection::new(DiagramMode::Flow, Direction::from_pivot_side(side))
                .with_pivot(pivot);
            let rendered = render_view(&graph_view(&explorer, &selection)?, &RenderOptions::default());
            let Diagram::Flow(figure) = &rendered.diagram else {
                bail!("flow selection did not produce a Sankey figure");
            };

            print_header(&rendered);
            let json = figure.to_json()?;
            match out {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Diagramm gespeichert: {}\n", path.display());
                }
                None => println!("{json}\n"),
            }
            print!("{}", rendered.table);
        }

        Commands::Tree {
            pivot,
            side,
            categories,
            no_categories,
            out,
            format,
            edge_color,
            no_tooltips,
        } => {
            let selection = Selection::new(DiagramMode::Tree, Direction::from_pivot_side(side))
                .with_pivot(pivot)
                .with_categories(category_selection(categories, no_categories));
            let options = RenderOptions {
                tree: DotExporter::new()
                    .with_edge_color(edge_color)
                    .with_tooltips(!no_tooltips),
                ..RenderOptions::default()
            };
            let rendered = render_view(&graph_view(&explorer, &selection)?, &options);
            let Diagram::Tree(dot) = &rendered.diagram else {
                bail!("tree selection did not produce DOT");
            };

            print_header(&rendered);
            emit_tree(dot, out.as_deref(), format)?;
            print!("{}", rendered.table);
        }
    }

    Ok(())
}

/// No `--category` means every category, `--no-categories` means none
fn category_selection(categories: Vec<String>, none: bool) -> CategorySelection {
    if none {
        CategorySelection::none()
    } else if categories.is_empty() {
        CategorySelection::All
    } else {
        CategorySelection::only(categories)
    }
}

fn graph_view(explorer: &Explorer, selection: &Selection) -> Result<GraphView> {
    match explorer.explore(selection) {
        Exploration::Graph(view) => {
            if view.graph.has_no_partners() {
                tracing::warn!(pivot = view.graph.pivot(), "pivot has no partners in this selection");
            }
            Ok(view)
        }
        Exploration::Unselected { choices } => {
            bail!("No pivot selected. Candidates: {}", choices.join(", "))
        }
    }
}

fn print_header(rendered: &RenderedView) {
    println!("{}", rendered.heading);
    println!("{}", today_stamp());
    if let Some(caption) = &rendered.caption {
        println!("{caption}");
    }
    println!();
}

fn emit_tree(dot: &str, out: Option<&Path>, format: OutputFormat) -> Result<()> {
    match (out, format) {
        (Some(path), format) => {
            let written = render_dot_to_file(dot, path, format)?;
            println!("Diagramm gespeichert: {}\n", written.display());
        }
        (None, OutputFormat::Dot) => println!("{dot}"),
        (None, OutputFormat::Svg) => println!("{}", render_dot_to_svg(dot)?),
        (None, format) => bail!("{format} output is binary; pass --out to write it to a file"),
    }
    Ok(())
}
