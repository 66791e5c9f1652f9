//! Command implementations and argument parsing for the `spanwood` CLI.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use spanwood_core::{
    DistanceMatrix, GraphError, GraphGenerator, SpanningTree, VertexId,
    all_pairs_shortest_paths, minimum_spanning_tree,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_VERTICES: usize = 20;
const DEFAULT_MST_EDGES: usize = 37;
const DEFAULT_SHORTEST_PATH_EDGES: usize = 74;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanwood",
    about = "Generate random weighted graphs and run graph algorithms on them."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build a minimum spanning tree with Prim's algorithm.
    Mst(MstCommand),
    /// Compute all-pairs shortest distances.
    ShortestPaths(ShortestPathsCommand),
}

/// Graph generation options shared by every command.
#[derive(Debug, Args, Clone)]
pub struct GraphArgs {
    /// Number of vertices.
    #[arg(long, default_value_t = DEFAULT_VERTICES)]
    pub vertices: usize,

    /// Number of edges; defaults depend on the command.
    #[arg(long)]
    pub edges: Option<usize>,

    /// Seed for the random generator; drawn at random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Draw weights from `[-100, 100]` instead of `[1, 100]`.
    #[arg(long)]
    pub allow_negative_weights: bool,
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstCommand {
    /// Graph generation options.
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Vertex to grow the tree from.
    #[arg(long, default_value_t = 0)]
    pub root: VertexId,
}

/// Options accepted by the `shortest-paths` command.
#[derive(Debug, Args, Clone)]
pub struct ShortestPathsCommand {
    /// Graph generation options.
    #[command(flatten)]
    pub graph: GraphArgs,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Graph generation or an algorithm failed.
    #[error(transparent)]
    Core(#[from] GraphError),
}

/// Result of the `mst` command.
#[derive(Debug, Clone)]
pub struct MstSummary {
    /// Seed the graph was generated from.
    pub seed: u64,
    /// Number of vertices in the generated graph.
    pub vertices: usize,
    /// Number of edges in the generated graph.
    pub edges: usize,
    /// Tree grown from the requested root.
    pub tree: SpanningTree,
}

/// Result of the `shortest-paths` command.
#[derive(Debug, Clone)]
pub struct ShortestPathsSummary {
    /// Seed the graph was generated from.
    pub seed: u64,
    /// Number of vertices in the generated graph.
    pub vertices: usize,
    /// Number of edges in the generated graph.
    pub edges: usize,
    /// Distances between every vertex pair.
    pub distances: DistanceMatrix,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Output of `mst`.
    Mst(MstSummary),
    /// Output of `shortest-paths`.
    ShortestPaths(ShortestPathsSummary),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when generation or the algorithm fails.
///
/// # Examples
/// ```
/// # use spanwood_cli::cli::{Cli, Command, ExecutionSummary, GraphArgs, MstCommand, run_cli};
/// let cli = Cli {
///     command: Command::Mst(MstCommand {
///         graph: GraphArgs {
///             vertices: 6,
///             edges: Some(9),
///             seed: Some(3),
///             allow_negative_weights: false,
///         },
///         root: 0,
///     }),
/// };
/// let ExecutionSummary::Mst(summary) = run_cli(cli)? else {
///     unreachable!("mst yields an mst summary");
/// };
/// assert_eq!(summary.tree.edges().len(), 5);
/// # Ok::<(), spanwood_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Mst(command) => {
            span.record("command", field::display("mst"));
            run_mst(&command).map(ExecutionSummary::Mst)
        }
        Command::ShortestPaths(command) => {
            span.record("command", field::display("shortest-paths"));
            run_shortest_paths(&command).map(ExecutionSummary::ShortestPaths)
        }
    }
}

/// A generator configured from [`GraphArgs`] plus the seed it will use.
struct GraphRequest {
    generator: GraphGenerator,
    seed: u64,
}

impl GraphArgs {
    fn resolve(&self, default_edges: usize) -> GraphRequest {
        let edges = self.edges.unwrap_or(default_edges);
        GraphRequest {
            generator: GraphGenerator::new(self.vertices, edges)
                .with_negative_weights(self.allow_negative_weights),
            seed: self.seed.unwrap_or_else(rand::random),
        }
    }
}

#[instrument(
    name = "cli.mst",
    err,
    skip(command),
    fields(vertices = command.graph.vertices, edges = field::Empty, seed = field::Empty, root = command.root),
)]
pub(super) fn run_mst(command: &MstCommand) -> Result<MstSummary, CliError> {
    let GraphRequest { generator, seed } = command.graph.resolve(DEFAULT_MST_EDGES);
    let span = Span::current();
    span.record("edges", generator.edges());
    span.record("seed", seed);

    let graph = generator.generate_seeded(seed)?;
    let tree = minimum_spanning_tree(&graph, command.root)?;
    info!(
        total_weight = tree.total_weight(),
        tree_edges = tree.edges().len(),
        spanning = tree.is_spanning(),
        "command completed"
    );
    Ok(MstSummary {
        seed,
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        tree,
    })
}

#[instrument(
    name = "cli.shortest_paths",
    err,
    skip(command),
    fields(vertices = command.graph.vertices, edges = field::Empty, seed = field::Empty),
)]
pub(super) fn run_shortest_paths(
    command: &ShortestPathsCommand,
) -> Result<ShortestPathsSummary, CliError> {
    let GraphRequest { generator, seed } = command.graph.resolve(DEFAULT_SHORTEST_PATH_EDGES);
    let span = Span::current();
    span.record("edges", generator.edges());
    span.record("seed", seed);

    let graph = generator.generate_seeded(seed)?;
    let distances = all_pairs_shortest_paths(&graph)?;
    info!(vertices = distances.vertex_count(), "command completed");
    Ok(ShortestPathsSummary {
        seed,
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        distances,
    })
}

/// Renders `summary` to `writer` as plain text.
///
/// `mst` prints a header followed by one `parent<TAB>child<TAB>weight` line
/// per tree edge. `shortest-paths` prints a header followed by the distance
/// table, one row per source vertex, with `-` for unreachable pairs.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use spanwood_cli::cli::{ExecutionSummary, MstSummary, render_summary};
/// # use spanwood_core::{Graph, minimum_spanning_tree};
/// let graph = Graph::from_edges(3, [(0, 1, 4), (1, 2, 2), (0, 2, 7)])?;
/// let summary = ExecutionSummary::Mst(MstSummary {
///     seed: 1,
///     vertices: 3,
///     edges: 3,
///     tree: minimum_spanning_tree(&graph, 0)?,
/// });
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.contains("total weight: 6"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Mst(mst) => render_mst(mst, &mut writer),
        ExecutionSummary::ShortestPaths(paths) => render_shortest_paths(paths, &mut writer),
    }
}

fn render_mst(summary: &MstSummary, writer: &mut impl Write) -> io::Result<()> {
    let tree = &summary.tree;
    writeln!(
        writer,
        "graph: {} vertices, {} edges (seed {})",
        summary.vertices, summary.edges, summary.seed
    )?;
    writeln!(writer, "root: {}", tree.root())?;
    writeln!(writer, "total weight: {}", tree.total_weight())?;
    if !tree.is_spanning() {
        writeln!(
            writer,
            "disconnected: tree reaches {} of {} vertices",
            tree.visited_count(),
            tree.vertex_count()
        )?;
    }
    for edge in tree.edges() {
        writeln!(writer, "{}\t{}\t{}", edge.parent(), edge.child(), edge.weight())?;
    }
    Ok(())
}

fn render_shortest_paths(summary: &ShortestPathsSummary, writer: &mut impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "graph: {} vertices, {} edges (seed {})",
        summary.vertices, summary.edges, summary.seed
    )?;
    for (source, row) in summary.distances.rows().enumerate() {
        write!(writer, "{source}")?;
        for distance in row {
            match distance {
                Some(value) => write!(writer, "\t{value}")?,
                None => write!(writer, "\t-")?,
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}
