//! Building graphs from external data.
//!
//! * [`from_json`] reads a graph document with named, positioned nodes and
//!   dual-weighted edges; this is how a campus map is fed to the route server.
//!   [`campus_demo`] is such a document bundled with the crate.
//! * [`from_edge_list`] reads a SNAP-style `from to` edge list with unit weights.
//! * [`from_weighted_csv`] reads a `From,To,Distance` CSV of directed edges.

use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::graph::{Coordinates, Graph};
use crate::{Error, Result};

/// Serialized form of a graph
#[derive(Debug, Clone, Deserialize)]
pub struct GraphDocument {
    pub name: String,
    pub nodes: Vec<NodeDocument>,
    #[serde(default)]
    pub edges: Vec<EdgeDocument>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeDocument {
    pub name: String,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub is_building: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EdgeDocument {
    pub from: String,
    pub to: String,
    pub distance: f64,
    pub time: f64,
    #[serde(default = "default_bidirectional")]
    pub bidirectional: bool,
}

fn default_bidirectional() -> bool {
    true
}

impl GraphDocument {
    /// Adds every node, then every edge
    pub fn into_graph(self) -> Result<Graph> {
        let mut graph = Graph::with_capacity(self.name, self.nodes.len());
        for node in self.nodes {
            graph.add_node(node.name, node.coordinates, None, node.is_building)?;
        }
        for edge in self.edges {
            graph.add_edge(&edge.from, &edge.to, edge.distance, edge.time, edge.bidirectional)?;
        }
        Ok(graph)
    }
}

/// Reads a JSON graph document
pub fn from_json<R: Read>(reader: R) -> Result<Graph> {
    let document: GraphDocument = serde_json::from_reader(reader)?;
    document.into_graph()
}

/// Reads a JSON graph document from a file
pub fn load_json(path: impl AsRef<Path>) -> Result<Graph> {
    let file = File::open(path.as_ref())?;
    let graph = from_json(BufReader::new(file))?;
    log::info!(
        "Loaded graph '{}' from {} ({} nodes, {} edges)",
        graph.name(),
        path.as_ref().display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// The bundled campus map served when no graph file is configured
pub fn campus_demo() -> Result<Graph> {
    from_json(include_str!("../../data/campus.json").as_bytes())
}

/// Reads a whitespace-separated edge list such as the SNAP road networks.
///
/// Blank lines and `#` comments are skipped. Nodes are created on first sight
/// at `[0, 0]`; each line adds a bidirectional edge of distance 1 and time 1.
pub fn from_edge_list<R: BufRead>(name: &str, reader: R) -> Result<Graph> {
    let mut graph = Graph::new(name);

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let (Some(from), Some(to)) = (fields.next(), fields.next()) else {
            return Err(Error::Parse {
                line: number + 1,
                message: format!("expected two node ids, got '{}'", line),
            });
        };

        ensure_node(&mut graph, from)?;
        ensure_node(&mut graph, to)?;
        graph.add_edge(from, to, 1.0, 1.0, true)?;
    }

    Ok(graph)
}

/// Reads a `From,To,Distance` CSV with a header line into directed edges of
/// time 1. Malformed lines are skipped with a warning.
pub fn from_weighted_csv<R: BufRead>(name: &str, reader: R) -> Result<Graph> {
    let mut graph = Graph::new(name);

    for (number, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let parsed = match fields.as_slice() {
            [from, to, distance, ..] if !from.is_empty() && !to.is_empty() => distance
                .parse::<f64>()
                .ok()
                .filter(|d| !d.is_nan())
                .map(|d| (*from, *to, d)),
            _ => None,
        };

        let Some((from, to, distance)) = parsed else {
            log::warn!("Skipping invalid line {}: {}", number + 1, line);
            continue;
        };

        ensure_node(&mut graph, from)?;
        ensure_node(&mut graph, to)?;
        graph.add_edge(from, to, distance, 1.0, false)?;
    }

    Ok(graph)
}

fn ensure_node(graph: &mut Graph, name: &str) -> Result<()> {
    if !graph.contains(name) {
        graph.add_node(name, Coordinates::default(), None, false)?;
    }
    Ok(())
}
