use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use log::{info, warn};

use super::{LinkGraph, LinkGraphBuilder};
use crate::error::{LinkGraphError, LinkGraphResult};

fn line_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .comment(Some(b'#'))
        .flexible(true)
        .from_reader(reader)
}

/// Registers one vertex per line. Blank and `#`-comment lines are
/// ignored; unparsable lines, lines with extra tab-separated fields,
/// and names that are already registered are logged and skipped, never
/// fatal. Only a genuine I/O failure aborts the read.
pub(super) fn read_vertices<R: Read>(
    builder: LinkGraphBuilder,
    reader: R,
) -> LinkGraphResult<LinkGraphBuilder> {
    line_reader(reader)
        .records()
        .enumerate()
        .try_fold(builder, |builder, (line, record)| {
            let record = match record {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    warn!("skipping unparsable vertex line {line}: {e}");
                    return Ok(builder);
                }
            };
            if record.len() != 1 {
                warn!(
                    "skipping malformed vertex line {line}: expected one name, got {} fields",
                    record.len()
                );
                return Ok(builder);
            }
            let name = &record[0];
            if builder.contains_vertex(name) {
                warn!("skipping duplicate vertex {name:?} in line {line}");
                return Ok(builder);
            }
            builder.add_vertex(name)
        })
}

/// Stages one directed edge per line, `from<TAB>to`. Blank and comment
/// lines are ignored and unparsable lines or lines with the wrong
/// field count are logged and skipped, but an edge naming an
/// unregistered vertex is an [`LinkGraphError::UnknownVertex`]
/// failure and an I/O failure aborts the read.
pub(super) fn read_edges<R: Read>(
    builder: LinkGraphBuilder,
    reader: R,
) -> LinkGraphResult<LinkGraphBuilder> {
    line_reader(reader)
        .records()
        .enumerate()
        .try_fold(builder, |builder, (line, record)| {
            let record = match record {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    warn!("skipping unparsable edge line {line}: {e}");
                    return Ok(builder);
                }
            };
            if record.len() != 2 {
                warn!(
                    "skipping malformed edge line {line}: expected two names, got {} fields",
                    record.len()
                );
                return Ok(builder);
            }
            builder.add_edge(&record[0], &record[1])
        })
}

impl LinkGraph {
    /// Loads a graph from a vertex list file and an edge list file.
    /// Fails outright when the vertex source yields no vertices at all;
    /// otherwise malformed lines have already been skipped with a
    /// diagnostic and everything valid is kept.
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(
        vertex_path: P,
        edge_path: Q,
    ) -> LinkGraphResult<Self> {
        let builder = read_vertices(LinkGraphBuilder::new(), File::open(&vertex_path)?)?;
        if builder.vertex_count() == 0 {
            let err = format!("no vertices loaded from {:?}", vertex_path.as_ref());
            return Err(LinkGraphError::Graph(err));
        }
        let builder = read_edges(builder, File::open(edge_path)?)?;
        let graph = builder.build()?;
        info!(
            "loaded graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}
