//! Delimited edge-list reader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use crate::graph::Graph;
use crate::types::IngestError;

/// Summary of one ingestion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    /// Total lines read from the source file.
    pub lines_read: usize,
    /// Well-formed lines turned into edges.
    pub edges_added: usize,
    /// Malformed or incomplete lines skipped.
    pub lines_skipped: usize,
}

/// Load a delimited edge list into `graph`.
///
/// One relation per line, `entityA<delim>entityB`; fields are trimmed.
/// Well-formed lines become unweighted edges, directed or undirected per
/// the graph's own mode. A line that does not split into exactly two
/// non-empty fields is logged and skipped, never aborting the lines after
/// it. A file that cannot be opened aborts with [`IngestError::Io`] before
/// any edge is added; a read failure mid-stream aborts with the same
/// error.
pub fn load_edge_list<P: AsRef<Path>>(
    graph: &mut Graph<String>,
    path: P,
    delimiter: char,
) -> Result<IngestReport, IngestError> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            log::error!("cannot open edge list {}: {}", path.display(), err);
            return Err(IngestError::Io(err));
        }
    };

    let mut report = IngestReport {
        lines_read: 0,
        edges_added: 0,
        lines_skipped: 0,
    };

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let line_num = index + 1;
        report.lines_read += 1;

        let mut fields = line.split(delimiter);
        match (fields.next(), fields.next(), fields.next()) {
            (Some(a), Some(b), None) => {
                let a = a.trim();
                let b = b.trim();
                if a.is_empty() || b.is_empty() {
                    log::warn!("line {} is missing an entity, skipping", line_num);
                    report.lines_skipped += 1;
                } else {
                    graph.add_edge(a.to_string(), b.to_string());
                    report.edges_added += 1;
                }
            }
            _ => {
                log::error!("line {} is malformed: {:?}, skipping", line_num, line.trim());
                report.lines_skipped += 1;
            }
        }
    }

    Ok(report)
}
