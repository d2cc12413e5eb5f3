//! Edge-list loading.
//!
//! One edge per line as `source target weight`, fields separated by
//! whitespace or commas. A line with a single name declares an isolated
//! vertex. Everything after `#` is a comment.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use reweigh_core::graph::DiGraph;

/// Reads and parses an edge-list file.
pub fn load(path: &Path) -> Result<DiGraph<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_edge_list(&text).with_context(|| format!("invalid edge list {}", path.display()))
}

/// Parses edge-list text into a graph. Vertices keep first-seen order.
pub fn parse_edge_list(text: &str) -> Result<DiGraph<String>> {
    let mut graph = DiGraph::new();

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.split_once('#').map_or(raw, |(content, _)| content);
        let fields: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|field| !field.is_empty())
            .collect();

        match fields.as_slice() {
            [] => {}
            [vertex] => {
                graph.add_vertex((*vertex).to_string());
            }
            [source, target, weight] => {
                let weight: f64 = weight
                    .parse()
                    .with_context(|| format!("line {line_no}: invalid weight {weight:?}"))?;
                let previous = graph
                    .add_edge_with_vertices((*source).to_string(), (*target).to_string(), weight)
                    .with_context(|| format!("line {line_no}"))?;
                if let Some(previous) = previous {
                    tracing::warn!(
                        "line {}: edge {} -> {} redefined, weight {} replaced by {}",
                        line_no,
                        source,
                        target,
                        previous,
                        weight
                    );
                }
            }
            other => bail!(
                "line {line_no}: expected `source target weight`, found {} fields",
                other.len()
            ),
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_whitespace_and_commas() {
        let graph = parse_edge_list("A B 3\nB,C,-2.5\n  C\tA  1e1\n").unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edge_weight(&"B".into(), &"C".into()), Some(-2.5));
        assert_eq!(graph.edge_weight(&"C".into(), &"A".into()), Some(10.0));
        let order: Vec<&str> = graph.vertices().map(String::as_str).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_comments_blank_lines_and_isolated_vertices() {
        let text = "# sample\n\nA B 1 # trailing\nZ\n";
        let graph = parse_edge_list(text).unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.out_degree(&"Z".into()), 0);
    }

    #[test]
    fn test_redefined_edge_keeps_last_weight() {
        let graph = parse_edge_list("A B 1\nA B 4\n").unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weight(&"A".into(), &"B".into()), Some(4.0));
    }

    #[test]
    fn test_errors_name_the_line() {
        let err = parse_edge_list("A B 1\nA B\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));

        let err = parse_edge_list("A B 1\n\nB C heavy\n").unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("line 3"));
        assert!(message.contains("heavy"));

        let err = parse_edge_list("A B inf\n").unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("line 1"));
        assert!(message.contains("invalid edge weight"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "A B 3").unwrap();
        writeln!(file, "B A -1").unwrap();

        let graph = load(file.path()).unwrap();
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read"));
    }
}
