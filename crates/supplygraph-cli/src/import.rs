//! CSV edge-list import.
//!
//! Expects a header line followed by `from,to` rows. Unknown entities are
//! created on first sight; each row then adds one flow.

use std::path::Path;

use anyhow::Context;
use supplygraph_core::FlowStore;

/// Counts of what an import added.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImportSummary {
    pub entities_added: usize,
    pub flows_added: usize,
    pub rows_skipped: usize,
}

/// Loads a CSV edge list into the store.
pub fn load_csv(store: &mut FlowStore, path: &Path) -> anyhow::Result<ImportSummary> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("cannot open {}", path.display()))?;

    let mut summary = ImportSummary::default();
    for record in reader.records() {
        let record = record?;
        let (Some(from), Some(to)) = (record.get(0), record.get(1)) else {
            summary.rows_skipped += 1;
            continue;
        };
        if from.is_empty() || to.is_empty() {
            summary.rows_skipped += 1;
            continue;
        }
        for id in [from, to] {
            if store.add_entity(id).is_ok() {
                summary.entities_added += 1;
            }
        }
        // Both endpoints exist after the adds above.
        store.add_flow(from, to)?;
        summary.flows_added += 1;
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::load_csv;
    use supplygraph_core::FlowStore;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_import_builds_graph() {
        let file = write_csv("from,to\nfarm,mill\nmill,bakery\n");
        let mut store = FlowStore::new();

        let summary = load_csv(&mut store, file.path()).unwrap();
        assert_eq!(summary.entities_added, 3);
        assert_eq!(summary.flows_added, 2);
        assert_eq!(summary.rows_skipped, 0);
        assert_eq!(store.outgoing("farm").unwrap(), ["mill"]);
        assert_eq!(store.outgoing("mill").unwrap(), ["bakery"]);
    }

    #[test]
    fn test_import_skips_incomplete_rows() {
        let file = write_csv("from,to\nfarm,mill\nlonely\n,\n");
        let mut store = FlowStore::new();

        let summary = load_csv(&mut store, file.path()).unwrap();
        assert_eq!(summary.flows_added, 1);
        assert_eq!(summary.rows_skipped, 2);
    }

    #[test]
    fn test_import_keeps_duplicate_flows() {
        let file = write_csv("from,to\nfarm,mill\nfarm,mill\n");
        let mut store = FlowStore::new();

        let summary = load_csv(&mut store, file.path()).unwrap();
        assert_eq!(summary.entities_added, 2);
        assert_eq!(summary.flows_added, 2);
        assert_eq!(store.outgoing("farm").unwrap(), ["mill", "mill"]);
    }

    #[test]
    fn test_import_missing_file_is_an_error() {
        let mut store = FlowStore::new();
        let result = load_csv(&mut store, std::path::Path::new("does-not-exist.csv"));
        assert!(result.is_err());
    }
}
