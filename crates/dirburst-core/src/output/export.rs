/// Tree export — JSON snapshots (write and read back) and a flat CSV
/// listing of every node.
use super::ExportError;
use crate::model::{FileTree, NodeIndex, SnapshotNode};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// One CSV row.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    path: &'a str,
    name: &'a str,
    kind: &'static str,
    depth: usize,
    size: u64,
    file_count: u64,
}

/// Serialise the subtree rooted at `root` as a pretty-printed JSON snapshot.
pub fn write_snapshot<W: Write>(
    tree: &FileTree,
    root: NodeIndex,
    writer: W,
) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(writer, &tree.to_snapshot(root))
}

/// Parse a JSON snapshot and rebuild its tree.
pub fn read_snapshot<R: Read>(reader: R) -> Result<FileTree, ExportError> {
    let snapshot: SnapshotNode = serde_json::from_reader(reader)?;
    Ok(FileTree::from_snapshot(&snapshot)?)
}

/// Write every node under `root` as CSV, in pre-order, with a header row.
pub fn write_csv<W: Write>(tree: &FileTree, root: NodeIndex, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    let base_depth = tree.ancestry(root).len();

    for index in tree.descendants(root) {
        let node = tree.node(index);
        let path = tree.relative_path(index);
        wtr.serialize(CsvRow {
            path: &path,
            name: &node.name,
            kind: if node.is_dir { "dir" } else { "file" },
            depth: tree.ancestry(index).len() - base_depth,
            size: node.size,
            file_count: node.file_count,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save the whole tree as a JSON snapshot file.
pub fn save_snapshot(tree: &FileTree, path: &Path) -> Result<(), ExportError> {
    let file = create(path)?;
    let mut writer = BufWriter::new(file);
    write_snapshot(tree, tree.root(), &mut writer)?;
    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Wrote snapshot of {} nodes to {}", tree.len(), path.display());
    Ok(())
}

/// Load a JSON snapshot file.
pub fn load_snapshot(path: &Path) -> Result<FileTree, ExportError> {
    let file = File::open(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tree = read_snapshot(BufReader::new(file))?;
    tracing::info!("Loaded snapshot of {} nodes from {}", tree.len(), path.display());
    Ok(tree)
}

/// Save the whole tree as a CSV listing.
pub fn save_csv(tree: &FileTree, path: &Path) -> Result<(), ExportError> {
    let file = create(path)?;
    write_csv(tree, tree.root(), BufWriter::new(file))?;
    tracing::info!("Wrote CSV listing to {}", path.display());
    Ok(())
}

fn create(path: &Path) -> Result<File, ExportError> {
    File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
