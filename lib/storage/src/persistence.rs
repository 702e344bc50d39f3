use crate::codec;
use atomicwrites::{AtomicFile, OverwriteBehavior};
use ergraph_core::{Error, GraphStore, Result};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

// atomicwrites stages the temp file next to the target; a bare file name has
// an empty parent, so anchor it to the working directory.
fn anchored(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => path.to_path_buf(),
        _ => Path::new(".").join(path),
    }
}

/// Write `graph` to `path` in the adjacency format.
///
/// The file is written to a temporary sibling and renamed over `path`, so an
/// existing file is either fully replaced or left untouched.
pub fn save_graph<P: AsRef<Path>>(graph: &GraphStore, path: P) -> Result<()> {
    let path = path.as_ref();
    codec::validate_labels(graph)?;
    if path.file_name().is_none() {
        return Err(Error::file_access(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "not a file path"),
        ));
    }

    let file = AtomicFile::new(anchored(path), OverwriteBehavior::AllowOverwrite);
    file.write(|f| {
        let mut writer = BufWriter::new(f);
        codec::encode(graph, &mut writer)?;
        writer.flush()?;
        Ok::<(), Error>(())
    })
    .map_err(|e| match e {
        atomicwrites::Error::Internal(io) => Error::file_access(path, io),
        atomicwrites::Error::User(Error::Io(io)) => Error::file_access(path, io),
        atomicwrites::Error::User(other) => other,
    })?;

    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "saved graph"
    );
    Ok(())
}

/// Read a graph from `path`. The result is always a freshly built store.
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<GraphStore> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::file_access(path, e))?;
    let graph = codec::decode(BufReader::new(file)).map_err(|e| match e {
        Error::Io(io) => Error::file_access(path, io),
        other => other,
    })?;

    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}
