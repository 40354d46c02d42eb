//! Print a JSON summary of a matrix document (requires the `serde` feature)

use serde::Serialize;
use smtx::{load_matrix, Entry};

#[derive(Serialize)]
struct DocumentSummary {
    rows: usize,
    cols: usize,
    nnz: usize,
    entries: Vec<Entry>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let filename = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "example_matrix.smtx".to_string());

    let matrix = load_matrix(&filename)?;
    let summary = DocumentSummary {
        rows: matrix.rows(),
        cols: matrix.cols(),
        nnz: matrix.nnz(),
        entries: matrix.sorted_entries(),
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
