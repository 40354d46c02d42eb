//! Simple example to read a sparse matrix from a text document

use smtx::load_matrix;

fn main() -> smtx::Result<()> {
    env_logger::init();

    let filename = "example_matrix.smtx";

    // Check if file exists
    if !std::path::Path::new(filename).exists() {
        println!("File '{filename}' not found!");
        println!("   Run 'cargo run --example write_matrix' first");
        return Ok(());
    }

    println!("Reading sparse matrix from '{filename}'...");
    let matrix = load_matrix(filename)?;

    println!("\nMatrix Information:");
    println!("   Dimensions: {} x {}", matrix.rows(), matrix.cols());
    println!("   Stored entries: {}", matrix.nnz());
    let cells = (matrix.rows() * matrix.cols()) as f64;
    if cells > 0.0 {
        println!(
            "   Density: {:.2}%",
            (matrix.nnz() as f64 / cells) * 100.0
        );
    }

    println!("\nStored entries in (row, col) order:");
    for entry in matrix.sorted_entries() {
        println!("   {entry}");
    }

    println!("\nProbing a few positions:");
    for (row, col) in [(0, 0), (1, 3), (0, 3)] {
        println!("   matrix[{row}, {col}] = {}", matrix.get(row, col));
    }

    Ok(())
}
