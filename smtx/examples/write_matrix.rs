//! Build a small sparse matrix and save it as a text document

use smtx::{save_matrix, SparseMatrix};

fn main() -> smtx::Result<()> {
    env_logger::init();

    let mut matrix = SparseMatrix::new(4, 4);
    matrix.set(0, 0, 5);
    matrix.set(1, 3, -2);
    matrix.set(3, 1, 7);
    matrix.set(2, 2, 11);

    let filename = "example_matrix.smtx";
    save_matrix(&matrix, filename)?;

    println!(
        "Wrote {}x{} matrix with {} entries to '{filename}'",
        matrix.rows(),
        matrix.cols(),
        matrix.nnz()
    );
    println!("\nRun 'cargo run --example read_matrix' to read it back!");
    Ok(())
}
