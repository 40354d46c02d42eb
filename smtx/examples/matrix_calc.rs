//! Front-end pipeline over two matrix documents
//!
//! Loads two matrices, applies the selected operation, and saves the
//! result, mapping each error category to its own exit code:
//!
//! ```text
//! matrix_calc <lhs.smtx> <rhs.smtx> <add|sub|mul> <out.smtx>
//! ```

use std::process::ExitCode;

use smtx::{compute, load_matrix, save_matrix, Operation, SparseMatrix};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [lhs_path, rhs_path, code, out_path] = args.as_slice() else {
        eprintln!("usage: matrix_calc <lhs.smtx> <rhs.smtx> <add|sub|mul> <out.smtx>");
        return ExitCode::from(1);
    };

    let operation = match code.parse::<Operation>() {
        Ok(operation) => operation,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::from(1);
        }
    };

    match run(lhs_path, rhs_path, operation, out_path) {
        Ok(result) => {
            println!(
                "{} -> {}x{} matrix with {} entries written to '{out_path}'",
                operation.code(),
                result.rows(),
                result.cols(),
                result.nnz()
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{error}");
            ExitCode::from(error.exit_code() as u8)
        }
    }
}

fn run(
    lhs_path: &str,
    rhs_path: &str,
    operation: Operation,
    out_path: &str,
) -> smtx::Result<SparseMatrix> {
    let lhs = load_matrix(lhs_path)?;
    let rhs = load_matrix(rhs_path)?;
    let result = compute(operation, &lhs, &rhs)?;
    save_matrix(&result, out_path)?;
    Ok(result)
}
