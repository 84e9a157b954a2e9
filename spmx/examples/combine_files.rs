//! Write two small matrices, then add and multiply them through files

use spmx::{compute_files, Matrix, MatrixFile, MatrixSummary, Operation};
use std::time::Instant;

fn main() -> spmx::Result<()> {
    let dir = std::env::temp_dir().join("spmx-example");

    // Band matrices: a diagonal plus one super-diagonal
    let size = 1_000;
    let mut a: Matrix = Matrix::new(size, size);
    let mut b: Matrix = Matrix::new(size, size);
    for i in 0..size {
        a.set(i, i, 2);
        b.set(i, i, 3);
        if i + 1 < size {
            a.set(i, i + 1, -1);
            b.set(i + 1, i, 1);
        }
    }

    let a_path = dir.join("a.txt");
    let b_path = dir.join("b.txt");
    MatrixFile::write_creating_dirs(&a_path, &a)?;
    MatrixFile::write_creating_dirs(&b_path, &b)?;
    println!("Inputs written to {}", dir.display());

    for op in [Operation::Addition, Operation::Multiplication] {
        let start = Instant::now();
        let out = dir.join(format!("{}.txt", op.name()));
        let result: Matrix = compute_files(op, &a_path, &b_path, &out)?;
        println!("\n{op} in {:.2?} -> {}", start.elapsed(), out.display());
        println!("{}", MatrixSummary::of(&result));
    }
    Ok(())
}
