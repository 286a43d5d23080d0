//! Write two small matrices, load them back and store their product

use smat::{EntryOrder, MatrixFile, Operation, SparseMatrix};

fn main() -> smat::Result<()> {
    let dir = std::env::temp_dir().join("smat-example");
    std::fs::create_dir_all(&dir).map_err(|e| smat::Error::Io {
        path: dir.clone(),
        source: e,
    })?;

    let a = SparseMatrix::from_triplets(
        3,
        4,
        [(0, 0, 1), (0, 2, 2), (1, 1, 3), (2, 0, 4), (2, 3, 5)],
    );
    let b = SparseMatrix::from_triplets(4, 2, [(0, 0, 1), (1, 1, 2), (2, 0, 3), (3, 1, 4)]);

    let a_path = dir.join("a.txt");
    let b_path = dir.join("b.txt");
    MatrixFile::write(&a_path, &a, EntryOrder::RowMajor)?;
    MatrixFile::write(&b_path, &b, EntryOrder::RowMajor)?;
    println!("Wrote {} and {}", a_path.display(), b_path.display());

    let a: SparseMatrix = MatrixFile::read(&a_path)?;
    let b: SparseMatrix = MatrixFile::read(&b_path)?;
    let product = Operation::Multiply.apply(&a, &b)?;

    let product_path = dir.join(format!("{}.txt", Operation::Multiply.result_stem()));
    MatrixFile::write(&product_path, &product, EntryOrder::RowMajor)?;
    println!(
        "{}x{} product with {} non-zeros saved to {}",
        product.rows(),
        product.cols(),
        product.nnz(),
        product_path.display()
    );
    Ok(())
}
