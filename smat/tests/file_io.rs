//! File round-trip and error-path tests against real files on disk.

use std::fs;
use std::path::Path;

use smat::{EntryOrder, ErrorCategory, MatrixError, MatrixFile, Operation, SparseMatrix};

fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn same_everywhere(a: &SparseMatrix, b: &SparseMatrix) -> bool {
    a.dimensions() == b.dimensions()
        && (0..a.rows()).all(|r| (0..a.cols()).all(|c| a.get(r, c) == b.get(r, c)))
}

#[test]
fn test_end_to_end_add_and_multiply() {
    let dir = tempfile::tempdir().unwrap();
    let a_path = write_file(
        dir.path(),
        "a.txt",
        "rows=2\ncols=2\n(0, 0, 1)\n(0, 1, 2)\n(1, 0, 0)\n(1, 1, 3)\n",
    );
    let b_path = write_file(dir.path(), "b.txt", "rows=2\ncols=2\n(0, 0, 4)\n(1, 1, 5)\n");

    let a: SparseMatrix = MatrixFile::read(&a_path).unwrap();
    let b: SparseMatrix = MatrixFile::read(&b_path).unwrap();
    assert_eq!(a.nnz(), 3, "zero entry is normalized away on load");

    let sum = Operation::Add.apply(&a, &b).unwrap();
    assert_eq!(sum, SparseMatrix::from_triplets(2, 2, [(0, 0, 5), (0, 1, 2), (1, 1, 8)]));

    let product = Operation::Multiply.apply(&a, &b).unwrap();
    assert_eq!(
        product,
        SparseMatrix::from_triplets(2, 2, [(0, 0, 4), (0, 1, 10), (1, 1, 15)])
    );
}

#[test]
fn test_round_trip_both_orders() {
    let dir = tempfile::tempdir().unwrap();
    let m = SparseMatrix::from_triplets(
        6,
        4,
        [(5, 3, -12), (0, 0, 7), (2, 1, 1), (2, 2, i32::MIN), (4, 0, i32::MAX)],
    );

    for (name, order) in [("sorted.txt", EntryOrder::RowMajor), ("map.txt", EntryOrder::Storage)] {
        let path = dir.path().join(name);
        MatrixFile::write(&path, &m, order).unwrap();
        let loaded: SparseMatrix = MatrixFile::read(&path).unwrap();
        assert!(same_everywhere(&m, &loaded));
        assert_eq!(loaded, m);
    }
}

#[test]
fn test_written_file_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let mut m = SparseMatrix::from_triplets(3, 3, [(2, 0, 9), (0, 1, -1), (1, 1, 4)]);
    m.set(1, 1, 0);

    MatrixFile::write(&path, &m, EntryOrder::RowMajor).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "rows=3\ncols=3\n(0, 1, -1)\n(2, 0, 9)\n"
    );
}

#[test]
fn test_write_replaces_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let stale = "stale contents that are much longer\n".repeat(10);
    let path = write_file(dir.path(), "out.txt", &stale);
    let m = SparseMatrix::<i32>::with_dimensions(1, 1);
    MatrixFile::write(&path, &m, EntryOrder::RowMajor).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "rows=1\ncols=1\n");
}

#[test]
fn test_missing_third_token_is_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "bad.txt", "rows=2\ncols=2\n(1,1)\n");
    let err = MatrixFile::read::<i32, _>(&path).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Format);
    assert_eq!(err.matrix_error(), Some(MatrixError::Format { line: 3 }));
}

#[test]
fn test_missing_header_is_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let empty = write_file(dir.path(), "empty.txt", "");
    let no_cols = write_file(dir.path(), "no_cols.txt", "rows=3\n(0, 0, 1)\n");

    for path in [empty, no_cols] {
        let err = MatrixFile::read::<i32, _>(&path).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Format, "{}", path.display());
    }
}

#[test]
fn test_non_integer_token_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "bad.txt", "rows=2\ncols=2\n(0, 1, 2.5)\n");
    let err = MatrixFile::read::<i32, _>(&path).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Parse);
}

#[test]
fn test_unreadable_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MatrixFile::read::<i32, _>(dir.path().join("nope.txt")).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Io);

    // A directory cannot be opened for writing as a file
    let m = SparseMatrix::<i32>::with_dimensions(1, 1);
    let err = MatrixFile::write(dir.path(), &m, EntryOrder::RowMajor).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Io);
}

#[test]
fn test_wider_element_type() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "wide.txt",
        "rows=1\ncols=1\n(0, 0, 9000000000)\n",
    );
    let wide: SparseMatrix<i64> = MatrixFile::read(&path).unwrap();
    assert_eq!(wide.get(0, 0), 9_000_000_000);

    let err = MatrixFile::read::<i32, _>(&path).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Parse);
}

#[cfg(feature = "serde")]
#[test]
fn test_json_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("m.json");
    let m = SparseMatrix::from_triplets(3, 2, [(2, 1, 6), (0, 0, -3)]);

    MatrixFile::write_json(&path, &m).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["rows"], 3);
    assert_eq!(json["entries"][0]["value"], -3);

    let loaded: SparseMatrix = MatrixFile::read_json(&path).unwrap();
    assert_eq!(loaded, m);
}
