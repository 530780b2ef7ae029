use std::io::Write;
use tempfile::NamedTempFile;

/// Stock file matching the canonical test catalog.
pub fn stock_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "name,price,count").unwrap();
    writeln!(file, "Orange juice,150,100").unwrap();
    writeln!(file, "Water,100,20").unwrap();
    writeln!(file, "Cola,200,50").unwrap();
    writeln!(file, "Apple Juice,150,0").unwrap();
    file
}

/// Float file matching the canonical well-stocked float.
pub fn float_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "denomination,count").unwrap();
    for (denomination, count) in [
        (1, 1000),
        (2, 867),
        (5, 400),
        (10, 566),
        (20, 1000),
        (50, 500),
        (100, 1220),
        (200, 160),
    ] {
        writeln!(file, "{denomination},{count}").unwrap();
    }
    file
}

/// Ops file from raw `op,value` rows.
pub fn ops_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "op,value").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file
}
