use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Number of term-transition reciprocals, one less than the fixed term count
const RECIPROCAL_COUNT: usize = 5;

fn compute_reciprocal_table() -> [f64; RECIPROCAL_COUNT] {
    (1..=RECIPROCAL_COUNT)
        .map(|m| 1.0 / ((2 * m) as f64 * (2 * m + 1) as f64))
        .collect::<Vec<f64>>()
        .try_into()
        .unwrap()
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("taylor_tables.rs");
    let mut f = File::create(dest_path).unwrap();

    let reciprocal_table = compute_reciprocal_table();
    writeln!(&mut f, "const RECIPROCAL_TABLE: [f64; {}] = {:?};", reciprocal_table.len(), reciprocal_table).unwrap();
}
