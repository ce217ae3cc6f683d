use std::env;
use std::fs;
use std::path::Path;

include!("../build_common.rs");

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    render_readme_docs(&manifest_dir);
}
