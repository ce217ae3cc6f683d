// Shared build script helper that turns a crate README into its rustdoc front page.
// Include this in build.rs files with: include!("../build_common.rs");
//
// Required imports in the including file:
//   use std::env;
//   use std::fs;
//   use std::path::Path;

/// Render `README.md` into `$OUT_DIR/README_GENERATED.md` for `#![doc = include_str!(..)]`.
///
/// Links written for GitHub are rewritten for rustdoc:
/// 1. `](src/` prefixes are dropped so module links resolve
/// 2. `.rs)` suffixes are dropped so links target modules, not files
/// 3. `](../../README.md` becomes the workspace repository URL
///
/// A crate without a README gets its package description instead, so the
/// `include_str!` in `lib.rs` always has a file to read.
fn render_readme_docs(crate_dir: &str) {
    println!("cargo:rerun-if-changed=README.md");
    println!("cargo:rerun-if-changed=../../Cargo.toml");

    let readme_path = Path::new(crate_dir).join("README.md");
    let rendered = match fs::read_to_string(&readme_path) {
        Ok(content) => {
            let mut doc = content.replace("](src/", "](").replace(".rs)", ")");
            if let Some(url) = workspace_repository_url(crate_dir) {
                doc = doc.replace("](../../README.md", &format!("]({url}"));
            }
            doc
        }
        Err(_) => env::var("CARGO_PKG_DESCRIPTION").unwrap_or_default(),
    };

    let out_dir = env::var("OUT_DIR").unwrap();
    fs::write(Path::new(&out_dir).join("README_GENERATED.md"), rendered).unwrap();
}

/// Read `repository = "..."` from the workspace manifest two levels up.
fn workspace_repository_url(crate_dir: &str) -> Option<String> {
    let manifest = Path::new(crate_dir).parent()?.parent()?.join("Cargo.toml");
    let content = fs::read_to_string(manifest).ok()?;

    content.lines().map(str::trim).find_map(|line| {
        if !line.starts_with("repository") || !line.contains('=') {
            return None;
        }
        let start = line.find('"')?;
        let end = line.rfind('"')?;
        (start < end).then(|| line[start + 1..end].to_string())
    })
}
