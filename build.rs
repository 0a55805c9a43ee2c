//! Bundles `assets/css/main.css` and its imports into `assets/dist/bundle.css`

use std::fs;
use std::path::Path;

use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
    targets::{Browsers, Targets},
};

const ENTRY: &str = "assets/css/main.css";
const OUTPUT_DIR: &str = "assets/dist";
const OUTPUT: &str = "assets/dist/bundle.css";

/// Oldest browsers we lower logical properties and nesting for
fn targets() -> Targets {
    Targets::from(Browsers {
        chrome: Some(90 << 16),
        firefox: Some(88 << 16),
        safari: Some(14 << 16),
        ..Browsers::default()
    })
}

fn bundle() -> Result<String, String> {
    let provider = FileProvider::new();
    let mut bundler = Bundler::new(&provider, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(Path::new(ENTRY))
        .map_err(|e| format!("bundle {}: {}", ENTRY, e))?;

    stylesheet
        .minify(MinifyOptions { targets: targets(), ..Default::default() })
        .map_err(|e| format!("minify: {}", e))?;

    let css = stylesheet
        .to_css(PrinterOptions { minify: true, targets: targets(), ..Default::default() })
        .map_err(|e| format!("print: {}", e))?;

    Ok(css.code)
}

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");
    println!("cargo:rerun-if-changed=messages/");
    println!("cargo:rerun-if-changed=content/");

    fs::create_dir_all(OUTPUT_DIR).expect("Failed to create assets/dist directory");

    match bundle() {
        Ok(css) => fs::write(OUTPUT, css).expect("Failed to write bundle.css"),
        Err(e) => panic!("CSS bundling failed: {}", e),
    }
}
