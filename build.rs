/*!
# `HTMLProps`: Build
*/

use argyle::KeyWordsBuilder;
use std::path::PathBuf;



/// # Build.
///
/// We might as well pre-compile the CLI keywords we're looking for.
pub fn main() {
	println!("cargo:rerun-if-env-changed=CARGO_PKG_VERSION");

	let mut builder = KeyWordsBuilder::default();
	builder.push_keys([
		"-a", "--attributes",
		"-d", "--deprecated",
		"-h", "--help",
		"-t", "--tags",
		"-V", "--version",
	]);

	builder.save(out_path("argyle.rs"));
}

/// # Out Path.
fn out_path(name: &str) -> PathBuf {
	let dir = std::env::var("OUT_DIR").expect("Missing OUT_DIR.");
	std::fs::canonicalize(dir).expect("Missing OUT_DIR.").join(name)
}
