use std::env;

fn main() {
    let version =
        env::var("LABELFLOW_VERSION").unwrap_or_else(|_| env::var("CARGO_PKG_VERSION").unwrap());
    println!("cargo:rerun-if-env-changed=LABELFLOW_VERSION");
    println!("cargo:rustc-env=LABELFLOW_VERSION={version}");
}
