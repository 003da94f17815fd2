fn main() {
    // Generate the scaffold for integration tests
    // The generated Java is only read by tests (via include_str!), so it won't
    // affect normal library compilation
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let config = scaffold_codegen::ScaffoldConfig::from_file("scaffold.toml".as_ref())
        .expect("invalid scaffold.toml");

    for (class_name, package) in [("UserAccount", "accounts"), ("Order", "orders")] {
        scaffold_codegen::ScaffoldBuilder::new("core", class_name, package)
            .config(config.clone())
            .output_dir(&out_dir)
            .generate()
            .expect("scaffold generation failed");
    }

    println!("cargo:rerun-if-changed=scaffold.toml");
}
