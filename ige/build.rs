fn main() {
    if !cfg!(test) {
        // Generate C header for the raw interface
        let crate_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
        cbindgen::Builder::new()
            .with_crate(crate_dir)
            .with_language(cbindgen::Language::C)
            .with_include_guard("AES_IGE_H")
            .generate()
            .expect("Unable to generate bindings")
            .write_to_file("target/aes_ige.h");
    }
}
