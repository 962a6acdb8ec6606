fn main() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "debug".to_string());

    // Release builds serve templates embedded in the binary; debug builds
    // reload them from disk.
    if profile == "release" {
        minijinja_embed::embed_templates!("templates");
    } else {
        println!("cargo:info=Build: Skipping template embedding for debug build.");
    }
    println!("cargo:rerun-if-changed=templates");
}
