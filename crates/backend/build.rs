use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");
    println!("cargo:rerun-if-changed=../../data/sales_data_sample.csv");

    // OUT_DIR is typically target/<profile>/build/backend-xxx/out;
    // walk up to target/<profile> where the binary lands.
    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();
    let out_path = Path::new(&out_dir);
    let target_dir = out_path
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    let source_config = workspace_root.join("config.toml");
    let dest_config = target_dir.join("config.toml");

    // Put config.toml next to the binary so the runtime lookup finds it
    if source_config.exists() {
        fs::copy(&source_config, &dest_config)
            .unwrap_or_else(|e| panic!("Failed to copy config.toml: {}", e));
    } else {
        println!(
            "cargo:warning=config.toml not found at {:?}, using default config",
            source_config
        );
    }

    // The dataset ships with the repo; stage it next to the binary so the
    // exe-relative path in the default config resolves out of the box
    let source_data = workspace_root.join("data").join("sales_data_sample.csv");
    if source_data.exists() {
        let dest_data_dir = target_dir.join("data");
        fs::create_dir_all(&dest_data_dir)
            .unwrap_or_else(|e| panic!("Failed to create data directory: {}", e));
        fs::copy(&source_data, dest_data_dir.join("sales_data_sample.csv"))
            .unwrap_or_else(|e| panic!("Failed to copy sales_data_sample.csv: {}", e));
    } else {
        println!(
            "cargo:warning=dataset not found at {:?}, the server will fail to start without it",
            source_data
        );
    }
}
