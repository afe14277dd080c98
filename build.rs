fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Use the vendored protoc so builds don't depend on a system install.
    // An explicit PROTOC in the environment still wins.
    if std::env::var_os("PROTOC").is_none() {
        let protoc = protoc_bin_vendored::protoc_bin_path()
            .map_err(|e| format!("vendored protoc unavailable: {e:?}"))?;
        std::env::set_var("PROTOC", protoc);
    }

    println!("cargo:rerun-if-changed=proto/domunity.proto");

    // The JSON routes reuse the wire messages, so they also speak serde.
    // Absent JSON fields fall back to the proto3 defaults.
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .type_attribute(".domunity", "#[derive(serde::Serialize, serde::Deserialize)]")
        .type_attribute(".domunity", "#[serde(default)]")
        .compile_protos(&["proto/domunity.proto"], &["proto"])?;

    Ok(())
}
