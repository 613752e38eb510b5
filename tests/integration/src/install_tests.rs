//! End-to-end install flows across source forms and manifest formats.

use std::io::Write;
use std::path::{Path, PathBuf};

use addon_install::install;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn legacy_manifest(id: &str, name: &str, version: &str, unpack: Option<&str>) -> String {
    let unpack_field = unpack
        .map(|value| format!("<em:unpack>{value}</em:unpack>"))
        .unwrap_or_default();
    format!(
        r#"<?xml version="1.0"?>
<RDF xmlns="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
     xmlns:em="http://www.mozilla.org/2004/em-rdf#">
  <Description about="urn:mozilla:install-manifest">
    <em:id>{id}</em:id>
    <em:name>{name}</em:name>
    <em:version>{version}</em:version>
    {unpack_field}
  </Description>
</RDF>"#
    )
}

fn modern_manifest(id: &str) -> String {
    format!(r#"{{"name": "WebExt", "version": "1.0", "applications": {{"gecko": {{"id": "{id}"}}}}}}"#)
}

fn create_xpi(dir: &Path, name: &str, entries: &[(&str, &[u8])]) -> PathBuf {
    let path = dir.join(name);
    let file = std::fs::File::create(&path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options =
        zip::write::SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for (entry_name, content) in entries {
        writer.start_file(entry_name.to_string(), options).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap();
    path
}

#[tokio::test]
async fn packed_archive_installs_as_single_xpi_file() {
    let tmp = TempDir::new().unwrap();
    let manifest = legacy_manifest("packed@example.com", "Packed", "1.0", None);
    let xpi = create_xpi(
        tmp.path(),
        "source.xpi",
        &[
            ("install.rdf", manifest.as_bytes()),
            ("chrome/content/main.js", b"main();"),
        ],
    );
    let dest = tmp.path().join("extensions");

    let id = install(&xpi, &dest).await.unwrap();
    assert_eq!(id, "packed@example.com");

    // Exactly one file, byte-identical to the source archive.
    let entries: Vec<_> = std::fs::read_dir(&dest).unwrap().collect();
    assert_eq!(entries.len(), 1);
    let installed = dest.join("packed@example.com.xpi");
    assert_eq!(
        std::fs::read(&installed).unwrap(),
        std::fs::read(&xpi).unwrap()
    );
}

#[tokio::test]
async fn unpack_flag_expands_archive_into_directory() {
    let tmp = TempDir::new().unwrap();
    let manifest = legacy_manifest("unpacked@example.com", "Unpacked", "2.0", Some("true"));
    let xpi = create_xpi(
        tmp.path(),
        "source.xpi",
        &[
            ("install.rdf", manifest.as_bytes()),
            ("chrome/content/main.js", b"main();"),
        ],
    );
    let dest = tmp.path().join("extensions");

    let id = install(&xpi, &dest).await.unwrap();
    assert_eq!(id, "unpacked@example.com");

    let stem = dest.join("unpacked@example.com");
    assert!(stem.is_dir());
    assert_eq!(
        std::fs::read_to_string(stem.join("install.rdf")).unwrap(),
        manifest
    );
    assert_eq!(
        std::fs::read(stem.join("chrome/content/main.js")).unwrap(),
        b"main();"
    );
}

#[tokio::test]
async fn uppercase_unpack_value_also_expands() {
    let tmp = TempDir::new().unwrap();
    let manifest = legacy_manifest("shout@example.com", "Shout", "1.0", Some("TRUE"));
    let xpi = create_xpi(tmp.path(), "source.xpi", &[("install.rdf", manifest.as_bytes())]);
    let dest = tmp.path().join("extensions");

    install(&xpi, &dest).await.unwrap();
    assert!(dest.join("shout@example.com").is_dir());
}

#[tokio::test]
async fn directory_source_is_copied_recursively() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("source");
    std::fs::create_dir_all(source.join("chrome/content")).unwrap();
    std::fs::write(
        source.join("install.rdf"),
        legacy_manifest("dir@example.com", "Dir Add-on", "3.1", None),
    )
    .unwrap();
    std::fs::write(source.join("chrome/content/main.js"), b"main();").unwrap();
    let dest = tmp.path().join("extensions");

    let id = install(&source, &dest).await.unwrap();
    assert_eq!(id, "dir@example.com");

    let stem = dest.join("dir@example.com");
    assert!(stem.join("install.rdf").is_file());
    assert_eq!(
        std::fs::read(stem.join("chrome/content/main.js")).unwrap(),
        b"main();"
    );
}

#[tokio::test]
async fn directory_with_modern_manifest_installs_under_gecko_id() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("source");
    std::fs::create_dir_all(&source).unwrap();
    std::fs::write(source.join("manifest.json"), modern_manifest("webext@example.com")).unwrap();
    std::fs::write(source.join("background.js"), b"// bg").unwrap();
    let dest = tmp.path().join("extensions");

    let id = install(&source, &dest).await.unwrap();
    assert_eq!(id, "webext@example.com");
    assert!(dest.join("webext@example.com/background.js").is_file());
}

#[tokio::test]
async fn modern_archive_installs_packed() {
    // WebExtension manifests never request unpacking.
    let tmp = TempDir::new().unwrap();
    let manifest = modern_manifest("modern@example.com");
    let xpi = create_xpi(tmp.path(), "source.xpi", &[("manifest.json", manifest.as_bytes())]);
    let dest = tmp.path().join("extensions");

    let id = install(&xpi, &dest).await.unwrap();
    assert_eq!(id, "modern@example.com");
    assert!(dest.join("modern@example.com.xpi").is_file());
    assert!(!dest.join("modern@example.com").exists());
}

#[tokio::test]
async fn install_fails_without_any_manifest() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("source");
    std::fs::create_dir_all(&source).unwrap();
    let dest = tmp.path().join("extensions");

    let err = install(&source, &dest).await.unwrap_err();
    assert!(
        matches!(err, addon_install::Error::MissingManifest { .. }),
        "got: {err:?}"
    );
    assert!(!dest.exists());
}

#[tokio::test]
async fn install_fails_on_manifest_without_id() {
    let tmp = TempDir::new().unwrap();
    let xpi = create_xpi(
        tmp.path(),
        "source.xpi",
        &[("manifest.json", br#"{"name": "anonymous"}"# as &[u8])],
    );
    let dest = tmp.path().join("extensions");

    let err = install(&xpi, &dest).await.unwrap_err();
    assert!(
        matches!(err, addon_install::Error::MalformedManifest { .. }),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn parallel_installs_to_distinct_stems() {
    let tmp = TempDir::new().unwrap();
    let first = create_xpi(
        tmp.path(),
        "first.xpi",
        &[(
            "install.rdf",
            legacy_manifest("first@example.com", "First", "1.0", None).as_bytes(),
        )],
    );
    let second = create_xpi(
        tmp.path(),
        "second.xpi",
        &[(
            "install.rdf",
            legacy_manifest("second@example.com", "Second", "1.0", None).as_bytes(),
        )],
    );
    let dest = tmp.path().join("extensions");

    let (a, b) = tokio::join!(install(&first, &dest), install(&second, &dest));
    assert_eq!(a.unwrap(), "first@example.com");
    assert_eq!(b.unwrap(), "second@example.com");
    assert!(dest.join("first@example.com.xpi").is_file());
    assert!(dest.join("second@example.com.xpi").is_file());
}

#[tokio::test]
async fn legacy_round_trip_preserves_fields() {
    let manifest = legacy_manifest("rt@example.com", "Round Trip", "4.5.6", Some("false"));
    let descriptor = addon_manifest::parse_legacy_manifest(&manifest).unwrap();
    assert_eq!(descriptor.id, "rt@example.com");
    assert_eq!(descriptor.name, "Round Trip");
    assert_eq!(descriptor.version, "4.5.6");
    assert!(!descriptor.unpack);
}
