//! The download trigger: generates the blueprint, optionally inlines the
//! two static assets, and hands the result to a file sink as
//! `event-<slug>.html`.
//!
//! Asset acquisition and file saving are injected collaborators so the
//! pipeline runs (and tests) without a browser or network.

use std::fs;
use std::path::PathBuf;

use crate::blueprint::{self, RUNTIME_TAG, STYLESHEET_TAG};
use crate::descriptor::EventDescriptor;
use crate::error::{BlueprintError, BlueprintResult};
use crate::text::slugify;

/// Stylesheet asset fetched for the inlined export path.
pub const STYLESHEET_ASSET: &str = "styles.css";

/// Standalone runtime script (tabs + mobile nav) fetched for the inlined
/// export path.
pub const RUNTIME_ASSET: &str = "blueprint_runtime.js";

/// Acquisition of static asset text, injected and mockable.
pub trait AssetSource {
    fn fetch(&self, path: &str) -> BlueprintResult<String>;
}

/// The host save mechanism: accepts final bytes and a suggested filename.
pub trait FileSink {
    fn save(&mut self, filename: &str, contents: &[u8]) -> BlueprintResult<()>;
}

/// Reads assets from a directory on disk.
pub struct DirAssetSource {
    root: PathBuf,
}

impl DirAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirAssetSource {
    fn fetch(&self, path: &str) -> BlueprintResult<String> {
        fs::read_to_string(self.root.join(path)).map_err(|e| BlueprintError::AssetFetch {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Writes exported files into a directory on disk.
pub struct DirFileSink {
    root: PathBuf,
}

impl DirFileSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileSink for DirFileSink {
    fn save(&mut self, filename: &str, contents: &[u8]) -> BlueprintResult<()> {
        fs::write(self.root.join(filename), contents).map_err(|e| BlueprintError::SaveFailed {
            filename: filename.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Which download strategy to use. Both the plain and the self-contained
/// (inlined) variants of the page exist; the caller picks one explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub with_inlined_assets: bool,
}

impl ExportOptions {
    pub fn inlined() -> Self {
        Self {
            with_inlined_assets: true,
        }
    }
}

/// Replace the external stylesheet/script references with inline
/// equivalents so the document is self-contained. Pure substitution;
/// acquisition happens before this step.
pub fn inline_assets(html: &str, css: &str, js: &str) -> String {
    html.replace(STYLESHEET_TAG, &format!("<style>{}</style>", css))
        .replace(RUNTIME_TAG, &format!("<script>{}</script>", js))
}

/// The export filename for a named descriptor, `event-<slug>.html`.
pub fn export_filename(descriptor: &EventDescriptor) -> String {
    format!("event-{}.html", slugify(&descriptor.event_name))
}

/// Generate and save the blueprint. Returns the filename written.
///
/// Refuses a descriptor with no event name; nothing is saved in that
/// case. When inlining is requested, both assets are fetched before any
/// substitution, and a fetch failure aborts the export so a partially
/// inlined file is never produced.
pub fn export(
    descriptor: &EventDescriptor,
    options: &ExportOptions,
    assets: &impl AssetSource,
    sink: &mut impl FileSink,
) -> BlueprintResult<String> {
    if !descriptor.has_name() {
        return Err(BlueprintError::MissingEventName);
    }

    let mut html = blueprint::generate(descriptor);

    if options.with_inlined_assets {
        let css = assets.fetch(STYLESHEET_ASSET)?;
        let js = assets.fetch(RUNTIME_ASSET)?;
        html = inline_assets(&html, &css, &js);
    }

    let filename = export_filename(descriptor);
    sink.save(&filename, html.as_bytes())?;
    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticAssets;
    impl AssetSource for StaticAssets {
        fn fetch(&self, path: &str) -> BlueprintResult<String> {
            match path {
                STYLESHEET_ASSET => Ok("body { color: red; }".to_string()),
                RUNTIME_ASSET => Ok("console.log('tabs');".to_string()),
                _ => Err(BlueprintError::AssetFetch {
                    path: path.to_string(),
                    reason: "unknown asset".to_string(),
                }),
            }
        }
    }

    struct FailingAssets;
    impl AssetSource for FailingAssets {
        fn fetch(&self, path: &str) -> BlueprintResult<String> {
            Err(BlueprintError::AssetFetch {
                path: path.to_string(),
                reason: "offline".to_string(),
            })
        }
    }

    #[derive(Default)]
    struct MemorySink {
        saved: Vec<(String, Vec<u8>)>,
    }
    impl FileSink for MemorySink {
        fn save(&mut self, filename: &str, contents: &[u8]) -> BlueprintResult<()> {
            self.saved.push((filename.to_string(), contents.to_vec()));
            Ok(())
        }
    }

    fn named(name: &str) -> EventDescriptor {
        EventDescriptor {
            event_name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_export_requires_event_name() {
        let mut sink = MemorySink::default();
        let result = export(
            &EventDescriptor::default(),
            &ExportOptions::default(),
            &StaticAssets,
            &mut sink,
        );
        assert!(matches!(result, Err(BlueprintError::MissingEventName)));
        assert!(sink.saved.is_empty());
    }

    #[test]
    fn test_export_filename_from_slug() {
        let mut sink = MemorySink::default();
        let filename = export(
            &named("Neon Nights"),
            &ExportOptions::default(),
            &StaticAssets,
            &mut sink,
        )
        .unwrap();
        assert_eq!(filename, "event-neon-nights.html");
        assert_eq!(sink.saved.len(), 1);
        assert_eq!(sink.saved[0].0, "event-neon-nights.html");
    }

    #[test]
    fn test_plain_export_keeps_external_references() {
        let mut sink = MemorySink::default();
        export(
            &named("Neon Nights"),
            &ExportOptions::default(),
            &StaticAssets,
            &mut sink,
        )
        .unwrap();
        let html = String::from_utf8(sink.saved[0].1.clone()).unwrap();
        assert!(html.contains(STYLESHEET_TAG));
        assert!(html.contains(RUNTIME_TAG));
    }

    #[test]
    fn test_inlined_export_is_self_contained() {
        let mut sink = MemorySink::default();
        export(
            &named("Neon Nights"),
            &ExportOptions::inlined(),
            &StaticAssets,
            &mut sink,
        )
        .unwrap();
        let html = String::from_utf8(sink.saved[0].1.clone()).unwrap();
        assert!(html.contains("<style>body { color: red; }</style>"));
        assert!(html.contains("<script>console.log('tabs');</script>"));
        assert!(!html.contains(STYLESHEET_TAG));
        assert!(!html.contains(RUNTIME_TAG));
    }

    #[test]
    fn test_inlined_export_aborts_on_fetch_failure() {
        let mut sink = MemorySink::default();
        let result = export(
            &named("Neon Nights"),
            &ExportOptions::inlined(),
            &FailingAssets,
            &mut sink,
        );
        assert!(matches!(result, Err(BlueprintError::AssetFetch { .. })));
        assert!(sink.saved.is_empty());
    }

    #[test]
    fn test_inline_assets_substitution() {
        let html = format!("<head>{}</head><body>{}</body>", STYLESHEET_TAG, RUNTIME_TAG);
        let inlined = inline_assets(&html, ".a{}", "run()");
        assert_eq!(inlined, "<head><style>.a{}</style></head><body><script>run()</script></body>");
    }
}
