use liveops_blueprint::{
    export, BlueprintError, DirAssetSource, DirFileSink, EventDescriptor, ExportOptions,
};
use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: blueprint-gen <descriptor.yaml> [--inline <assets-dir>] [--out <dir>]");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  blueprint-gen neon-nights.yaml");
        eprintln!("  blueprint-gen neon-nights.yaml --inline assets --out dist");
        process::exit(1);
    }

    let mut descriptor_path: Option<String> = None;
    let mut assets_dir: Option<String> = None;
    let mut out_dir = ".".to_string();

    let mut iter = args[1..].iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--inline" => match iter.next() {
                Some(dir) => assets_dir = Some(dir.clone()),
                None => {
                    eprintln!("✗ --inline requires an assets directory");
                    process::exit(1);
                }
            },
            "--out" => match iter.next() {
                Some(dir) => out_dir = dir.clone(),
                None => {
                    eprintln!("✗ --out requires a directory");
                    process::exit(1);
                }
            },
            other => {
                if descriptor_path.is_some() {
                    eprintln!("✗ Unexpected argument: {}", other);
                    process::exit(1);
                }
                descriptor_path = Some(other.to_string());
            }
        }
    }

    let Some(descriptor_path) = descriptor_path else {
        eprintln!("✗ No descriptor file given");
        process::exit(1);
    };

    match run(&descriptor_path, assets_dir.as_deref(), &out_dir) {
        Ok(filename) => {
            println!("✓ wrote {}", filename);
        }
        Err(e) => {
            eprintln!("✗ {} failed:", descriptor_path);
            print_error(&e);
            process::exit(1);
        }
    }
}

fn run(
    descriptor_path: &str,
    assets_dir: Option<&str>,
    out_dir: &str,
) -> Result<String, BlueprintError> {
    let yaml = fs::read_to_string(descriptor_path)
        .map_err(|e| BlueprintError::DescriptorParse(format!("Failed to read file: {}", e)))?;
    let descriptor = EventDescriptor::from_yaml(&yaml)?;

    let options = ExportOptions {
        with_inlined_assets: assets_dir.is_some(),
    };
    // The asset source is only consulted when inlining is requested.
    let assets = DirAssetSource::new(assets_dir.unwrap_or("."));
    let mut sink = DirFileSink::new(out_dir);

    export(&descriptor, &options, &assets, &mut sink)
}

fn print_error(error: &BlueprintError) {
    match error {
        BlueprintError::MissingEventName => {
            eprintln!("  Missing event name:");
            eprintln!("    Set 'eventName' in the descriptor before exporting");
        }
        BlueprintError::AssetFetch { path, reason } => {
            eprintln!("  Failed to fetch asset '{}':", path);
            eprintln!("    {}", reason);
        }
        BlueprintError::SaveFailed { filename, reason } => {
            eprintln!("  Failed to save '{}':", filename);
            eprintln!("    {}", reason);
        }
        BlueprintError::DescriptorParse(msg) => {
            eprintln!("  Descriptor error:");
            eprintln!("    {}", msg);
        }
    }
}
