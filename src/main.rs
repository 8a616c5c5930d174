use std::{
    env,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Result, anyhow};
use clap::Parser;
use mi_sphere_pose::{
    PoseExtractor,
    metadata::SourceKind,
    output::{OutputFormat, format_pose, write_sidecar},
    parameters::{self, PoseConfig},
};

/// Display yaw, pitch, roll angles in degrees, extracted from EXIF
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(value_name = "IMAGE")]
    image: PathBuf,

    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Write pose to sidecar file. Provide image name to write sidecar with angles from IMAGE
    #[arg(long, value_name = "PATH")]
    sidecar: Option<Option<PathBuf>>,

    /// Where to read the rotation matrix from
    #[arg(long, value_enum)]
    source: Option<SourceKind>,

    /// TOML parameter file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Default log level to "warn", stdout carries the pose
    if env::var("RUST_LOG").is_err() {
        unsafe { env::set_var("RUST_LOG", "warn") }
    }

    pretty_env_logger::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => parameters::load(path)?,
        None => PoseConfig::default(),
    };
    if let Some(source) = args.source {
        config.source = source;
    }

    let extractor = PoseExtractor::from_config(&config);
    let pose = extractor.angles_degrees(&args.image)?.ok_or_else(|| {
        anyhow!(
            "Mi Sphere rotation matrix not found in file {}",
            args.image.display()
        )
    })?;

    let rendered = format_pose(&pose, args.format.unwrap_or_default())?;
    io::stdout().write_all(rendered.as_bytes())?;

    if let Some(sidecar) = args.sidecar {
        let target = sidecar.unwrap_or(args.image);
        write_sidecar(&target, &pose)?;
    }

    Ok(())
}
