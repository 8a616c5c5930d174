use std::io;

use clap::ValueEnum;
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

use crate::pose::{Degrees, Pose};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One labeled line per angle
    #[default]
    #[value(skip)]
    Text,
    /// Comma separated, two decimals
    Short,
    /// JSON object with full precision
    Json,
}

/// Compact JSON with a space after `:` and `,`
#[derive(Debug, Default)]
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
    ) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

/// Serializes `value` as `{"key": value, ...}`
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, SpacedFormatter);
    value.serialize(&mut ser)?;

    // serde_json only ever writes UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Two decimals, with non-finite values spelled `nan`, `inf` and `-inf`
fn fixed(v: f64) -> String {
    if v.is_nan() {
        "nan".to_string()
    } else {
        format!("{v:.2}")
    }
}

/// Renders the pose, newline terminated.
///
/// Non-finite angles come from a corrupt matrix. JSON has no representation
/// for them, so they serialize as `null`.
pub fn format_pose(pose: &Pose<Degrees>, format: OutputFormat) -> serde_json::Result<String> {
    let (yaw, pitch, roll) = (fixed(pose.yaw()), fixed(pose.pitch()), fixed(pose.roll()));

    Ok(match format {
        OutputFormat::Text => format!("Yaw: {yaw}\nPitch: {pitch}\nRoll: {roll}\n"),
        OutputFormat::Short => format!("{yaw},{pitch},{roll}\n"),
        OutputFormat::Json => format!("{}\n", to_json_string(pose)?),
    })
}
