use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{PlaygroundError, Result};
use crate::problem::DataPoint;

pub const EXPORT_FILENAME: &str = "linear-regression-data.csv";

#[derive(Debug, Serialize)]
struct Row {
    x: String,
    y: String,
}

impl From<&DataPoint> for Row {
    fn from(p: &DataPoint) -> Self {
        Row {
            x: fixed4(p.x),
            y: fixed4(p.y),
        }
    }
}

/// Four-decimal text for `value`, rounding exact halves away from zero.
///
/// A minus sign is written only for values strictly below zero, so `-0.0`
/// reads `0.0000` while `-0.00001` reads `-0.0000`.
fn fixed4(value: f64) -> String {
    let magnitude = value.abs();

    let digits = if is_half_tie(magnitude) {
        let exact = format!("{magnitude:.5}");
        round_up_last_digit(&exact[..exact.len() - 1])
    } else {
        format!("{magnitude:.4}")
    };

    if value < 0. {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Whether `magnitude` sits exactly halfway between two 4-decimal values.
///
/// Such a value is `k / 10^4 + 5 / 10^5`, which is only representable when it
/// is a multiple of `1 / 32`; then five decimals print it exactly.
fn is_half_tie(magnitude: f64) -> bool {
    (magnitude * 32.).fract() == 0. && format!("{magnitude:.5}").ends_with('5')
}

fn round_up_last_digit(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();

    for b in bytes.iter_mut().rev() {
        match *b {
            b'.' => continue,
            b'9' => *b = b'0',
            _ => {
                *b += 1;
                return String::from_utf8_lossy(&bytes).into_owned();
            }
        }
    }

    format!("1{}", String::from_utf8_lossy(&bytes))
}

/// Renders the dataset as `x,y` CSV with four decimals per value.
///
/// # Errors
/// [`PlaygroundError::NoData`] for an empty dataset; nothing is produced then.
pub fn serialize(dataset: &[DataPoint]) -> Result<String> {
    if dataset.is_empty() {
        return Err(PlaygroundError::NoData);
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for point in dataset {
        writer.serialize(Row::from(point))?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;

    String::from_utf8(bytes)
        .map_err(|e| PlaygroundError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Receives finished files, the way a browser download would.
pub trait DownloadSink {
    fn save(&mut self, filename: &str, contents: &str) -> Result<PathBuf>;
}

/// Saves downloads into a directory on disk, creating it when missing.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn save(&mut self, filename: &str, contents: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;

        let path = self.dir.join(filename);
        fs::write(&path, contents)?;

        log::info!("wrote {} bytes to {}", contents.len(), path.display());

        Ok(path)
    }
}

/// Serializes the dataset and hands it to `sink` as [`EXPORT_FILENAME`].
pub fn export<S: DownloadSink + ?Sized>(dataset: &[DataPoint], sink: &mut S) -> Result<PathBuf> {
    let csv = serialize(dataset)?;
    sink.save(EXPORT_FILENAME, &csv)
}
