use std::ffi::OsStr;
use std::fmt;

use thiserror::Error;

#[cfg(test)]
#[path = "sample_key_test.rs"]
mod sample_key_test;

/// Separator between the complexity and the scale in a sample directory name. Criterion writes a
/// `BenchmarkId` parameter of the form `<complexity>::<scale>` as `<complexity>__<scale>`.
pub const SAMPLE_KEY_DELIMITER: &str = "__";

/// The `(complexity, scale)` pair encoded in a sample directory name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SampleKey {
    pub complexity: u64,
    pub scale: u64,
}

impl fmt::Display for SampleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SAMPLE_KEY_DELIMITER}{}", self.complexity, self.scale)
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SampleKeyError {
    #[error("expected exactly two components around '__', found {0}")]
    ComponentCount(usize),
    #[error("'{0}' is not a decimal integer")]
    NotAnInteger(String),
    #[error("'{0}' is not valid UTF-8")]
    NotUtf8(String),
}

/// Decodes a sample directory name.
///
/// Returns `Ok(None)` if the name doesn't contain the delimiter, i.e. the directory isn't a data
/// point (criterion's `report` directory, for example).
pub fn parse_sample_key(name: &str) -> Result<Option<SampleKey>, SampleKeyError> {
    if !name.contains(SAMPLE_KEY_DELIMITER) {
        return Ok(None);
    }

    let components: Vec<&str> = name.split(SAMPLE_KEY_DELIMITER).collect();
    let [complexity, scale] = components.as_slice() else {
        return Err(SampleKeyError::ComponentCount(components.len()));
    };

    Ok(Some(SampleKey { complexity: parse_decimal(complexity)?, scale: parse_decimal(scale)? }))
}

// `u64::from_str` accepts a leading '+', which isn't part of the naming scheme.
fn parse_decimal(component: &str) -> Result<u64, SampleKeyError> {
    if component.is_empty() || !component.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(SampleKeyError::NotAnInteger(component.to_string()));
    }
    component.parse().map_err(|_| SampleKeyError::NotAnInteger(component.to_string()))
}

/// Decodes a sample directory name as read from the file system. A name that isn't valid UTF-8
/// but still contains the delimiter is malformed, not skipped.
pub fn parse_sample_dir_name(name: &OsStr) -> Result<Option<SampleKey>, SampleKeyError> {
    if let Some(name) = name.to_str() {
        return parse_sample_key(name);
    }
    let lossy = name.to_string_lossy();
    if lossy.contains(SAMPLE_KEY_DELIMITER) {
        return Err(SampleKeyError::NotUtf8(lossy.into_owned()));
    }
    Ok(None)
}
