//! Error types shared by pixel targets and animations

use core::fmt;

/// Construction parameter that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    /// Step interval must be finite and positive
    Speed,
    /// Breath period must be finite and positive
    Period,
    /// Hold time at peak must be finite and not negative
    Breath,
    /// Minimum intensity is above the maximum
    IntensityRange,
    /// Stride of a pixel view must be non-zero
    Step,
}

/// Errors produced while building animations and pixel views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A construction parameter is out of its valid domain
    InvalidParameter(Parameter),
    /// Logical pixel index outside of `[0, len)`
    IndexOutOfRange { index: usize, len: usize },
    /// Requested sub-range does not fit into the parent view
    InvalidRange {
        start: usize,
        len: usize,
        parent_len: usize,
    },
    /// Animation group has no free slots left
    GroupFull { capacity: usize },
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Speed => "speed must be a positive number of seconds",
            Self::Period => "period must be a positive number of seconds",
            Self::Breath => "breath must not be negative",
            Self::IntensityRange => "min intensity is greater than max intensity",
            Self::Step => "step must be greater than zero",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(parameter) => write!(f, "invalid parameter: {parameter}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "pixel index {index} is out of range 0..{len}")
            }
            Self::InvalidRange {
                start,
                len,
                parent_len,
            } => write!(
                f,
                "range {start}..{} exceeds parent length {parent_len}",
                start.saturating_add(*len)
            ),
            Self::GroupFull { capacity } => {
                write!(f, "animation group is full ({capacity} slots)")
            }
        }
    }
}

impl core::error::Error for Error {}

impl From<Parameter> for Error {
    fn from(parameter: Parameter) -> Self {
        Self::InvalidParameter(parameter)
    }
}
