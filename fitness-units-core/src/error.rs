//! Error types for conversion, arithmetic and decoding.

/// Result type for fallible unit operations.
pub type UnitsResult<T> = Result<T, UnitsError>;

/// Error type for every fallible operation in this crate.
///
/// Decode variants name the field or tag that caused the failure; arithmetic
/// variants name both operand units.
#[derive(Debug, thiserror::Error)]
pub enum UnitsError {
    #[error("invalid converter (coefficient {coefficient}, constant {constant}): {reason}")]
    InvalidConverter {
        coefficient: f64,
        constant: f64,
        reason: &'static str,
    },

    #[error("unit.symbol: '{symbol}' is not a known {family} unit")]
    UnknownSymbol { family: &'static str, symbol: String },

    #[error("unit.converter: missing for {family} unit '{symbol}'")]
    MissingConverter { family: &'static str, symbol: String },

    #[error("unit.converter: {family} unit '{symbol}' does not take a converter")]
    UnexpectedConverter { family: &'static str, symbol: String },

    #[error(
        "unit.converter: '{symbol}' expects coefficient {expected_coefficient} and constant \
         {expected_constant}, found {coefficient} and {constant}"
    )]
    ConverterMismatch {
        symbol: String,
        expected_coefficient: f64,
        expected_constant: f64,
        coefficient: f64,
        constant: f64,
    },

    #[error("cannot {operation} '{lhs}' and '{rhs}': units are not convertible")]
    IncompatibleUnits {
        operation: &'static str,
        lhs: String,
        rhs: String,
    },

    #[error("unit.type: unknown numeric tag '{tag}'")]
    UnknownNumericTag { tag: String },

    #[error("unit.type: tag '{tag}' is not {expected} type")]
    TagKindMismatch { tag: String, expected: &'static str },

    #[error("value: {value} does not fit in {target} (tag '{tag}')")]
    ValueOutOfRange {
        value: String,
        tag: String,
        target: &'static str,
    },

    #[error("color: {0}")]
    InvalidColor(String),

    #[error("zone: lower bound {lower} is above upper bound {upper}")]
    InvalidZone { lower: u8, upper: u8 },

    /// A field failed to decode; `path` is dotted, e.g. `unit.converter.coefficient`.
    #[error("{path}: {source}")]
    Decode {
        path: String,
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<serde_path_to_error::Error<serde_json::Error>> for UnitsError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let located = err
            .path()
            .iter()
            .any(|segment| !matches!(segment, serde_path_to_error::Segment::Unknown));
        let path = err.path().to_string();
        let source = err.into_inner();

        // errors raised after the fields are read already name their field
        if located {
            UnitsError::Decode { path, source }
        } else {
            UnitsError::Json(source)
        }
    }
}

impl UnitsError {
    pub(crate) fn incompatible(operation: &'static str, lhs: &str, rhs: &str) -> Self {
        UnitsError::IncompatibleUnits {
            operation,
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
        }
    }

    /// Whether this error came from decoding a payload (as opposed to arithmetic or construction).
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            UnitsError::UnknownSymbol { .. }
                | UnitsError::MissingConverter { .. }
                | UnitsError::UnexpectedConverter { .. }
                | UnitsError::ConverterMismatch { .. }
                | UnitsError::UnknownNumericTag { .. }
                | UnitsError::TagKindMismatch { .. }
                | UnitsError::ValueOutOfRange { .. }
                | UnitsError::Decode { .. }
                | UnitsError::Json(_)
        )
    }
}
