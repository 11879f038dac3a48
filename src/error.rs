#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the lower bound is greater than or equal to the upper bound.
    #[error("invalid bounds: low ({low}) must be less than high ({high})")]
    InvalidBounds {
        /// The lower bound value.
        low: f64,
        /// The upper bound value.
        high: f64,
    },

    /// Returned when log scale is used with non-positive bounds.
    #[error("invalid log bounds: low must be positive for log scale")]
    InvalidLogBounds,

    /// Returned when categorical choices or an ordinal sequence are empty.
    #[error("choices cannot be empty")]
    EmptyChoices,

    /// Returned when a categorical or ordinal parameter declares the same choice twice.
    #[error("parameter '{name}' declares duplicate choice {value}")]
    DuplicateChoice {
        /// The name of the parameter.
        name: String,
        /// The repeated choice.
        value: String,
    },

    /// Returned when a parameter with the same name was already added to the space.
    #[error("parameter '{name}' is already part of the configuration space")]
    DuplicateParameter {
        /// The name of the parameter.
        name: String,
    },

    /// Returned when a name does not resolve to any parameter in the space.
    #[error("unknown parameter '{name}'")]
    UnknownParameter {
        /// The name that failed to resolve.
        name: String,
    },

    /// Returned when a raw value is not legal for a parameter (wrong type,
    /// out of bounds, or not among the declared choices).
    #[error("value {value} is illegal for parameter '{name}'")]
    IllegalValue {
        /// The name of the parameter.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// Returned when an encoded vector entry cannot be decoded for a parameter.
    #[error("vector value {value} is illegal for parameter '{name}'")]
    IllegalVectorValue {
        /// The name of the parameter.
        name: String,
        /// The rejected encoded value.
        value: f64,
    },

    /// Returned when a vector's length does not match the space.
    #[error("vector length mismatch: expected {expected} entries, got {got}")]
    VectorLengthMismatch {
        /// The number of parameters in the space.
        expected: usize,
        /// The length of the provided vector.
        got: usize,
    },

    /// Returned when a parameter should be active but holds no value.
    #[error("active parameter '{name}' holds no value")]
    MissingActiveValue {
        /// The name of the parameter.
        name: String,
    },

    /// Returned when a parameter should be inactive but holds a value.
    #[error("inactive parameter '{name}' holds a value")]
    InactiveWithValue {
        /// The name of the parameter.
        name: String,
    },

    /// Returned when a configuration violates a forbidden clause.
    #[error("configuration violates forbidden clause: {clause}")]
    ForbiddenClauseViolated {
        /// Display form of the violated clause.
        clause: String,
    },

    /// Returned when adding a condition would create a cycle in the
    /// condition graph.
    #[error("condition graph would contain a cycle involving '{name}'")]
    CyclicCondition {
        /// A parameter on the offending edge.
        name: String,
    },

    /// Returned when a condition is structurally invalid.
    #[error("invalid condition: {0}")]
    InvalidCondition(&'static str),

    /// Returned when an imputation strategy is neither the default keyword
    /// nor a finite numeric literal.
    #[error("invalid imputation strategy '{0}': expected \"default\" or a finite number")]
    InvalidStrategy(String),

    /// Returned when a bounded search loop exceeds its attempt budget.
    #[error("neighborhood search exhausted after {attempts} attempts")]
    SearchExhausted {
        /// The number of attempts made before giving up.
        attempts: usize,
    },

    /// Returned when an internal invariant is violated.
    #[error("internal error: {0}")]
    Internal(&'static str),
}

impl Error {
    /// Whether this error marks a candidate configuration that failed strict
    /// validation and should be silently discarded by a search loop, as
    /// opposed to a fatal collaborator failure.
    pub(crate) fn is_candidate_rejection(&self) -> bool {
        matches!(
            self,
            Error::MissingActiveValue { .. }
                | Error::InactiveWithValue { .. }
                | Error::ForbiddenClauseViolated { .. }
        )
    }
}

pub type Result<T> = core::result::Result<T, Error>;
