use std::fmt;
use std::str::FromStr;

/// Label name partitioning the errors counter.
pub const ERROR_CLASS_LABEL: &str = "errorClass";

/// Known error categories reported by the GraphQL server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    GraphQl,
    SchemaValidation,
    Fetch,
    MethodNotAllowed,
    InvalidSchema,
    MissingQueryParameter,
    Validation,
    Syntax,
    IntrospectionDisabled,
}

impl ErrorClass {
    /// Every known class; each gets a zero-valued series at initialization.
    pub const ALL: [ErrorClass; 9] = [
        ErrorClass::GraphQl,
        ErrorClass::SchemaValidation,
        ErrorClass::Fetch,
        ErrorClass::MethodNotAllowed,
        ErrorClass::InvalidSchema,
        ErrorClass::MissingQueryParameter,
        ErrorClass::Validation,
        ErrorClass::Syntax,
        ErrorClass::IntrospectionDisabled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorClass::GraphQl => "graphql-error",
            ErrorClass::SchemaValidation => "schema-validation-error",
            ErrorClass::Fetch => "fetch-error",
            ErrorClass::MethodNotAllowed => "method-not-allowed-error",
            ErrorClass::InvalidSchema => "invalid-schema-error",
            ErrorClass::MissingQueryParameter => "missing-query-parameter-error",
            ErrorClass::Validation => "validation-error",
            ErrorClass::Syntax => "syntax-error",
            ErrorClass::IntrospectionDisabled => "introspection-disabled-error",
        }
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown error class '{0}'")]
pub struct UnknownErrorClass(pub String);

impl FromStr for ErrorClass {
    type Err = UnknownErrorClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorClass::ALL
            .into_iter()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| UnknownErrorClass(s.to_string()))
    }
}
