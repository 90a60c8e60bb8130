use crate::stmt::{LoadHint, SetOp};

/// An error produced while building a statement.
pub struct Error {
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    /// The caller passed arguments that do not form a well-shaped call.
    InvalidArgument(String),

    /// A set-operation branch carries a feature that cannot cross a set
    /// boundary.
    UnsupportedSetOperand { op: SetOp, feature: LoadHint },

    /// Interop with callers that work in terms of `anyhow`.
    Anyhow(anyhow::Error),
}

impl Error {
    /// Creates an error for a malformed call shape.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidArgument(message.into()),
        }
    }

    /// Creates an error for a set-operation branch that requests association
    /// loading.
    pub fn unsupported_set_operand(op: SetOp, feature: LoadHint) -> Self {
        Self {
            kind: ErrorKind::UnsupportedSetOperand { op, feature },
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidArgument(_))
    }

    pub fn is_unsupported_set_operand(&self) -> bool {
        matches!(self.kind, ErrorKind::UnsupportedSetOperand { .. })
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.kind {
            ErrorKind::InvalidArgument(message) => message.fmt(f),
            ErrorKind::UnsupportedSetOperand { op, feature } => {
                write!(f, "cannot {} relation with {}", op.name(), feature)
            }
            ErrorKind::Anyhow(err) => err.fmt(f),
        }
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.kind.fmt(f)
    }
}

impl From<anyhow::Error> for Error {
    fn from(value: anyhow::Error) -> Self {
        Self {
            kind: ErrorKind::Anyhow(value),
        }
    }
}
