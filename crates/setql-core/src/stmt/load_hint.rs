use std::fmt;

/// The association-loading strategies a relation can request.
///
/// None of them can cross a set-operation boundary: the association context
/// belongs to a single SELECT and has no meaning for a combined row set.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadHint {
    Includes,
    Preload,
    EagerLoad,
}

impl fmt::Display for LoadHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadHint::Includes => "includes".fmt(f),
            LoadHint::Preload => "preload".fmt(f),
            LoadHint::EagerLoad => "eager load".fmt(f),
        }
    }
}
