use std::fmt;

/// A path through a model's associations, e.g. `posts.comments`.
#[derive(Clone, PartialEq, Eq)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl From<&str> for Path {
    fn from(value: &str) -> Self {
        value.split('.').collect()
    }
}

impl From<String> for Path {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

impl<T: Into<String>> FromIterator<T> for Path {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path({})", self.segments.join("."))
    }
}
