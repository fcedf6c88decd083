/// One piece of formatted output.
#[derive(Debug, Clone, PartialEq)]
pub enum Part<T = ()> {
    /// Formatted text.
    Literal(String),
    /// A host object passed through from the values or a tag callback.
    Object(T),
}

impl<T> Part<T> {
    pub fn literal(value: impl Into<String>) -> Self {
        Part::Literal(value.into())
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Part::Literal(s) => Some(s),
            Part::Object(_) => None,
        }
    }
}

/// The result of [`MessageFormat::format`](crate::MessageFormat::format).
///
/// When every part is text the parts are joined into one string; otherwise
/// the mixed sequence is returned so embedded objects survive.
#[derive(Debug, Clone, PartialEq)]
pub enum Formatted<T = ()> {
    Text(String),
    Parts(Vec<Part<T>>),
}

impl<T> Formatted<T> {
    /// Collapses parts into a [`Formatted`] value.
    pub fn from_parts(parts: Vec<Part<T>>) -> Self {
        if parts.iter().all(|part| matches!(part, Part::Literal(_))) {
            let text = parts.iter().filter_map(Part::as_literal).collect();
            Formatted::Text(text)
        } else {
            Formatted::Parts(parts)
        }
    }

    /// The text, if the output contained no objects.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Formatted::Text(text) => Some(text),
            Formatted::Parts(_) => None,
        }
    }

    pub fn into_parts(self) -> Vec<Part<T>> {
        match self {
            Formatted::Text(text) => vec![Part::Literal(text)],
            Formatted::Parts(parts) => parts,
        }
    }
}
