//! Element selectors for scoped lookups.

use crate::element::Element;

/// Matches elements during [`Document::find`](crate::Document::find) and
/// [`Document::find_all`](crate::Document::find_all).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum By {
    Id(String),
    Tag(String),
    /// Element carries every one of the listed classes.
    Class(Vec<String>),
    /// Element has the data key, any value.
    Data(String),
    /// Element has the data key with exactly this value.
    DataValue(String, String),
}

impl By {
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    pub fn tag(tag: impl Into<String>) -> Self {
        Self::Tag(tag.into())
    }

    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(vec![class.into()])
    }

    pub fn classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Class(classes.into_iter().map(Into::into).collect())
    }

    pub fn data(key: impl Into<String>) -> Self {
        Self::Data(key.into())
    }

    pub fn data_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::DataValue(key.into(), value.into())
    }

    pub fn matches(&self, element: &Element) -> bool {
        match self {
            By::Id(id) => &element.id == id,
            By::Tag(tag) => &element.tag == tag,
            By::Class(classes) => classes.iter().all(|c| element.has_class(c)),
            By::Data(key) => element.data.contains_key(key),
            By::DataValue(key, value) => element.get_data(key) == Some(value),
        }
    }
}
