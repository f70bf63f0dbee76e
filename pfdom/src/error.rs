use thiserror::Error;

/// Errors from structural document operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// No element with this id exists in the document.
    #[error("element not found: {0}")]
    NotFound(String),

    /// The insertion would make an element its own ancestor.
    #[error("cannot insert '{child}' under '{parent}': it would become its own ancestor")]
    HierarchyRequest { parent: String, child: String },

    /// The document body cannot be detached.
    #[error("the document body cannot be removed")]
    RemoveBody,
}
