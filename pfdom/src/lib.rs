//! A small retained element tree with PatternFly-style DOM semantics:
//! string-addressed elements carrying classes, attributes and data, element
//! activation handlers that bubble, and document-level listeners held through
//! scoped [`Subscription`]s.

pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod listener;
pub mod query;

pub use document::{Document, ElementMut};
pub use element::{generate_id, Element};
pub use error::DomError;
pub use event::{Event, Key, Modifiers, MouseButton};
pub use listener::{Handler, ListenerId, Subscription};
pub use query::By;
