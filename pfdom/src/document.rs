use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::element::Element;
use crate::error::DomError;
use crate::event::Event;
use crate::listener::{Handler, ListenerSet, Subscription};
use crate::query::By;

const BODY_ID: &str = "body";

/// A retained element tree with event dispatch.
///
/// Elements are addressed by their string id. Nodes removed from the tree
/// stay in the document (detached) together with their handlers, so handles
/// held by components never dangle.
pub struct Document {
    elements: HashMap<String, Element>,
    handlers: HashMap<String, Vec<Handler>>,
    listeners: Rc<ListenerSet>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut elements = HashMap::new();
        elements.insert(BODY_ID.to_string(), Element::new("body").id(BODY_ID));
        Self {
            elements,
            handlers: HashMap::new(),
            listeners: Rc::new(ListenerSet::default()),
        }
    }

    /// Id of the root element.
    pub fn body(&self) -> &str {
        BODY_ID
    }

    // -------------------------------------------------------------------------
    // Structure
    // -------------------------------------------------------------------------

    /// Insert a detached element and return its id.
    ///
    /// An element with the same id is replaced: the old one is unlinked from
    /// its parent, its children are left detached and its handlers dropped.
    pub fn create(&mut self, mut element: Element) -> String {
        element.parent = None;
        element.children.clear();
        let id = element.id.clone();
        if self.elements.contains_key(&id) {
            log::warn!("[document] replaced existing element '{id}'");
            self.unlink(&id);
            self.handlers.remove(&id);
        }
        self.elements.insert(id.clone(), element);
        id
    }

    /// Move `child` to the end of `parent`'s children.
    pub fn append_child(&mut self, parent: &str, child: &str) -> Result<(), DomError> {
        if !self.elements.contains_key(parent) {
            return Err(DomError::NotFound(parent.to_string()));
        }
        if !self.elements.contains_key(child) {
            return Err(DomError::NotFound(child.to_string()));
        }
        if self.contains(child, parent) {
            return Err(DomError::HierarchyRequest {
                parent: parent.to_string(),
                child: child.to_string(),
            });
        }

        self.detach(child);
        if let Some(el) = self.elements.get_mut(parent) {
            el.children.push(child.to_string());
        }
        if let Some(el) = self.elements.get_mut(child) {
            el.parent = Some(parent.to_string());
        }
        Ok(())
    }

    /// Detach an element from its parent. The subtree stays in the document
    /// and can be attached again.
    pub fn remove(&mut self, id: &str) -> Result<(), DomError> {
        if id == BODY_ID {
            return Err(DomError::RemoveBody);
        }
        if !self.elements.contains_key(id) {
            return Err(DomError::NotFound(id.to_string()));
        }
        self.detach(id);
        Ok(())
    }

    /// Detach an element and delete it together with its whole subtree and
    /// every activation handler registered on it.
    pub fn destroy(&mut self, id: &str) -> Result<(), DomError> {
        if id == BODY_ID {
            return Err(DomError::RemoveBody);
        }
        if !self.elements.contains_key(id) {
            return Err(DomError::NotFound(id.to_string()));
        }
        self.detach(id);

        let mut stack = vec![id.to_string()];
        while let Some(current) = stack.pop() {
            if let Some(el) = self.elements.remove(&current) {
                stack.extend(el.children);
            }
            self.handlers.remove(&current);
        }
        log::debug!("[document] destroyed '{id}'");
        Ok(())
    }

    /// Number of elements, attached or not, including the body.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Cut every link of an element: from its parent and to its children.
    fn unlink(&mut self, id: &str) {
        self.detach(id);
        let children = self
            .elements
            .get_mut(id)
            .map(|el| std::mem::take(&mut el.children))
            .unwrap_or_default();
        for child in children {
            if let Some(el) = self.elements.get_mut(&child) {
                el.parent = None;
            }
        }
    }

    fn detach(&mut self, id: &str) {
        let Some(parent) = self.elements.get_mut(id).and_then(|el| el.parent.take()) else {
            return;
        };
        if let Some(parent) = self.elements.get_mut(&parent) {
            parent.children.retain(|c| c != id);
        }
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// Editor for an existing element, for chained updates and appending
    /// new children.
    pub fn element_mut(&mut self, id: &str) -> Option<ElementMut<'_>> {
        if self.elements.contains_key(id) {
            Some(ElementMut {
                doc: self,
                id: id.to_string(),
            })
        } else {
            None
        }
    }

    pub fn parent(&self, id: &str) -> Option<&str> {
        self.elements.get(id).and_then(|el| el.parent())
    }

    pub fn children(&self, id: &str) -> &[String] {
        self.elements.get(id).map(|el| el.children()).unwrap_or(&[])
    }

    /// Whether `node` is `ancestor` or one of its descendants.
    /// Works on detached subtrees too.
    pub fn contains(&self, ancestor: &str, node: &str) -> bool {
        let mut current = self.elements.get(node);
        while let Some(el) = current {
            if el.id == ancestor {
                return true;
            }
            current = el.parent.as_deref().and_then(|p| self.elements.get(p));
        }
        false
    }

    /// Whether the element is attached below the body.
    pub fn is_connected(&self, id: &str) -> bool {
        self.contains(BODY_ID, id)
    }

    fn ancestors_inclusive(&self, id: &str) -> Vec<String> {
        let mut path = Vec::new();
        let mut current = self.elements.get(id);
        while let Some(el) = current {
            path.push(el.id.clone());
            current = el.parent.as_deref().and_then(|p| self.elements.get(p));
        }
        path
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// All descendants of `scope` matching the selector, in document order.
    /// `scope` itself is never included.
    pub fn find_all(&self, scope: &str, by: &By) -> Vec<String> {
        let mut found = Vec::new();
        let mut stack: Vec<&String> = self.children(scope).iter().rev().collect();
        while let Some(id) = stack.pop() {
            let Some(el) = self.elements.get(id) else {
                continue;
            };
            if by.matches(el) {
                found.push(id.clone());
            }
            stack.extend(el.children.iter().rev());
        }
        found
    }

    /// First descendant of `scope` matching the selector.
    pub fn find(&self, scope: &str, by: &By) -> Option<String> {
        self.find_all(scope, by).into_iter().next()
    }

    // -------------------------------------------------------------------------
    // Lenient mutators (unknown ids are logged and ignored)
    // -------------------------------------------------------------------------

    fn update(&mut self, id: &str, op: &str, f: impl FnOnce(&mut Element)) {
        match self.elements.get_mut(id) {
            Some(el) => f(el),
            None => log::warn!("[document] {op} on unknown element '{id}'"),
        }
    }

    pub fn set_hidden(&mut self, id: &str, hidden: bool) {
        self.update(id, "set_hidden", |el| el.hidden = hidden);
    }

    pub fn set_disabled(&mut self, id: &str, disabled: bool) {
        self.update(id, "set_disabled", |el| el.disabled = disabled);
    }

    pub fn set_attr(&mut self, id: &str, name: &str, value: impl Into<String>) {
        let value = value.into();
        self.update(id, "set_attr", |el| {
            el.attributes.insert(name.to_string(), value);
        });
    }

    pub fn remove_attr(&mut self, id: &str, name: &str) {
        self.update(id, "remove_attr", |el| {
            el.attributes.remove(name);
        });
    }

    pub fn add_class(&mut self, id: &str, class: &str) {
        self.update(id, "add_class", |el| {
            if !el.has_class(class) {
                el.classes.push(class.to_string());
            }
        });
    }

    pub fn remove_class(&mut self, id: &str, class: &str) {
        self.update(id, "remove_class", |el| el.classes.retain(|c| c != class));
    }

    pub fn set_text(&mut self, id: &str, text: impl Into<String>) {
        let text = text.into();
        self.update(id, "set_text", |el| el.text = Some(text));
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Register an activation handler (primary click, Enter, Space) on an
    /// element. Handlers bubble from the target up to the root.
    pub fn on_click(&mut self, id: &str, handler: impl Fn(&mut Document, &Event) + 'static) {
        if !self.elements.contains_key(id) {
            log::warn!("[document] on_click on unknown element '{id}'");
            return;
        }
        self.handlers
            .entry(id.to_string())
            .or_default()
            .push(Rc::new(handler));
    }

    /// Register a document-level listener that sees every dispatched event.
    /// The listener stays registered until the returned subscription drops.
    pub fn subscribe(&mut self, handler: impl Fn(&mut Document, &Event) + 'static) -> Subscription {
        let id = self.listeners.insert(Rc::new(handler));
        log::trace!("[document] added listener {id:?}");
        Subscription::new(id, &self.listeners)
    }

    /// Number of registered document-level listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver an event. Returns true if any handler ran.
    ///
    /// Activation handlers run first, bubbling from the target, unless the
    /// target or one of its ancestors is disabled. Document-level listeners
    /// run afterwards: only those registered when dispatch started, and only
    /// if still registered when their turn comes.
    pub fn dispatch(&mut self, event: &Event) -> bool {
        log::trace!("[dispatch] {event:?}");
        let listeners = self.listeners.snapshot();
        let mut handled = false;

        if let (true, Some(target)) = (event.is_activation(), event.target()) {
            let path = self.ancestors_inclusive(target);
            let disabled = path
                .iter()
                .any(|id| self.elements.get(id).is_some_and(|el| el.disabled));
            if disabled {
                log::debug!("[dispatch] activation on disabled '{target}' swallowed");
            } else {
                let handlers: Vec<Handler> = path
                    .iter()
                    .filter_map(|id| self.handlers.get(id))
                    .flatten()
                    .cloned()
                    .collect();
                for handler in handlers {
                    handled = true;
                    handler(self, event);
                }
            }
        }

        for (id, handler) in listeners {
            if !self.listeners.contains(id) {
                continue;
            }
            handled = true;
            handler(self, event);
        }

        handled
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("elements", &self.elements.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Chained editor for one element, obtained from [`Document::element_mut`].
pub struct ElementMut<'a> {
    doc: &'a mut Document,
    id: String,
}

impl ElementMut<'_> {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn element(&self) -> Option<&Element> {
        self.doc.get(&self.id)
    }

    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.doc.set_text(&self.id, text);
        self
    }

    pub fn class(&mut self, class: &str) -> &mut Self {
        self.doc.add_class(&self.id, class);
        self
    }

    pub fn attr(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.doc.set_attr(&self.id, name, value);
        self
    }

    pub fn aria(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.doc.set_attr(&self.id, &format!("aria-{name}"), value);
        self
    }

    pub fn data(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        self.doc.update(&self.id, "data", |el| {
            el.data.insert(key.to_string(), value);
        });
        self
    }

    /// Append a new element as the last child. Failures are logged and
    /// ignored, like the other editor methods.
    pub fn child(&mut self, element: Element) -> &mut Self {
        if let Err(err) = self.append(element) {
            log::warn!("[document] child of '{}' not appended: {err}", self.id);
        }
        self
    }

    /// Append a new element as the last child and return its id.
    ///
    /// An element reusing the id of this element or one of its ancestors is
    /// rejected before anything is replaced.
    pub fn append(&mut self, element: Element) -> Result<String, DomError> {
        if self.doc.contains(&element.id, &self.id) {
            return Err(DomError::HierarchyRequest {
                parent: self.id.clone(),
                child: element.id,
            });
        }
        let child = self.doc.create(element);
        self.doc.append_child(&self.id, &child)?;
        Ok(child)
    }
}
