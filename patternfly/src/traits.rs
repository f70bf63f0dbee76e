use pfdom::Document;

/// Components that can be switched off as a whole.
pub trait Disable {
    fn disable(&self, doc: &mut Document);

    fn enable(&self, doc: &mut Document);

    fn is_disabled(&self) -> bool;
}

/// Components exposing a current value.
pub trait HasValue<T> {
    fn value(&self) -> Option<T>;
}
