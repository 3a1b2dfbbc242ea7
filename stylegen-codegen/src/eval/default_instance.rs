//! The shared default instance and scoped overrides.

use std::sync::OnceLock;

/// A single slot computed at most once.
///
/// Models the lazily computed default a generated style family exposes
/// through its accessor: the first reader computes it, every later reader
/// gets the same instance.
#[derive(Debug)]
pub struct DefaultInstance<T> {
    slot: OnceLock<T>,
}

impl<T> DefaultInstance<T> {
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Return the instance, computing it on first access.
    pub fn get_or_compute(&self, compute: impl FnOnce() -> T) -> &T {
        self.slot.get_or_init(compute)
    }

    /// Return the instance if it was already computed.
    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    pub fn is_computed(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl<T> Default for DefaultInstance<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A scope in which a caller may provide a value replacing the default.
///
/// Providing a value that is structurally equal to the current one is not a
/// change, so dependents have nothing to recompute.
#[derive(Debug)]
pub struct StyleScope<'a, T> {
    default: &'a T,
    provided: Option<T>,
}

impl<'a, T: PartialEq> StyleScope<'a, T> {
    pub fn new(default: &'a T) -> Self {
        Self {
            default,
            provided: None,
        }
    }

    /// The provided value, or the default.
    pub fn current(&self) -> &T {
        self.provided.as_ref().unwrap_or(self.default)
    }

    pub fn is_overridden(&self) -> bool {
        self.provided.is_some()
    }

    /// Provide a value. Returns whether the current value changed.
    pub fn provide(&mut self, value: T) -> bool {
        if *self.current() == value {
            return false;
        }
        self.provided = Some(value);
        true
    }

    /// Drop the provided value. Returns whether the current value changed.
    pub fn reset(&mut self) -> bool {
        self.provided.take().is_some_and(|p| p != *self.default)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_computes_once() {
        let calls = Cell::new(0);
        let instance = DefaultInstance::new();
        assert!(!instance.is_computed());

        let first = *instance.get_or_compute(|| {
            calls.set(calls.get() + 1);
            42
        });
        let second = *instance.get_or_compute(|| {
            calls.set(calls.get() + 1);
            7
        });

        assert_eq!(first, 42);
        assert_eq!(second, 42);
        assert_eq!(calls.get(), 1);
        assert_eq!(instance.get(), Some(&42));
    }

    #[test]
    fn test_scope_structural_equality() {
        let default = String::from("default");
        let mut scope = StyleScope::new(&default);

        assert_eq!(scope.current(), "default");
        assert!(!scope.provide(String::from("default")));
        assert!(!scope.is_overridden());

        assert!(scope.provide(String::from("custom")));
        assert!(!scope.provide(String::from("custom")));
        assert_eq!(scope.current(), "custom");

        assert!(scope.reset());
        assert_eq!(scope.current(), "default");
        assert!(!scope.reset());
    }
}
