use std::collections::{BTreeMap, HashMap};

/// A read-only mapping from variable names to raw string values.
pub trait EnvSource {
    /// Raw value of `name`, or `None` when it is not set.
    ///
    /// Implementations must not trim or otherwise alter the value.
    fn var(&self, name: &str) -> Option<String>;

    /// Whether `name` is set, even to an empty value
    fn contains(&self, name: &str) -> bool {
        self.var(name).is_some()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

impl<T: EnvSource + ?Sized> EnvSource for Box<T> {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}
