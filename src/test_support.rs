//! In-memory element used by unit tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use crate::util::dom::{ClassTarget, StyleTarget};

#[derive(Debug, Default)]
pub struct FakeElement {
    pub attrs: BTreeMap<String, String>,
    classes: RefCell<BTreeSet<String>>,
    styles: RefCell<BTreeMap<String, String>>,
}

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_owned(), value.to_owned());
        self
    }

    pub fn with_classes(self, classes: &[&str]) -> Self {
        for class in classes {
            self.add_class(class);
        }
        self
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        self.attrs.get(name).cloned()
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.styles.borrow().get(property).cloned()
    }
}

impl ClassTarget for FakeElement {
    fn add_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_owned());
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }
}

impl StyleTarget for FakeElement {
    fn set_style(&self, property: &str, value: &str) {
        self.styles.borrow_mut().insert(property.to_owned(), value.to_owned());
    }
}
