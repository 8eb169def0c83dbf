//! Shared utilities for integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use hash_router::routing::{CallbackError, RouteMatch};

/// Records every match handed to the callbacks it creates.
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<(&'static str, RouteMatch)>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback tagged with `label` that records its activations.
    pub fn handler(&self, label: &'static str) -> impl FnMut(&RouteMatch) -> Result<(), CallbackError> + 'static {
        let calls = self.calls.clone();
        move |m: &RouteMatch| {
            calls.borrow_mut().push((label, m.clone()));
            Ok(())
        }
    }

    /// A callback that records its activation, then fails.
    #[allow(dead_code)]
    pub fn failing(&self, label: &'static str) -> impl FnMut(&RouteMatch) -> Result<(), CallbackError> + 'static {
        let calls = self.calls.clone();
        move |m: &RouteMatch| {
            calls.borrow_mut().push((label, m.clone()));
            Err(format!("{} handler failed", label).into())
        }
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.calls.borrow().iter().map(|(label, _)| *label).collect()
    }

    pub fn last(&self) -> Option<RouteMatch> {
        self.calls.borrow().last().map(|(_, m)| m.clone())
    }

    pub fn len(&self) -> usize {
        self.calls.borrow().len()
    }
}
