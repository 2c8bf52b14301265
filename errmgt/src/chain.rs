//! # Chain Inspection
//!
//! Walks the `source()` chain of any error. Every query here is built on
//! [`find_in_chain`] and is total: an error with no [`ManagedError`] in its
//! chain yields the "not found" answer, never a failure.
//!
//! Queries that read a single attribute stop at the first managed error in
//! the chain, the outermost one.

use std::error::Error as StdError;
use std::iter::FusedIterator;

use crate::context::ErrorContext;
use crate::kind::ErrorKind;
use crate::types::ManagedError;

/// Iterator over an error and its transitive sources, outermost first
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

/// Iterate `err` followed by every error it wraps
pub fn chain<'a>(err: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// Return the first value `f` extracts from the chain
pub fn find_in_chain<'a, T, F>(err: &'a (dyn StdError + 'static), f: F) -> Option<T>
where
    F: FnMut(&'a (dyn StdError + 'static)) -> Option<T>,
{
    chain(err).find_map(f)
}

/// First managed error in the chain
pub fn find_managed<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a ManagedError> {
    find_in_chain(err, |e| e.downcast_ref::<ManagedError>())
}

/// Retry hint of the first managed error; false when there is none
pub fn is_retryable(err: &(dyn StdError + 'static)) -> bool {
    find_managed(err).map_or(false, ManagedError::is_retryable)
}

/// Context of the first managed error, or `None` when the chain holds no
/// managed error. An empty context is returned as `Some`.
pub fn context_of<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a ErrorContext> {
    find_managed(err).map(ManagedError::context)
}

/// Kind of the first managed error
pub fn kind_of<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a ErrorKind> {
    find_managed(err).map(ManagedError::kind)
}

/// Whether the first managed error has the given kind
pub fn is_kind(err: &(dyn StdError + 'static), kind: &ErrorKind) -> bool {
    kind_of(err).map_or(false, |k| k == kind)
}

/// Effective status hint of the first managed error
pub fn status_code_of(err: &(dyn StdError + 'static)) -> Option<u16> {
    find_managed(err).and_then(ManagedError::effective_status_code)
}

/// Whether any managed error in the chain is equivalent to `target`
/// (same kind and code)
pub fn matches(err: &(dyn StdError + 'static), target: &ManagedError) -> bool {
    find_in_chain(err, |e| {
        e.downcast_ref::<ManagedError>()
            .filter(|managed| managed.is_equivalent(target))
    })
    .is_some()
}

/// Deepest error of the chain
pub fn root_cause<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    chain(err).last().unwrap_or(err)
}
