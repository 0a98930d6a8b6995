// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fallback resolution
//!
//! Decides, per query, between fetched content and bundled content. The
//! decision is all-or-nothing: fetched records are never mixed with bundled
//! ones.

use super::query::QueryState;
use super::schema::ContentRecord;

/// Content ready for rendering, tagged with where it came from
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<T> {
    /// Fetched from the CMS, verbatim
    Live(T),
    /// Bundled content
    Fallback(T),
}

impl<T> Resolved<T> {
    /// The content, regardless of origin
    pub fn value(&self) -> &T {
        match self {
            Resolved::Live(value) | Resolved::Fallback(value) => value,
        }
    }

    /// Take the content, regardless of origin
    pub fn into_value(self) -> T {
        match self {
            Resolved::Live(value) | Resolved::Fallback(value) => value,
        }
    }

    /// Whether the content came from the CMS (and can carry edit tags)
    pub fn is_live(&self) -> bool {
        matches!(self, Resolved::Live(_))
    }

    /// Map the content, keeping its origin
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        match self {
            Resolved::Live(value) => Resolved::Live(f(value)),
            Resolved::Fallback(value) => Resolved::Fallback(f(value)),
        }
    }
}

/// Query data that can be resolved against bundled content
pub trait Resolvable {
    /// What renderers receive
    type Output: Clone;

    /// Fetched content, or `None` if it is absent or empty
    fn live(&self) -> Option<Self::Output>;

    /// Bundled replacement
    fn fallback() -> Self::Output;
}

impl<R: ContentRecord> Resolvable for Vec<R> {
    type Output = Vec<R>;

    fn live(&self) -> Option<Vec<R>> {
        if self.is_empty() {
            None
        } else {
            Some(self.clone())
        }
    }

    fn fallback() -> Vec<R> {
        R::fallback()
    }
}

impl<R: ContentRecord> Resolvable for Option<R> {
    type Output = R;

    fn live(&self) -> Option<R> {
        self.clone()
    }

    fn fallback() -> R {
        R::fallback_entry()
    }
}

/// Resolve fetched data against bundled content
///
/// `None` stands for "absent or errored"; empty fetched data counts as
/// absent.
pub fn resolve<D: Resolvable>(fetched: Option<&D>) -> Resolved<D::Output> {
    match fetched.and_then(Resolvable::live) {
        Some(live) => Resolved::Live(live),
        None => Resolved::Fallback(D::fallback()),
    }
}

/// Resolve the current state of a query
///
/// A query that is loading or failed without data resolves to bundled
/// content.
pub fn resolve_state<D: Resolvable>(state: &QueryState<D>) -> Resolved<D::Output> {
    resolve(state.data.as_deref())
}
