//! The current location and its navigation history.
//!
//! `CurrentLocation` is a shared handle: clones observe and drive the same
//! history. Subscribers are notified after every navigation event, including
//! a navigation to the location that is already current.

use crate::error::NavigationError;
use crate::route::Route;
use crate::table::RouteTable;
use rootcause::prelude::Report;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// A parsed navigation target.
///
/// Only `path` takes part in route matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl Location {
    /// The application root, `/`.
    #[must_use]
    pub fn root() -> Self {
        Self {
            path: "/".to_string(),
            query: None,
            fragment: None,
        }
    }

    /// Parses a path of the form `/path?query#fragment`.
    ///
    /// An empty path is treated as `/`. Trailing slashes are kept, so
    /// `/profile/` and `/profile` are different locations.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::InvalidPath` if the input is relative or
    /// contains whitespace or control characters.
    pub fn parse(input: &str) -> Result<Self, Report<NavigationError>> {
        let invalid = |reason: &str| NavigationError::InvalidPath {
            path: input.to_string(),
            reason: reason.to_string(),
        };

        if input
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(invalid("contains whitespace or control characters").into());
        }

        let (rest, fragment) = match input.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (input, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (rest, None),
        };

        let path = if path.is_empty() { "/" } else { path };
        if !path.starts_with('/') {
            return Err(invalid("path must be absolute").into());
        }

        Ok(Self {
            path: path.to_string(),
            query,
            fragment,
        })
    }

    /// Returns the path component.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query string without the leading `?`.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the fragment without the leading `#`.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

impl FromStr for Location {
    type Err = Report<NavigationError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Handle returned by [`CurrentLocation::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&Location) + Send + Sync>;

struct State {
    history: Vec<Location>,
    cursor: usize,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl State {
    fn current(&self) -> &Location {
        &self.history[self.cursor]
    }

    fn listeners(&self) -> Vec<Listener> {
        self.listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect()
    }
}

/// The process-wide current location with a linear history.
#[derive(Clone)]
pub struct CurrentLocation {
    inner: Arc<Mutex<State>>,
}

impl CurrentLocation {
    /// Creates a location handle starting at `initial`.
    #[must_use]
    pub fn new(initial: Location) -> Self {
        Self {
            inner: Arc::new(Mutex::new(State {
                history: vec![initial],
                cursor: 0,
                listeners: Vec::new(),
                next_subscription: 0,
            })),
        }
    }

    /// Creates a location handle starting at the parsed `path`.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::InvalidPath` if `path` cannot be parsed.
    pub fn from_path(path: &str) -> Result<Self, Report<NavigationError>> {
        Ok(Self::new(Location::parse(path)?))
    }

    // Listeners never run while the lock is held, so a poisoned lock still
    // holds consistent state.
    fn state(&self) -> MutexGuard<'_, State> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the current location.
    #[must_use]
    pub fn current(&self) -> Location {
        self.state().current().clone()
    }

    /// Resolves the current location against `table`.
    #[must_use]
    pub fn route(&self, table: &RouteTable) -> Route {
        table.resolve(&self.current())
    }

    /// Navigates to `path`, pushing a history entry and notifying subscribers.
    ///
    /// Forward history is discarded. Navigating to the location that is
    /// already current notifies subscribers without pushing a duplicate entry.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::InvalidPath` if `path` cannot be parsed; the
    /// current location is left unchanged.
    pub fn navigate_to(&self, path: &str) -> Result<Location, Report<NavigationError>> {
        let location = Location::parse(path)?;
        let listeners = {
            let mut state = self.state();
            if *state.current() != location {
                let keep = state.cursor + 1;
                state.history.truncate(keep);
                state.history.push(location.clone());
                state.cursor = keep;
            }
            state.listeners()
        };
        debug!(location = %location, "navigate");
        notify(&listeners, &location);
        Ok(location)
    }

    /// Replaces the current history entry with `path` and notifies subscribers.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::InvalidPath` if `path` cannot be parsed.
    pub fn replace(&self, path: &str) -> Result<Location, Report<NavigationError>> {
        let location = Location::parse(path)?;
        let listeners = {
            let mut state = self.state();
            let cursor = state.cursor;
            state.history[cursor] = location.clone();
            state.listeners()
        };
        debug!(location = %location, "replace");
        notify(&listeners, &location);
        Ok(location)
    }

    /// Moves one entry back in history. Returns false if already at the start.
    pub fn back(&self) -> bool {
        self.step(-1)
    }

    /// Moves one entry forward in history. Returns false if already at the end.
    pub fn forward(&self) -> bool {
        self.step(1)
    }

    fn step(&self, delta: isize) -> bool {
        let (location, listeners) = {
            let mut state = self.state();
            let Some(cursor) = state.cursor.checked_add_signed(delta) else {
                return false;
            };
            if cursor >= state.history.len() {
                return false;
            }
            state.cursor = cursor;
            (state.current().clone(), state.listeners())
        };
        debug!(location = %location, delta, "history step");
        notify(&listeners, &location);
        true
    }

    /// Returns true if `back` would move.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.state().cursor > 0
    }

    /// Returns true if `forward` would move.
    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        let state = self.state();
        state.cursor + 1 < state.history.len()
    }

    /// Returns the number of history entries.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.state().history.len()
    }

    /// Registers `listener` to be called after every navigation event.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&Location) + Send + Sync + 'static,
    {
        let mut state = self.state();
        let id = SubscriptionId(state.next_subscription);
        state.next_subscription += 1;
        state.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Removes a subscription. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut state = self.state();
        let before = state.listeners.len();
        state.listeners.retain(|(existing, _)| *existing != id);
        state.listeners.len() != before
    }

    /// Returns the number of active subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state().listeners.len()
    }
}

impl Default for CurrentLocation {
    fn default() -> Self {
        Self::new(Location::root())
    }
}

impl fmt::Debug for CurrentLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state();
        f.debug_struct("CurrentLocation")
            .field("current", state.current())
            .field("history_len", &state.history.len())
            .field("subscribers", &state.listeners.len())
            .finish()
    }
}

fn notify(listeners: &[Listener], location: &Location) {
    for listener in listeners {
        listener(location);
    }
}
