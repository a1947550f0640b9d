//! The root application shell.
//!
//! Mounting installs one subscription on the current location. Every
//! navigation event resolves the new location against the route table and
//! replaces the rendered output with a fresh render of the bound view.

use crate::error::ShellError;
use crate::location::{CurrentLocation, Location, SubscriptionId};
use crate::table::RouteTable;
use crate::view::{Rendered, ViewSet};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info};
use waypoint_core::Result;

/// Router container pairing a route table with the views it displays.
pub struct Shell {
    table: Arc<RouteTable>,
    views: Arc<ViewSet>,
    location: CurrentLocation,
    output: Arc<Mutex<Option<Rendered>>>,
    subscription: Option<SubscriptionId>,
}

impl Shell {
    #[must_use]
    pub fn new(table: RouteTable, views: ViewSet, location: CurrentLocation) -> Self {
        Self {
            table: Arc::new(table),
            views: Arc::new(views),
            location,
            output: Arc::new(Mutex::new(None)),
            subscription: None,
        }
    }

    /// A shell over the standard route table and placeholder views.
    #[must_use]
    pub fn standard(location: CurrentLocation) -> Self {
        Self::new(RouteTable::standard(), ViewSet::default(), location)
    }

    /// Installs the router and renders the view for the current location.
    ///
    /// # Errors
    ///
    /// Returns `ShellError::AlreadyMounted` if the shell is already mounted.
    pub fn mount(&mut self) -> Result<Rendered, ShellError> {
        if self.subscription.is_some() {
            return Err(ShellError::AlreadyMounted.into());
        }

        let table = Arc::clone(&self.table);
        let views = Arc::clone(&self.views);
        let output = Arc::clone(&self.output);
        self.subscription = Some(self.location.subscribe(move |location| {
            let rendered = render(&table, &views, location);
            debug!(route = %rendered.route(), view = rendered.view(), "re-rendered");
            store(&output, rendered);
        }));

        let rendered = render(&self.table, &self.views, &self.location.current());
        info!(route = %rendered.route(), view = rendered.view(), "shell mounted");
        store(&self.output, rendered.clone());
        Ok(rendered)
    }

    /// Removes the router subscription. Returns false if not mounted.
    ///
    /// The last rendered output is kept.
    pub fn unmount(&mut self) -> bool {
        match self.subscription.take() {
            Some(id) => self.location.unsubscribe(id),
            None => false,
        }
    }

    /// Returns true while the shell is subscribed to navigation events.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Returns the currently rendered output, or `None` before the first mount.
    #[must_use]
    pub fn rendered(&self) -> Option<Rendered> {
        self.output
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the location handle driving this shell.
    #[must_use]
    pub fn location(&self) -> &CurrentLocation {
        &self.location
    }

    /// Returns the route table.
    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }
}

impl Drop for Shell {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn render(table: &RouteTable, views: &ViewSet, location: &Location) -> Rendered {
    let route = table.resolve(location);
    let view = views.view_for(&route);
    Rendered::new(view, route, location)
}

fn store(output: &Mutex<Option<Rendered>>, rendered: Rendered) {
    *output.lock().unwrap_or_else(PoisonError::into_inner) = Some(rendered);
}
