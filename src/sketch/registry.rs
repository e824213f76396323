//! Mode registry: the table of shape builders and the single click binding.
//!
//! Builders are constructed once at startup and live for the whole session,
//! so switching modes and back resumes a half-entered shape rather than
//! discarding it. The registry owns the active binding as an explicit
//! resource: exactly one builder receives clicks, and rebinding replaces the
//! previous binding instead of stacking on top of it.

use std::collections::HashMap;

use log::debug;

use crate::draw::{Canvas, MarkerStyle};

use super::builder::ShapeBuilder;
use super::events::{ClickButton, ClickEvent};

/// Mode pre-activated before any user command is read.
pub const DEFAULT_MODE: &str = "polygon";

/// Holds the fixed set of shape builders keyed by mode name and routes
/// clicks to whichever one currently holds the binding.
#[derive(Debug)]
pub struct ModeRegistry {
    builders: HashMap<String, ShapeBuilder>,
    active: Option<String>,
}

impl ModeRegistry {
    /// Builds the standard registry (`polygon`, `circle`) with `polygon`
    /// already bound.
    pub fn with_default_modes(marker: MarkerStyle) -> Self {
        let mut builders = HashMap::new();
        builders.insert("polygon".to_string(), ShapeBuilder::polygon(marker));
        builders.insert("circle".to_string(), ShapeBuilder::circle(marker));

        let mut registry = Self {
            builders,
            active: None,
        };
        registry.activate(DEFAULT_MODE);
        registry
    }

    /// Rebinds the click subscription to the named builder.
    ///
    /// Unknown names leave the current binding fully intact and return
    /// `false`; callers decide whether that deserves a user-visible message.
    pub fn activate(&mut self, name: &str) -> bool {
        if !self.builders.contains_key(name) {
            debug!("Ignoring unknown mode '{name}'");
            return false;
        }
        // Detach before attaching: a stale builder must never see another
        // click once a new one is bound.
        self.active.take();
        self.active = Some(name.to_string());
        debug!("Activated '{name}' mode");
        true
    }

    /// Name of the builder currently holding the click binding.
    pub fn active_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The builder currently holding the click binding.
    pub fn active_builder(&self) -> Option<&ShapeBuilder> {
        self.builders.get(self.active.as_deref()?)
    }

    /// Routes a click to the active builder, if any is bound.
    pub fn dispatch(&mut self, event: ClickEvent, canvas: &mut dyn Canvas) {
        let Some(name) = self.active.as_deref() else {
            return;
        };
        let Some(builder) = self.builders.get_mut(name) else {
            return;
        };
        match event.button {
            ClickButton::Primary => builder.handle_primary_click(event.position, canvas),
            ClickButton::Secondary => builder.handle_secondary_click(event.position, canvas),
        }
    }

    #[cfg(test)]
    pub(crate) fn builder(&self, name: &str) -> Option<&ShapeBuilder> {
        self.builders.get(name)
    }
}
