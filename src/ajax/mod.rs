//! ajax
//!
//! Named remote-callable actions the host editor dispatches to.
//!
//! # Design
//!
//! The host editor owns transport (HTTP, RPC, a direct call). It hands this
//! module an action name and a JSON parameter bag and gets a JSON value back.
//! Actions are registered once at startup through [`ActionRegistryBuilder`];
//! the built [`ActionRegistry`] is immutable and shareable across threads.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use repeater_tags::ajax::{ActionRegistryBuilder, UPDATE_DYNAMIC_TAG_CONTROLS};
//! use repeater_tags::engine::ResolutionService;
//! use repeater_tags::fields::MemoryFieldStore;
//! use repeater_tags::tags::TagRegistry;
//! use serde_json::json;
//!
//! let service = ResolutionService::new(TagRegistry::builtin(), Arc::new(MemoryFieldStore::new()));
//! let actions = ActionRegistryBuilder::new()
//!     .register_resolution(Arc::new(service))
//!     .unwrap()
//!     .build();
//!
//! let reply = actions.dispatch(UPDATE_DYNAMIC_TAG_CONTROLS, &json!({})).unwrap();
//! assert_eq!(reply, json!({ "error": "No post id given." }));
//! ```

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::engine::ResolutionService;

/// Action name under which the resolution service is exposed.
pub const UPDATE_DYNAMIC_TAG_CONTROLS: &str = "update_dynamic_tag_controls";

/// Errors from action registration and dispatch.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("unknown action '{0}'")]
    UnknownAction(String),

    #[error("action '{0}' is already registered")]
    DuplicateAction(String),

    #[error("failed to encode action response: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A registered action handler.
pub type ActionHandler = Arc<dyn Fn(&Value) -> Result<Value, ActionError> + Send + Sync>;

/// Client-side script the host editor should enqueue alongside the actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScriptAsset {
    pub handle: &'static str,
    pub path: &'static str,
    pub version: &'static str,
    pub in_footer: bool,
}

/// The editor bundle that calls [`UPDATE_DYNAMIC_TAG_CONTROLS`].
pub const EDITOR_SCRIPT: ScriptAsset = ScriptAsset {
    handle: "elementor-acf-repeater",
    path: "assets/js/elementor-acf-repeater.js",
    version: "1.0.0",
    in_footer: true,
};

/// Immutable table of named actions.
#[derive(Clone, Default)]
pub struct ActionRegistry {
    actions: IndexMap<String, ActionHandler>,
}

impl ActionRegistry {
    /// Invoke the action registered as `name`.
    ///
    /// # Errors
    ///
    /// - [`ActionError::UnknownAction`] if nothing is registered under `name`
    /// - Whatever the handler itself returns
    pub fn dispatch(&self, name: &str, params: &Value) -> Result<Value, ActionError> {
        let handler = self
            .actions
            .get(name)
            .ok_or_else(|| ActionError::UnknownAction(name.to_string()))?;
        debug!(action = name, "dispatching action");
        handler(params)
    }

    /// Registered action names, in registration order.
    pub fn action_names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("actions", &self.actions.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for an [`ActionRegistry`].
#[derive(Default)]
pub struct ActionRegistryBuilder {
    actions: IndexMap<String, ActionHandler>,
}

impl ActionRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::DuplicateAction`] if `name` is taken.
    pub fn register<F>(mut self, name: &str, handler: F) -> Result<Self, ActionError>
    where
        F: Fn(&Value) -> Result<Value, ActionError> + Send + Sync + 'static,
    {
        if self.actions.contains_key(name) {
            return Err(ActionError::DuplicateAction(name.to_string()));
        }
        self.actions.insert(name.to_string(), Arc::new(handler));
        Ok(self)
    }

    /// Register the resolution service as [`UPDATE_DYNAMIC_TAG_CONTROLS`].
    pub fn register_resolution(self, service: Arc<ResolutionService>) -> Result<Self, ActionError> {
        self.register(UPDATE_DYNAMIC_TAG_CONTROLS, move |params| {
            Ok(serde_json::to_value(service.handle(params))?)
        })
    }

    pub fn build(self) -> ActionRegistry {
        ActionRegistry {
            actions: self.actions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PostId;
    use crate::fields::{FieldGroup, MemoryFieldStore, SubField};
    use crate::tags::TagRegistry;
    use serde_json::json;

    fn registry_with_store(store: MemoryFieldStore) -> ActionRegistry {
        let service = ResolutionService::new(TagRegistry::builtin(), Arc::new(store));
        ActionRegistryBuilder::new()
            .register_resolution(Arc::new(service))
            .unwrap()
            .build()
    }

    #[test]
    fn dispatches_resolution() {
        let store = MemoryFieldStore::new();
        store.set_repeater_key(PostId::from(5u64), "field_gallery");
        store.insert_field_group(
            "field_gallery",
            FieldGroup::new("Slides", vec![SubField::new("g", "Images", "gallery")]),
        );
        let actions = registry_with_store(store);

        let reply = actions
            .dispatch(UPDATE_DYNAMIC_TAG_CONTROLS, &json!({ "post_id": "5" }))
            .unwrap();

        assert_eq!(
            reply["tags"]["elementor-acf-repeater-gallery"],
            json!([{ "label": "Slides", "options": { "g": "Images" } }])
        );
        assert_eq!(
            reply["tags"]["elementor-acf-repeater-text"],
            json!([{ "label": "Slides", "options": {} }])
        );
    }

    #[test]
    fn unknown_action() {
        let actions = registry_with_store(MemoryFieldStore::new());
        match actions.dispatch("delete_everything", &json!({})) {
            Err(ActionError::UnknownAction(name)) => assert_eq!(name, "delete_everything"),
            other => panic!("expected unknown action, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_registration_rejected() {
        let result = ActionRegistryBuilder::new()
            .register("ping", |_| Ok(json!("pong")))
            .unwrap()
            .register("ping", |_| Ok(json!("pong")));
        assert!(matches!(result, Err(ActionError::DuplicateAction(name)) if name == "ping"));
    }

    #[test]
    fn action_names_in_registration_order() {
        let actions = ActionRegistryBuilder::new()
            .register("b", |_| Ok(Value::Null))
            .unwrap()
            .register("a", |_| Ok(Value::Null))
            .unwrap()
            .build();
        assert_eq!(actions.action_names().collect::<Vec<_>>(), vec!["b", "a"]);
        assert!(actions.contains("a"));
        assert!(!actions.contains("c"));
    }

    #[test]
    fn editor_script_asset() {
        assert_eq!(EDITOR_SCRIPT.handle, "elementor-acf-repeater");
        assert!(EDITOR_SCRIPT.path.ends_with(".js"));
        assert!(EDITOR_SCRIPT.in_footer);
    }
}
