//! Runtime registry of executable actions.
//!
//! The registry maps action ids to handlers supplied by the host
//! integration. It is an explicitly constructed value passed to whatever
//! layer dispatches button presses; there is no global instance.

use serde_json::Value;
use std::collections::BTreeSet;
use std::collections::HashMap;

/// Context information passed to action handlers.
#[derive(Debug, Clone, Default)]
pub struct ActionContext {
    /// Currently active host context (module/view name), if known
    pub context: Option<String>,
    /// Button that triggered the action, if any
    pub button_id: Option<String>,
    /// Active modifier keys ("shift", "ctrl", "alt", "meta")
    pub modifiers: BTreeSet<String>,
}

impl ActionContext {
    /// Creates a context for a button press in the given host context.
    pub fn for_press(context: impl Into<String>, button_id: impl Into<String>) -> Self {
        Self {
            context: Some(context.into()),
            button_id: Some(button_id.into()),
            modifiers: BTreeSet::new(),
        }
    }
}

/// A handler implementing a single action.
pub trait ActionHandler {
    /// Executes the action. Returns true on success.
    ///
    /// Handlers must not panic; a failed action returns false so one bad
    /// mapping cannot break the button-press handling path.
    fn execute(&self, ctx: &ActionContext, parameters: &serde_json::Map<String, Value>) -> bool;

    /// Checks whether the action is currently available.
    fn is_available(&self, _ctx: &ActionContext) -> bool {
        true
    }
}

/// Handler wrapping a plain closure.
pub struct FnHandler<F>
where
    F: Fn(&ActionContext, &serde_json::Map<String, Value>) -> bool,
{
    func: F,
}

impl<F> FnHandler<F>
where
    F: Fn(&ActionContext, &serde_json::Map<String, Value>) -> bool,
{
    /// Wraps a closure as an action handler.
    pub const fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> ActionHandler for FnHandler<F>
where
    F: Fn(&ActionContext, &serde_json::Map<String, Value>) -> bool,
{
    fn execute(&self, ctx: &ActionContext, parameters: &serde_json::Map<String, Value>) -> bool {
        (self.func)(ctx, parameters)
    }
}

/// Entry in the action registry.
pub struct ActionEntry {
    /// Unique action identifier
    pub id: String,
    /// The handler invoked on execution
    pub handler: Box<dyn ActionHandler>,
    /// Category for organization
    pub category: String,
    /// Human-readable description
    pub description: String,
}

/// Registry of executable actions.
///
/// At most one handler per action id; re-registering an id replaces the
/// previous handler (last registration wins).
#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<String, ActionEntry>,
}

impl ActionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an action handler.
    ///
    /// If the id is already registered, the previous handler is replaced.
    pub fn register(
        &mut self,
        action_id: impl Into<String>,
        handler: Box<dyn ActionHandler>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) {
        let id = action_id.into();
        let category = category.into();
        tracing::debug!(action = %id, category = %category, "registered action");
        let replaced = self.actions.insert(
            id.clone(),
            ActionEntry {
                id,
                handler,
                category,
                description: description.into(),
            },
        );
        if let Some(old) = replaced {
            tracing::debug!(action = %old.id, "replaced existing handler");
        }
    }

    /// Unregisters an action. Returns true if it was registered.
    pub fn unregister(&mut self, action_id: &str) -> bool {
        self.actions.remove(action_id).is_some()
    }

    /// Gets an entry by action id.
    #[must_use]
    pub fn get(&self, action_id: &str) -> Option<&ActionEntry> {
        self.actions.get(action_id)
    }

    /// Checks whether an action id has a registered handler.
    #[must_use]
    pub fn is_registered(&self, action_id: &str) -> bool {
        self.actions.contains_key(action_id)
    }

    /// Executes an action. Returns true on success.
    ///
    /// An unknown id or an unavailable handler degrades to a no-op and
    /// returns false; execution never raises so the event-handling path
    /// stays responsive.
    pub fn execute(
        &self,
        action_id: &str,
        ctx: &ActionContext,
        parameters: &serde_json::Map<String, Value>,
    ) -> bool {
        let Some(entry) = self.actions.get(action_id) else {
            tracing::warn!(action = %action_id, "action not registered");
            return false;
        };

        if !entry.handler.is_available(ctx) {
            tracing::debug!(action = %action_id, "action not available in current context");
            return false;
        }

        entry.handler.execute(ctx, parameters)
    }

    /// Gets all entries in a category, sorted by id.
    #[must_use]
    pub fn actions_in_category(&self, category: &str) -> Vec<&ActionEntry> {
        let mut entries: Vec<&ActionEntry> = self
            .actions
            .values()
            .filter(|e| e.category == category)
            .collect();
        entries.sort_by(|a, b| a.id.cmp(&b.id));
        entries
    }

    /// Gets all category names, sorted and deduplicated.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self.actions.values().map(|e| e.category.as_str()).collect();
        set.into_iter().collect()
    }

    /// Number of registered actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns true if no actions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_handler(counter: Arc<AtomicUsize>) -> Box<dyn ActionHandler> {
        Box::new(FnHandler::new(move |_ctx, _params| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        }))
    }

    #[test]
    fn test_register_and_execute() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut registry = ActionRegistry::new();
        registry.register("edit_undo", counting_handler(counter.clone()), "editing", "Undo");

        let ctx = ActionContext::for_press("SegmentEditor", "back");
        assert!(registry.execute("edit_undo", &ctx, &serde_json::Map::new()));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_execute_unknown_action_returns_false() {
        let registry = ActionRegistry::new();
        let ctx = ActionContext::default();
        assert!(!registry.execute("nonexistent", &ctx, &serde_json::Map::new()));
    }

    #[test]
    fn test_last_registration_wins() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let mut registry = ActionRegistry::new();
        registry.register("edit_undo", counting_handler(first.clone()), "editing", "Undo");
        registry.register("edit_undo", counting_handler(second.clone()), "editing", "Undo v2");

        assert_eq!(registry.len(), 1);
        registry.execute("edit_undo", &ActionContext::default(), &serde_json::Map::new());
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
        assert_eq!(registry.get("edit_undo").unwrap().description, "Undo v2");
    }

    #[test]
    fn test_unavailable_handler_returns_false() {
        struct GatedHandler;
        impl ActionHandler for GatedHandler {
            fn execute(
                &self,
                _ctx: &ActionContext,
                _parameters: &serde_json::Map<String, serde_json::Value>,
            ) -> bool {
                true
            }

            fn is_available(&self, ctx: &ActionContext) -> bool {
                ctx.context.as_deref() == Some("SegmentEditor")
            }
        }

        let mut registry = ActionRegistry::new();
        registry.register(
            "segment_next",
            Box::new(GatedHandler),
            "segment_editor",
            "Next segment",
        );

        let in_editor = ActionContext::for_press("SegmentEditor", "forward");
        let elsewhere = ActionContext::for_press("Markups", "forward");
        assert!(registry.execute("segment_next", &in_editor, &serde_json::Map::new()));
        assert!(!registry.execute("segment_next", &elsewhere, &serde_json::Map::new()));
    }

    #[test]
    fn test_handler_receives_parameters() {
        let mut registry = ActionRegistry::new();
        registry.register(
            "view_set_layout",
            Box::new(FnHandler::new(|_ctx, params| {
                params.get("layout").and_then(|v| v.as_str()) == Some("FourUp")
            })),
            "views",
            "Set layout",
        );

        let mut params = serde_json::Map::new();
        params.insert("layout".to_string(), serde_json::Value::from("FourUp"));
        assert!(registry.execute("view_set_layout", &ActionContext::default(), &params));
        assert!(!registry.execute(
            "view_set_layout",
            &ActionContext::default(),
            &serde_json::Map::new()
        ));
    }

    #[test]
    fn test_unregister() {
        let mut registry = ActionRegistry::new();
        registry.register(
            "edit_undo",
            Box::new(FnHandler::new(|_, _| true)),
            "editing",
            "Undo",
        );
        assert!(registry.unregister("edit_undo"));
        assert!(!registry.unregister("edit_undo"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_categories_sorted() {
        let mut registry = ActionRegistry::new();
        for (id, cat) in [
            ("segment_next", "segment_editor"),
            ("edit_undo", "editing"),
            ("edit_redo", "editing"),
        ] {
            registry.register(id, Box::new(FnHandler::new(|_, _| true)), cat, "");
        }
        assert_eq!(registry.categories(), vec!["editing", "segment_editor"]);
        assert_eq!(registry.actions_in_category("editing").len(), 2);
        assert_eq!(registry.actions_in_category("editing")[0].id, "edit_redo");
    }
}
