use crate::action::Action;

/// Maps logical key names to actions.
///
/// Key names are the windowing layer's logical key text: a named key such
/// as `"Escape"`, or the produced character such as `"r"`. Matching is
/// exact, which is why `r` and `R` are bound separately.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: Vec<(String, Action)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            bindings: vec![
                ("Escape".into(), Action::Deselect),
                ("r".into(), Action::SelectRandom),
                ("R".into(), Action::SelectRandom),
            ],
        }
    }
}

impl KeyBindings {
    /// Action for a key press. Unbound keys map to `Action::Noop`.
    pub fn action_for_key(&self, key: &str) -> Action {
        let action = self
            .bindings
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, a)| *a)
            .unwrap_or(Action::Noop);
        if action != Action::Noop {
            tracing::trace!("key {key:?} -> {action:?}");
        }
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_deselects() {
        let keys = KeyBindings::default();
        assert_eq!(keys.action_for_key("Escape"), Action::Deselect);
    }

    #[test]
    fn r_in_either_case_selects_random() {
        let keys = KeyBindings::default();
        assert_eq!(keys.action_for_key("r"), Action::SelectRandom);
        assert_eq!(keys.action_for_key("R"), Action::SelectRandom);
    }

    #[test]
    fn unbound_key_is_noop() {
        let keys = KeyBindings::default();
        assert_eq!(keys.action_for_key("q"), Action::Noop);
    }

    #[test]
    fn key_names_are_case_sensitive() {
        let keys = KeyBindings::default();
        assert_eq!(keys.action_for_key("escape"), Action::Noop);
    }
}
