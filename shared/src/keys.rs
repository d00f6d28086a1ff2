#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    Undo,
    Redo,
}

impl Shortcut {
    /// Decodes a `keydown`. Ctrl on most platforms, Cmd (meta) on macOS.
    pub fn from_key(key: &str, ctrl: bool, meta: bool) -> Option<Self> {
        if !(ctrl || meta) {
            return None;
        }
        if key.eq_ignore_ascii_case("z") {
            Some(Shortcut::Undo)
        } else if key.eq_ignore_ascii_case("y") {
            Some(Shortcut::Redo)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_or_cmd_z_undoes() {
        assert_eq!(Shortcut::from_key("z", true, false), Some(Shortcut::Undo));
        assert_eq!(Shortcut::from_key("z", false, true), Some(Shortcut::Undo));
        assert_eq!(Shortcut::from_key("Z", true, false), Some(Shortcut::Undo));
    }

    #[test]
    fn ctrl_or_cmd_y_redoes() {
        assert_eq!(Shortcut::from_key("y", true, false), Some(Shortcut::Redo));
        assert_eq!(Shortcut::from_key("y", false, true), Some(Shortcut::Redo));
    }

    #[test]
    fn bare_keys_and_other_letters_are_ignored() {
        assert_eq!(Shortcut::from_key("z", false, false), None);
        assert_eq!(Shortcut::from_key("y", false, false), None);
        assert_eq!(Shortcut::from_key("x", true, false), None);
        assert_eq!(Shortcut::from_key("Control", true, false), None);
    }
}
