use super::*;

fn committed(count: usize) -> History<String> {
    let mut history = History::new();
    for index in 1..=count {
        history.commit(format!("s{index}"));
    }
    history
}

fn snapshot(name: &str) -> Option<Restore<String>> {
    Some(Restore::Snapshot(name.to_string()))
}

#[test]
fn empty_history_ignores_undo_and_redo() {
    let mut history: History<String> = History::new();
    assert_eq!(history.undo(), None);
    assert_eq!(history.redo(), None);
    assert_eq!(history.undo_len(), 0);
    assert_eq!(history.redo_len(), 0);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn commit_pushes_and_counts() {
    let history = committed(3);
    assert_eq!(history.undo_len(), 3);
    assert_eq!(history.actions(), 3);
    assert_eq!(history.current().map(String::as_str), Some("s3"));
}

#[test]
fn undo_walks_back_to_blank_then_stops() {
    let mut history = committed(3);
    assert_eq!(history.undo(), snapshot("s2"));
    assert_eq!(history.undo(), snapshot("s1"));
    assert_eq!(history.undo(), Some(Restore::Blank));
    assert_eq!(history.undo_len(), 0);
    assert_eq!(history.redo_len(), 3);

    assert_eq!(history.undo(), None);
    assert_eq!(history.redo_len(), 3);
}

#[test]
fn redo_replays_every_undone_snapshot_in_order() {
    let mut history = committed(3);
    while history.undo().is_some() {}

    assert_eq!(history.redo(), snapshot("s1"));
    assert_eq!(history.redo(), snapshot("s2"));
    assert_eq!(history.redo(), snapshot("s3"));
    assert_eq!(history.redo(), None);

    assert_eq!(history.undo_len(), 3);
    assert_eq!(history.current().map(String::as_str), Some("s3"));
}

#[test]
fn undo_and_redo_interleave() {
    let mut history = committed(2);
    assert_eq!(history.undo(), snapshot("s1"));
    assert_eq!(history.redo(), snapshot("s2"));
    assert_eq!(history.undo(), snapshot("s1"));
    assert_eq!(history.undo(), Some(Restore::Blank));
    assert_eq!(history.redo(), snapshot("s1"));
    assert_eq!(history.current().map(String::as_str), Some("s1"));
    assert_eq!(history.redo_len(), 1);
}

#[test]
fn new_action_after_undo_drops_redo_entries() {
    let mut history = committed(2);
    history.undo();
    assert!(history.can_redo());

    history.mark_action();
    history.commit("s3".to_string());
    assert!(!history.can_redo());
    assert_eq!(history.redo_len(), 1);

    assert_eq!(history.redo(), None);
    assert_eq!(history.redo_len(), 0);
    assert_eq!(history.current().map(String::as_str), Some("s3"));
}

#[test]
fn marked_action_alone_invalidates_redo() {
    let mut history = committed(1);
    history.undo();
    history.mark_action();
    assert_eq!(history.redo(), None);
    assert_eq!(history.redo_len(), 0);
}

#[test]
fn redo_stays_valid_across_consecutive_undos() {
    let mut history = committed(3);
    history.undo();
    history.undo();
    assert!(history.can_redo());
    assert_eq!(history.redo(), snapshot("s2"));
    assert_eq!(history.redo(), snapshot("s3"));
}

#[test]
fn redo_does_not_count_as_new_work() {
    let mut history = committed(2);
    history.undo();
    history.undo();
    let actions = history.actions();
    history.redo();
    assert_eq!(history.actions(), actions);
    assert!(history.can_redo());
}
