use std::cell::Cell;
use std::rc::Rc;

/// Sequences snapshot restores so only the most recently issued one paints.
///
/// Decoding a snapshot is asynchronous in the browser and completions can
/// arrive out of order. Each restore takes a ticket; a completion whose
/// ticket is no longer current is dropped.
#[derive(Clone, Debug, Default)]
pub struct RestoreGate {
    latest: Rc<Cell<u64>>,
}

#[derive(Clone, Debug)]
pub struct RestoreTicket {
    token: u64,
    latest: Rc<Cell<u64>>,
}

impl RestoreGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RestoreTicket {
        let token = self.latest.get() + 1;
        self.latest.set(token);
        RestoreTicket {
            token,
            latest: self.latest.clone(),
        }
    }

    /// Invalidates every outstanding ticket without issuing a restore.
    pub fn supersede(&self) {
        self.latest.set(self.latest.get() + 1);
    }

    pub fn latest(&self) -> u64 {
        self.latest.get()
    }
}

impl RestoreTicket {
    pub fn token(&self) -> u64 {
        self.token
    }

    pub fn is_current(&self) -> bool {
        self.latest.get() == self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_newest_ticket_is_current() {
        let gate = RestoreGate::new();
        let first = gate.issue();
        assert!(first.is_current());

        let second = gate.issue();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert!(second.token() > first.token());
        assert_eq!(gate.latest(), second.token());
    }

    #[test]
    fn cloned_gates_share_the_sequence() {
        let gate = RestoreGate::new();
        let other = gate.clone();
        let ticket = gate.issue();
        other.issue();
        assert!(!ticket.is_current());
    }

    #[test]
    fn supersede_retires_the_current_ticket() {
        let gate = RestoreGate::new();
        let ticket = gate.issue();
        gate.supersede();
        assert!(!ticket.is_current());
        assert!(gate.issue().is_current());
    }
}
