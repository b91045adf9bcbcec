use std::time::Instant;

/// Schweregrad einer Benachrichtigung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// Kurzlebige Nutzer-Rückmeldung (Snackbar).
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub severity: Severity,
    pub message: String,
    pub created_at: Instant,
}

/// Warteschlange angezeigter Benachrichtigungen.
#[derive(Debug, Clone, Default)]
pub struct NotificationState {
    entries: Vec<Notification>,
    next_id: u64,
}

impl NotificationState {
    /// Fügt eine Benachrichtigung hinzu und gibt deren ID zurück.
    pub fn push(&mut self, severity: Severity, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.entries.push(Notification {
            id: self.next_id,
            severity,
            message: message.into(),
            created_at: Instant::now(),
        });
        self.next_id
    }

    /// Entfernt eine Benachrichtigung (no-op bei unbekannter ID).
    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|n| n.id != id);
    }

    /// Alle aktiven Benachrichtigungen, älteste zuerst.
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    /// Gibt `true` zurück, wenn keine Benachrichtigung aktiv ist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_dismiss() {
        let mut state = NotificationState::default();

        let a = state.push(Severity::Success, "A added");
        let b = state.push(Severity::Error, "failed");
        state.dismiss(a);
        state.dismiss(999);

        assert_eq!(state.entries().len(), 1);
        assert_eq!(state.entries()[0].id, b);
        assert_eq!(state.entries()[0].severity, Severity::Error);
    }
}
