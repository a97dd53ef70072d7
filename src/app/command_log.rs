//! Protokoll der zuletzt ausgeführten Commands (Diagnose und Tests).

use super::AppCommand;

/// Obergrenze; beim Überlauf bleibt die jüngere Hälfte erhalten.
const CAPACITY: usize = 512;

/// Ringartiges Protokoll ausgeführter Commands in Ausführungsreihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen ausgeführten Command an.
    pub fn record(&mut self, command: AppCommand) {
        if self.entries.len() >= CAPACITY {
            self.entries.drain(..CAPACITY / 2);
        }
        self.entries.push(command);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last()
    }

    /// Read-only Sicht auf alle Einträge (älteste zuerst).
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}
