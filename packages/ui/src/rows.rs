//! Bookkeeping for rows a list view already shows.

use model::{Activity, Application, Attachment, Id, Page};

/// A row with a backend id.
pub trait Keyed {
    fn key(&self) -> Id;
}

impl Keyed for Application {
    fn key(&self) -> Id {
        self.id
    }
}

impl Keyed for Activity {
    fn key(&self) -> Id {
        self.id
    }
}

impl Keyed for Attachment {
    fn key(&self) -> Id {
        self.id
    }
}

/// Drop the row `id` once its delete succeeded. A failed delete leaves the
/// rows untouched. Returns whether a row was removed.
pub fn apply_delete<T: Keyed, E>(rows: &mut Vec<T>, id: Id, outcome: &Result<(), E>) -> bool {
    if outcome.is_err() {
        return false;
    }
    let before = rows.len();
    rows.retain(|row| row.key() != id);
    rows.len() != before
}

/// [`apply_delete`] for a page, keeping the total in step.
pub fn apply_page_delete<T: Keyed, E>(page: &mut Page<T>, id: Id, outcome: &Result<(), E>) -> bool {
    let removed = apply_delete(&mut page.content, id, outcome);
    if removed {
        page.total_elements = page.total_elements.saturating_sub(1);
    }
    removed
}

/// Replace the row with the same id, or put `row` first when it is new.
pub fn upsert<T: Keyed>(rows: &mut Vec<T>, row: T) {
    match rows.iter().position(|r| r.key() == row.key()) {
        Some(index) => rows[index] = row,
        None => rows.insert(0, row),
    }
}

/// An application with its activities and attachments, as one detail page shows them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailRecords {
    pub application: Option<Application>,
    pub activities: Vec<Activity>,
    pub attachments: Vec<Attachment>,
}

impl DetailRecords {
    /// Drop everything loaded for an application other than `id`.
    /// Returns whether anything was cleared.
    pub fn follow(&mut self, id: Id) -> bool {
        match &self.application {
            Some(current) if current.id == id => false,
            None if self.activities.is_empty() && self.attachments.is_empty() => false,
            _ => {
                *self = Self::default();
                true
            }
        }
    }
}
