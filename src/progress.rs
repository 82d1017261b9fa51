// src/progress.rs
/// Lightweight progress reporting used by the importer.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of data rows (header excluded).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once per source row, with its 1-based row index and whether
    /// it produced a record.
    fn item_done(&mut self, _row: usize, _accepted: bool) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
