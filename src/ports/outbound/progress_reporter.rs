/// ProgressReporter port for user-facing status output
///
/// Everything reported here goes to the operator, never into the SBOM
/// document. The console adapter writes to stderr so stdout stays reserved
/// for the document itself.
pub trait ProgressReporter {
    /// A one-line status update ("Querying dependency graph...")
    fn report(&self, message: &str);

    /// Position within the per-dependency license lookup loop
    ///
    /// `current` counts from 1 and reaches `total` on the last lookup.
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// A non-fatal problem, such as a failed license lookup
    fn report_error(&self, message: &str);

    /// Summary line closing a reported loop
    fn report_completion(&self, message: &str);
}
