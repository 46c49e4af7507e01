/// ProgressReporter port for reporting progress during operations
///
/// Progress goes to stderr so it never mixes with the report on stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Shows a waiting indicator until `finish_waiting` is called
    ///
    /// Used while a request to the backend is in flight.
    fn start_waiting(&self, message: &str);

    /// Removes the waiting indicator, if any
    fn finish_waiting(&self);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
