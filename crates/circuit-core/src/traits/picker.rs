/// Chooses one of `len` canned responses.
///
/// Injected into the dialogue so tests can pin otherwise random output.
pub trait ResponsePicker: Send + Sync {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}
