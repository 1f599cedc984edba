/// Logging port used by the application layer.
///
/// Messages must never carry the user's text or the provider credential.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
