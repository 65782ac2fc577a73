#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BusError {
    #[error("host shell has not installed the event bus")]
    IntegrationMissing,
    #[error("an event bus is already installed for this process")]
    AlreadyInstalled,
}
