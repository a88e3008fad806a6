//! Command handlers for CLI operations

pub mod configure;
pub mod preview;
pub mod send;
pub mod show;

pub use configure::ConfigureCommandHandler;
pub use preview::PreviewCommandHandler;
pub use send::SendCommandHandler;
pub use show::ShowCommandHandler;
