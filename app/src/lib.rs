pub mod args;
pub mod config;
pub mod errors;
pub mod logging;
pub mod session;
pub mod state;

pub use args::Args;
pub use errors::SessionError;
pub use session::{AnalysisGate, Session, User};
pub use state::{LocalSession, build_session};
