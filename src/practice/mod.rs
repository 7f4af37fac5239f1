pub mod cli;
pub mod session;

pub use cli::run_loop;
pub use session::{PracticeSession, SessionStats};
