//! Command implementations

mod classify;
mod commit_msg;
mod init;
mod pre_receive;

pub use classify::classify;
pub use commit_msg::commit_msg;
pub use init::init;
pub use pre_receive::pre_receive;
