pub mod add;
pub mod delete;
pub mod done;
pub mod edit;
pub mod history;
pub mod init;
pub mod list;
pub mod preview;
pub mod snooze;
pub mod templates;
