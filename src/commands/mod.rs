pub mod calculate;
pub mod init;
pub mod templates;
