pub mod analyze;
pub mod init;
pub mod score;
pub mod validate;
