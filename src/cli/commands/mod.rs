pub mod create;
pub mod init;
pub mod insert_key;
