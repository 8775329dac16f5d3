pub mod exec;
pub mod init;
pub mod sample;
pub mod shell;
