pub mod backup;
pub mod clock;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod employee;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod status;
pub mod week;
