pub mod info;
pub mod init;
pub mod install;
pub mod interactive;
pub mod list;
pub mod search;
pub mod uninstall;
pub mod update;
