pub mod completions;
pub mod context;
pub mod exec;
pub mod init;
pub mod managers;
pub mod run;
pub mod search;
pub mod which;
