// src/commands/mod.rs
pub mod cat;
pub mod cd;
pub mod cut;
pub mod echo;
pub mod find;
pub mod grep;
pub mod head;
pub mod local_app;
pub mod ls;
pub mod pwd;
pub mod registry;
pub mod sort;
pub mod tail;
pub mod types;
pub mod uniq;
pub mod utils;

pub use local_app::LocalApp;
pub use registry::{CommandRegistry, ResolvedApp};
pub use types::{Application, CommandResult};
