//! CLI argument types.
mod cli;
mod defaults;

#[cfg(test)]
mod tests;

pub use cli::{Command, QueryArgs, ServerArgs};

#[cfg(test)]
pub(crate) use defaults::default_data_paths;
