pub mod bootstrap;
pub mod config;
pub mod modules;
pub mod shared;

#[cfg(test)]
mod tests;
