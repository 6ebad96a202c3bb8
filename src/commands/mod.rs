//! CLI subcommands

pub mod comments;
pub mod glossary;
pub mod list;
pub mod new;
pub mod views;
