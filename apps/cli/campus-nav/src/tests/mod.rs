mod cli;
mod commands;
mod error;
mod logger;
mod report;
mod settings;
