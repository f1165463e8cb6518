mod catalog;
mod config;
mod error;
mod helpers;
mod orchestrator;
mod routing_client;
mod view;
