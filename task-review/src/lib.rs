// Application state and actions
pub mod app;

// Command line parsing
pub mod cli;

// Resolved settings and input loading
pub mod config;

// Non-interactive subcommands
pub mod headless;

// Tracing setup
pub mod logging;

// Terminal rendering
pub mod ui;
