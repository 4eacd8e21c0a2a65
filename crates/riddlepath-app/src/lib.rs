//! Console front end for riddle play-throughs.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod action;
pub mod action_handler;
pub mod app;
pub mod catalog_source;
pub mod command;
pub mod scheduler;
pub mod settings;
pub mod state;
pub mod ui;
pub mod version;
pub mod view_model_builder;
