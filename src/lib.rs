pub mod app;
pub mod config;
pub mod data;
pub mod deck;
pub mod deck_json;
pub mod error;
pub mod grader;
pub mod model;
pub mod navigator;
pub mod stats;
pub mod storage;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
