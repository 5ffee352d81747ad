pub mod arguments;
pub mod banding;
pub mod engine;
pub mod errors; // Structured error handling
pub mod explain;
pub mod features; // Canonical feature schema shared by training and inference
pub mod logger;
pub mod model;
pub mod paths;
pub mod vocab;
pub mod webserver;
