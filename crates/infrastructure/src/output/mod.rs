pub mod json_sink;

pub use json_sink::JsonConsoleSink;
