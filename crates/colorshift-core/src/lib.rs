pub mod config;
pub mod consts;
pub mod curve;
pub mod effect;
pub mod error;
pub mod frame;
pub mod io;
pub mod pipeline;
