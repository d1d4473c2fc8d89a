pub mod catalog;
pub mod consts;
pub mod error;
pub mod pipeline;
pub mod sample;
pub mod sampler;
pub mod schedule;
pub mod scoring;
