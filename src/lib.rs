uniffi::setup_scaffolding!();

pub mod api;
pub mod trace_init;

pub use sandhi_core::{
    classify, engine, error, normalize, phoneme, sandhi, script, settings, tokenizer, unicode,
};
