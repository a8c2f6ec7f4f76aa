pub mod classify;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod phoneme;
pub mod sandhi;
pub mod script;
pub mod settings;
pub mod tokenizer;
pub mod unicode;

#[cfg(test)]
mod tests;
