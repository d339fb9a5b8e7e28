// Review reply generation.
// Implements: validation, tone bands, prompt building, template fallback, orchestration.
// All upstream calls go through llm_client — nothing here talks HTTP directly.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod templates;
pub mod tone;
pub mod validation;
