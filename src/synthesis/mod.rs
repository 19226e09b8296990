// file: src/synthesis/mod.rs
// description: answer synthesis module exports
// reference: internal module structure

pub mod answer;
pub mod comparison;
pub mod messages;
pub mod shape;

pub use answer::AnswerSynthesizer;
pub use comparison::ComparisonSynthesizer;
pub use shape::QuestionShape;
