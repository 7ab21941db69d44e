pub mod dndbeyond;
pub mod openai;

// Re-exports
pub use dndbeyond::DndBeyondApi;
pub use openai::OpenAiCompletions;
