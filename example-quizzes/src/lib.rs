pub mod general_knowledge;

pub use general_knowledge::{general_knowledge, general_knowledge_questions};
