pub mod brave;
pub mod openai;
