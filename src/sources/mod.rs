pub mod brave;
pub mod openai;

#[cfg(test)]
mod tests;
