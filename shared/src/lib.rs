pub mod chat_log;
pub mod models;
pub mod stream;
pub mod studio;
