pub mod character_card;
pub mod chat_panel;
pub mod creator_form;
pub mod markdown;
