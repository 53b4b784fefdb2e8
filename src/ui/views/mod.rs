pub mod add_card;
pub mod quiz;
