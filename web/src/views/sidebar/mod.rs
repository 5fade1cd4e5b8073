pub mod location_card;
pub mod location_list;
