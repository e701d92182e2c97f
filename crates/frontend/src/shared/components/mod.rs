pub mod card_list;
