pub mod dealer_detail;
pub mod header;
pub mod reviews_list;
