pub mod app;
pub mod court_detail;
pub mod court_list;
pub mod labeled_input;
pub mod venue_card;
