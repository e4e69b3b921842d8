pub mod facet_select;
pub mod filter_panel;
pub mod page_header;
pub mod stat_card;
pub mod status_badge;
pub mod table;
pub mod usage_bar;
