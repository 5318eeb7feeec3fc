pub mod kpi_card;
pub mod results_table;
pub mod toast;
pub mod tour;
