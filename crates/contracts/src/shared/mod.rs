pub mod natural_order;
