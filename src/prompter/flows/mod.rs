pub mod main_flow;
