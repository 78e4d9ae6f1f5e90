pub mod sentiment;
