pub mod corners;
