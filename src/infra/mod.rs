pub mod airnow;
