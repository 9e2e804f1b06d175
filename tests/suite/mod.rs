mod config;
mod registry;
mod shapes;
