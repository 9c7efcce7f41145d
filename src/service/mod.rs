mod grid_handler;

pub use grid_handler::GridHandler;
