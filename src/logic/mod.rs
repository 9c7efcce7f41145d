mod grid_logic;

pub use grid_logic::GridLogic;
