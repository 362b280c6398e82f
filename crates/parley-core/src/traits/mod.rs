pub mod opponent_model;

pub use opponent_model::OpponentModel;
