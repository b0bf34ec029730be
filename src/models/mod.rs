pub mod advisory;
pub mod contractions;
pub mod interval;
pub mod moment;
pub mod month;
pub mod observation;
pub mod score;
pub mod todo;
