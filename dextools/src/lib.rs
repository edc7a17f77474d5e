pub mod inspect;
pub mod progress;
