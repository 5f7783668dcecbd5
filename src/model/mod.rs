pub mod criteria;
pub mod window;

pub use criteria::MatchCriteria;
pub use window::{Direction, SelectionContext, WindowId, WindowRecord, WindowTypes};
