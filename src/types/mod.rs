pub mod forecast;
pub mod series;
pub mod signals;

pub use forecast::*;
pub use series::*;
pub use signals::*;
