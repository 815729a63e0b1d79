//! Hunt progression: the cursor through the landmark table and the session
//! that turns host callbacks into geofencing requests.

pub mod progress;
pub mod session;

pub use progress::{Activation, HuntProgress, HuntState};
pub use session::{Effect, Hint, HostEvent, HuntSession};
