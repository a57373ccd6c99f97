// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod stepper;

// Primitive wrappers
pub mod date_picker;
pub mod label;
pub mod separator;
pub mod toast;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use date_picker::*;
pub use input::*;
pub use label::*;
pub use separator::*;
pub use stepper::*;
pub use toast::*;
