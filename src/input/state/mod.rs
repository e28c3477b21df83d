mod core;
mod field;
mod keyboard;
mod mouse;

pub use self::core::InputState;
pub use field::ThicknessField;
