//! Concrete field types

pub mod button;
pub mod captcha;
pub mod checkbox;
pub mod dynamic;
pub mod editor;
pub mod input;
pub mod label;
pub mod pages;
pub mod select;
pub mod taxonomy;
pub mod textarea;

pub use button::Button;
pub use captcha::Captcha;
pub use checkbox::{Checkbox, Radio};
pub use dynamic::Dynamic;
pub use editor::Editor;
pub use input::Input;
pub use label::Label;
pub use pages::Pages;
pub use select::Select;
pub use taxonomy::Taxonomy;
pub use textarea::Textarea;
