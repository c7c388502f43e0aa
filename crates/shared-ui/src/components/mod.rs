pub mod badge;
pub mod button;
pub mod card;
pub mod field;
pub mod loading;
pub mod map;
pub mod page_header;
pub mod toast;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use field::*;
pub use loading::*;
pub use map::*;
pub use page_header::*;
pub use toast::*;
