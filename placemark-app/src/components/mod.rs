mod category;
mod field;
mod navbar;
mod notice;
mod pager;

pub use self::{category::*, field::*, navbar::*, notice::*, pager::*};
