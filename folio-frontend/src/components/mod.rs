mod chatbot;
mod comments;
mod navbar;
mod star_rating;

pub use self::{chatbot::*, comments::*, navbar::*, star_rating::*};
