mod add_comment;
mod error;
mod load_comments;
mod relay_chat_message;

#[cfg(test)]
pub mod tests;

pub use self::{add_comment::*, error::Error, load_comments::*, relay_chat_message::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
