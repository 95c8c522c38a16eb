pub mod back_link;
pub mod error_message;
pub mod loading_spinner;
pub mod post_card;

pub use back_link::BackLink;
pub use error_message::ErrorMessage;
pub use loading_spinner::LoadingSpinner;
pub use post_card::PostCard;
