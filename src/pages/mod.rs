//! Page components for the business card.

mod card;

pub use card::CardPage;
