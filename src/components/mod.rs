//! UI Components
//!
//! Presentational Leptos components for the portfolio page.

mod category_nav;
mod header;
mod hero;
mod portfolio_card;
mod portfolio_section;
mod footer;
mod load_failure;

pub use category_nav::CategoryNav;
pub use header::Header;
pub use hero::Hero;
pub use portfolio_card::PortfolioCard;
pub use portfolio_section::PortfolioSection;
pub use footer::Footer;
pub use load_failure::LoadFailure;
