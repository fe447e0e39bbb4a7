mod card_details;
mod carousel;
mod cocktails_page;
mod cuboid;
mod glass_viewer;
mod interactive_card;
mod interactive_description;
mod interactive_title;
mod intro_page;
mod main_page;
mod spread_effect;

pub use card_details::CardDetailsPage;
pub use carousel::Carousel;
pub use cocktails_page::CocktailsPage;
pub use glass_viewer::GlassViewer;
pub use interactive_card::InteractiveCard;
pub use interactive_description::InteractiveDescription;
pub use interactive_title::InteractiveTitle;
pub use intro_page::IntroPage;
pub use main_page::MainPage;
pub use spread_effect::SpreadEffect;
