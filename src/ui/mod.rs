pub mod back_to_top;
pub mod common;
pub mod contact_form;
pub mod icon;
pub mod navbar;
pub mod pages;
pub mod profile_image;
pub mod reveal;
pub mod scroll;

pub use back_to_top::BackToTop;
pub use contact_form::ContactFormPanel;
pub use icon::{Icon, icons};
pub use navbar::Navbar;
pub use profile_image::ProfileImage;
pub use reveal::AnimateOnScroll;
pub use scroll::{ScrollContext, provide_scroll_context, use_scroll_context};
