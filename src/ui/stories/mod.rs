//! The demo pages listed in the gallery sidebar.
//!
//! Each story owns its component state and implements [`Component`]. Work
//! that has to await (form submission, wizard validation) is exposed as
//! async methods the gallery calls from its action loop.
//!
//! [`Component`]: crate::ui::core::Component

pub mod breadcrumb;
pub mod form;
pub mod multi_form;
pub mod nav_bar;
pub mod split_layout;
pub mod submit;

pub use breadcrumb::BreadcrumbStory;
pub use form::FormStory;
pub use multi_form::MultiFormStory;
pub use nav_bar::NavBarStory;
pub use split_layout::SplitLayoutStory;
pub use submit::ChannelSubmitHandler;
