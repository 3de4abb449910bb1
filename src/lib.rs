//! Page behaviors for the product site: the slide carousel controller and
//! its input adapters, collapsible sections, deep links, the navbar and
//! scroll-in feature cards.

pub mod anchor;
pub mod carousel;
pub mod constants;
pub mod input;
pub mod layout;
pub mod navbar;
pub mod reveal;
pub mod sections;
pub mod state;
pub mod timer;

pub use carousel::{Carousel, MarkerSet, RoleFrame, RoleSink};
pub use input::{Command, Control, Key, SwipeTracker};
pub use state::{CarouselState, Role};
