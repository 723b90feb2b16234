//! Page domains. Each owns its slice of [`State`](crate::state::State),
//! its messages, update handler and view.

pub mod carousel;
pub mod contact;
pub mod nav;
pub mod page;

use lumen_core::{ContactSession, NavMenu};

use self::carousel::CarouselUi;
use self::page::PageState;

#[derive(Debug)]
pub struct Domains {
    pub carousel: CarouselUi,
    pub nav: NavMenu,
    pub page: PageState,
    pub contact: ContactSession,
}
