mod group;
mod groups;
mod home;
mod map;
mod near;
mod place;
mod places;

#[derive(Debug, Clone, Copy, Default)]
pub enum Page {
    #[default]
    Home,
    Places,
    NewPlace,
    NearSearch,
    Groups,
    NewGroup,
    Map,
}

impl Page {
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Places => "/places",
            Self::NewPlace => "/places/new",
            Self::NearSearch => "/places/near",
            Self::Groups => "/groups",
            Self::NewGroup => "/groups/new",
            Self::Map => "/map",
        }
    }
}

pub fn place_path(id: &str) -> String {
    format!("{}/{id}", Page::Places.path())
}

pub fn group_path(id: &str) -> String {
    format!("{}/{id}", Page::Groups.path())
}

pub use self::{group::*, groups::*, home::*, map::*, near::*, place::*, places::*};
