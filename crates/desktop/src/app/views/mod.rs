//! View composition for the desktop shell, pairing an editorial page layout with folio visuals.

mod contact;
mod hero;
mod layout;
mod projects;
mod skills;
mod status;
mod styles;
mod theme_menu;
mod topbar;
mod trail;
mod work;

pub(crate) use layout::compose as compose_root;
