pub mod guide;
pub mod map;
pub mod sidebar;
