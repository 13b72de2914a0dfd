// Module exports for pure logic
pub mod navigation;
pub mod registry;
pub mod sidebar;
pub mod fragment;
pub mod pages;      // Default page set
pub mod demo;       // Late-registered demo pages
