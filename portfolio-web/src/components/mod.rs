pub mod case_study;
pub mod detail_page;
pub mod image_slider;
pub mod projects_page;
