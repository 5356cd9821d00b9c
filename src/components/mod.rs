pub mod home_page;
pub mod navbar;
pub mod product_gallery;
pub mod product_page;
pub mod review_form;
pub mod reviews_list;
