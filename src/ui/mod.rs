pub mod account_view;
pub mod bottom_bar;
pub mod highlight;
pub mod modal;
pub mod top;
pub mod util;
